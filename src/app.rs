use axum::{
    Router, middleware,
    routing::get,
};
use std::sync::Arc;

use crate::handlers::{
    create_artist, create_news, create_rating, create_schedule_entry, create_stage, create_ticket,
    create_user, health_handler, list_artists, list_news, list_ratings, list_schedule, list_stages,
    list_tickets, list_users, metrics_handler, search_artists,
};
use crate::middleware::{rate_limit, require_api_key};
use crate::state::AppState;

/// Build the full router.
///
/// Entity routes pass the rate limiter first, then the API key gate.
/// `/health` and `/metrics` sit outside both.
pub fn build_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/artists", get(list_artists).post(create_artist))
        .route("/artists/search", get(search_artists))
        .route("/stages", get(list_stages).post(create_stage))
        .route("/schedule", get(list_schedule).post(create_schedule_entry))
        .route("/tickets", get(list_tickets).post(create_ticket))
        .route("/users", get(list_users).post(create_user))
        .route("/ratings", get(list_ratings).post(create_rating))
        .route("/news", get(list_news).post(create_news))
        .layer(middleware::from_fn_with_state(state.clone(), require_api_key))
        .layer(middleware::from_fn_with_state(state.clone(), rate_limit));

    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .merge(api)
        .with_state(state)
}
