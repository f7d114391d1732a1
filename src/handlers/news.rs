use axum::{Json, extract::State};
use std::sync::Arc;
use tracing::info;

use crate::models::News;
use crate::state::AppState;

pub async fn list_news(State(state): State<Arc<AppState>>) -> Json<Vec<News>> {
    Json(state.store.news.all())
}

pub async fn create_news(
    State(state): State<Arc<AppState>>,
    Json(news): Json<News>,
) -> Json<News> {
    info!(id = news.id, title = %news.title, "Announcement posted");
    Json(state.store.news.push(news))
}
