use axum::{Json, extract::State};
use std::sync::Arc;
use tracing::info;

use crate::models::User;
use crate::state::AppState;

pub async fn list_users(State(state): State<Arc<AppState>>) -> Json<Vec<User>> {
    Json(state.store.users.all())
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(user): Json<User>,
) -> Json<User> {
    info!(id = user.id, role = ?user.role, "User registered");
    Json(state.store.users.push(user))
}
