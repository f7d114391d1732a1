use axum::{Json, extract::State};
use std::sync::Arc;

use crate::models::Stage;
use crate::state::AppState;

pub async fn list_stages(State(state): State<Arc<AppState>>) -> Json<Vec<Stage>> {
    Json(state.store.stages.all())
}

pub async fn create_stage(
    State(state): State<Arc<AppState>>,
    Json(stage): Json<Stage>,
) -> Json<Stage> {
    Json(state.store.stages.push(stage))
}
