use axum::{Json, extract::State};
use std::sync::Arc;

use crate::models::ScheduleEntry;
use crate::state::AppState;

pub async fn list_schedule(State(state): State<Arc<AppState>>) -> Json<Vec<ScheduleEntry>> {
    Json(state.store.schedule.all())
}

pub async fn create_schedule_entry(
    State(state): State<Arc<AppState>>,
    Json(entry): Json<ScheduleEntry>,
) -> Json<ScheduleEntry> {
    Json(state.store.schedule.push(entry))
}
