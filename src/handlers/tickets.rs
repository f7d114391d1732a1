use axum::{Json, extract::State};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::Ticket;
use crate::state::AppState;

pub async fn list_tickets(State(state): State<Arc<AppState>>) -> Json<Vec<Ticket>> {
    Json(state.store.tickets.all())
}

pub async fn create_ticket(
    State(state): State<Arc<AppState>>,
    Json(ticket): Json<Ticket>,
) -> Result<Json<Ticket>, ApiError> {
    ticket.validate()?;
    Ok(Json(state.store.tickets.push(ticket)))
}
