use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::Rating;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RatingQuery {
    pub artist_id: Option<u32>,
}

pub async fn list_ratings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RatingQuery>,
) -> Json<Vec<Rating>> {
    Json(
        state
            .store
            .ratings
            .filtered(|r| query.artist_id.is_none_or(|id| r.artist_id == id)),
    )
}

pub async fn create_rating(
    State(state): State<Arc<AppState>>,
    Json(rating): Json<Rating>,
) -> Result<Json<Rating>, ApiError> {
    rating.validate()?;
    Ok(Json(state.store.ratings.push(rating)))
}
