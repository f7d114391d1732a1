use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::models::Artist;
use crate::query::{ArtistQuery, name_contains, paginate, sort_artists};
use crate::state::AppState;

pub async fn list_artists(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ArtistQuery>,
) -> Result<Json<Vec<Artist>>, ApiError> {
    let page = query.page();
    page.validate()?;

    let mut artists = state.store.artists.filtered(|a| query.matches(a));
    if let Some(key) = query.sort_by {
        sort_artists(&mut artists, key);
    }

    Ok(Json(paginate(artists, page)))
}

pub async fn create_artist(
    State(state): State<Arc<AppState>>,
    Json(artist): Json<Artist>,
) -> Json<Artist> {
    info!(id = artist.id, name = %artist.name, "Artist added");
    Json(state.store.artists.push(artist))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: String,
}

pub async fn search_artists(
    State(state): State<Arc<AppState>>,
    Query(search): Query<SearchQuery>,
) -> Json<Vec<Artist>> {
    let needle = search.query.to_lowercase();
    Json(state.store.artists.filtered(|a| name_contains(a, &needle)))
}
