//! Chart route handlers
//!
//! Top-5 rankings by favorite count; ties fall wherever the store leaves them.

use crate::error::ApiResult;
use crate::models::{DataResponse, TopArtistEntry, TopSongEntry};
use crate::state::SharedState;
use axum::{extract::State, Json};
use tracing::debug;

/// Artists ranked by how many listeners hold them as favorite
pub async fn top_artists(
    State(state): State<SharedState>,
) -> ApiResult<Json<DataResponse<Vec<TopArtistEntry>>>> {
    let entries = state.catalog.top_artists().await?;

    debug!("Top-artists chart has {} rows", entries.len());

    Ok(Json(DataResponse::new(entries)))
}

/// Songs ranked by how many listeners hold them as favorite
pub async fn top_songs(
    State(state): State<SharedState>,
) -> ApiResult<Json<DataResponse<Vec<TopSongEntry>>>> {
    let entries = state.catalog.top_songs().await?;

    debug!("Top-songs chart has {} rows", entries.len());

    Ok(Json(DataResponse::new(entries)))
}
