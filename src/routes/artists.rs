//! Artist route handlers

use super::parse_id_param;
use crate::error::{not_found_error, ApiResult};
use crate::models::{ArtistProfile, ArtistQuery, DataResponse};
use crate::state::SharedState;
use axum::{
    extract::{Query, State},
    Json,
};
use tracing::debug;

/// Fetch a single artist profile by id
pub async fn get_artist_simple(
    State(state): State<SharedState>,
    Query(params): Query<ArtistQuery>,
) -> ApiResult<Json<DataResponse<ArtistProfile>>> {
    let artist_id = parse_id_param(params.artist_id.as_deref(), "artistId")?;

    debug!("Fetching artist profile for artistId {}", artist_id);

    let profile = state
        .catalog
        .artist_profile(artist_id)
        .await?
        .ok_or_else(|| not_found_error("Artist not found"))?;

    Ok(Json(DataResponse::new(profile)))
}
