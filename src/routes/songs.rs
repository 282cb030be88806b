//! Song route handlers

use crate::error::{validation_error, ApiResult, AppJson};
use crate::models::{AddSongRequest, AddSongResponse, PlayRequest, PlayResponse};
use crate::state::SharedState;
use axum::{extract::State, Json};
use tracing::{debug, info};
use validator::Validate;

/// Register a song under a caller-supplied id
pub async fn add_song(
    State(state): State<SharedState>,
    AppJson(payload): AppJson<AddSongRequest>,
) -> ApiResult<Json<AddSongResponse>> {
    // Validate input
    payload
        .validate()
        .map_err(|e| validation_error(e.to_string()))?;

    debug!(
        "Registering song {} '{}' for artist {}",
        payload.song_id, payload.song_name, payload.artist_id
    );

    let new_song_id = state
        .catalog
        .add_song(
            payload.song_id,
            &payload.song_name,
            &payload.genre,
            payload.artist_id,
            payload.length,
        )
        .await?;

    info!("Song '{}' registered with id {}", payload.song_name, new_song_id);

    Ok(Json(AddSongResponse {
        success: true,
        message: "Song added successfully.".to_string(),
        new_song_id,
    }))
}

/// Bump a song's play counter and echo the resolved song name.
/// The label lookup never fails the update.
pub async fn play(
    State(state): State<SharedState>,
    AppJson(payload): AppJson<PlayRequest>,
) -> ApiResult<Json<PlayResponse>> {
    payload
        .validate()
        .map_err(|e| validation_error(e.to_string()))?;

    state.catalog.record_play(payload.song_id).await?;

    let song_name = state
        .catalog
        .song_name(payload.song_id)
        .await
        .ok()
        .flatten()
        .unwrap_or_else(|| "Unknown Song".to_string());

    debug!("Play recorded for song {} ({})", payload.song_id, song_name);

    Ok(Json(PlayResponse {
        success: true,
        message: "Play recorded.".to_string(),
        song_name,
    }))
}
