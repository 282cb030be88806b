//! Listener account and engagement route handlers

use super::parse_id_param;
use crate::error::{not_found_error, validation_error, ApiResult, AppJson};
use crate::models::{
    CreateListenerRequest, CreateListenerResponse, DataResponse, FavoriteArtistRequest,
    FavoriteArtistResponse, FavoriteSongRequest, FavoriteSongResponse, ListenerProfile,
    ListenerQuery, LoyaltyQuery, LoyaltyResponse,
};
use crate::state::SharedState;
use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{debug, info};
use validator::Validate;

/// Fetch a single listener profile by id, with the favorite song name
/// resolved in a follow-up lookup
pub async fn get_listener_simple(
    State(state): State<SharedState>,
    Query(params): Query<ListenerQuery>,
) -> ApiResult<Json<DataResponse<ListenerProfile>>> {
    let user_id = parse_id_param(params.user_id.as_deref(), "userId")?;

    debug!("Fetching listener profile for userId {}", user_id);

    let row = state
        .catalog
        .listener_profile(user_id)
        .await?
        .ok_or_else(|| not_found_error("Listener not found"))?;

    // Second query resolves the favorite song name; null when unset or dangling
    let favorite_song_name = match row.favorite_song_id {
        Some(song_id) => state.catalog.song_name(song_id).await?,
        None => None,
    };

    Ok(Json(DataResponse::new(ListenerProfile {
        first_name: row.first_name,
        last_name: row.last_name,
        user_name: row.user_name,
        minutes_listened: row.minutes_listened,
        favorite_song_id: row.favorite_song_id,
        favorite_genre: row.favorite_genre,
        favorite_artist_id: row.favorite_artist_id,
        subscription_type: row.subscription_type,
        join_date: row.join_date,
        favorite_song_name,
    })))
}

/// Register a listener account: listener row first, then the linked login row
pub async fn create_listener(
    State(state): State<SharedState>,
    AppJson(payload): AppJson<CreateListenerRequest>,
) -> ApiResult<Json<CreateListenerResponse>> {
    // Validate input
    payload
        .validate()
        .map_err(|e| validation_error(e.to_string()))?;

    debug!("Creating listener account '{}'", payload.username);

    let (user_id, login_id) = state
        .accounts
        .create_listener(
            &payload.username,
            &payload.firstname,
            &payload.lastname,
            &payload.sub_type,
            &payload.password,
        )
        .await?;

    info!(
        "Listener account '{}' created (userId {}, loginId {})",
        payload.username, user_id, login_id
    );

    Ok(Json(CreateListenerResponse {
        success: true,
        message: "Account created successfully.".to_string(),
        user_id,
    }))
}

/// Update a listener's favorite song and echo the resolved song name.
/// The label lookup never fails the update.
pub async fn favorite_song(
    State(state): State<SharedState>,
    AppJson(payload): AppJson<FavoriteSongRequest>,
) -> ApiResult<Json<FavoriteSongResponse>> {
    payload
        .validate()
        .map_err(|e| validation_error(e.to_string()))?;

    state
        .catalog
        .set_favorite_song(payload.user_id, payload.song_id)
        .await?;

    let song_name = state
        .catalog
        .song_name(payload.song_id)
        .await
        .ok()
        .flatten()
        .unwrap_or_else(|| "Unknown Song".to_string());

    info!(
        "Listener {} favorite song set to {} ({})",
        payload.user_id, payload.song_id, song_name
    );

    Ok(Json(FavoriteSongResponse {
        success: true,
        message: "Favorite song updated.".to_string(),
        song_name,
    }))
}

/// Update a listener's favorite artist and echo the resolved stage name.
/// The label lookup never fails the update.
pub async fn favorite_artist(
    State(state): State<SharedState>,
    AppJson(payload): AppJson<FavoriteArtistRequest>,
) -> ApiResult<Json<FavoriteArtistResponse>> {
    payload
        .validate()
        .map_err(|e| validation_error(e.to_string()))?;

    state
        .catalog
        .set_favorite_artist(payload.user_id, payload.artist_id)
        .await?;

    let artist_name = state
        .catalog
        .stage_name(payload.artist_id)
        .await
        .ok()
        .flatten()
        .unwrap_or_else(|| "Unknown Artist".to_string());

    info!(
        "Listener {} favorite artist set to {} ({})",
        payload.user_id, payload.artist_id, artist_name
    );

    Ok(Json(FavoriteArtistResponse {
        success: true,
        message: "Favorite artist updated.".to_string(),
        artist_name,
    }))
}

/// Compute a listener's loyalty tier from their engagement
pub async fn loyalty_level(
    State(state): State<SharedState>,
    Query(params): Query<LoyaltyQuery>,
) -> ApiResult<Json<LoyaltyResponse>> {
    let user_id = parse_id_param(params.user_id.as_deref(), "userId")?;

    debug!("Computing loyalty level for userId {}", user_id);

    let level = state
        .catalog
        .loyalty_level(user_id)
        .await?
        .ok_or_else(|| not_found_error("Listener not found"))?;

    Ok(Json(LoyaltyResponse {
        success: true,
        level,
    }))
}
