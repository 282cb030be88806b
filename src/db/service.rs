// Database services for account and catalog operations
//
// Provides direct database access for the music platform entities

use crate::db::{queries, violation_kind, ViolationKind};
use crate::error::{conflict_error, AppError};
use crate::models::{ArtistProfile, TopArtistEntry, TopSongEntry};
use chrono::NaiveDate;
use deadpool_postgres::Pool;
use tracing::warn;

// Login record from database
#[derive(Clone, Debug)]
pub struct DbLogin {
    pub login_id: i32,
    pub password: String,
    pub user_id: Option<i32>,
    pub artist_id: Option<i32>,
}

// Listener record from database (favorite song name resolved separately)
#[derive(Clone, Debug)]
pub struct DbListener {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub minutes_listened: i64,
    pub favorite_song_id: Option<i32>,
    pub favorite_genre: Option<String>,
    pub favorite_artist_id: Option<i32>,
    pub subscription_type: Option<String>,
    pub join_date: NaiveDate,
}

// Account service for login and registration operations
pub struct AccountService {
    pool: Pool,
}

impl AccountService {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    // Find a login row by its primary key
    pub async fn find_login(&self, login_id: i32) -> Result<Option<DbLogin>, AppError> {
        let client = self.pool.get().await?;

        let row = client.query_opt(queries::GET_LOGIN, &[&login_id]).await?;

        Ok(row.map(|r| DbLogin {
            login_id: r.get(0),
            password: r.get(1),
            user_id: r.get(2),
            artist_id: r.get(3),
        }))
    }

    // Two-step account creation: listener row first, then the login row
    // carrying the generated user_id. The steps are not transactional; a
    // failing second step leaves a listener row with no login.
    pub async fn create_listener(
        &self,
        username: &str,
        firstname: &str,
        lastname: &str,
        sub_type: &str,
        password: &str,
    ) -> Result<(i32, i32), AppError> {
        let client = self.pool.get().await?;

        let row = client
            .query_one(
                queries::INSERT_LISTENER,
                &[&firstname, &lastname, &username, &sub_type],
            )
            .await
            .map_err(|e| match violation_kind(&e) {
                Some(ViolationKind::Unique) => conflict_error("Username already taken"),
                _ => AppError::Database(e),
            })?;
        let user_id: i32 = row.get(0);

        let row = client
            .query_one(queries::INSERT_LOGIN, &[&password, &user_id])
            .await
            .map_err(|e| {
                warn!(
                    "Listener {} created but login insert failed; row is orphaned",
                    user_id
                );
                AppError::Database(e)
            })?;
        let login_id: i32 = row.get(0);

        Ok((user_id, login_id))
    }
}

// Catalog service for artist, listener, and song operations
pub struct CatalogService {
    pool: Pool,
}

impl CatalogService {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    // Fetch an artist profile by primary key
    pub async fn artist_profile(&self, artist_id: i32) -> Result<Option<ArtistProfile>, AppError> {
        let client = self.pool.get().await?;

        let row = client
            .query_opt(queries::GET_ARTIST_PROFILE, &[&artist_id])
            .await?;

        Ok(row.map(|r| ArtistProfile {
            stage_name: r.get(0),
            first_name: r.get(1),
            last_name: r.get(2),
            email: r.get(3),
            dob: r.get(4),
            listener_count: r.get(5),
            follower_count: r.get(6),
            minutes_listened_to: r.get(7),
        }))
    }

    // Fetch a listener row by primary key
    pub async fn listener_profile(&self, user_id: i32) -> Result<Option<DbListener>, AppError> {
        let client = self.pool.get().await?;

        let row = client
            .query_opt(queries::GET_LISTENER_PROFILE, &[&user_id])
            .await?;

        Ok(row.map(|r| DbListener {
            first_name: r.get(0),
            last_name: r.get(1),
            user_name: r.get(2),
            minutes_listened: r.get(3),
            favorite_song_id: r.get(4),
            favorite_genre: r.get(5),
            favorite_artist_id: r.get(6),
            subscription_type: r.get(7),
            join_date: r.get(8),
        }))
    }

    // Resolve a song name for display
    pub async fn song_name(&self, song_id: i32) -> Result<Option<String>, AppError> {
        let client = self.pool.get().await?;

        let row = client.query_opt(queries::GET_SONG_NAME, &[&song_id]).await?;

        Ok(row.map(|r| r.get(0)))
    }

    // Resolve an artist stage name for display
    pub async fn stage_name(&self, artist_id: i32) -> Result<Option<String>, AppError> {
        let client = self.pool.get().await?;

        let row = client
            .query_opt(queries::GET_STAGE_NAME, &[&artist_id])
            .await?;

        Ok(row.map(|r| r.get(0)))
    }

    // Register a song under a caller-supplied id, distinguishing the two
    // user-correctable failures at the store boundary
    pub async fn add_song(
        &self,
        song_id: i32,
        song_name: &str,
        genre: &str,
        artist_id: i32,
        length: i32,
    ) -> Result<i32, AppError> {
        let client = self.pool.get().await?;

        let row = client
            .query_one(
                queries::INSERT_SONG,
                &[&song_id, &song_name, &genre, &artist_id, &length],
            )
            .await
            .map_err(|e| match violation_kind(&e) {
                Some(ViolationKind::ForeignKey) => {
                    AppError::Referential(format!("Artist {} does not exist", artist_id))
                }
                Some(ViolationKind::Unique) => {
                    conflict_error(format!("Song ID {} is already in use", song_id))
                }
                None => AppError::Database(e),
            })?;

        Ok(row.get(0))
    }

    // Point a listener at a favorite song; returns affected row count
    pub async fn set_favorite_song(&self, user_id: i32, song_id: i32) -> Result<u64, AppError> {
        let client = self.pool.get().await?;

        let updated = client
            .execute(queries::SET_FAVORITE_SONG, &[&user_id, &song_id])
            .await?;

        Ok(updated)
    }

    // Point a listener at a favorite artist; returns affected row count
    pub async fn set_favorite_artist(&self, user_id: i32, artist_id: i32) -> Result<u64, AppError> {
        let client = self.pool.get().await?;

        let updated = client
            .execute(queries::SET_FAVORITE_ARTIST, &[&user_id, &artist_id])
            .await?;

        Ok(updated)
    }

    // Bump a song's play counter; returns affected row count
    pub async fn record_play(&self, song_id: i32) -> Result<u64, AppError> {
        let client = self.pool.get().await?;

        let updated = client.execute(queries::RECORD_PLAY, &[&song_id]).await?;

        Ok(updated)
    }

    // Store-side loyalty tier for a listener, None when the row is missing
    pub async fn loyalty_level(&self, user_id: i32) -> Result<Option<String>, AppError> {
        let client = self.pool.get().await?;

        let row = client
            .query_opt(queries::GET_LOYALTY_LEVEL, &[&user_id])
            .await?;

        Ok(row.map(|r| r.get(0)))
    }

    // Top-5 artists by favorite count, descending
    pub async fn top_artists(&self) -> Result<Vec<TopArtistEntry>, AppError> {
        let client = self.pool.get().await?;

        let rows = client.query(queries::TOP_ARTISTS, &[]).await?;

        Ok(rows
            .iter()
            .map(|r| TopArtistEntry {
                artist_id: r.get(0),
                stage_name: r.get(1),
                favorite_count: r.get(2),
            })
            .collect())
    }

    // Top-5 songs by favorite count, descending
    pub async fn top_songs(&self) -> Result<Vec<TopSongEntry>, AppError> {
        let client = self.pool.get().await?;

        let rows = client.query(queries::TOP_SONGS, &[]).await?;

        Ok(rows
            .iter()
            .map(|r| TopSongEntry {
                song_id: r.get(0),
                song_name: r.get(1),
                favorite_count: r.get(2),
            })
            .collect())
    }
}
