//! Notify API - Music Platform Backend
//!
//! CRUD backend for the Notify music platform prototype: login and account
//! registration, artist/listener profiles, song registration, favorites and
//! play counts, loyalty tiers, top charts, and the fixed HTML pages.

mod config;
mod db;
mod error;
mod models;
mod routes;
mod state;

use crate::config::Settings;
use crate::routes::create_router;
use crate::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber for structured logging
    init_tracing();

    info!("🚀 Starting Notify - Music Platform Backend...");

    // Load configuration
    let settings = Settings::load()?;
    info!("📋 Configuration loaded successfully");

    // Initialize database pool - REQUIRED (no in-memory fallback)
    let state = match db::init_pool(&settings.database).await {
        Ok(pool) => {
            info!("✅ Database pool created successfully");

            // Create tables if they don't exist
            if let Err(e) = create_database_tables(&pool).await {
                warn!("⚠️  Warning creating tables: {}", e);
            }

            Arc::new(AppState::new(pool))
        }
        Err(e) => {
            error!("❌ FATAL: Failed to initialize database pool: {}", e);
            error!("Set DATABASE_URL (or DB_* variables) and make sure the database is reachable");
            anyhow::bail!("Cannot start server without database connection");
        }
    };

    // Known weakness carried over from the existing schema, not a feature
    warn!("⚠️  The login table stores plaintext passwords; credentials are compared unhashed");

    // Build the router
    let app = create_router(state, &settings);

    // Create socket address
    let addr = SocketAddr::from((settings.server.host, settings.server.port));

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📚 API Endpoints:");
    info!("   ─── Accounts ───");
    info!("   POST /api/login            - Login with loginId/password");
    info!("   POST /api/create-listener  - Register a listener account");
    info!("");
    info!("   ─── Profiles ───");
    info!("   GET  /api/artist-simple    - Artist profile by artistId");
    info!("   GET  /api/listener-simple  - Listener profile by userId");
    info!("");
    info!("   ─── Catalog & Engagement ───");
    info!("   POST /api/add-song         - Register a song");
    info!("   POST /api/favorite-song    - Set a listener's favorite song");
    info!("   POST /api/favorite-artist  - Set a listener's favorite artist");
    info!("   POST /api/play             - Record a song play");
    info!("");
    info!("   ─── Charts ───");
    info!("   GET  /api/loyalty-level    - Loyalty tier by userId");
    info!("   GET  /api/top-artists      - Top 5 artists by favorites");
    info!("   GET  /api/top-songs        - Top 5 songs by favorites");
    info!("");

    // Create TCP listener and serve
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutdown complete");
    Ok(())
}

/// Initialize tracing with structured logging
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,notify_api=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .init();
}

/// Create database tables if they don't exist
async fn create_database_tables(pool: &deadpool_postgres::Pool) -> anyhow::Result<()> {
    let client = pool.get().await?;

    // Create artist table
    client
        .execute(
            "CREATE TABLE IF NOT EXISTS artist (
                artist_id SERIAL PRIMARY KEY,
                stage_name VARCHAR(255) NOT NULL,
                first_name VARCHAR(255),
                last_name VARCHAR(255),
                email VARCHAR(255),
                dob DATE,
                listener_count BIGINT NOT NULL DEFAULT 0,
                follower_count BIGINT NOT NULL DEFAULT 0,
                minutes_listened_to BIGINT NOT NULL DEFAULT 0
            )",
            &[],
        )
        .await?;

    // Create song table; song_id is supplied by callers, never generated
    client
        .execute(
            "CREATE TABLE IF NOT EXISTS song (
                song_id INTEGER PRIMARY KEY,
                song_name VARCHAR(255) NOT NULL,
                genre VARCHAR(100),
                artist_id INTEGER NOT NULL REFERENCES artist(artist_id),
                length INTEGER NOT NULL,
                release_date DATE NOT NULL DEFAULT CURRENT_DATE,
                listen_count BIGINT NOT NULL DEFAULT 0
            )",
            &[],
        )
        .await?;

    // Create listener table; favorite columns are logical references only,
    // so favorite updates succeed independently of the label lookup
    client
        .execute(
            "CREATE TABLE IF NOT EXISTS listener (
                user_id SERIAL PRIMARY KEY,
                first_name VARCHAR(255) NOT NULL,
                last_name VARCHAR(255) NOT NULL,
                user_name VARCHAR(100) UNIQUE NOT NULL,
                minutes_listened BIGINT NOT NULL DEFAULT 0,
                favorite_song_id INTEGER,
                favorite_artist_id INTEGER,
                favorite_genre VARCHAR(100),
                subscription_type VARCHAR(50),
                join_date DATE NOT NULL DEFAULT CURRENT_DATE
            )",
            &[],
        )
        .await?;

    // Create login table; exactly one of user_id/artist_id is populated on
    // a valid row, and the invariant is checked at read time
    client
        .execute(
            "CREATE TABLE IF NOT EXISTS login (
                login_id SERIAL PRIMARY KEY,
                password VARCHAR(255) NOT NULL,
                user_id INTEGER REFERENCES listener(user_id),
                artist_id INTEGER REFERENCES artist(artist_id)
            )",
            &[],
        )
        .await?;

    // Create indexes for the chart queries
    let _ = client
        .execute(
            "CREATE INDEX IF NOT EXISTS idx_listener_favorite_artist_id ON listener(favorite_artist_id)",
            &[],
        )
        .await;
    let _ = client
        .execute(
            "CREATE INDEX IF NOT EXISTS idx_listener_favorite_song_id ON listener(favorite_song_id)",
            &[],
        )
        .await;

    info!("✅ Database tables initialized");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("📴 Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            info!("📴 Received terminate signal, initiating graceful shutdown...");
        },
    }
}
