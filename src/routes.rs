//! Route definitions and router setup
//!
//! Configures all API routes, static pages, and middleware.

mod artists;
mod auth;
mod charts;
mod listeners;
mod songs;

use crate::config::Settings;
use crate::error::{validation_error, AppError};
use crate::state::SharedState;
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::MakeRequestUuid,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    ServiceBuilderExt,
};
use tracing::Level;

/// Create the application router with all routes and middleware
pub fn create_router(state: SharedState, settings: &Settings) -> Router {
    // Build CORS layer
    let cors = build_cors_layer(settings);

    // Build tracing/logging layer
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Build middleware stack
    let middleware = ServiceBuilder::new()
        .set_x_request_id(MakeRequestUuid)
        .layer(trace_layer)
        .layer(CompressionLayer::new())
        .layer(cors)
        .propagate_x_request_id();

    // Build the router
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Authentication
        .route("/api/login", post(auth::login))

        // Listener accounts and engagement
        .route("/api/create-listener", post(listeners::create_listener))
        .route("/api/listener-simple", get(listeners::get_listener_simple))
        .route("/api/favorite-song", post(listeners::favorite_song))
        .route("/api/favorite-artist", post(listeners::favorite_artist))
        .route("/api/loyalty-level", get(listeners::loyalty_level))

        // Artists
        .route("/api/artist-simple", get(artists::get_artist_simple))

        // Songs
        .route("/api/add-song", post(songs::add_song))
        .route("/api/play", post(songs::play))

        // Charts
        .route("/api/top-artists", get(charts::top_artists))
        .route("/api/top-songs", get(charts::top_songs))

        // Fixed pages; index.html answers at the root
        .fallback_service(ServeDir::new(&settings.static_files.dir))

        // Apply middleware and state
        .layer(middleware)
        .with_state(state)
}

/// Build CORS layer from settings
fn build_cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<_> = settings
        .cors
        .allowed_origins
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .max_age(Duration::from_secs(3600))
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .max_age(Duration::from_secs(3600))
    }
}

/// Parse a required numeric id query parameter; an absent or empty value is
/// reported as missing, anything non-numeric as invalid
fn parse_id_param(value: Option<&str>, name: &str) -> Result<i32, AppError> {
    let raw = value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| validation_error(format!("Missing {}", name)))?;

    raw.parse()
        .map_err(|_| validation_error(format!("Invalid {}", name)))
}

/// Health check endpoint
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "success": true,
        "message": "Server is running fine.",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use deadpool_postgres::Runtime;
    use std::sync::Arc;
    use tokio_postgres::NoTls;

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        // Pool creation is lazy; no database is contacted here
        let mut cfg = deadpool_postgres::Config::new();
        cfg.host = Some("localhost".to_string());
        cfg.user = Some("postgres".to_string());
        cfg.dbname = Some("notify_db".to_string());
        let pool = cfg.create_pool(Some(Runtime::Tokio1), NoTls).unwrap();

        let settings = Settings {
            server: Default::default(),
            database: Default::default(),
            cors: Default::default(),
            static_files: Default::default(),
        };

        // Panics on conflicting route registrations
        let _router = create_router(Arc::new(AppState::new(pool)), &settings);
    }

    #[test]
    fn absent_and_empty_params_are_missing() {
        assert!(matches!(
            parse_id_param(None, "artistId"),
            Err(AppError::Validation(msg)) if msg == "Missing artistId"
        ));
        assert!(matches!(
            parse_id_param(Some("   "), "artistId"),
            Err(AppError::Validation(msg)) if msg == "Missing artistId"
        ));
    }

    #[test]
    fn non_numeric_params_are_invalid() {
        assert!(matches!(
            parse_id_param(Some("abc"), "userId"),
            Err(AppError::Validation(msg)) if msg == "Invalid userId"
        ));
    }

    #[test]
    fn numeric_params_parse() {
        assert_eq!(parse_id_param(Some(" 42 "), "userId").unwrap(), 42);
    }
}
