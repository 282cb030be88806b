//! Error handling module
//!
//! Provides unified error types and handling for the entire application.

use axum::{
    extract::rejection::JsonRejection,
    extract::FromRequest,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] tokio_postgres::Error),

    #[error("Pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Referential error: {0}")]
    Referential(String),

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl AppError {
    /// Status code and wire code for each variant
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            AppError::Pool(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            // Duplicate keys and dangling references are user-correctable 400s
            AppError::Conflict(_) => (StatusCode::BAD_REQUEST, "CONFLICT"),
            AppError::Referential(_) => (StatusCode::BAD_REQUEST, "REFERENTIAL_ERROR"),
            AppError::DataIntegrity(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATA_INTEGRITY"),
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.parts();

        let (message, details) = match &self {
            AppError::Database(e) => {
                error!("Database error: {:?}", e);
                ("Database error".to_string(), Some(e.to_string()))
            }
            AppError::Pool(e) => {
                error!("Pool error: {:?}", e);
                ("Database error".to_string(), Some(e.to_string()))
            }
            AppError::DataIntegrity(msg) => {
                error!("Data integrity error: {}", msg);
                (msg.clone(), None)
            }
            AppError::Config(msg) => {
                error!("Configuration error: {}", msg);
                ("A configuration error occurred".to_string(), Some(msg.clone()))
            }
            AppError::Validation(msg)
            | AppError::NotFound(msg)
            | AppError::Unauthorized(msg)
            | AppError::Conflict(msg)
            | AppError::Referential(msg) => (msg.clone(), None),
        };

        let body = Json(ErrorResponse {
            success: false,
            message,
            error: details,
            code: Some(error_code.to_string()),
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

/// JSON extractor whose rejection is reported through the standard
/// error envelope instead of axum's plain-text reply.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, AppError>;

/// Helper function to create a validation error
pub fn validation_error(msg: impl Into<String>) -> AppError {
    AppError::Validation(msg.into())
}

/// Helper function to create a not found error
pub fn not_found_error(msg: impl Into<String>) -> AppError {
    AppError::NotFound(msg.into())
}

/// Helper function to create a conflict error
pub fn conflict_error(msg: impl Into<String>) -> AppError {
    AppError::Conflict(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn validation_maps_to_400() {
        let (status, code) = validation_error("Missing artistId").parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "VALIDATION_ERROR");
    }

    #[test]
    fn lookup_and_credential_failures_keep_distinct_statuses() {
        let (status, _) = not_found_error("Artist not found").parts();
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = AppError::Unauthorized("Invalid password".into()).parts();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn duplicate_and_referential_failures_are_bad_requests() {
        let (status, code) = conflict_error("Song ID already in use").parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "CONFLICT");

        let (status, code) = AppError::Referential("Artist does not exist".into()).parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "REFERENTIAL_ERROR");
    }

    #[test]
    fn invalid_linkage_is_a_server_error_not_bad_credentials() {
        let (status, code) =
            AppError::DataIntegrity("Login row has invalid linkage".into()).parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "DATA_INTEGRITY");
    }

    #[test]
    fn error_envelope_serializes_without_empty_fields() {
        let body = serde_json::to_value(ErrorResponse {
            success: false,
            message: "Missing userId".to_string(),
            error: None,
            code: None,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": false, "message": "Missing userId"})
        );
    }
}
