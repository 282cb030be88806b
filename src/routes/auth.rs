//! Login route handler

use crate::error::{validation_error, ApiResult, AppError, AppJson};
use crate::models::{AccountLinkage, LoginRequest, LoginResponse};
use crate::state::SharedState;
use axum::{extract::State, Json};
use tracing::{debug, info, warn};

/// Authenticate a login id and password, deriving the account role from
/// which of the two account links is populated
pub async fn login(
    State(state): State<SharedState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let (login_raw, password) = payload
        .credentials()
        .ok_or_else(|| validation_error("Missing loginId or password"))?;

    debug!("Login attempt for loginId {}", login_raw);

    // A non-numeric id cannot match any row; report it like an unknown login
    let login_id: i32 = login_raw
        .trim()
        .parse()
        .map_err(|_| AppError::Unauthorized("LoginID not found".to_string()))?;

    let row = state
        .accounts
        .find_login(login_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("LoginID not found".to_string()))?;

    // Plaintext comparison, preserved from the existing login schema
    if row.password != password {
        return Err(AppError::Unauthorized("Invalid password".to_string()));
    }

    let linkage = AccountLinkage::resolve(row.user_id, row.artist_id);
    let role = linkage.role().ok_or_else(|| {
        warn!(
            "Login row {} has both or neither account links set",
            row.login_id
        );
        AppError::DataIntegrity(
            "Login row has invalid linkage (both or neither IDs set)".to_string(),
        )
    })?;

    info!("Login successful for loginId {} as {}", row.login_id, role);

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        role,
        login_id: row.login_id,
        user_id: row.user_id,
        artist_id: row.artist_id,
    }))
}
