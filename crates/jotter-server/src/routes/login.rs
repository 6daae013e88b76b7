//! Login endpoint.

use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};

use crate::auth;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for logging in.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: Option<String>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/login - Exchange credentials for a bearer token.
///
/// Unknown usernames and wrong passwords produce the same 401 so the
/// response does not reveal which usernames exist.
///
/// # Request
/// - `username`: Account username
/// - `password`: Account password
///
/// # Response
/// - 200: Token plus user details
/// - 401: Credentials did not match
async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let user = state
        .store()
        .get_user_by_username(&request.username)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    let password = request.password;
    let password_hash = user.password_hash.clone();
    let valid = tokio::task::spawn_blocking(move || {
        auth::verify_password(&password, &password_hash)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("password verification task failed: {}", e)))??;

    if !valid {
        return Err(ApiError::InvalidCredentials);
    }

    let token = auth::create_token(user.id, &user.username, &state.config().jwt_secret)?;

    tracing::info!(user_id = %user.id, username = %user.username, "User logged in");
    Ok(Json(LoginResponse {
        token,
        username: user.username,
        name: user.name,
    }))
}

/// Build login routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/login", post(login))
}

// ============================================================================
// Tests
// ============================================================================
