//! User endpoints.

use axum::{Json, Router, extract::State, routing::get};
use jotter_store::{NewUser, NoteRow};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::validate::{self, NewUserInput};

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for creating a user.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Note summary embedded in a user listing.
#[derive(Debug, Serialize)]
pub struct UserNoteSummary {
    pub id: Uuid,
    pub content: String,
    pub important: bool,
}

impl From<NoteRow> for UserNoteSummary {
    fn from(row: NoteRow) -> Self {
        Self {
            id: row.id,
            content: row.content,
            important: row.important,
        }
    }
}

/// User as returned by the API. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
    pub notes: Vec<UserNoteSummary>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/users - Register a new user.
///
/// # Request
/// - `username`: At least 3 characters, unique (required)
/// - `name`: Display name (optional)
/// - `password`: At least 3 characters (required)
///
/// # Response
/// - 200: The created user, without the password hash
/// - 400: Validation failure or username already taken
async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let NewUserInput {
        username,
        name,
        password,
    } = validate::new_user(request.username, request.name, request.password)?;

    // Argon2 is CPU-bound; keep it off the async workers.
    let password_hash = tokio::task::spawn_blocking(move || auth::hash_password(&password))
        .await
        .map_err(|e| ApiError::Internal(format!("password hashing task failed: {}", e)))??;

    let new_user = NewUser::new(username, name, password_hash);
    let user = state.store().insert_user(&new_user).await?;

    tracing::info!(user_id = %user.id, username = %user.username, "User created");
    Ok(Json(UserResponse {
        id: user.id,
        username: user.username,
        name: user.name,
        notes: Vec::new(),
    }))
}

/// GET /api/users - List all users with summaries of their notes.
///
/// # Response
/// - 200: Array of users
async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state.store().list_users().await?;

    let mut responses = Vec::with_capacity(users.len());
    for user in users {
        let notes = state.store().list_notes_for_user(user.id).await?;
        responses.push(UserResponse {
            id: user.id,
            username: user.username,
            name: user.name,
            notes: notes.into_iter().map(UserNoteSummary::from).collect(),
        });
    }

    tracing::debug!(count = responses.len(), "Listed users");
    Ok(Json(responses))
}

/// Build user routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/users", get(list_users).post(create_user))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_create_request_accepts_missing_fields() {
        let request: CreateUserRequest = serde_json::from_str(r#"{"username": "ml"}"#).unwrap();
        assert_eq!(request.username.as_deref(), Some("ml"));
        assert!(request.name.is_none());
        assert!(request.password.is_none());
    }

    #[test]
    fn test_user_response_has_no_password_field() {
        let response = UserResponse {
            id: Uuid::new_v4(),
            username: "mluukkai".to_string(),
            name: Some("Matti Luukkainen".to_string()),
            notes: Vec::new(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains("mluukkai"));
    }

    #[test]
    fn test_user_note_summary_from_row() {
        let row = NoteRow {
            id: Uuid::new_v4(),
            content: "remember this".to_string(),
            important: true,
            created: Utc::now(),
            user_id: Some(Uuid::new_v4()),
        };
        let summary = UserNoteSummary::from(row);
        assert_eq!(summary.content, "remember this");
        assert!(summary.important);

        // The embedded summary stays minimal: no date, no owner.
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("date").is_none());
        assert!(json.get("user").is_none());
    }
}
