//! Note endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, Utc};
use jotter_store::{NewNote, NoteRow, NoteWithOwnerRow};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AuthenticatedUser;
use crate::error::ApiResult;
use crate::state::AppState;
use crate::validate;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for creating a note.
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub content: Option<String>,
    pub important: Option<bool>,
}

/// Request body for updating a note. Absent fields keep their stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub content: Option<String>,
    pub important: Option<bool>,
}

/// Owner details embedded in a note listing.
#[derive(Debug, Serialize)]
pub struct NoteOwner {
    pub id: Uuid,
    pub username: String,
}

/// Note as returned by the listing endpoints, owner included.
#[derive(Debug, Serialize)]
pub struct NoteSummary {
    pub id: Uuid,
    pub content: String,
    pub date: DateTime<Utc>,
    pub important: bool,
    pub user: Option<NoteOwner>,
}

impl From<NoteWithOwnerRow> for NoteSummary {
    fn from(row: NoteWithOwnerRow) -> Self {
        let user = match (row.user_id, row.username) {
            (Some(id), Some(username)) => Some(NoteOwner { id, username }),
            _ => None,
        };
        Self {
            id: row.id,
            content: row.content,
            date: row.created,
            important: row.important,
            user,
        }
    }
}

/// Note as returned by the single-note endpoints.
#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub id: Uuid,
    pub content: String,
    pub date: DateTime<Utc>,
    pub important: bool,
    pub user: Option<Uuid>,
}

impl From<NoteRow> for NoteResponse {
    fn from(row: NoteRow) -> Self {
        Self {
            id: row.id,
            content: row.content,
            date: row.created,
            important: row.important,
            user: row.user_id,
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/notes - List all notes with their owners.
///
/// # Response
/// - 200: Array of notes
async fn list_notes(State(state): State<AppState>) -> ApiResult<Json<Vec<NoteSummary>>> {
    let notes = state.store().list_notes().await?;
    tracing::debug!(count = notes.len(), "Listed notes");
    Ok(Json(notes.into_iter().map(NoteSummary::from).collect()))
}

/// GET /api/notes/{id} - Get a single note.
///
/// # Response
/// - 200: The note
/// - 400: Id is not well-formed
/// - 404: No note with that id
async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<NoteResponse>> {
    let note_id = validate::note_id(&id)?;
    let note = state.store().get_note(note_id).await?;
    Ok(Json(note.into()))
}

/// POST /api/notes - Create a note owned by the authenticated user.
///
/// # Request
/// - `content`: Note text (required)
/// - `important`: Importance flag (default: false)
///
/// # Response
/// - 200: The created note
/// - 400: Missing or empty content
/// - 401: Missing or invalid bearer token
async fn create_note(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateNoteRequest>,
) -> ApiResult<Json<NoteResponse>> {
    let content = validate::note_content(request.content.as_deref())?;

    let new_note = NewNote::new(
        content.to_string(),
        request.important.unwrap_or(false),
        user.user_id,
    );
    let note = state.store().insert_note(&new_note).await?;

    tracing::info!(note_id = %note.id, user_id = %user.user_id, "Note created");
    Ok(Json(note.into()))
}

/// PUT /api/notes/{id} - Update a note's content and/or importance.
///
/// # Request
/// - `content`: New text (optional)
/// - `important`: New importance flag (optional)
///
/// # Response
/// - 200: The updated note
/// - 400: Id is not well-formed, or content present but empty
/// - 404: No note with that id
async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateNoteRequest>,
) -> ApiResult<Json<NoteResponse>> {
    let note_id = validate::note_id(&id)?;
    if request.content.is_some() {
        validate::note_content(request.content.as_deref())?;
    }

    let note = state
        .store()
        .update_note(note_id, request.content.as_deref(), request.important)
        .await?;

    tracing::info!(note_id = %note.id, "Note updated");
    Ok(Json(note.into()))
}

/// DELETE /api/notes/{id} - Delete a note.
///
/// Idempotent: deleting an id that matches nothing still succeeds. Any
/// holder of a valid id may delete the note regardless of who owns it.
///
/// # Response
/// - 204: Deleted, or nothing to delete
/// - 400: Id is not well-formed
async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let note_id = validate::note_id(&id)?;
    let deleted = state.store().delete_note(note_id).await?;
    tracing::info!(note_id = %note_id, deleted, "Note delete handled");
    Ok(StatusCode::NO_CONTENT)
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route(
            "/api/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserializes() {
        let request: CreateNoteRequest =
            serde_json::from_str(r#"{"content": "remember this", "important": true}"#).unwrap();
        assert_eq!(request.content.as_deref(), Some("remember this"));
        assert_eq!(request.important, Some(true));
    }

    #[test]
    fn test_create_request_important_optional() {
        let request: CreateNoteRequest =
            serde_json::from_str(r#"{"content": "remember this"}"#).unwrap();
        assert_eq!(request.important, None);
    }

    #[test]
    fn test_create_request_accepts_empty_body() {
        // Field presence is checked by the handler, not by serde, so the
        // caller gets a 400 with a message instead of a deserialize error.
        let request: CreateNoteRequest = serde_json::from_str("{}").unwrap();
        assert!(request.content.is_none());
    }

    #[test]
    fn test_update_request_partial() {
        let request: UpdateNoteRequest =
            serde_json::from_str(r#"{"important": false}"#).unwrap();
        assert!(request.content.is_none());
        assert_eq!(request.important, Some(false));
    }

    #[test]
    fn test_note_response_serializes_date_and_user() {
        let row = NoteRow {
            id: Uuid::new_v4(),
            content: "remember this".to_string(),
            important: false,
            created: Utc::now(),
            user_id: None,
        };
        let json = serde_json::to_value(NoteResponse::from(row)).unwrap();
        assert!(json.get("date").is_some());
        assert!(json["user"].is_null());
    }

    #[test]
    fn test_note_summary_with_owner() {
        let user_id = Uuid::new_v4();
        let row = NoteWithOwnerRow {
            id: Uuid::new_v4(),
            content: "remember this".to_string(),
            important: true,
            created: Utc::now(),
            user_id: Some(user_id),
            username: Some("mluukkai".to_string()),
        };
        let summary = NoteSummary::from(row);
        let owner = summary.user.unwrap();
        assert_eq!(owner.id, user_id);
        assert_eq!(owner.username, "mluukkai");
    }

    #[test]
    fn test_note_summary_without_owner() {
        let row = NoteWithOwnerRow {
            id: Uuid::new_v4(),
            content: "orphaned".to_string(),
            important: false,
            created: Utc::now(),
            user_id: None,
            username: None,
        };
        let summary = NoteSummary::from(row);
        assert!(summary.user.is_none());

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["user"].is_null());
    }
}
