//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for
//! sqlx queries. Wire shapes (what the API serializes) live in the
//! server crate; in particular `password_hash` never leaves the store
//! boundary in a serializable type.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row for the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    /// Optional display name.
    pub name: Option<String>,
    pub password_hash: String,
    pub created: DateTime<Utc>,
}

/// Database row for the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub content: String,
    pub important: bool,
    pub created: DateTime<Utc>,
    /// Owning user. Nullable: notes that predate enforced ownership
    /// have no owner.
    pub user_id: Option<Uuid>,
}

/// A note joined with its owner's username, for listings.
#[derive(Debug, Clone, FromRow)]
pub struct NoteWithOwnerRow {
    pub id: Uuid,
    pub content: String,
    pub important: bool,
    pub created: DateTime<Utc>,
    pub user_id: Option<Uuid>,
    pub username: Option<String>,
}

/// Input for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(username: String, name: Option<String>, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            name,
            password_hash,
        }
    }
}

/// Input for creating a new note.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub id: Uuid,
    pub content: String,
    pub important: bool,
    /// Required for new notes even though the column is nullable.
    pub user_id: Uuid,
}

impl NewNote {
    pub fn new(content: String, important: bool, user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            important,
            user_id,
        }
    }
}
