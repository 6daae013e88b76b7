//! Request input validation.
//!
//! Validation failures become [`ApiError`] values directly so handlers
//! can bubble them up with `?`.

use uuid::Uuid;

use crate::error::ApiError;

/// Minimum username length in characters.
pub const MIN_USERNAME_LENGTH: usize = 3;
/// Minimum password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 3;

/// Validated input for creating a user.
#[derive(Debug)]
pub struct NewUserInput {
    pub username: String,
    pub name: Option<String>,
    pub password: String,
}

/// Parse a note id from a path segment.
///
/// A string that is not a well-formed id is a 400, distinct from a
/// well-formed id that matches no note (404).
pub fn note_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::MalformedId)
}

/// Check that a note body carries non-empty content.
pub fn note_content(content: Option<&str>) -> Result<&str, ApiError> {
    match content {
        Some(c) if !c.trim().is_empty() => Ok(c),
        _ => Err(ApiError::Validation("content missing".to_string())),
    }
}

/// Validate the fields of a user-creation request.
pub fn new_user(
    username: Option<String>,
    name: Option<String>,
    password: Option<String>,
) -> Result<NewUserInput, ApiError> {
    let username = match username {
        Some(u) if u.chars().count() >= MIN_USERNAME_LENGTH => u,
        _ => {
            return Err(ApiError::Validation(format!(
                "username must be at least {} characters long",
                MIN_USERNAME_LENGTH
            )));
        }
    };

    let password = match password {
        Some(p) if p.chars().count() >= MIN_PASSWORD_LENGTH => p,
        _ => {
            return Err(ApiError::Validation(format!(
                "password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            )));
        }
    };

    Ok(NewUserInput {
        username,
        name,
        password,
    })
}
