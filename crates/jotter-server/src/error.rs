//! API error types and HTTP response mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jotter_store::StoreError;
use serde::Serialize;

/// API error types.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The id in the request path is not a valid note id.
    #[error("malformatted id")]
    MalformedId,

    /// Request body failed validation.
    #[error("{0}")]
    Validation(String),

    /// Bearer token missing, malformed or failed verification.
    #[error("invalid token")]
    InvalidToken,

    /// Login with an unknown username or a wrong password.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Resource not found.
    #[error("not found")]
    NotFound,

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),

    /// Store operation failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedId => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(e) => match e {
                StoreError::NoteNotFound(_) => StatusCode::NOT_FOUND,
                StoreError::UserNotFound(_) => StatusCode::NOT_FOUND,
                StoreError::UsernameTaken(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Body text sent to the client, or `None` for an empty-body response.
    ///
    /// Internal error detail stays in the logs; clients only ever see
    /// the generic message.
    fn client_message(&self) -> Option<String> {
        match self {
            Self::NotFound => None,
            Self::Store(StoreError::NoteNotFound(_)) => None,
            Self::Store(StoreError::UserNotFound(_)) => None,
            Self::Store(StoreError::UsernameTaken(_)) => {
                Some("expected `username` to be unique".to_string())
            }
            Self::Internal(_) | Self::Store(_) => Some("internal server error".to_string()),
            other => Some(other.to_string()),
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        match self.client_message() {
            Some(error) => (status, Json(ErrorBody { error })).into_response(),
            None => status.into_response(),
        }
    }
}

/// Convenience result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::MalformedId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Validation("content missing".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_mapping() {
        let id = Uuid::new_v4();
        assert_eq!(
            ApiError::Store(StoreError::NoteNotFound(id)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Store(StoreError::UserNotFound(id)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Store(StoreError::UsernameTaken("root".to_string())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Store(StoreError::MigrationError("bad".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_messages() {
        // Not-found responses carry no body at all.
        assert_eq!(ApiError::NotFound.client_message(), None);
        assert_eq!(
            ApiError::Store(StoreError::NoteNotFound(Uuid::new_v4())).client_message(),
            None
        );

        assert_eq!(
            ApiError::MalformedId.client_message().as_deref(),
            Some("malformatted id")
        );
        assert_eq!(
            ApiError::Validation("content missing".to_string())
                .client_message()
                .as_deref(),
            Some("content missing")
        );
        assert_eq!(
            ApiError::Store(StoreError::UsernameTaken("root".to_string()))
                .client_message()
                .as_deref(),
            Some("expected `username` to be unique")
        );

        // Internal detail never reaches the client.
        let message = ApiError::Internal("connection pool exhausted".to_string())
            .client_message()
            .unwrap();
        assert_eq!(message, "internal server error");
        assert!(!message.contains("pool"));
    }

    #[test]
    fn test_error_body_serialize() {
        let body = ErrorBody {
            error: "unknown endpoint".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"unknown endpoint"}"#);
    }
}
