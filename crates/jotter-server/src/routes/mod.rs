//! HTTP route handlers.

pub mod health;
pub mod login;
pub mod notes;
pub mod users;

use axum::{Json, Router, http::StatusCode};

use crate::error::ErrorBody;
use crate::state::AppState;

/// Build the complete application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(login::routes())
        .merge(notes::routes())
        .merge(users::routes())
        .fallback(unknown_endpoint)
        .with_state(state)
}

/// Fallback for requests that match no route.
async fn unknown_endpoint() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "unknown endpoint".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_endpoint_body() {
        let (status, Json(body)) = unknown_endpoint().await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "unknown endpoint");
    }
}
