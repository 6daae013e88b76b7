//! Password hashing and bearer-token authentication.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Claims embedded in a bearer token.
///
/// Tokens carry no expiry: once issued they stay valid until the signing
/// key changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Id of the authenticated user.
    pub sub: Uuid,
    /// Username at the time the token was issued.
    pub username: String,
}

/// Sign a token for the given user.
pub fn create_token(user_id: Uuid, username: &str, secret: &str) -> Result<String, ApiError> {
    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(format!("failed to sign token: {}", e)))
}

/// Verify a token's signature and extract its claims.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, ApiError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // Tokens are issued without an expiry claim, so it cannot be required.
    validation.required_spec_claims.clear();

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!(error = %e, "token validation failed");
        ApiError::InvalidToken
    })
}

/// Hash a password for storage.
///
/// Argon2 is deliberately slow; callers on the async runtime should wrap
/// this in `spawn_blocking`.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ApiError::Internal(format!("failed to hash password: {}", e)))
}

/// Check a password against a stored hash.
///
/// Same cost profile as [`hash_password`]; use `spawn_blocking` from
/// async code.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, ApiError> {
    let parsed = PasswordHash::new(password_hash)
        .map_err(|e| ApiError::Internal(format!("stored password hash is invalid: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Extractor for handlers that require a valid bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Missing header, wrong scheme and bad signature are all the same
        // failure from the caller's point of view.
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::InvalidToken)?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or(ApiError::InvalidToken)?;

        let claims = validate_token(token, &state.config().jwt_secret)?;

        Ok(AuthenticatedUser {
            user_id: claims.sub,
            username: claims.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_password() {
        let hash = hash_password("salainen").unwrap();
        assert_ne!(hash, "salainen");
        assert!(verify_password("salainen", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_create_and_validate_token() {
        let user_id = Uuid::new_v4();
        let token = create_token(user_id, "mluukkai", "test-secret").unwrap();

        let claims = validate_token(&token, "test-secret").unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.username, "mluukkai");
    }

    #[test]
    fn test_validate_token_wrong_secret() {
        let token = create_token(Uuid::new_v4(), "mluukkai", "test-secret").unwrap();
        assert!(matches!(
            validate_token(&token, "other-secret"),
            Err(ApiError::InvalidToken)
        ));
    }

    #[test]
    fn test_token_without_expiry_validates() {
        // Issued tokens have no exp claim and must still verify.
        let token = create_token(Uuid::new_v4(), "mluukkai", "test-secret").unwrap();
        assert!(validate_token(&token, "test-secret").is_ok());
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(matches!(
            validate_token("not-a-token", "test-secret"),
            Err(ApiError::InvalidToken)
        ));
    }
}
