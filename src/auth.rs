//! JWT issuance and validation over a static credential table.
//!
//! Tokens are self-contained HS256 JWTs carrying the username as the `sub`
//! claim; the server keeps no session state. A token is valid when its
//! signature checks out, it has not expired, and its subject is still a
//! known user.
//!
//! The credential table is a fixed in-memory map seeded at startup and never
//! mutated. Passwords are compared in plaintext, which is a weakness of the
//! contract this service implements rather than a design goal; see DESIGN.md.

use std::collections::HashMap;

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Token lifetime from issuance.
pub const TOKEN_EXPIRE_MINUTES: i64 = 30;

/// Static username -> password table. Not persisted, not mutable at runtime.
static CREDENTIALS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut users = HashMap::new();
    users.insert("admin", "secret");
    users
});

/// JWT claim set embedded in every issued token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated username
    pub sub: String,
    /// Issued-at, seconds since epoch
    pub iat: i64,
    /// Expiration, seconds since epoch
    pub exp: i64,
}

impl Claims {
    pub fn new(username: &str) -> Self {
        let now = Utc::now();
        Self {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(TOKEN_EXPIRE_MINUTES)).timestamp(),
        }
    }
}

/// Authenticate a username/password pair and mint a signed token.
///
/// # Errors
///
/// Returns `AppError::InvalidCredentials` if the username is unknown or the
/// password does not match, and `AppError::InvalidToken` if signing fails
/// (e.g. an empty secret).
pub fn issue_token(username: &str, password: &str, secret: &str) -> Result<String, AppError> {
    match CREDENTIALS.get(username) {
        Some(stored) if *stored == password => {}
        _ => return Err(AppError::InvalidCredentials),
    }

    let claims = Claims::new(username);
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AppError::InvalidToken)
}

/// Verify a bearer token and return the username it was issued to.
///
/// Checks the HS256 signature and expiration, then confirms the subject
/// still exists in the credential table.
///
/// # Errors
///
/// Returns `AppError::InvalidToken` on any failure; callers see a uniform
/// 401 regardless of which check tripped.
pub fn validate_token(token: &str, secret: &str) -> Result<String, AppError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::InvalidToken)?;

    let username = data.claims.sub;
    if !CREDENTIALS.contains_key(username.as_str()) {
        return Err(AppError::InvalidToken);
    }

    Ok(username)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    #[test]
    fn issued_token_round_trips() {
        let token = issue_token("admin", "secret", SECRET).unwrap();
        let subject = validate_token(&token, SECRET).unwrap();
        assert_eq!(subject, "admin");
    }

    #[test]
    fn token_expires_thirty_minutes_after_issuance() {
        let claims = Claims::new("admin");
        assert_eq!(claims.exp - claims.iat, TOKEN_EXPIRE_MINUTES * 60);
    }

    #[test]
    fn wrong_password_is_rejected() {
        let err = issue_token("admin", "hunter2", SECRET).unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[test]
    fn unknown_user_is_rejected() {
        let err = issue_token("mallory", "secret", SECRET).unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[test]
    fn wrong_secret_fails_validation() {
        let token = issue_token("admin", "secret", SECRET).unwrap();
        let err = validate_token(&token, "some-other-secret").unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn expired_token_fails_validation() {
        // Build a token whose expiry is well past the default 60s leeway.
        let now = Utc::now();
        let claims = Claims {
            sub: "admin".to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let err = validate_token(&token, SECRET).unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn token_for_unknown_subject_fails_validation() {
        // Signed correctly but for a subject outside the credential table.
        let claims = Claims::new("ghost");
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let err = validate_token(&token, SECRET).unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn garbage_token_fails_validation() {
        let err = validate_token("not-a-jwt", SECRET).unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }
}
