//! Token issuance HTTP handler.
//!
//! Implements `POST /token`: exchanges a username/password pair for a
//! short-lived bearer token.

use crate::{AppState, auth, error::AppError};
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

/// Request body for `POST /token`.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// Response body for `POST /token`.
///
/// # JSON Example
///
/// ```json
/// {
///   "access_token": "eyJhbGciOiJIUzI1NiJ9...",
///   "token_type": "bearer"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    /// Signed JWT, valid for 30 minutes
    pub access_token: String,

    /// Always "bearer"
    pub token_type: String,
}

/// Issue a bearer token for a known user.
///
/// # Endpoint
///
/// `POST /token`
///
/// # Response
///
/// - **Success (200 OK)**: Returns the signed token
/// - **Error (401)**: Unknown username or wrong password
pub async fn issue_token(
    State(state): State<AppState>,
    Json(request): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let access_token = auth::issue_token(
        &request.username,
        &request.password,
        &state.config.secret_key,
    )?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}
