//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from database operations, including
///   PostGIS rejecting malformed GeoJSON inside `ST_GeomFromGeoJSON`
/// - **Authentication Errors**: Bad credentials or invalid/expired tokens
/// - **Resource Errors**: Requested business record not found
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error,
    /// geometry parse failure).
    ///
    /// This wraps any sqlx::Error using the `#[from]` attribute, which
    /// automatically implements `From<sqlx::Error> for AppError`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Username is unknown or the password does not match.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// Bearer token is missing, malformed, expired, or signed with the
    /// wrong secret, or its subject is no longer a known user.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Could not validate credentials")]
    InvalidToken,

    /// Requested business record does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Business not found")]
    BusinessNotFound,
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidCredentials` → 401 Unauthorized
/// - `InvalidToken` → 401 Unauthorized
/// - `BusinessNotFound` → 404 Not Found
/// - `Database` → 500 Internal Server Error
///
/// Database errors surface the underlying message to the caller, matching
/// the contract this service implements; a hardened deployment would
/// distinguish client-input failures (bad GeoJSON) as 400s and keep server
/// faults opaque.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, error code, message)
        let (status, code, message) = match self {
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "invalid_credentials",
                self.to_string(),
            ),
            AppError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, "invalid_token", self.to_string())
            }
            AppError::BusinessNotFound => (
                StatusCode::NOT_FOUND,
                "business_not_found",
                self.to_string(),
            ),
            AppError::Database(ref e) => {
                tracing::error!("database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    self.to_string(),
                )
            }
        };

        // Build JSON response body
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        // Return the response with status code and JSON body
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_failures_map_to_401() {
        assert_eq!(
            AppError::InvalidCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::InvalidToken.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn missing_business_maps_to_404() {
        assert_eq!(
            AppError::BusinessNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn database_failures_map_to_500() {
        let err = AppError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
