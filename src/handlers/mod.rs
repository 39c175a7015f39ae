//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Performs business logic (database queries, validation)
//! 3. Returns HTTP response (JSON, status code)

/// Token issuance endpoint
pub mod auth;
/// Business CRUD and proximity search endpoints
pub mod businesses;
/// Health check endpoint
pub mod health;
