//! Business GIS API library.
//!
//! This is a REST API for managing spatial "business" point records near the
//! Finch & Yonge intersection in Toronto, backed by PostgreSQL + PostGIS.
//! It exposes CRUD endpoints plus a geodesic proximity search, and issues
//! short-lived JWT bearer tokens from a static credential table.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL + PostGIS with sqlx (async queries); all
//!   geometry parsing and distance math happens in the database
//! - **Authentication**: HS256 JWT issuance/validation
//! - **Format**: JSON requests/responses, geometry exchanged as GeoJSON text
//!
//! The router is built by [`app`] so integration tests can drive it without
//! binding a socket; the binary in `main.rs` wires it to a TCP listener.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use axum::{
    Json, Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{config::Config, db::DbPool};

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: DbPool,
    /// Runtime configuration (signing secret, auth enforcement flag, ...)
    pub config: Config,
}

/// Build the HTTP router.
///
/// # Routes
///
/// - `GET /` and `GET /health` - public service metadata
/// - `POST /token` - public token issuance
/// - `GET /businesses/nearby`, `GET /businesses/{id}` - public reads
/// - `POST /businesses`, `PUT /businesses/{id}`, `DELETE /businesses/{id}` -
///   writes; bearer-token checked only when `REQUIRE_AUTH` is set
pub fn app(state: AppState) -> Router {
    // Write endpoints live on their own router so the bearer check can be
    // layered over exactly these routes when enforcement is enabled.
    let mut write_routes = Router::new()
        .route("/businesses", post(handlers::businesses::create_business))
        .route(
            "/businesses/{id}",
            put(handlers::businesses::update_business)
                .delete(handlers::businesses::delete_business),
        );

    if state.config.require_auth {
        write_routes = write_routes.route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::bearer_auth,
        ));
    }

    Router::new()
        // Public routes
        .route("/", get(index))
        .route("/health", get(handlers::health::health_check))
        .route("/token", post(handlers::auth::issue_token))
        // Read endpoints; the static segment must not be captured by {id}
        .route(
            "/businesses/nearby",
            get(handlers::businesses::nearby_businesses),
        )
        .route("/businesses/{id}", get(handlers::businesses::get_business))
        .merge(write_routes)
        // Global middleware
        .layer(CorsLayer::permissive())
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // Share state with all handlers via State extraction
        .with_state(state)
}

/// API index handler for `GET /`.
async fn index() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Business GIS API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "token": "/token (POST)",
            "businesses_nearby": "/businesses/nearby",
            "create_business": "/businesses (POST)",
            "get_business": "/businesses/{id}",
            "update_business": "/businesses/{id} (PUT)",
            "delete_business": "/businesses/{id} (DELETE)",
            "health": "/health"
        }
    }))
}
