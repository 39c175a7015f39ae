//! Business HTTP handlers.
//!
//! This module implements the business-related API endpoints:
//! - POST /businesses - Create new business
//! - GET /businesses/{id} - Get business by ID
//! - GET /businesses/nearby - Proximity search around a point
//! - PUT /businesses/{id} - Partial update
//! - DELETE /businesses/{id} - Delete business
//!
//! All geometry handling is delegated to PostGIS: clients exchange GeoJSON
//! Point text, `ST_GeomFromGeoJSON` parses it on the way in, and
//! `ST_AsGeoJSON` renders the canonical form on the way out.

use crate::{
    AppState,
    error::AppError,
    models::business::{Business, CreateBusinessRequest, NearbyBusiness, NearbyParams, UpdateBusinessRequest},
    services::business_service,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::{Value, json};

/// Create a new business.
///
/// # Endpoint
///
/// `POST /businesses`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Cafe A",
///   "type": "cafe",
///   "geometry": "{\"type\":\"Point\",\"coordinates\":[-79.4146,43.7805]}"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: `{"status": "created", "business": {...}}`
///   with the database-assigned id and canonical geometry
/// - **Error (500)**: Malformed GeoJSON or other database failure
pub async fn create_business(
    State(state): State<AppState>,
    Json(request): Json<CreateBusinessRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let business = sqlx::query_as::<_, Business>(
        r#"
        INSERT INTO businesses (name, business_type, geom)
        VALUES ($1, $2, ST_GeomFromGeoJSON($3))
        RETURNING id, name, business_type, ST_AsGeoJSON(geom) AS geometry
        "#,
    )
    .bind(request.name)
    .bind(request.business_type)
    // Raw GeoJSON text; PostGIS validates and parses it
    .bind(request.geometry)
    .fetch_one(&state.pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "created", "business": business })),
    ))
}

/// Get a specific business by ID.
///
/// # Endpoint
///
/// `GET /businesses/{id}`
///
/// # Response
///
/// - **Success (200 OK)**: Returns the business record
/// - **Error (404)**: No business with that id
/// - **Error (500)**: Database failure
pub async fn get_business(
    State(state): State<AppState>,
    Path(business_id): Path<i32>,
) -> Result<Json<Business>, AppError> {
    let business = sqlx::query_as::<_, Business>(
        r#"
        SELECT id, name, business_type, ST_AsGeoJSON(geom) AS geometry
        FROM businesses
        WHERE id = $1
        "#,
    )
    .bind(business_id)
    .fetch_optional(&state.pool)
    .await?
    // Return 404 if not found
    .ok_or(AppError::BusinessNotFound)?;

    Ok(Json(business))
}

/// Find businesses within a radius of a point.
///
/// # Endpoint
///
/// `GET /businesses/nearby?lon=-79.4146&lat=43.7805&distance=500&limit=10`
///
/// All query parameters are optional; the defaults search 500 m around the
/// Finch & Yonge intersection and return at most 10 results.
///
/// # Distance Semantics
///
/// Both the radius filter (`ST_DWithin`) and the reported `distance_meters`
/// (`ST_Distance`) operate on geography casts, so distances are geodesic
/// meters over the WGS84 ellipsoid, not planar degrees.
///
/// # Response
///
/// - **Success (200 OK)**: `{"count": N, "businesses": [...]}` ordered by
///   ascending distance from the query point
/// - **Error (500)**: Database failure
pub async fn nearby_businesses(
    State(state): State<AppState>,
    Query(params): Query<NearbyParams>,
) -> Result<Json<Value>, AppError> {
    let businesses = sqlx::query_as::<_, NearbyBusiness>(
        r#"
        SELECT id, name, business_type,
               ST_AsGeoJSON(geom) AS geometry,
               ST_Distance(
                   geom::geography,
                   ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography
               ) AS distance_meters
        FROM businesses
        WHERE ST_DWithin(
            geom::geography,
            ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography,
            $3
        )
        ORDER BY distance_meters
        LIMIT $4
        "#,
    )
    .bind(params.lon)
    .bind(params.lat)
    .bind(params.distance)
    .bind(params.limit)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(json!({
        "count": businesses.len(),
        "businesses": businesses
    })))
}

/// Partially update a business.
///
/// # Endpoint
///
/// `PUT /businesses/{id}`
///
/// Any subset of `name`, `type`, and `geometry` may be provided; omitted
/// fields keep their stored value. The read-overlay-write runs inside one
/// database transaction (see [`business_service::update_business`]).
///
/// # Response
///
/// - **Success (200 OK)**: `{"status": "updated", "business": {...}}`
/// - **Error (404)**: No business with that id
/// - **Error (500)**: Malformed GeoJSON or other database failure
pub async fn update_business(
    State(state): State<AppState>,
    Path(business_id): Path<i32>,
    Json(request): Json<UpdateBusinessRequest>,
) -> Result<Json<Value>, AppError> {
    let business = business_service::update_business(&state.pool, business_id, request).await?;

    Ok(Json(json!({ "status": "updated", "business": business })))
}

/// Delete a business by ID.
///
/// # Endpoint
///
/// `DELETE /businesses/{id}`
///
/// # Response
///
/// - **Success (204 No Content)**: Row removed, empty body
/// - **Error (404)**: No business with that id; deleting an already-deleted
///   id fails the same way
/// - **Error (500)**: Database failure
pub async fn delete_business(
    State(state): State<AppState>,
    Path(business_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let deleted = sqlx::query("DELETE FROM businesses WHERE id = $1")
        .bind(business_id)
        .execute(&state.pool)
        .await?
        .rows_affected();

    if deleted == 0 {
        return Err(AppError::BusinessNotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
