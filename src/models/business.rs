//! Business data models and API request/response types.
//!
//! This module defines:
//! - `Business`: Database entity representing a business point record
//! - `NearbyBusiness`: A business row joined with its computed distance
//! - `CreateBusinessRequest` / `UpdateBusinessRequest`: Request bodies
//! - `NearbyParams`: Query parameters for the proximity search

use serde::{Deserialize, Serialize};

/// Default query point: the Finch & Yonge intersection in Toronto.
pub const DEFAULT_LON: f64 = -79.4146;
pub const DEFAULT_LAT: f64 = 43.7805;

/// Default proximity search radius in meters.
pub const DEFAULT_RADIUS_METERS: f64 = 500.0;

/// Default maximum number of proximity search results.
pub const DEFAULT_LIMIT: i64 = 10;

/// Represents a business record from the database.
///
/// # Database Table
///
/// Maps to the `businesses` table. The `geom` column holds a WGS84 point
/// (SRID 4326); queries select it as `ST_AsGeoJSON(geom)` so the struct
/// carries the canonical GeoJSON text rather than raw geometry bytes.
///
/// # Geometry Exchange
///
/// Clients send and receive geometry as GeoJSON Point text, e.g.
/// `{"type":"Point","coordinates":[-79.4146,43.7805]}`. Parsing and
/// formatting both happen inside PostGIS.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Business {
    /// Database-assigned identifier, immutable after creation
    pub id: i32,

    /// Human-readable business name
    pub name: String,

    /// Free-form category, e.g. "cafe" or "pharmacy"
    #[serde(rename = "type")]
    pub business_type: String,

    /// Point location as canonical GeoJSON text
    pub geometry: String,
}

/// A business row returned by the proximity search, including the geodesic
/// distance from the query point computed by `ST_Distance` over geography.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct NearbyBusiness {
    pub id: i32,

    pub name: String,

    #[serde(rename = "type")]
    pub business_type: String,

    pub geometry: String,

    /// Geodesic distance from the query point, in meters
    pub distance_meters: f64,
}

/// Request body for creating a new business.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Cafe A",
///   "type": "cafe",
///   "geometry": "{\"type\":\"Point\",\"coordinates\":[-79.4146,43.7805]}"
/// }
/// ```
///
/// The geometry string is passed to the database untouched; PostGIS rejects
/// anything that is not valid GeoJSON.
#[derive(Debug, Deserialize)]
pub struct CreateBusinessRequest {
    pub name: String,

    #[serde(rename = "type")]
    pub business_type: String,

    /// GeoJSON Point text
    pub geometry: String,
}

/// Request body for partially updating a business.
///
/// Any subset of fields may be provided; omitted fields keep their stored
/// value. The overlay onto the current row happens in
/// [`UpdateBusinessRequest::overlay`].
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBusinessRequest {
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub business_type: Option<String>,

    /// GeoJSON Point text
    pub geometry: Option<String>,
}

impl UpdateBusinessRequest {
    /// Merge this partial update onto the current row, producing the full
    /// set of column values to write back. Fields left unset retain the
    /// current value; the identifier is never changed.
    pub fn overlay(self, current: Business) -> Business {
        Business {
            id: current.id,
            name: self.name.unwrap_or(current.name),
            business_type: self.business_type.unwrap_or(current.business_type),
            geometry: self.geometry.unwrap_or(current.geometry),
        }
    }
}

/// Query parameters for `GET /businesses/nearby`.
///
/// All parameters are optional; defaults center the search on Finch & Yonge
/// with a 500 m radius and at most 10 results.
#[derive(Debug, Deserialize)]
pub struct NearbyParams {
    /// Query point longitude
    #[serde(default = "default_lon")]
    pub lon: f64,

    /// Query point latitude
    #[serde(default = "default_lat")]
    pub lat: f64,

    /// Search radius in meters
    #[serde(default = "default_radius")]
    pub distance: f64,

    /// Maximum number of results
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_lon() -> f64 {
    DEFAULT_LON
}

fn default_lat() -> f64 {
    DEFAULT_LAT
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS_METERS
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn current() -> Business {
        Business {
            id: 7,
            name: "Cafe A".to_string(),
            business_type: "cafe".to_string(),
            geometry: r#"{"type":"Point","coordinates":[-79.4146,43.7805]}"#.to_string(),
        }
    }

    #[test]
    fn empty_update_keeps_every_field() {
        let merged = UpdateBusinessRequest::default().overlay(current());
        let original = current();
        assert_eq!(merged.id, original.id);
        assert_eq!(merged.name, original.name);
        assert_eq!(merged.business_type, original.business_type);
        assert_eq!(merged.geometry, original.geometry);
    }

    #[test]
    fn update_overlays_only_provided_fields() {
        let update = UpdateBusinessRequest {
            name: Some("Cafe B".to_string()),
            ..Default::default()
        };
        let merged = update.overlay(current());
        assert_eq!(merged.name, "Cafe B");
        assert_eq!(merged.business_type, "cafe");
        assert_eq!(merged.geometry, current().geometry);
    }

    #[test]
    fn update_body_accepts_any_subset_of_fields() {
        let update: UpdateBusinessRequest =
            serde_json::from_value(json!({ "type": "restaurant" })).unwrap();
        assert!(update.name.is_none());
        assert_eq!(update.business_type.as_deref(), Some("restaurant"));
        assert!(update.geometry.is_none());
    }

    #[test]
    fn nearby_params_default_to_finch_and_yonge() {
        let params: NearbyParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(params.lon, DEFAULT_LON);
        assert_eq!(params.lat, DEFAULT_LAT);
        assert_eq!(params.distance, DEFAULT_RADIUS_METERS);
        assert_eq!(params.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn business_type_serializes_as_type() {
        let value = serde_json::to_value(current()).unwrap();
        assert_eq!(value["type"], "cafe");
        assert!(value.get("business_type").is_none());
    }
}
