//! Business service - transactional logic for business records.
//!
//! This service handles the partial-update overlay, which is the one
//! operation that reads and then writes the same row.
//!
//! # Atomicity Guarantees
//!
//! The fetch of current values and the write of merged values run inside a
//! single PostgreSQL transaction with the row locked (`FOR UPDATE`), so two
//! concurrent partial updates of the same business cannot lose each other's
//! fields.

use crate::{
    db::DbPool,
    error::AppError,
    models::business::{Business, UpdateBusinessRequest},
};

/// Apply a partial update to a business.
///
/// # Process
///
/// 1. Start database transaction
/// 2. Lock and fetch the current row
/// 3. Overlay provided fields onto current values
/// 4. Write all three columns back, re-parsing geometry through PostGIS
/// 5. Commit (or rollback on error)
///
/// All three columns are written unconditionally; unchanged fields are
/// rewritten with their current values.
///
/// # Errors
///
/// - `BusinessNotFound`: no row with this id
/// - `Database`: malformed GeoJSON in the update, or any other failure
pub async fn update_business(
    pool: &DbPool,
    business_id: i32,
    update: UpdateBusinessRequest,
) -> Result<Business, AppError> {
    // Start db transaction
    let mut tx = pool.begin().await?;

    // Lock the row so a concurrent update cannot slip between our read and
    // write. Dropping the transaction without commit rolls back the lock.
    let current = sqlx::query_as::<_, Business>(
        r#"
        SELECT id, name, business_type, ST_AsGeoJSON(geom) AS geometry
        FROM businesses
        WHERE id = $1
        FOR UPDATE
        "#,
    )
    .bind(business_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(AppError::BusinessNotFound)?;

    // Unset fields keep their current value
    let merged = update.overlay(current);

    let business = sqlx::query_as::<_, Business>(
        r#"
        UPDATE businesses
        SET name = $1,
            business_type = $2,
            geom = ST_GeomFromGeoJSON($3)
        WHERE id = $4
        RETURNING id, name, business_type, ST_AsGeoJSON(geom) AS geometry
        "#,
    )
    .bind(merged.name)
    .bind(merged.business_type)
    .bind(merged.geometry)
    .bind(business_id)
    .fetch_one(&mut *tx)
    .await?;

    // Commit all changes atomically
    tx.commit().await?;

    Ok(business)
}
