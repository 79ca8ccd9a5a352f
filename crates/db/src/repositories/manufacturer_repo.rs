//! Repository for the `manufacturers` table.

use gg_core::types::DbId;
use sqlx::PgPool;

use crate::models::manufacturer::{Manufacturer, ManufacturerInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, main_product_type, place_founded, year_founded";

/// Provides CRUD operations for manufacturers.
pub struct ManufacturerRepo;

impl ManufacturerRepo {
    /// Insert a new manufacturer, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &ManufacturerInput,
    ) -> Result<Manufacturer, sqlx::Error> {
        let query = format!(
            "INSERT INTO manufacturers (name, main_product_type, place_founded, year_founded)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Manufacturer>(&query)
            .bind(&input.name)
            .bind(&input.main_product_type)
            .bind(&input.place_founded)
            .bind(input.year_founded)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Manufacturer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM manufacturers WHERE id = $1");
        sqlx::query_as::<_, Manufacturer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a manufacturer by exact name. With duplicates, the oldest row wins.
    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<Manufacturer>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM manufacturers WHERE name = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Manufacturer>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all manufacturers in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Manufacturer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM manufacturers ORDER BY id");
        sqlx::query_as::<_, Manufacturer>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace every field of a manufacturer.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ManufacturerInput,
    ) -> Result<Option<Manufacturer>, sqlx::Error> {
        let query = format!(
            "UPDATE manufacturers SET
                name = $2,
                main_product_type = $3,
                place_founded = $4,
                year_founded = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Manufacturer>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.main_product_type)
            .bind(&input.place_founded)
            .bind(input.year_founded)
            .fetch_optional(pool)
            .await
    }

    /// Delete a manufacturer by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM manufacturers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether any gear row has this manufacturer as its brand.
    pub async fn has_gear(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM gear WHERE brand_id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }
}
