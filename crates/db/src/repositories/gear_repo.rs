//! Repository for the `gear` table.
//!
//! Every read left-joins `manufacturers` so the brand comes back resolved.
//! Writes use a CTE so the returned row is joined the same way.

use gg_core::types::DbId;
use sqlx::PgPool;

use crate::models::gear::{Gear, GearInput, GearRow};

/// Gear columns plus the joined brand, aliased to match [`GearRow`].
///
/// Expects the gear table aliased as `g` and manufacturers as `m`.
pub(crate) const GEAR_FIELDS: &str = "g.id, g.name, g.gear_type, g.weight_in_grams, \
     m.id AS brand_id, m.name AS brand_name, m.main_product_type AS brand_main_product_type, \
     m.place_founded AS brand_place_founded, m.year_founded AS brand_year_founded";

/// Provides CRUD operations for gear.
pub struct GearRepo;

impl GearRepo {
    /// Insert a new piece of gear, returning it with its brand resolved.
    pub async fn create(pool: &PgPool, input: &GearInput) -> Result<Gear, sqlx::Error> {
        let query = format!(
            "WITH g AS (
                INSERT INTO gear (name, gear_type, weight_in_grams, brand_id)
                VALUES ($1, $2, $3, $4)
                RETURNING *
             )
             SELECT {GEAR_FIELDS} FROM g LEFT JOIN manufacturers m ON m.id = g.brand_id"
        );
        let row = sqlx::query_as::<_, GearRow>(&query)
            .bind(&input.name)
            .bind(&input.gear_type)
            .bind(input.weight_in_grams)
            .bind(input.brand_id())
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Gear>, sqlx::Error> {
        let query = format!(
            "SELECT {GEAR_FIELDS} FROM gear g
             LEFT JOIN manufacturers m ON m.id = g.brand_id
             WHERE g.id = $1"
        );
        let row = sqlx::query_as::<_, GearRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Gear::from))
    }

    /// List all gear in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Gear>, sqlx::Error> {
        let query = format!(
            "SELECT {GEAR_FIELDS} FROM gear g
             LEFT JOIN manufacturers m ON m.id = g.brand_id
             ORDER BY g.id"
        );
        let rows = sqlx::query_as::<_, GearRow>(&query).fetch_all(pool).await?;
        Ok(rows.into_iter().map(Gear::from).collect())
    }

    /// List gear whose type is exactly `gear_type`, in creation order.
    pub async fn list_by_type(pool: &PgPool, gear_type: &str) -> Result<Vec<Gear>, sqlx::Error> {
        let query = format!(
            "SELECT {GEAR_FIELDS} FROM gear g
             LEFT JOIN manufacturers m ON m.id = g.brand_id
             WHERE g.gear_type = $1
             ORDER BY g.id"
        );
        let rows = sqlx::query_as::<_, GearRow>(&query)
            .bind(gear_type)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Gear::from).collect())
    }

    /// Replace every field of a piece of gear, brand included.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &GearInput,
    ) -> Result<Option<Gear>, sqlx::Error> {
        let query = format!(
            "WITH g AS (
                UPDATE gear SET
                    name = $2,
                    gear_type = $3,
                    weight_in_grams = $4,
                    brand_id = $5
                WHERE id = $1
                RETURNING *
             )
             SELECT {GEAR_FIELDS} FROM g LEFT JOIN manufacturers m ON m.id = g.brand_id"
        );
        let row = sqlx::query_as::<_, GearRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.gear_type)
            .bind(input.weight_in_grams)
            .bind(input.brand_id())
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Gear::from))
    }

    /// Point a piece of gear at a manufacturer (or clear it with `None`).
    pub async fn set_brand(
        pool: &PgPool,
        id: DbId,
        brand_id: Option<DbId>,
    ) -> Result<Option<Gear>, sqlx::Error> {
        let query = format!(
            "WITH g AS (
                UPDATE gear SET brand_id = $2 WHERE id = $1 RETURNING *
             )
             SELECT {GEAR_FIELDS} FROM g LEFT JOIN manufacturers m ON m.id = g.brand_id"
        );
        let row = sqlx::query_as::<_, GearRow>(&query)
            .bind(id)
            .bind(brand_id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Gear::from))
    }

    /// Delete a piece of gear by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gear WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether any guitarist has this gear on their list.
    pub async fn is_owned(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM guitarist_gear WHERE gear_id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }
}
