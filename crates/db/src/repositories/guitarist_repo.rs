//! Repository for the `guitarists` table and its `guitarist_gear` join table.
//!
//! A guitarist's gear list is stored as ordered `(guitarist_id, position,
//! gear_id)` rows. Writes that touch the list replace all of its rows inside
//! one transaction.

use std::collections::HashMap;

use gg_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::gear::Gear;
use crate::models::guitarist::{Guitarist, GuitaristGearRow, GuitaristInput, GuitaristRow};
use crate::repositories::gear_repo::GEAR_FIELDS;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, birth_place, birth_year, genre";

/// Provides CRUD operations for guitarists and their gear lists.
pub struct GuitaristRepo;

impl GuitaristRepo {
    /// Insert a new guitarist together with its gear list.
    pub async fn create(pool: &PgPool, input: &GuitaristInput) -> Result<Guitarist, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO guitarists (name, birth_place, birth_year, genre)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.birth_place)
        .bind(input.birth_year)
        .bind(&input.genre)
        .fetch_one(&mut *tx)
        .await?;

        replace_entries(&mut *tx, id, &input.gear_ids()).await?;
        tx.commit().await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Guitarist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM guitarists WHERE id = $1");
        let row = sqlx::query_as::<_, GuitaristRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(with_gear_lists(pool, row.into_iter().collect()).await?.pop())
    }

    /// Find a guitarist by exact name. With duplicates, the oldest row wins.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Guitarist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM guitarists WHERE name = $1 ORDER BY id LIMIT 1");
        let row = sqlx::query_as::<_, GuitaristRow>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await?;
        Ok(with_gear_lists(pool, row.into_iter().collect()).await?.pop())
    }

    /// List all guitarists in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Guitarist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM guitarists ORDER BY id");
        let rows = sqlx::query_as::<_, GuitaristRow>(&query)
            .fetch_all(pool)
            .await?;
        with_gear_lists(pool, rows).await
    }

    /// List guitarists born in exactly `birth_year`.
    pub async fn list_by_birth_year(
        pool: &PgPool,
        birth_year: i32,
    ) -> Result<Vec<Guitarist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM guitarists WHERE birth_year = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, GuitaristRow>(&query)
            .bind(birth_year)
            .fetch_all(pool)
            .await?;
        with_gear_lists(pool, rows).await
    }

    /// Replace every field of a guitarist, gear list included.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &GuitaristInput,
    ) -> Result<Option<Guitarist>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let updated: Option<(DbId,)> = sqlx::query_as(
            "UPDATE guitarists SET
                name = $2,
                birth_place = $3,
                birth_year = $4,
                genre = $5
             WHERE id = $1
             RETURNING id",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.birth_place)
        .bind(input.birth_year)
        .bind(&input.genre)
        .fetch_optional(&mut *tx)
        .await?;

        if updated.is_none() {
            return Ok(None);
        }

        replace_entries(&mut *tx, id, &input.gear_ids()).await?;
        tx.commit().await?;

        Self::find_by_id(pool, id).await
    }

    /// Overwrite a guitarist's gear list with `gear_ids`, in order.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace_gear_list(
        pool: &PgPool,
        id: DbId,
        gear_ids: &[DbId],
    ) -> Result<Option<Guitarist>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM guitarists WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        if locked.is_none() {
            return Ok(None);
        }

        replace_entries(&mut *tx, id, gear_ids).await?;
        tx.commit().await?;

        Self::find_by_id(pool, id).await
    }

    /// Delete a guitarist by ID. Gear list rows go with it (ON DELETE CASCADE).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM guitarists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Drop and re-insert all `guitarist_gear` rows for one guitarist.
async fn replace_entries(
    conn: &mut PgConnection,
    guitarist_id: DbId,
    gear_ids: &[DbId],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM guitarist_gear WHERE guitarist_id = $1")
        .bind(guitarist_id)
        .execute(&mut *conn)
        .await?;

    if gear_ids.is_empty() {
        return Ok(());
    }

    tracing::debug!(guitarist_id, entries = gear_ids.len(), "Writing gear list");
    sqlx::query(
        "INSERT INTO guitarist_gear (guitarist_id, position, gear_id)
         SELECT $1, (t.ord - 1)::INTEGER, t.gear_id
         FROM UNNEST($2::BIGINT[]) WITH ORDINALITY AS t(gear_id, ord)",
    )
    .bind(guitarist_id)
    .bind(gear_ids)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Attach gear lists to guitarist rows with a single join query.
async fn with_gear_lists(
    pool: &PgPool,
    rows: Vec<GuitaristRow>,
) -> Result<Vec<Guitarist>, sqlx::Error> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<DbId> = rows.iter().map(|r| r.id).collect();
    let query = format!(
        "SELECT gg.guitarist_id, {GEAR_FIELDS}
         FROM guitarist_gear gg
         JOIN gear g ON g.id = gg.gear_id
         LEFT JOIN manufacturers m ON m.id = g.brand_id
         WHERE gg.guitarist_id = ANY($1)
         ORDER BY gg.guitarist_id, gg.position"
    );
    let entries = sqlx::query_as::<_, GuitaristGearRow>(&query)
        .bind(&ids)
        .fetch_all(pool)
        .await?;

    let mut lists: HashMap<DbId, Vec<Gear>> = HashMap::new();
    for entry in entries {
        lists
            .entry(entry.guitarist_id)
            .or_default()
            .push(entry.gear.into());
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let gear_list = lists.remove(&row.id).unwrap_or_default();
            Guitarist::from_row(row, gear_list)
        })
        .collect())
}
