//! Guitarist entity model and DTOs.

use gg_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::gear::{Gear, GearRow};
use crate::models::EntityRef;

/// A guitarist with their gear list resolved, in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Guitarist {
    pub id: DbId,
    pub name: String,
    pub birth_place: String,
    pub birth_year: i32,
    pub genre: String,
    pub gear_list: Vec<Gear>,
}

impl Guitarist {
    pub fn from_row(row: GuitaristRow, gear_list: Vec<Gear>) -> Self {
        Guitarist {
            id: row.id,
            name: row.name,
            birth_place: row.birth_place,
            birth_year: row.birth_year,
            genre: row.genre,
            gear_list,
        }
    }

    /// Ids of the gear list, in order.
    pub fn gear_ids(&self) -> Vec<DbId> {
        self.gear_list.iter().map(|g| g.id).collect()
    }
}

/// A row from the `guitarists` table (without the gear list).
#[derive(Debug, Clone, FromRow)]
pub struct GuitaristRow {
    pub id: DbId,
    pub name: String,
    pub birth_place: String,
    pub birth_year: i32,
    pub genre: String,
}

/// One `guitarist_gear` entry joined with its gear.
#[derive(Debug, Clone, FromRow)]
pub struct GuitaristGearRow {
    pub guitarist_id: DbId,
    #[sqlx(flatten)]
    pub gear: GearRow,
}

/// DTO for creating or fully replacing a guitarist.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuitaristInput {
    pub name: String,
    pub birth_place: String,
    pub birth_year: i32,
    pub genre: String,
    #[serde(default)]
    pub gear_list: Vec<EntityRef>,
}

impl GuitaristInput {
    pub fn gear_ids(&self) -> Vec<DbId> {
        self.gear_list.iter().map(|g| g.id).collect()
    }
}
