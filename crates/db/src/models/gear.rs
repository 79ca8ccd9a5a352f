//! Gear entity model and DTOs.

use gg_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::manufacturer::Manufacturer;
use crate::models::EntityRef;

/// A piece of gear with its brand resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gear {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub gear_type: String,
    pub weight_in_grams: i32,
    pub brand: Option<Manufacturer>,
}

/// A `gear` row left-joined with its manufacturer.
///
/// All `brand_*` columns are NULL together when the gear has no brand.
#[derive(Debug, Clone, FromRow)]
pub struct GearRow {
    pub id: DbId,
    pub name: String,
    pub gear_type: String,
    pub weight_in_grams: i32,
    pub brand_id: Option<DbId>,
    pub brand_name: Option<String>,
    pub brand_main_product_type: Option<String>,
    pub brand_place_founded: Option<String>,
    pub brand_year_founded: Option<i32>,
}

impl From<GearRow> for Gear {
    fn from(row: GearRow) -> Self {
        let brand = match (
            row.brand_id,
            row.brand_name,
            row.brand_main_product_type,
            row.brand_place_founded,
            row.brand_year_founded,
        ) {
            (Some(id), Some(name), Some(main_product_type), Some(place_founded), Some(year_founded)) => {
                Some(Manufacturer {
                    id,
                    name,
                    main_product_type,
                    place_founded,
                    year_founded,
                })
            }
            _ => None,
        };

        Gear {
            id: row.id,
            name: row.name,
            gear_type: row.gear_type,
            weight_in_grams: row.weight_in_grams,
            brand,
        }
    }
}

/// DTO for creating or fully replacing a piece of gear.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GearInput {
    pub name: String,
    #[serde(rename = "type")]
    pub gear_type: String,
    pub weight_in_grams: i32,
    /// Manufacturer reference; `null` or absent means no brand.
    #[serde(default)]
    pub brand: Option<EntityRef>,
}

impl GearInput {
    pub fn brand_id(&self) -> Option<DbId> {
        self.brand.map(|b| b.id)
    }
}
