//! Manufacturer entity model and DTO.

use gg_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `manufacturers` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manufacturer {
    pub id: DbId,
    pub name: String,
    pub main_product_type: String,
    pub place_founded: String,
    pub year_founded: i32,
}

/// DTO for creating or fully replacing a manufacturer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturerInput {
    pub name: String,
    pub main_product_type: String,
    pub place_founded: String,
    pub year_founded: i32,
}
