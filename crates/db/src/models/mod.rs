//! Entity models and request DTOs.
//!
//! Wire names are camelCase to stay compatible with existing clients.

pub mod gear;
pub mod guitarist;
pub mod manufacturer;

use gg_core::types::DbId;
use serde::Deserialize;

/// A reference to another record by id, as sent in request bodies.
///
/// Clients may send a full entity; everything except `id` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EntityRef {
    pub id: DbId,
}
