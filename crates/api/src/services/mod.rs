//! Business rules that span entity kinds.
//!
//! Each service wraps the shared [`Store`] and enforces the checks the store
//! itself does not: referenced ids must exist, and records still referenced
//! by others cannot be deleted.

pub mod gear;
pub mod guitarist;
pub mod manufacturer;

pub use gear::GearService;
pub use guitarist::GuitaristService;
pub use manufacturer::ManufacturerService;

use gg_core::error::CoreError;
use gg_core::types::DbId;
use gg_db::models::gear::Gear;
use gg_db::models::guitarist::Guitarist;
use gg_db::models::manufacturer::Manufacturer;
use gg_db::store::Store;

use crate::error::{AppError, AppResult};

pub(crate) fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

pub(crate) async fn require_gear(store: &dyn Store, id: DbId) -> AppResult<Gear> {
    store
        .find_gear(id)
        .await?
        .ok_or_else(|| not_found("Gear", id))
}

pub(crate) async fn require_guitarist(store: &dyn Store, id: DbId) -> AppResult<Guitarist> {
    store
        .find_guitarist(id)
        .await?
        .ok_or_else(|| not_found("Guitarist", id))
}

pub(crate) async fn require_manufacturer(store: &dyn Store, id: DbId) -> AppResult<Manufacturer> {
    store
        .find_manufacturer(id)
        .await?
        .ok_or_else(|| not_found("Manufacturer", id))
}
