//! The data-access seam between services and persistence.
//!
//! [`Store`] is the CRUD-plus-lookups interface every service works through.
//! It enforces no cross-entity rules: refusing to delete referenced records
//! and checking that referenced ids exist is the services' job.

mod memory;
mod pg;

use async_trait::async_trait;
use gg_core::types::DbId;

use crate::models::gear::{Gear, GearInput};
use crate::models::guitarist::{Guitarist, GuitaristInput};
use crate::models::manufacturer::{Manufacturer, ManufacturerInput};

pub use memory::MemoryStore;
pub use pg::PgStore;

pub type StoreResult<T> = Result<T, sqlx::Error>;

/// Persistence for manufacturers, gear and guitarists.
///
/// Lookups return `Ok(None)` for a missing id; `update_*`/`set_*` return
/// `Ok(None)` and `delete_*` return `Ok(false)` when the target row does
/// not exist. All lists come back in id order.
#[async_trait]
pub trait Store: Send + Sync {
    /// Confirm the backing storage is reachable.
    async fn health_check(&self) -> StoreResult<()>;

    // --- Manufacturers ---

    async fn list_manufacturers(&self) -> StoreResult<Vec<Manufacturer>>;

    async fn find_manufacturer(&self, id: DbId) -> StoreResult<Option<Manufacturer>>;

    async fn find_manufacturer_by_name(&self, name: &str) -> StoreResult<Option<Manufacturer>>;

    async fn create_manufacturer(&self, input: &ManufacturerInput) -> StoreResult<Manufacturer>;

    async fn update_manufacturer(
        &self,
        id: DbId,
        input: &ManufacturerInput,
    ) -> StoreResult<Option<Manufacturer>>;

    async fn delete_manufacturer(&self, id: DbId) -> StoreResult<bool>;

    /// Whether any gear has this manufacturer as its brand.
    async fn manufacturer_has_gear(&self, id: DbId) -> StoreResult<bool>;

    // --- Gear ---

    async fn list_gear(&self) -> StoreResult<Vec<Gear>>;

    async fn find_gear(&self, id: DbId) -> StoreResult<Option<Gear>>;

    /// Gear whose type is exactly `gear_type` (case-sensitive).
    async fn find_gear_by_type(&self, gear_type: &str) -> StoreResult<Vec<Gear>>;

    async fn create_gear(&self, input: &GearInput) -> StoreResult<Gear>;

    async fn update_gear(&self, id: DbId, input: &GearInput) -> StoreResult<Option<Gear>>;

    async fn set_gear_brand(&self, id: DbId, brand_id: Option<DbId>) -> StoreResult<Option<Gear>>;

    async fn delete_gear(&self, id: DbId) -> StoreResult<bool>;

    /// Whether any guitarist has this gear on their list.
    async fn gear_is_owned(&self, id: DbId) -> StoreResult<bool>;

    // --- Guitarists ---

    async fn list_guitarists(&self) -> StoreResult<Vec<Guitarist>>;

    async fn find_guitarist(&self, id: DbId) -> StoreResult<Option<Guitarist>>;

    async fn find_guitarist_by_name(&self, name: &str) -> StoreResult<Option<Guitarist>>;

    async fn find_guitarists_by_birth_year(&self, birth_year: i32) -> StoreResult<Vec<Guitarist>>;

    async fn create_guitarist(&self, input: &GuitaristInput) -> StoreResult<Guitarist>;

    async fn update_guitarist(
        &self,
        id: DbId,
        input: &GuitaristInput,
    ) -> StoreResult<Option<Guitarist>>;

    /// Overwrite a guitarist's gear list with `gear_ids`, keeping their order.
    async fn set_guitarist_gear(
        &self,
        id: DbId,
        gear_ids: &[DbId],
    ) -> StoreResult<Option<Guitarist>>;

    async fn delete_guitarist(&self, id: DbId) -> StoreResult<bool>;
}
