use async_trait::async_trait;
use gg_core::types::DbId;

use crate::models::gear::{Gear, GearInput};
use crate::models::guitarist::{Guitarist, GuitaristInput};
use crate::models::manufacturer::{Manufacturer, ManufacturerInput};
use crate::repositories::{GearRepo, GuitaristRepo, ManufacturerRepo};
use crate::store::{Store, StoreResult};
use crate::DbPool;

/// [`Store`] backed by PostgreSQL through the table repositories.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await
    }

    async fn list_manufacturers(&self) -> StoreResult<Vec<Manufacturer>> {
        ManufacturerRepo::list(&self.pool).await
    }

    async fn find_manufacturer(&self, id: DbId) -> StoreResult<Option<Manufacturer>> {
        ManufacturerRepo::find_by_id(&self.pool, id).await
    }

    async fn find_manufacturer_by_name(&self, name: &str) -> StoreResult<Option<Manufacturer>> {
        ManufacturerRepo::find_by_name(&self.pool, name).await
    }

    async fn create_manufacturer(&self, input: &ManufacturerInput) -> StoreResult<Manufacturer> {
        ManufacturerRepo::create(&self.pool, input).await
    }

    async fn update_manufacturer(
        &self,
        id: DbId,
        input: &ManufacturerInput,
    ) -> StoreResult<Option<Manufacturer>> {
        ManufacturerRepo::update(&self.pool, id, input).await
    }

    async fn delete_manufacturer(&self, id: DbId) -> StoreResult<bool> {
        ManufacturerRepo::delete(&self.pool, id).await
    }

    async fn manufacturer_has_gear(&self, id: DbId) -> StoreResult<bool> {
        ManufacturerRepo::has_gear(&self.pool, id).await
    }

    async fn list_gear(&self) -> StoreResult<Vec<Gear>> {
        GearRepo::list(&self.pool).await
    }

    async fn find_gear(&self, id: DbId) -> StoreResult<Option<Gear>> {
        GearRepo::find_by_id(&self.pool, id).await
    }

    async fn find_gear_by_type(&self, gear_type: &str) -> StoreResult<Vec<Gear>> {
        GearRepo::list_by_type(&self.pool, gear_type).await
    }

    async fn create_gear(&self, input: &GearInput) -> StoreResult<Gear> {
        GearRepo::create(&self.pool, input).await
    }

    async fn update_gear(&self, id: DbId, input: &GearInput) -> StoreResult<Option<Gear>> {
        GearRepo::update(&self.pool, id, input).await
    }

    async fn set_gear_brand(&self, id: DbId, brand_id: Option<DbId>) -> StoreResult<Option<Gear>> {
        GearRepo::set_brand(&self.pool, id, brand_id).await
    }

    async fn delete_gear(&self, id: DbId) -> StoreResult<bool> {
        GearRepo::delete(&self.pool, id).await
    }

    async fn gear_is_owned(&self, id: DbId) -> StoreResult<bool> {
        GearRepo::is_owned(&self.pool, id).await
    }

    async fn list_guitarists(&self) -> StoreResult<Vec<Guitarist>> {
        GuitaristRepo::list(&self.pool).await
    }

    async fn find_guitarist(&self, id: DbId) -> StoreResult<Option<Guitarist>> {
        GuitaristRepo::find_by_id(&self.pool, id).await
    }

    async fn find_guitarist_by_name(&self, name: &str) -> StoreResult<Option<Guitarist>> {
        GuitaristRepo::find_by_name(&self.pool, name).await
    }

    async fn find_guitarists_by_birth_year(&self, birth_year: i32) -> StoreResult<Vec<Guitarist>> {
        GuitaristRepo::list_by_birth_year(&self.pool, birth_year).await
    }

    async fn create_guitarist(&self, input: &GuitaristInput) -> StoreResult<Guitarist> {
        GuitaristRepo::create(&self.pool, input).await
    }

    async fn update_guitarist(
        &self,
        id: DbId,
        input: &GuitaristInput,
    ) -> StoreResult<Option<Guitarist>> {
        GuitaristRepo::update(&self.pool, id, input).await
    }

    async fn set_guitarist_gear(
        &self,
        id: DbId,
        gear_ids: &[DbId],
    ) -> StoreResult<Option<Guitarist>> {
        GuitaristRepo::replace_gear_list(&self.pool, id, gear_ids).await
    }

    async fn delete_guitarist(&self, id: DbId) -> StoreResult<bool> {
        GuitaristRepo::delete(&self.pool, id).await
    }
}
