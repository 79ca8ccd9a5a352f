use std::sync::Arc;

use gg_core::error::CoreError;
use gg_core::filter::{matches_optional_slug, matches_slug};
use gg_core::types::DbId;
use gg_core::validation::{validate_gear_type, validate_weight};
use gg_db::models::gear::{Gear, GearInput};
use gg_db::models::guitarist::Guitarist;
use gg_db::models::EntityRef;
use gg_db::store::Store;

use crate::error::{AppError, AppResult};
use crate::services::{not_found, require_gear, require_guitarist, require_manufacturer};

/// Gear CRUD plus the gear side of the guitarist and manufacturer
/// associations.
#[derive(Clone)]
pub struct GearService {
    store: Arc<dyn Store>,
}

impl GearService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// All gear, optionally narrowed by brand name and/or type.
    ///
    /// Both filters are slugs: `-` stands for a space and case is ignored.
    /// Gear without a brand never matches a brand filter.
    pub async fn list_gear(
        &self,
        brand_name: Option<&str>,
        gear_type: Option<&str>,
    ) -> AppResult<Vec<Gear>> {
        tracing::debug!(?brand_name, ?gear_type, "Listing gear");
        let gear = self.store.list_gear().await?;
        Ok(gear
            .into_iter()
            .filter(|g| {
                let brand_matches = match brand_name {
                    Some(brand_name) => g
                        .brand
                        .as_ref()
                        .is_some_and(|brand| matches_slug(&brand.name, brand_name)),
                    None => true,
                };
                brand_matches && matches_optional_slug(&g.gear_type, gear_type)
            })
            .collect())
    }

    pub async fn get_gear(&self, id: DbId) -> AppResult<Gear> {
        require_gear(self.store.as_ref(), id).await
    }

    /// The gear list of a guitarist, in list order.
    pub async fn list_gear_of_guitarist(&self, guitarist_id: DbId) -> AppResult<Vec<Gear>> {
        let guitarist = require_guitarist(self.store.as_ref(), guitarist_id).await?;
        Ok(guitarist.gear_list)
    }

    pub async fn create_gear(&self, input: &GearInput) -> AppResult<Gear> {
        validate_weight(input.weight_in_grams)?;
        self.check_brand(input).await?;

        let gear = self.store.create_gear(input).await?;
        tracing::info!(gear_id = gear.id, name = %gear.name, "Gear created");
        Ok(gear)
    }

    /// Replace every field of an existing gear record, brand included.
    pub async fn update_gear(&self, id: DbId, input: &GearInput) -> AppResult<Gear> {
        require_gear(self.store.as_ref(), id).await?;
        validate_gear_type(&input.gear_type)?;
        validate_weight(input.weight_in_grams)?;
        self.check_brand(input).await?;

        let gear = self
            .store
            .update_gear(id, input)
            .await?
            .ok_or_else(|| not_found("Gear", id))?;
        tracing::info!(gear_id = id, "Gear updated");
        Ok(gear)
    }

    /// Append a gear to the end of a guitarist's gear list.
    pub async fn add_gear_to_guitarist(
        &self,
        guitarist_id: DbId,
        gear: EntityRef,
    ) -> AppResult<Guitarist> {
        let guitarist = require_guitarist(self.store.as_ref(), guitarist_id).await?;
        require_gear(self.store.as_ref(), gear.id).await?;

        let mut gear_ids = guitarist.gear_ids();
        gear_ids.push(gear.id);

        let guitarist = self.save_gear_list(guitarist_id, &gear_ids).await?;
        tracing::info!(guitarist_id, gear_id = gear.id, "Gear added to guitarist");
        Ok(guitarist)
    }

    /// Remove the first occurrence of a gear from a guitarist's gear list.
    pub async fn remove_gear_from_guitarist_list(
        &self,
        guitarist_id: DbId,
        gear: EntityRef,
    ) -> AppResult<Guitarist> {
        let guitarist = require_guitarist(self.store.as_ref(), guitarist_id).await?;

        let mut gear_ids = guitarist.gear_ids();
        let position = gear_ids
            .iter()
            .position(|id| *id == gear.id)
            .ok_or(CoreError::NotInGearList {
                guitarist_id,
                gear_id: gear.id,
            })?;
        gear_ids.remove(position);

        let guitarist = self.save_gear_list(guitarist_id, &gear_ids).await?;
        tracing::info!(guitarist_id, gear_id = gear.id, "Gear removed from guitarist");
        Ok(guitarist)
    }

    /// Make a manufacturer the brand of an existing gear.
    pub async fn add_gear_to_manufacturer(
        &self,
        manufacturer_id: DbId,
        gear: EntityRef,
    ) -> AppResult<Gear> {
        require_manufacturer(self.store.as_ref(), manufacturer_id).await?;
        require_gear(self.store.as_ref(), gear.id).await?;

        let updated = self
            .store
            .set_gear_brand(gear.id, Some(manufacturer_id))
            .await?
            .ok_or_else(|| not_found("Gear", gear.id))?;
        tracing::info!(manufacturer_id, gear_id = gear.id, "Gear brand set");
        Ok(updated)
    }

    /// Delete a gear record unless some guitarist still has it.
    pub async fn delete_gear(&self, id: DbId) -> AppResult<()> {
        require_gear(self.store.as_ref(), id).await?;
        if self.is_owned(id).await? {
            return Err(AppError::Core(CoreError::NotAllowed(
                "Cannot delete gear that is still owned by a guitarist".to_string(),
            )));
        }

        if !self.store.delete_gear(id).await? {
            return Err(not_found("Gear", id));
        }
        tracing::info!(gear_id = id, "Gear deleted");
        Ok(())
    }

    /// Whether any guitarist's gear list contains the gear.
    pub async fn is_owned(&self, id: DbId) -> AppResult<bool> {
        Ok(self.store.gear_is_owned(id).await?)
    }

    async fn check_brand(&self, input: &GearInput) -> AppResult<()> {
        if let Some(brand_id) = input.brand_id() {
            require_manufacturer(self.store.as_ref(), brand_id).await?;
        }
        Ok(())
    }

    async fn save_gear_list(&self, guitarist_id: DbId, gear_ids: &[DbId]) -> AppResult<Guitarist> {
        self.store
            .set_guitarist_gear(guitarist_id, gear_ids)
            .await?
            .ok_or_else(|| not_found("Guitarist", guitarist_id))
    }
}
