use std::sync::Arc;

use gg_core::error::CoreError;
use gg_core::filter::matches_optional_slug;
use gg_core::types::DbId;
use gg_db::models::manufacturer::{Manufacturer, ManufacturerInput};
use gg_db::store::Store;

use crate::error::{AppError, AppResult};
use crate::services::{not_found, require_manufacturer};

#[derive(Clone)]
pub struct ManufacturerService {
    store: Arc<dyn Store>,
}

impl ManufacturerService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn list_manufacturers(
        &self,
        main_product_type: Option<&str>,
    ) -> AppResult<Vec<Manufacturer>> {
        tracing::debug!(?main_product_type, "Listing manufacturers");
        let manufacturers = self.store.list_manufacturers().await?;
        Ok(manufacturers
            .into_iter()
            .filter(|m| matches_optional_slug(&m.main_product_type, main_product_type))
            .collect())
    }

    pub async fn get_manufacturer(&self, id: DbId) -> AppResult<Manufacturer> {
        require_manufacturer(self.store.as_ref(), id).await
    }

    pub async fn get_manufacturer_by_name(&self, name: &str) -> AppResult<Manufacturer> {
        self.store
            .find_manufacturer_by_name(name)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::NotFoundByName {
                    entity: "Manufacturer",
                    name: name.to_string(),
                })
            })
    }

    pub async fn create_manufacturer(&self, input: &ManufacturerInput) -> AppResult<Manufacturer> {
        let manufacturer = self.store.create_manufacturer(input).await?;
        tracing::info!(
            manufacturer_id = manufacturer.id,
            name = %manufacturer.name,
            "Manufacturer created"
        );
        Ok(manufacturer)
    }

    pub async fn update_manufacturer(
        &self,
        id: DbId,
        input: &ManufacturerInput,
    ) -> AppResult<Manufacturer> {
        let manufacturer = self
            .store
            .update_manufacturer(id, input)
            .await?
            .ok_or_else(|| not_found("Manufacturer", id))?;
        tracing::info!(manufacturer_id = id, "Manufacturer updated");
        Ok(manufacturer)
    }

    /// Delete a manufacturer unless some gear still has it as its brand.
    pub async fn delete_manufacturer(&self, id: DbId) -> AppResult<()> {
        require_manufacturer(self.store.as_ref(), id).await?;
        if self.has_gear_in_db(id).await? {
            return Err(AppError::Core(CoreError::NotAllowed(format!(
                "Manufacturer with id {id} is still associated with Gear in database."
            ))));
        }

        if !self.store.delete_manufacturer(id).await? {
            return Err(not_found("Manufacturer", id));
        }
        tracing::info!(manufacturer_id = id, "Manufacturer deleted");
        Ok(())
    }

    /// Whether any gear has the manufacturer as its brand.
    pub async fn has_gear_in_db(&self, id: DbId) -> AppResult<bool> {
        Ok(self.store.manufacturer_has_gear(id).await?)
    }
}
