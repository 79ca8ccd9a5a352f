use std::collections::BTreeMap;

use async_trait::async_trait;
use gg_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::gear::{Gear, GearInput};
use crate::models::guitarist::{Guitarist, GuitaristInput};
use crate::models::manufacturer::{Manufacturer, ManufacturerInput};
use crate::store::{Store, StoreResult};

/// In-process [`Store`]; used when no database is configured and in tests.
///
/// Each table hands out ids from its own sequence starting at 1, like a
/// BIGSERIAL column. Every call holds the lock for its whole duration.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Default)]
struct Tables {
    manufacturers: BTreeMap<DbId, Manufacturer>,
    gear: BTreeMap<DbId, GearEntry>,
    guitarists: BTreeMap<DbId, GuitaristEntry>,
    last_manufacturer_id: DbId,
    last_gear_id: DbId,
    last_guitarist_id: DbId,
}

/// Gear as stored: the brand is kept as an id and resolved on read.
#[derive(Clone)]
struct GearEntry {
    name: String,
    gear_type: String,
    weight_in_grams: i32,
    brand_id: Option<DbId>,
}

impl GearEntry {
    fn from_input(input: &GearInput) -> Self {
        Self {
            name: input.name.clone(),
            gear_type: input.gear_type.clone(),
            weight_in_grams: input.weight_in_grams,
            brand_id: input.brand_id(),
        }
    }
}

#[derive(Clone)]
struct GuitaristEntry {
    name: String,
    birth_place: String,
    birth_year: i32,
    genre: String,
    gear_ids: Vec<DbId>,
}

impl GuitaristEntry {
    fn from_input(input: &GuitaristInput) -> Self {
        Self {
            name: input.name.clone(),
            birth_place: input.birth_place.clone(),
            birth_year: input.birth_year,
            genre: input.genre.clone(),
            gear_ids: input.gear_ids(),
        }
    }
}

fn manufacturer_from_input(id: DbId, input: &ManufacturerInput) -> Manufacturer {
    Manufacturer {
        id,
        name: input.name.clone(),
        main_product_type: input.main_product_type.clone(),
        place_founded: input.place_founded.clone(),
        year_founded: input.year_founded,
    }
}

impl Tables {
    fn resolve_gear(&self, id: DbId, entry: &GearEntry) -> Gear {
        Gear {
            id,
            name: entry.name.clone(),
            gear_type: entry.gear_type.clone(),
            weight_in_grams: entry.weight_in_grams,
            brand: entry
                .brand_id
                .and_then(|brand_id| self.manufacturers.get(&brand_id).cloned()),
        }
    }

    fn gear_by_id(&self, id: DbId) -> Option<Gear> {
        self.gear.get(&id).map(|entry| self.resolve_gear(id, entry))
    }

    /// Ids whose gear row has since disappeared are skipped.
    fn resolve_guitarist(&self, id: DbId, entry: &GuitaristEntry) -> Guitarist {
        Guitarist {
            id,
            name: entry.name.clone(),
            birth_place: entry.birth_place.clone(),
            birth_year: entry.birth_year,
            genre: entry.genre.clone(),
            gear_list: entry
                .gear_ids
                .iter()
                .filter_map(|gear_id| self.gear_by_id(*gear_id))
                .collect(),
        }
    }

    fn guitarist_by_id(&self, id: DbId) -> Option<Guitarist> {
        self.guitarists
            .get(&id)
            .map(|entry| self.resolve_guitarist(id, entry))
    }

    fn guitarists_where(&self, pred: impl Fn(&GuitaristEntry) -> bool) -> Vec<Guitarist> {
        self.guitarists
            .iter()
            .filter(|(_, entry)| pred(entry))
            .map(|(id, entry)| self.resolve_guitarist(*id, entry))
            .collect()
    }

    fn gear_where(&self, pred: impl Fn(&GearEntry) -> bool) -> Vec<Gear> {
        self.gear
            .iter()
            .filter(|(_, entry)| pred(entry))
            .map(|(id, entry)| self.resolve_gear(*id, entry))
            .collect()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list_manufacturers(&self) -> StoreResult<Vec<Manufacturer>> {
        let tables = self.tables.read().await;
        Ok(tables.manufacturers.values().cloned().collect())
    }

    async fn find_manufacturer(&self, id: DbId) -> StoreResult<Option<Manufacturer>> {
        let tables = self.tables.read().await;
        Ok(tables.manufacturers.get(&id).cloned())
    }

    async fn find_manufacturer_by_name(&self, name: &str) -> StoreResult<Option<Manufacturer>> {
        let tables = self.tables.read().await;
        Ok(tables
            .manufacturers
            .values()
            .find(|m| m.name == name)
            .cloned())
    }

    async fn create_manufacturer(&self, input: &ManufacturerInput) -> StoreResult<Manufacturer> {
        let mut tables = self.tables.write().await;
        tables.last_manufacturer_id += 1;
        let manufacturer = manufacturer_from_input(tables.last_manufacturer_id, input);
        tables
            .manufacturers
            .insert(manufacturer.id, manufacturer.clone());
        Ok(manufacturer)
    }

    async fn update_manufacturer(
        &self,
        id: DbId,
        input: &ManufacturerInput,
    ) -> StoreResult<Option<Manufacturer>> {
        let mut tables = self.tables.write().await;
        Ok(tables.manufacturers.get_mut(&id).map(|stored| {
            *stored = manufacturer_from_input(id, input);
            stored.clone()
        }))
    }

    async fn delete_manufacturer(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables.manufacturers.remove(&id).is_some())
    }

    async fn manufacturer_has_gear(&self, id: DbId) -> StoreResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables.gear.values().any(|g| g.brand_id == Some(id)))
    }

    async fn list_gear(&self) -> StoreResult<Vec<Gear>> {
        let tables = self.tables.read().await;
        Ok(tables.gear_where(|_| true))
    }

    async fn find_gear(&self, id: DbId) -> StoreResult<Option<Gear>> {
        let tables = self.tables.read().await;
        Ok(tables.gear_by_id(id))
    }

    async fn find_gear_by_type(&self, gear_type: &str) -> StoreResult<Vec<Gear>> {
        let tables = self.tables.read().await;
        Ok(tables.gear_where(|g| g.gear_type == gear_type))
    }

    async fn create_gear(&self, input: &GearInput) -> StoreResult<Gear> {
        let mut tables = self.tables.write().await;
        tables.last_gear_id += 1;
        let id = tables.last_gear_id;
        let entry = GearEntry::from_input(input);
        let gear = tables.resolve_gear(id, &entry);
        tables.gear.insert(id, entry);
        Ok(gear)
    }

    async fn update_gear(&self, id: DbId, input: &GearInput) -> StoreResult<Option<Gear>> {
        let mut tables = self.tables.write().await;
        if !tables.gear.contains_key(&id) {
            return Ok(None);
        }
        tables.gear.insert(id, GearEntry::from_input(input));
        Ok(tables.gear_by_id(id))
    }

    async fn set_gear_brand(&self, id: DbId, brand_id: Option<DbId>) -> StoreResult<Option<Gear>> {
        let mut tables = self.tables.write().await;
        match tables.gear.get_mut(&id) {
            Some(entry) => entry.brand_id = brand_id,
            None => return Ok(None),
        }
        Ok(tables.gear_by_id(id))
    }

    async fn delete_gear(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables.gear.remove(&id).is_some())
    }

    async fn gear_is_owned(&self, id: DbId) -> StoreResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables
            .guitarists
            .values()
            .any(|g| g.gear_ids.contains(&id)))
    }

    async fn list_guitarists(&self) -> StoreResult<Vec<Guitarist>> {
        let tables = self.tables.read().await;
        Ok(tables.guitarists_where(|_| true))
    }

    async fn find_guitarist(&self, id: DbId) -> StoreResult<Option<Guitarist>> {
        let tables = self.tables.read().await;
        Ok(tables.guitarist_by_id(id))
    }

    async fn find_guitarist_by_name(&self, name: &str) -> StoreResult<Option<Guitarist>> {
        let tables = self.tables.read().await;
        Ok(tables.guitarists_where(|g| g.name == name).into_iter().next())
    }

    async fn find_guitarists_by_birth_year(&self, birth_year: i32) -> StoreResult<Vec<Guitarist>> {
        let tables = self.tables.read().await;
        Ok(tables.guitarists_where(|g| g.birth_year == birth_year))
    }

    async fn create_guitarist(&self, input: &GuitaristInput) -> StoreResult<Guitarist> {
        let mut tables = self.tables.write().await;
        tables.last_guitarist_id += 1;
        let id = tables.last_guitarist_id;
        let entry = GuitaristEntry::from_input(input);
        let guitarist = tables.resolve_guitarist(id, &entry);
        tables.guitarists.insert(id, entry);
        Ok(guitarist)
    }

    async fn update_guitarist(
        &self,
        id: DbId,
        input: &GuitaristInput,
    ) -> StoreResult<Option<Guitarist>> {
        let mut tables = self.tables.write().await;
        if !tables.guitarists.contains_key(&id) {
            return Ok(None);
        }
        tables.guitarists.insert(id, GuitaristEntry::from_input(input));
        Ok(tables.guitarist_by_id(id))
    }

    async fn set_guitarist_gear(
        &self,
        id: DbId,
        gear_ids: &[DbId],
    ) -> StoreResult<Option<Guitarist>> {
        let mut tables = self.tables.write().await;
        match tables.guitarists.get_mut(&id) {
            Some(entry) => entry.gear_ids = gear_ids.to_vec(),
            None => return Ok(None),
        }
        Ok(tables.guitarist_by_id(id))
    }

    async fn delete_guitarist(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables.guitarists.remove(&id).is_some())
    }
}
