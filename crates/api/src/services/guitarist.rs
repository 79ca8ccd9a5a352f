use std::sync::Arc;

use gg_core::error::CoreError;
use gg_core::filter::matches_slug;
use gg_core::types::DbId;
use gg_core::validation::parse_birth_year;
use gg_db::models::guitarist::{Guitarist, GuitaristInput};
use gg_db::store::Store;

use crate::error::{AppError, AppResult};
use crate::services::{not_found, require_gear, require_guitarist};

#[derive(Clone)]
pub struct GuitaristService {
    store: Arc<dyn Store>,
}

impl GuitaristService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// All guitarists, optionally narrowed by genre slug and/or exact birth
    /// year. A birth year that is not an integer is a validation error.
    pub async fn list_guitarists(
        &self,
        genre: Option<&str>,
        birth_year: Option<&str>,
    ) -> AppResult<Vec<Guitarist>> {
        tracing::debug!(?genre, ?birth_year, "Listing guitarists");
        let birth_year = birth_year.map(parse_birth_year).transpose()?;

        match (genre, birth_year) {
            (None, None) => Ok(self.store.list_guitarists().await?),
            (None, Some(year)) => Ok(self.store.find_guitarists_by_birth_year(year).await?),
            (Some(genre), year) => {
                let guitarists = self.store.list_guitarists().await?;
                Ok(guitarists
                    .into_iter()
                    .filter(|g| {
                        matches_slug(&g.genre, genre) && year.map_or(true, |y| g.birth_year == y)
                    })
                    .collect())
            }
        }
    }

    pub async fn get_guitarist(&self, id: DbId) -> AppResult<Guitarist> {
        require_guitarist(self.store.as_ref(), id).await
    }

    /// Exact, case-sensitive name lookup.
    pub async fn get_guitarist_by_name(&self, name: &str) -> AppResult<Guitarist> {
        self.store
            .find_guitarist_by_name(name)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::NotFoundByName {
                    entity: "Guitarist",
                    name: name.to_string(),
                })
            })
    }

    pub async fn create_guitarist(&self, input: &GuitaristInput) -> AppResult<Guitarist> {
        self.check_gear_list(input).await?;

        let guitarist = self.store.create_guitarist(input).await?;
        tracing::info!(
            guitarist_id = guitarist.id,
            name = %guitarist.name,
            gear_count = guitarist.gear_list.len(),
            "Guitarist created"
        );
        Ok(guitarist)
    }

    /// Replace every field of an existing guitarist, gear list included.
    pub async fn update_guitarist(&self, id: DbId, input: &GuitaristInput) -> AppResult<Guitarist> {
        require_guitarist(self.store.as_ref(), id).await?;
        self.check_gear_list(input).await?;

        let guitarist = self
            .store
            .update_guitarist(id, input)
            .await?
            .ok_or_else(|| not_found("Guitarist", id))?;
        tracing::info!(guitarist_id = id, "Guitarist updated");
        Ok(guitarist)
    }

    pub async fn delete_guitarist(&self, id: DbId) -> AppResult<()> {
        if !self.store.delete_guitarist(id).await? {
            return Err(not_found("Guitarist", id));
        }
        tracing::info!(guitarist_id = id, "Guitarist deleted");
        Ok(())
    }

    async fn check_gear_list(&self, input: &GuitaristInput) -> AppResult<()> {
        for gear_id in input.gear_ids() {
            require_gear(self.store.as_ref(), gear_id).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use gg_db::models::gear::GearInput;
    use gg_db::models::EntityRef;
    use gg_db::store::MemoryStore;

    use super::*;

    fn service() -> (GuitaristService, Arc<dyn Store>) {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
        (GuitaristService::new(Arc::clone(&store)), store)
    }

    fn guitarist(name: &str, genre: &str, birth_year: i32, gear_ids: &[DbId]) -> GuitaristInput {
        GuitaristInput {
            name: name.to_string(),
            birth_place: "Somewhere".to_string(),
            birth_year,
            genre: genre.to_string(),
            gear_list: gear_ids.iter().map(|id| EntityRef { id: *id }).collect(),
        }
    }

    async fn seed(svc: &GuitaristService) {
        for (name, genre, year) in [
            ("Eric", "Blues Rock", 1945),
            ("Jimi", "Blues Rock", 1942),
            ("Jeff", "Jazz Fusion", 1944),
            ("Stevie", "Texas Blues", 1954),
        ] {
            svc.create_guitarist(&guitarist(name, genre, year, &[]))
                .await
                .unwrap();
        }
    }

    fn names(guitarists: &[Guitarist]) -> Vec<&str> {
        guitarists.iter().map(|g| g.name.as_str()).collect()
    }

    #[tokio::test]
    async fn list_filters_by_genre_and_birth_year() {
        let (svc, _) = service();
        seed(&svc).await;

        let all = svc.list_guitarists(None, None).await.unwrap();
        assert_eq!(all.len(), 4);

        let blues_rock = svc.list_guitarists(Some("blues-rock"), None).await.unwrap();
        assert_eq!(names(&blues_rock), vec!["Eric", "Jimi"]);

        let born_1944 = svc.list_guitarists(None, Some("1944")).await.unwrap();
        assert_eq!(names(&born_1944), vec!["Jeff"]);

        let both = svc
            .list_guitarists(Some("Blues Rock"), Some("1942"))
            .await
            .unwrap();
        assert_eq!(names(&both), vec!["Jimi"]);

        let none = svc
            .list_guitarists(Some("jazz-fusion"), Some("1942"))
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn unparseable_birth_year_is_validation_error() {
        let (svc, _) = service();
        assert_matches!(
            svc.list_guitarists(None, Some("nineteen")).await,
            Err(AppError::Core(CoreError::Validation(_)))
        );
    }

    #[tokio::test]
    async fn lookup_by_id_and_exact_name() {
        let (svc, _) = service();
        let eric = svc
            .create_guitarist(&guitarist("Eric", "Blues", 1945, &[]))
            .await
            .unwrap();

        assert_eq!(svc.get_guitarist(eric.id).await.unwrap(), eric);
        assert_eq!(svc.get_guitarist_by_name("Eric").await.unwrap(), eric);
        assert_matches!(
            svc.get_guitarist_by_name("eric").await,
            Err(AppError::Core(CoreError::NotFoundByName { entity: "Guitarist", .. }))
        );
        assert_matches!(
            svc.get_guitarist(eric.id + 1).await,
            Err(AppError::Core(CoreError::NotFound { entity: "Guitarist", .. }))
        );
    }

    #[tokio::test]
    async fn create_rejects_unknown_gear() {
        let (svc, _) = service();
        let result = svc
            .create_guitarist(&guitarist("Eric", "Blues", 1945, &[5]))
            .await;
        assert_matches!(
            result,
            Err(AppError::Core(CoreError::NotFound { entity: "Gear", id: 5 }))
        );
        assert!(svc.list_guitarists(None, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_gear_list_and_keeps_id() {
        let (svc, store) = service();
        let strat = store
            .create_gear(&GearInput {
                name: "Strat".to_string(),
                gear_type: "Guitar".to_string(),
                weight_in_grams: 3500,
                brand: None,
            })
            .await
            .unwrap();
        let eric = svc
            .create_guitarist(&guitarist("Eric", "Blues", 1945, &[]))
            .await
            .unwrap();

        let updated = svc
            .update_guitarist(eric.id, &guitarist("Slowhand", "Blues", 1945, &[strat.id]))
            .await
            .unwrap();
        assert_eq!(updated.id, eric.id);
        assert_eq!(updated.name, "Slowhand");
        assert_eq!(updated.gear_list, vec![strat]);

        assert_matches!(
            svc.update_guitarist(eric.id + 1, &guitarist("Nobody", "Blues", 1945, &[]))
                .await,
            Err(AppError::Core(CoreError::NotFound { .. }))
        );
    }

    #[tokio::test]
    async fn delete_is_unconditional_then_not_found() {
        let (svc, store) = service();
        let strat = store
            .create_gear(&GearInput {
                name: "Strat".to_string(),
                gear_type: "Guitar".to_string(),
                weight_in_grams: 3500,
                brand: None,
            })
            .await
            .unwrap();
        let eric = svc
            .create_guitarist(&guitarist("Eric", "Blues", 1945, &[strat.id]))
            .await
            .unwrap();

        svc.delete_guitarist(eric.id).await.unwrap();
        assert!(!store.gear_is_owned(strat.id).await.unwrap());
        assert_matches!(
            svc.delete_guitarist(eric.id).await,
            Err(AppError::Core(CoreError::NotFound { .. }))
        );
    }
}
