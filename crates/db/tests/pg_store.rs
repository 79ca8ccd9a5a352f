//! Integration tests for the PostgreSQL store.
//!
//! Exercises the repositories through [`PgStore`] against a real database.
//! Each test gets a fresh database from `DATABASE_URL` with the migrations
//! applied.

use gg_db::models::gear::GearInput;
use gg_db::models::guitarist::GuitaristInput;
use gg_db::models::manufacturer::ManufacturerInput;
use gg_db::models::EntityRef;
use gg_db::store::{PgStore, Store};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_manufacturer(name: &str) -> ManufacturerInput {
    ManufacturerInput {
        name: name.to_string(),
        main_product_type: "Guitar".to_string(),
        place_founded: "Fullerton".to_string(),
        year_founded: 1946,
    }
}

fn new_gear(name: &str, gear_type: &str, brand_id: Option<i64>) -> GearInput {
    GearInput {
        name: name.to_string(),
        gear_type: gear_type.to_string(),
        weight_in_grams: 3500,
        brand: brand_id.map(|id| EntityRef { id }),
    }
}

fn new_guitarist(name: &str, birth_year: i32, gear_ids: &[i64]) -> GuitaristInput {
    GuitaristInput {
        name: name.to_string(),
        birth_place: "London".to_string(),
        birth_year,
        genre: "Blues Rock".to_string(),
        gear_list: gear_ids.iter().map(|id| EntityRef { id: *id }).collect(),
    }
}

// ---------------------------------------------------------------------------
// Manufacturers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn manufacturer_crud_round_trip(pool: PgPool) {
    let store = PgStore::new(pool);

    let created = store
        .create_manufacturer(&new_manufacturer("Fender"))
        .await
        .unwrap();
    assert_eq!(created.name, "Fender");

    let found = store.find_manufacturer(created.id).await.unwrap();
    assert_eq!(found.as_ref(), Some(&created));

    let by_name = store.find_manufacturer_by_name("Fender").await.unwrap();
    assert_eq!(by_name.map(|m| m.id), Some(created.id));

    let updated = store
        .update_manufacturer(created.id, &new_manufacturer("Gibson"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Gibson");

    assert!(store.delete_manufacturer(created.id).await.unwrap());
    assert!(store.find_manufacturer(created.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_manufacturer_returns_none(pool: PgPool) {
    let store = PgStore::new(pool);
    let result = store
        .update_manufacturer(999_999, &new_manufacturer("Nobody"))
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Gear
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn gear_is_returned_with_resolved_brand(pool: PgPool) {
    let store = PgStore::new(pool);
    let fender = store
        .create_manufacturer(&new_manufacturer("Fender"))
        .await
        .unwrap();

    let strat = store
        .create_gear(&new_gear("Stratocaster", "Guitar", Some(fender.id)))
        .await
        .unwrap();
    assert_eq!(strat.brand.as_ref(), Some(&fender));

    let listed = store.list_gear().await.unwrap();
    assert_eq!(listed, vec![strat.clone()]);

    assert!(store.manufacturer_has_gear(fender.id).await.unwrap());

    let cleared = store.set_gear_brand(strat.id, None).await.unwrap().unwrap();
    assert!(cleared.brand.is_none());
    assert!(!store.manufacturer_has_gear(fender.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_ascii_type_is_stored_verbatim(pool: PgPool) {
    let store = PgStore::new(pool);
    let created = store
        .create_gear(&new_gear("Tricone", "RÉSONATEUR", None))
        .await
        .unwrap();

    let listed = store.list_gear().await.unwrap();
    assert_eq!(listed, vec![created.clone()]);
    assert_eq!(listed[0].gear_type, "RÉSONATEUR");

    assert_eq!(store.find_gear_by_type("RÉSONATEUR").await.unwrap(), vec![created]);
    assert!(store.find_gear_by_type("résonateur").await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn negative_weight_violates_check_constraint(pool: PgPool) {
    let store = PgStore::new(pool);
    let mut input = new_gear("Ghost", "Guitar", None);
    input.weight_in_grams = -1;
    assert!(store.create_gear(&input).await.is_err());
}

// ---------------------------------------------------------------------------
// Guitarists and the join table
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn gear_list_round_trips_in_order(pool: PgPool) {
    let store = PgStore::new(pool);
    let a = store.create_gear(&new_gear("A", "Guitar", None)).await.unwrap();
    let b = store.create_gear(&new_gear("B", "Amp", None)).await.unwrap();

    let eric = store
        .create_guitarist(&new_guitarist("Eric", 1945, &[b.id, a.id, b.id]))
        .await
        .unwrap();
    assert_eq!(eric.gear_ids(), vec![b.id, a.id, b.id]);

    let replaced = store
        .set_guitarist_gear(eric.id, &[a.id])
        .await
        .unwrap()
        .unwrap();
    assert_eq!(replaced.gear_ids(), vec![a.id]);

    assert!(store.gear_is_owned(a.id).await.unwrap());
    assert!(!store.gear_is_owned(b.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn birth_year_and_name_lookups(pool: PgPool) {
    let store = PgStore::new(pool);
    store
        .create_guitarist(&new_guitarist("Eric", 1945, &[]))
        .await
        .unwrap();
    store
        .create_guitarist(&new_guitarist("Jimi", 1942, &[]))
        .await
        .unwrap();

    let born_1942 = store.find_guitarists_by_birth_year(1942).await.unwrap();
    assert_eq!(born_1942.len(), 1);
    assert_eq!(born_1942[0].name, "Jimi");

    assert!(store.find_guitarist_by_name("Eric").await.unwrap().is_some());
    assert!(store.find_guitarist_by_name("eric").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_guitarist_releases_gear(pool: PgPool) {
    let store = PgStore::new(pool);
    let a = store.create_gear(&new_gear("A", "Guitar", None)).await.unwrap();
    let eric = store
        .create_guitarist(&new_guitarist("Eric", 1945, &[a.id]))
        .await
        .unwrap();

    assert!(store.delete_guitarist(eric.id).await.unwrap());
    assert!(!store.gear_is_owned(a.id).await.unwrap());
    assert!(store.delete_gear(a.id).await.unwrap());
}
