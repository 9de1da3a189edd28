//! Integration tests for the location and person repositories.
//!
//! Exercises the repository layer against a real database:
//! - get-or-create by city and by region
//! - cascade delete from location to persons
//! - gender aggregates for the two endpoint shapes

use census_core::breakdown::group_by_gender;
use census_core::gender::Gender;
use census_core::location::LocationKey;
use census_db::models::person::CreatePerson;
use census_db::repositories::{LocationRepo, PersonRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_person(location_id: i64, gender: Gender, first: &str) -> CreatePerson {
    CreatePerson {
        gender,
        first_name: first.to_string(),
        last_name: "Tester".to_string(),
        location_id,
    }
}

async fn seed(pool: &PgPool, key: LocationKey, genders: &[Gender]) -> i64 {
    let location = LocationRepo::get_or_create(pool, &key).await.unwrap();
    for (i, gender) in genders.iter().enumerate() {
        PersonRepo::create(pool, &new_person(location.id, *gender, &format!("P{i}")))
            .await
            .unwrap();
    }
    location.id
}

// ---------------------------------------------------------------------------
// Get-or-create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_or_create_city_reuses_existing_row(pool: PgPool) {
    let key = LocationKey::City("Lviv".into());
    let first = LocationRepo::get_or_create(&pool, &key).await.unwrap();
    let second = LocationRepo::get_or_create(&pool, &key).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first.city.as_deref(), Some("Lviv"));
    assert_eq!(first.region, None);
    assert_eq!(LocationRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_or_create_existing_row_is_not_touched(pool: PgPool) {
    let key = LocationKey::City("Ternopil".into());
    let created = LocationRepo::get_or_create(&pool, &key).await.unwrap();
    let found = LocationRepo::get_or_create(&pool, &key).await.unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.updated_at, created.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_writes_in_rolled_back_transaction_are_discarded(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let location = LocationRepo::get_or_create(&mut *tx, &LocationKey::City("Rivne".into()))
        .await
        .unwrap();
    PersonRepo::create(&mut *tx, &new_person(location.id, Gender::Male, "Roman"))
        .await
        .unwrap();
    tx.rollback().await.unwrap();

    assert_eq!(PersonRepo::count(&pool).await.unwrap(), 0);
    assert!(LocationRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_or_create_region_leaves_city_null(pool: PgPool) {
    let location = LocationRepo::get_or_create(&pool, &LocationKey::Region("Wales".into()))
        .await
        .unwrap();

    assert_eq!(location.city, None);
    assert_eq!(location.region.as_deref(), Some("Wales"));
    assert_eq!(location.label().as_deref(), Some("Wales"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_same_name_as_city_and_region_are_distinct_rows(pool: PgPool) {
    let city = LocationRepo::get_or_create(&pool, &LocationKey::City("Georgia".into()))
        .await
        .unwrap();
    let region = LocationRepo::get_or_create(&pool, &LocationKey::Region("Georgia".into()))
        .await
        .unwrap();

    assert_ne!(city.id, region.id);
}

// ---------------------------------------------------------------------------
// Persons and cascade
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_person_stores_gender_code(pool: PgPool) {
    let location = LocationRepo::get_or_create(&pool, &LocationKey::City("Kyiv".into()))
        .await
        .unwrap();
    let person = PersonRepo::create(&pool, &new_person(location.id, Gender::Female, "Olena"))
        .await
        .unwrap();

    assert_eq!(person.gender, "F");
    assert_eq!(person.first_name, "Olena");
    assert_eq!(person.location_id, location.id);

    let found = PersonRepo::find_by_id(&pool, person.id).await.unwrap();
    assert!(found.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_person_with_unknown_location_fails(pool: PgPool) {
    let result = PersonRepo::create(&pool, &new_person(999_999, Gender::Male, "Ghost")).await;
    assert!(result.is_err(), "foreign key violation expected");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_location_cascades_to_persons(pool: PgPool) {
    let kept = seed(&pool, LocationKey::City("Odesa".into()), &[Gender::Male]).await;
    let removed = seed(
        &pool,
        LocationKey::City("Kharkiv".into()),
        &[Gender::Male, Gender::Female],
    )
    .await;
    assert_eq!(PersonRepo::count(&pool).await.unwrap(), 3);

    assert!(LocationRepo::delete(&pool, removed).await.unwrap());

    assert_eq!(PersonRepo::count(&pool).await.unwrap(), 1);
    assert!(PersonRepo::list_by_location(&pool, removed)
        .await
        .unwrap()
        .is_empty());
    assert_eq!(
        PersonRepo::list_by_location(&pool, kept).await.unwrap().len(),
        1
    );
    assert!(LocationRepo::find_by_id(&pool, removed).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_gender_counts_by_location(pool: PgPool) {
    seed(
        &pool,
        LocationKey::City("Kyiv".into()),
        &[Gender::Male, Gender::Male, Gender::Female],
    )
    .await;
    seed(&pool, LocationKey::Region("Wales".into()), &[Gender::Female]).await;
    seed(&pool, LocationKey::City("Empty".into()), &[]).await;

    let rows = LocationRepo::gender_counts_by_location(&pool).await.unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].label().as_deref(), Some("Kyiv"));
    assert_eq!((rows[0].male, rows[0].female, rows[0].total), (2, 1, 3));
    assert_eq!(rows[1].label().as_deref(), Some("Wales"));
    assert_eq!((rows[1].male, rows[1].female, rows[1].total), (0, 1, 1));
    assert_eq!(rows[2].label().as_deref(), Some("Empty"));
    assert_eq!(rows[2].total, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_location_counts_by_gender_groups(pool: PgPool) {
    seed(
        &pool,
        LocationKey::City("Kyiv".into()),
        &[Gender::Male, Gender::Female, Gender::Female],
    )
    .await;
    seed(&pool, LocationKey::City("Lviv".into()), &[Gender::Male]).await;
    seed(&pool, LocationKey::City("Empty".into()), &[]).await;

    let rows = LocationRepo::location_counts_by_gender(&pool).await.unwrap();
    assert_eq!(rows.len(), 3, "one row per non-empty (location, gender)");

    let groups = group_by_gender(rows.into_iter().map(|r| r.into_tally()));

    assert_eq!(groups[0].gender, Gender::Male);
    assert_eq!(groups[0].total, 2);
    let male_locations: Vec<_> = groups[0]
        .locations
        .iter()
        .map(|t| (t.location.as_deref().unwrap(), t.gender_count))
        .collect();
    assert_eq!(male_locations, vec![("Kyiv", 1), ("Lviv", 1)]);

    assert_eq!(groups[1].gender, Gender::Female);
    assert_eq!(groups[1].total, 2);
    assert_eq!(groups[1].locations.len(), 1);
    assert_eq!(groups[1].locations[0].gender_count, 2);
}
