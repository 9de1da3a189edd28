//! Repository for the `persons` table.

use census_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::person::{CreatePerson, Person};

const COLUMNS: &str = "id, gender, first_name, last_name, location_id, created_at, updated_at";

/// Provides create and read operations for persons.
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a new person, returning the created row.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreatePerson,
    ) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO persons (gender, first_name, last_name, location_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(input.gender.code())
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.location_id)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM persons WHERE id = $1");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List persons filed under a location, oldest first.
    pub async fn list_by_location(
        pool: &PgPool,
        location_id: DbId,
    ) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM persons WHERE location_id = $1 ORDER BY id");
        sqlx::query_as::<_, Person>(&query)
            .bind(location_id)
            .fetch_all(pool)
            .await
    }

    /// Total number of persons.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM persons")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
