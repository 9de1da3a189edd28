//! Repository for the `locations` table and the gender aggregates over it.

use census_core::location::LocationKey;
use census_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::location::{GenderLocationCount, Location, LocationGenderCounts};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, city, region, created_at, updated_at";

/// Provides lookups, get-or-create and aggregate queries for locations.
pub struct LocationRepo;

impl LocationRepo {
    /// Return the location matching `key`, inserting it first if absent.
    ///
    /// Matches on the keyed column only; a newly created row leaves the
    /// other column NULL. An existing row is returned untouched.
    pub async fn get_or_create<'e>(
        executor: impl PgExecutor<'e>,
        key: &LocationKey,
    ) -> Result<Location, sqlx::Error> {
        let column = key.column();
        let query = format!(
            "WITH inserted AS ( \
                 INSERT INTO locations ({column}) VALUES ($1) \
                 ON CONFLICT ({column}) DO NOTHING \
                 RETURNING {COLUMNS} \
             ) \
             SELECT {COLUMNS} FROM inserted \
             UNION ALL \
             SELECT {COLUMNS} FROM locations WHERE {column} = $1 \
             LIMIT 1"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(key.value())
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE id = $1");
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all locations ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations ORDER BY id");
        sqlx::query_as::<_, Location>(&query).fetch_all(pool).await
    }

    /// Delete a location and, via cascade, every person filed under it.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Male, female and total person counts for every location, ordered by id.
    pub async fn gender_counts_by_location(
        pool: &PgPool,
    ) -> Result<Vec<LocationGenderCounts>, sqlx::Error> {
        sqlx::query_as::<_, LocationGenderCounts>(
            "SELECT l.id, l.city, l.region,
                    COUNT(p.id) FILTER (WHERE p.gender = 'M') AS male,
                    COUNT(p.id) FILTER (WHERE p.gender = 'F') AS female,
                    COUNT(p.id) AS total
             FROM locations l
             LEFT JOIN persons p ON p.location_id = l.id
             GROUP BY l.id
             ORDER BY l.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Person counts per (location, gender) pair, ordered by location id.
    ///
    /// Locations without persons produce no rows.
    pub async fn location_counts_by_gender(
        pool: &PgPool,
    ) -> Result<Vec<GenderLocationCount>, sqlx::Error> {
        sqlx::query_as::<_, GenderLocationCount>(
            "SELECT l.id AS location_id, l.city, l.region, p.gender,
                    COUNT(p.id) AS gender_count
             FROM locations l
             JOIN persons p ON p.location_id = l.id
             GROUP BY l.id, p.gender
             ORDER BY l.id, p.gender DESC",
        )
        .fetch_all(pool)
        .await
    }
}
