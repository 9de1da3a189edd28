//! RandomUser: `{"results": [{"gender", "name": {"first", "last"}, "location": {"city"}}]}`.

use async_trait::async_trait;
use census_core::gender::Gender;
use census_core::location::LocationKey;
use serde_json::Value;

use super::PersonSource;
use crate::error::WorkerError;
use crate::fetch::JsonFetcher;
use crate::record::PersonRecord;
use crate::shape;

pub const API: &str = "RandomUserApi";
pub const DEFAULT_URL: &str = "https://randomuser.me/api/";
pub const DEFAULT_RESULTS: u32 = 5;

#[derive(Debug, Clone)]
pub struct RandomUserApi {
    url: String,
    results: u32,
}

impl RandomUserApi {
    pub fn new(url: impl Into<String>, results: u32) -> Self {
        Self {
            url: url.into(),
            results,
        }
    }

    /// Check the envelope and every user in it, returning the user list.
    pub fn validate_response(body: &Value) -> Result<&[Value], WorkerError> {
        let envelope = shape::object(API, body, "results")?;
        shape::require_keys(API, envelope, &["results"])?;
        let users = shape::list(API, &envelope["results"], "results")?;

        for user in users {
            Self::to_record(user)?;
        }

        Ok(users)
    }

    /// Map one user to a record filed under its city.
    ///
    /// Checks the same shape as [`RandomUserApi::validate_response`], so it
    /// is safe to call on unvalidated input.
    pub fn to_record(user: &Value) -> Result<PersonRecord, WorkerError> {
        let user = shape::object(API, user, "gender, location, name")?;
        shape::require_keys(API, user, &["gender", "location", "name"])?;

        let location = shape::object(API, shape::field(user, "location"), "city")?;
        let city = shape::filled_string(API, location, "city")?;

        let name = shape::object(API, shape::field(user, "name"), "first, last")?;
        shape::require_keys(API, name, &["first", "last"])?;

        Ok(PersonRecord {
            gender: Gender::from_api_value(shape::optional_string(user, "gender")),
            first_name: shape::bounded_string(API, name, "first")?,
            last_name: shape::bounded_string(API, name, "last")?,
            location: LocationKey::City(city),
        })
    }
}

impl Default for RandomUserApi {
    fn default() -> Self {
        Self::new(DEFAULT_URL, DEFAULT_RESULTS)
    }
}

#[async_trait]
impl PersonSource for RandomUserApi {
    fn name(&self) -> &'static str {
        API
    }

    async fn collect(&self, fetcher: &dyn JsonFetcher) -> Result<Vec<PersonRecord>, WorkerError> {
        let params = [("results", self.results.to_string())];
        let body = fetcher.get_json(API, &self.url, &params).await?;
        let users = Self::validate_response(&body)?;
        users.iter().map(Self::to_record).collect()
    }
}
