//! UINames: `[{"name", "surname", "gender", "region"}]`.

use async_trait::async_trait;
use census_core::gender::Gender;
use census_core::location::LocationKey;
use serde_json::Value;

use super::PersonSource;
use crate::error::WorkerError;
use crate::fetch::JsonFetcher;
use crate::record::PersonRecord;
use crate::shape;

pub const API: &str = "UINamesApi";
pub const DEFAULT_URL: &str = "https://uinames.com/api/";
pub const DEFAULT_AMOUNT: u32 = 10;

const REQUIRED: [&str; 4] = ["gender", "name", "surname", "region"];

#[derive(Debug, Clone)]
pub struct UINamesApi {
    url: String,
    amount: u32,
}

impl UINamesApi {
    pub fn new(url: impl Into<String>, amount: u32) -> Self {
        Self {
            url: url.into(),
            amount,
        }
    }

    /// Check every entry, returning the list.
    pub fn validate_response(body: &Value) -> Result<&[Value], WorkerError> {
        let users = shape::list(API, body, "list of names")?;
        for user in users {
            Self::to_record(user)?;
        }
        Ok(users)
    }

    /// Map one entry to a record filed under its region.
    pub fn to_record(user: &Value) -> Result<PersonRecord, WorkerError> {
        let user = shape::object(API, user, &REQUIRED.join(", "))?;
        shape::require_keys(API, user, &REQUIRED)?;
        Ok(PersonRecord {
            gender: Gender::from_api_value(shape::optional_string(user, "gender")),
            first_name: shape::bounded_string(API, user, "name")?,
            last_name: shape::bounded_string(API, user, "surname")?,
            location: LocationKey::Region(shape::bounded_string(API, user, "region")?),
        })
    }
}

impl Default for UINamesApi {
    fn default() -> Self {
        Self::new(DEFAULT_URL, DEFAULT_AMOUNT)
    }
}

#[async_trait]
impl PersonSource for UINamesApi {
    fn name(&self) -> &'static str {
        API
    }

    async fn collect(&self, fetcher: &dyn JsonFetcher) -> Result<Vec<PersonRecord>, WorkerError> {
        let params = [("amount", self.amount.to_string())];
        let body = fetcher.get_json(API, &self.url, &params).await?;
        let users = Self::validate_response(&body)?;
        users.iter().map(Self::to_record).collect()
    }
}
