//! Genderize: guesses a gender from a first name.
//!
//! Not a [`PersonSource`](super::PersonSource) on its own; other workers
//! call it to fill in gender for APIs that only return names.

use census_core::gender::Gender;
use serde_json::Value;

use crate::error::WorkerError;
use crate::fetch::JsonFetcher;
use crate::shape;

pub const API: &str = "GenderizeApi";
pub const DEFAULT_URL: &str = "https://api.genderize.io/";

#[derive(Debug, Clone)]
pub struct GenderizeApi {
    url: String,
}

impl GenderizeApi {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The response must be an object with a `gender` key. Its value may be
    /// null when the name is unknown.
    pub fn validate_response(body: &Value) -> Result<Option<String>, WorkerError> {
        let obj = shape::object(API, body, "gender")?;
        shape::require_keys(API, obj, &["gender"])?;
        Ok(shape::optional_string(obj, "gender").map(str::to_string))
    }

    pub fn to_gender(gender: Option<&str>) -> Gender {
        Gender::from_api_value(gender)
    }

    /// Look up the gender for `first_name`. The name is sent lowercased.
    pub async fn lookup(
        &self,
        fetcher: &dyn JsonFetcher,
        first_name: &str,
    ) -> Result<Gender, WorkerError> {
        let params = [("name", first_name.to_lowercase())];
        let body = fetcher.get_json(API, &self.url, &params).await?;
        let gender = Self::validate_response(&body)?;
        Ok(Self::to_gender(gender.as_deref()))
    }
}

impl Default for GenderizeApi {
    fn default() -> Self {
        Self::new(DEFAULT_URL)
    }
}
