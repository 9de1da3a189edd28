//! JsonPlaceholder: `[{"name": "First Last", "address": {"city"}}]`.
//!
//! The API carries no gender, so each user costs one extra Genderize
//! request keyed on the first name.

use async_trait::async_trait;
use census_core::gender::Gender;
use census_core::location::LocationKey;
use serde_json::Value;

use super::{GenderizeApi, PersonSource};
use crate::error::WorkerError;
use crate::fetch::JsonFetcher;
use crate::record::PersonRecord;
use crate::shape;

pub const API: &str = "JsonPlaceholderApi";
pub const DEFAULT_URL: &str = "http://jsonplaceholder.typicode.com/users";

const NAME_PARTS: &str = "first_name or last_name";

/// A validated user, before its gender is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderUser {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
}

#[derive(Debug, Clone)]
pub struct JsonPlaceholderApi {
    url: String,
    genderize: GenderizeApi,
}

impl JsonPlaceholderApi {
    pub fn new(url: impl Into<String>, genderize: GenderizeApi) -> Self {
        Self {
            url: url.into(),
            genderize,
        }
    }

    /// Check every user and pull out the name parts and city.
    pub fn validate_response(body: &Value) -> Result<Vec<PlaceholderUser>, WorkerError> {
        let users = shape::list(API, body, "list of users")?;
        users.iter().map(Self::validate_user).collect()
    }

    fn validate_user(user: &Value) -> Result<PlaceholderUser, WorkerError> {
        let user = shape::object(API, user, "address, name")?;
        shape::require_keys(API, user, &["address", "name"])?;

        let address = shape::object(API, &user["address"], "city")?;
        let city = shape::filled_string(API, address, "city")?;

        let full_name = shape::string(API, user, "name")
            .map_err(|_| WorkerError::invalid(API, NAME_PARTS))?;
        let (first_name, last_name) =
            split_name(&full_name).ok_or_else(|| WorkerError::invalid(API, NAME_PARTS))?;

        Ok(PlaceholderUser {
            first_name: shape::within_limit(API, "first_name", first_name)?,
            last_name: shape::within_limit(API, "last_name", last_name)?,
            city,
        })
    }

    pub fn to_record(user: PlaceholderUser, gender: Gender) -> PersonRecord {
        PersonRecord {
            gender,
            first_name: user.first_name,
            last_name: user.last_name,
            location: LocationKey::City(user.city),
        }
    }
}

/// First and second single-space-separated parts of a full name.
///
/// `"Mrs. Dennis Schulist"` gives `("Mrs.", "Dennis")`. Names with fewer
/// than two parts give `None`.
fn split_name(full_name: &str) -> Option<(String, String)> {
    let mut parts = full_name.split(' ');
    let first = parts.next()?;
    let last = parts.next()?;
    Some((first.to_string(), last.to_string()))
}

impl Default for JsonPlaceholderApi {
    fn default() -> Self {
        Self::new(DEFAULT_URL, GenderizeApi::default())
    }
}

#[async_trait]
impl PersonSource for JsonPlaceholderApi {
    fn name(&self) -> &'static str {
        API
    }

    async fn collect(&self, fetcher: &dyn JsonFetcher) -> Result<Vec<PersonRecord>, WorkerError> {
        let body = fetcher.get_json(API, &self.url, &[]).await?;
        let users = Self::validate_response(&body)?;

        let mut records = Vec::with_capacity(users.len());
        for user in users {
            let gender = self.genderize.lookup(fetcher, &user.first_name).await?;
            records.push(Self::to_record(user, gender));
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::StaticFetcher;
    use assert_matches::assert_matches;
    use serde_json::json;

    const URL: &str = "http://placeholder.test/users";
    const GENDERIZE_URL: &str = "http://genderize.test/";

    fn api() -> JsonPlaceholderApi {
        JsonPlaceholderApi::new(URL, GenderizeApi::new(GENDERIZE_URL))
    }

    fn detail(err: WorkerError) -> String {
        match err {
            WorkerError::InvalidResponse { detail, .. } => detail,
            other => panic!("expected InvalidResponse, got {other:?}"),
        }
    }

    #[test]
    fn split_name_takes_first_two_parts() {
        assert_eq!(
            split_name("Leanne Graham"),
            Some(("Leanne".to_string(), "Graham".to_string()))
        );
        assert_eq!(
            split_name("Mrs. Dennis Schulist"),
            Some(("Mrs.".to_string(), "Dennis".to_string()))
        );
        assert_eq!(split_name("Cher"), None);
    }

    #[test]
    fn validate_extracts_user() {
        let users = JsonPlaceholderApi::validate_response(&json!([{
            "id": 1,
            "name": "Test Testov",
            "address": {"street": "Kulas Light", "city": "Gwenborough"}
        }]))
        .unwrap();

        assert_eq!(
            users,
            vec![PlaceholderUser {
                first_name: "Test".into(),
                last_name: "Testov".into(),
                city: "Gwenborough".into(),
            }]
        );
    }

    #[test]
    fn validate_reports_missing_keys() {
        let err = JsonPlaceholderApi::validate_response(&json!([{"id": 1}])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Wrong form data in response JsonPlaceholderApi, address, name not found"
        );
    }

    #[test]
    fn validate_requires_city() {
        let body = json!([{"name": "A B", "address": {"street": "x"}}]);
        assert_eq!(detail(JsonPlaceholderApi::validate_response(&body).unwrap_err()), "city");
    }

    #[test]
    fn validate_requires_two_name_parts() {
        let body = json!([{"name": "Single", "address": {"city": "X"}}]);
        assert_eq!(
            detail(JsonPlaceholderApi::validate_response(&body).unwrap_err()),
            "first_name or last_name"
        );
    }

    #[test]
    fn validate_rejects_over_long_name_part() {
        let body = json!([{"name": format!("Leanne {}", "g".repeat(251)), "address": {"city": "X"}}]);
        assert_eq!(
            detail(JsonPlaceholderApi::validate_response(&body).unwrap_err()),
            "last_name of at most 250 characters"
        );
    }

    #[test]
    fn validate_rejects_over_long_city() {
        let body = json!([{"name": "Leanne Graham", "address": {"city": "c".repeat(251)}}]);
        assert_eq!(
            detail(JsonPlaceholderApi::validate_response(&body).unwrap_err()),
            "city of at most 250 characters"
        );
    }

    #[test]
    fn to_record_files_under_city() {
        let user = PlaceholderUser {
            first_name: "Leanne".into(),
            last_name: "Graham".into(),
            city: "Gwenborough".into(),
        };
        let record = JsonPlaceholderApi::to_record(user, Gender::Female);
        assert_eq!(record.location, LocationKey::City("Gwenborough".into()));
        assert_eq!(record.gender, Gender::Female);
    }

    #[tokio::test]
    async fn collect_looks_up_gender_per_user() {
        let fetcher = StaticFetcher::new()
            .with_json(
                URL,
                json!([
                    {"name": "Leanne Graham", "address": {"city": "Gwenborough"}},
                    {"name": "Ervin Howell", "address": {"city": "Wisokyburgh"}}
                ]),
            )
            .with_json(GENDERIZE_URL, json!({"name": "x", "gender": "male"}));

        let records = api().collect(&fetcher).await.unwrap();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.gender == Gender::Male));
        assert_eq!(fetcher.call_count(GENDERIZE_URL), 2);
        assert_eq!(
            fetcher.calls(),
            vec![
                URL.to_string(),
                format!("{GENDERIZE_URL}?name=leanne"),
                format!("{GENDERIZE_URL}?name=ervin"),
            ]
        );
    }

    #[tokio::test]
    async fn collect_fails_when_genderize_fails() {
        let fetcher = StaticFetcher::new()
            .with_json(URL, json!([{"name": "Leanne Graham", "address": {"city": "X"}}]))
            .with_status(GENDERIZE_URL, 429, "Request limit reached");

        let err = api().collect(&fetcher).await.unwrap_err();

        assert_matches!(err, WorkerError::Upstream { api: "GenderizeApi", status: 429, .. });
    }

    #[tokio::test]
    async fn collect_skips_genderize_for_invalid_response() {
        let fetcher = StaticFetcher::new().with_json(URL, json!([{"name": "Solo"}]));

        let result = api().collect(&fetcher).await;

        assert_matches!(result, Err(WorkerError::InvalidResponse { .. }));
        assert_eq!(fetcher.call_count(GENDERIZE_URL), 0);
    }
}
