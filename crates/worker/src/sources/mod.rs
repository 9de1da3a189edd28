//! One worker per external API.
//!
//! Every worker follows the same three steps: fetch the JSON, check its
//! shape (`validate_response`), and map each entry to a [`PersonRecord`]
//! (`to_record`). The first two steps fail the whole worker; no records are
//! returned from a response that does not check out.

pub mod genderize;
pub mod json_placeholder;
pub mod random_user;
pub mod ui_names;

use async_trait::async_trait;

use crate::error::WorkerError;
use crate::fetch::JsonFetcher;
use crate::record::PersonRecord;

pub use genderize::GenderizeApi;
pub use json_placeholder::JsonPlaceholderApi;
pub use random_user::RandomUserApi;
pub use ui_names::UINamesApi;

/// A worker producing people from one external API.
#[async_trait]
pub trait PersonSource: Send + Sync {
    /// Display name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Fetch, check and map one batch of people.
    async fn collect(&self, fetcher: &dyn JsonFetcher) -> Result<Vec<PersonRecord>, WorkerError>;
}
