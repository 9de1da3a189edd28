//! Workers that pull sample people from public name/gender APIs.
//!
//! Each worker fetches one API's JSON, checks it has the expected shape,
//! and maps it to [`record::PersonRecord`]s. The [`harvester::Harvester`]
//! runs a list of workers in order and persists what they produce.

pub mod config;
pub mod error;
pub mod fetch;
pub mod harvester;
pub mod record;
mod shape;
pub mod sources;
