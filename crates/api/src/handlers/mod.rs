//! Request handlers.
//!
//! Handlers delegate to the repositories in `census_db` (and, for
//! `/location/`, the harvester in `census_worker`) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod census;
