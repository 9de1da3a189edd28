//! Census domain types and pure logic.
//!
//! Nothing in this crate touches the database or the network; the `db`,
//! `worker` and `api` crates build on these types.

pub mod breakdown;
pub mod error;
pub mod gender;
pub mod location;
pub mod types;
