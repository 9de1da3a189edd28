//! Database row types and DTOs.

pub mod location;
pub mod person;
