//! Person model and DTOs.

use census_core::gender::Gender;
use census_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `persons` table. `gender` holds the code `M` or `F`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub gender: String,
    pub first_name: String,
    pub last_name: String,
    pub location_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a person under an existing location.
#[derive(Debug, Clone)]
pub struct CreatePerson {
    pub gender: Gender,
    pub first_name: String,
    pub last_name: String,
    pub location_id: DbId,
}
