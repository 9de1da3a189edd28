use census_core::gender::Gender;
use census_core::location::LocationKey;

/// One person produced by a worker, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    pub gender: Gender,
    pub first_name: String,
    pub last_name: String,
    pub location: LocationKey,
}
