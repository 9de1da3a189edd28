//! Location model and aggregate count rows.

use census_core::breakdown::{GenderCount, LocationTally};
use census_core::gender::Gender;
use census_core::location::location_label;
use census_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Location {
    pub id: DbId,
    pub city: Option<String>,
    pub region: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Location {
    pub fn label(&self) -> Option<String> {
        location_label(self.city.as_deref(), self.region.as_deref())
    }
}

/// Per-location person counts split by gender.
///
/// Produced by `LocationRepo::gender_counts_by_location`; locations with no
/// persons appear with all counts at zero.
#[derive(Debug, Clone, FromRow)]
pub struct LocationGenderCounts {
    pub id: DbId,
    pub city: Option<String>,
    pub region: Option<String>,
    pub male: i64,
    pub female: i64,
    pub total: i64,
}

impl LocationGenderCounts {
    pub fn label(&self) -> Option<String> {
        location_label(self.city.as_deref(), self.region.as_deref())
    }

    pub fn counts(&self) -> GenderCount {
        GenderCount {
            male: self.male,
            female: self.female,
            total: self.total,
        }
    }
}

/// Person count for one (location, gender) pair.
#[derive(Debug, Clone, FromRow)]
pub struct GenderLocationCount {
    pub location_id: DbId,
    pub city: Option<String>,
    pub region: Option<String>,
    pub gender: String,
    pub gender_count: i64,
}

impl GenderLocationCount {
    /// Split into the gender and the labelled tally used by
    /// [`census_core::breakdown::group_by_gender`].
    pub fn into_tally(self) -> (Option<Gender>, LocationTally) {
        let gender = self.gender.parse::<Gender>().ok();
        let tally = LocationTally {
            location: location_label(self.city.as_deref(), self.region.as_deref()),
            gender_count: self.gender_count,
        };
        (gender, tally)
    }
}
