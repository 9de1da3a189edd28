//! Gender × location breakdowns.
//!
//! The database returns flat count rows; this module folds them into the
//! per-gender groups served by the `/gender/` endpoint.

use serde::Serialize;

use crate::gender::Gender;

/// Male / female / total person counts for one location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenderCount {
    pub male: i64,
    pub female: i64,
    pub total: i64,
}

/// Number of persons of one gender at one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationTally {
    pub location: Option<String>,
    pub gender_count: i64,
}

/// All locations for one gender, with the sum of their counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderGroup {
    pub gender: Gender,
    pub locations: Vec<LocationTally>,
    pub total: i64,
}

impl GenderGroup {
    fn empty(gender: Gender) -> Self {
        Self {
            gender,
            locations: Vec::new(),
            total: 0,
        }
    }
}

/// Fold `(gender, tally)` rows into one group per gender.
///
/// Always returns two groups, male first. Tallies keep their input order
/// within a group. Rows without a gender (a location with no persons) are
/// skipped.
pub fn group_by_gender<I>(rows: I) -> Vec<GenderGroup>
where
    I: IntoIterator<Item = (Option<Gender>, LocationTally)>,
{
    let mut groups: Vec<GenderGroup> = Gender::ALL
        .iter()
        .copied()
        .map(GenderGroup::empty)
        .collect();

    for (gender, tally) in rows {
        let Some(gender) = gender else { continue };
        if let Some(group) = groups.iter_mut().find(|g| g.gender == gender) {
            group.total += tally.gender_count;
            group.locations.push(tally);
        }
    }

    groups
}
