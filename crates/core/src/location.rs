//! Location keys and display labels.

use std::fmt;

/// Which unique location column a person is filed under.
///
/// Workers that know a city file people by [`LocationKey::City`]; workers
/// that only know a region use [`LocationKey::Region`]. The other column is
/// left NULL when a new location row is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocationKey {
    City(String),
    Region(String),
}

impl LocationKey {
    /// Name of the `locations` column the key matches on.
    pub fn column(&self) -> &'static str {
        match self {
            LocationKey::City(_) => "city",
            LocationKey::Region(_) => "region",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            LocationKey::City(v) | LocationKey::Region(v) => v,
        }
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.column(), self.value())
    }
}

/// Label a location for output: the city when set, otherwise the region.
///
/// Empty strings count as unset. Returns `None` when neither is usable.
pub fn location_label(city: Option<&str>, region: Option<&str>) -> Option<String> {
    city.filter(|c| !c.is_empty())
        .or_else(|| region.filter(|r| !r.is_empty()))
        .map(str::to_string)
}
