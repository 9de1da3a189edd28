//! Gender codes stored on person rows.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Gender of a person. Persisted as the single-character code `M` or `F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// All genders in reporting order.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// The database code (`"M"` / `"F"`).
    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }

    /// Human-facing name used as a JSON key in gender breakdowns.
    pub fn display_name(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Map a free-text gender reported by an external API.
    ///
    /// Only the exact string `"male"` maps to [`Gender::Male`]; every other
    /// value, including a missing one, maps to [`Gender::Female`].
    pub fn from_api_value(value: Option<&str>) -> Self {
        match value {
            Some("male") => Gender::Male,
            _ => Gender::Female,
        }
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Gender::Male),
            "F" => Ok(Gender::Female),
            other => Err(CoreError::Validation(format!(
                "Unknown gender code '{other}', expected 'M' or 'F'"
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
