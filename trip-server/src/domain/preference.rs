//! Traveller preference enums.
//!
//! Preferences are extracted from free-text queries by the language model
//! and default to `Any` when the query does not mention them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse time-of-day preference for departures.
///
/// Buckets match departure hours as follows:
/// morning [6,12), afternoon [12,17), evening [17,21), night [21,24)∪[0,6).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePreference {
    Morning,
    Afternoon,
    Evening,
    Night,
    #[default]
    Any,
}

impl TimePreference {
    /// Check whether a departure hour (0-23) falls in this bucket.
    ///
    /// `Any` matches every hour.
    pub fn matches_hour(&self, hour: u32) -> bool {
        match self {
            TimePreference::Morning => (6..12).contains(&hour),
            TimePreference::Afternoon => (12..17).contains(&hour),
            TimePreference::Evening => (17..21).contains(&hour),
            TimePreference::Night => hour >= 21 || hour < 6,
            TimePreference::Any => true,
        }
    }

    /// Returns the lowercase name used in queries and responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimePreference::Morning => "morning",
            TimePreference::Afternoon => "afternoon",
            TimePreference::Evening => "evening",
            TimePreference::Night => "night",
            TimePreference::Any => "any",
        }
    }
}

impl fmt::Display for TimePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Budget preference for fare classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPreference {
    Budget,
    Standard,
    Premium,
    #[default]
    Any,
}

impl BudgetPreference {
    /// Returns the lowercase name used in queries and responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetPreference::Budget => "budget",
            BudgetPreference::Standard => "standard",
            BudgetPreference::Premium => "premium",
            BudgetPreference::Any => "any",
        }
    }
}

impl fmt::Display for BudgetPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
