//! Extracted travel intent.

use serde::{Deserialize, Serialize};

use super::preference::{BudgetPreference, TimePreference};

fn default_travel_date() -> String {
    "today".to_string()
}

/// Structured travel intent extracted from a free-text query.
///
/// Deserialized directly from the language model's JSON output. Every
/// field the model omits (or sets to null) takes its documented default:
/// `travel_date` = "today", both preferences = `any`, `direct_only` = false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelIntent {
    /// Origin city, if the query mentions one.
    #[serde(default)]
    pub from_location: Option<String>,

    /// Destination city, if the query mentions one.
    #[serde(default)]
    pub to_location: Option<String>,

    /// Date mentioned in the query, or "today".
    #[serde(default = "default_travel_date", deserialize_with = "null_as_today")]
    pub travel_date: String,

    /// Preferred departure time of day.
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_preference: TimePreference,

    /// Preferred fare class tier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub budget_preference: BudgetPreference,

    /// Whether the user asked for direct routes only.
    #[serde(default, deserialize_with = "null_as_false")]
    pub direct_only: bool,
}

// The model sometimes emits explicit nulls instead of omitting fields;
// both must collapse to the same defaults.
fn null_as_today<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_else(default_travel_date))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value: Option<T> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<bool> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or(false))
}
