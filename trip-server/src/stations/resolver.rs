//! City name to station code resolution.

use std::collections::HashMap;

use crate::domain::StationCode;

/// Primary station codes for major cities.
///
/// Keys are lowercase; lookups are case-insensitive and trimmed.
const CITY_STATIONS: &[(&str, &str)] = &[
    ("delhi", "NDLS"),
    ("new delhi", "NDLS"),
    ("yamunanagar", "YJUD"),
    ("mumbai", "BCT"),
    ("bangalore", "SBC"),
    ("bengaluru", "SBC"),
    ("chennai", "MAS"),
    ("hyderabad", "HYB"),
    ("kolkata", "HWH"),
    ("pune", "PUNE"),
    ("ahmedabad", "ADI"),
    ("jaipur", "JP"),
    ("lucknow", "LKO"),
    ("kanpur", "CNB"),
    ("nagpur", "NGP"),
    ("indore", "INDB"),
    ("bhopal", "BPL"),
    ("patna", "PNBE"),
    ("agra", "AGC"),
    ("varanasi", "BSB"),
    ("surat", "ST"),
    ("kochi", "ERS"),
    ("coimbatore", "CBE"),
    ("guwahati", "GHY"),
    ("chandigarh", "CDG"),
    ("thiruvananthapuram", "TVC"),
    ("vijayawada", "BZA"),
    ("visakhapatnam", "VSKP"),
    ("bhubaneswar", "BBS"),
    ("goa", "MAO"),
    ("amritsar", "ASR"),
];

/// Resolves free-text city names to station codes.
///
/// Known major cities map to their canonical primary station. Anything
/// else falls through to [`StationCode::derive_from_name`], so resolution
/// never fails - at the cost that callers cannot tell a real match from
/// a derived guess.
#[derive(Debug, Clone)]
pub struct CityResolver {
    map: HashMap<&'static str, StationCode>,
}

impl CityResolver {
    /// Build a resolver over the built-in city table.
    pub fn new() -> Self {
        let map = CITY_STATIONS
            .iter()
            .filter_map(|(city, code)| StationCode::parse(code).ok().map(|c| (*city, c)))
            .collect();

        Self { map }
    }

    /// Look up a city in the known-city table.
    ///
    /// Case-insensitive and whitespace-trimmed. Returns `None` for cities
    /// outside the table.
    pub fn lookup(&self, city: &str) -> Option<StationCode> {
        self.map.get(city.trim().to_lowercase().as_str()).cloned()
    }

    /// Resolve a city name to a station code, guessing when unknown.
    pub fn resolve(&self, city: &str) -> StationCode {
        let code = self
            .lookup(city)
            .unwrap_or_else(|| StationCode::derive_from_name(city));

        tracing::debug!(%city, %code, "resolved city");
        code
    }

    /// Number of cities in the known-city table.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the known-city table is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for CityResolver {
    fn default() -> Self {
        Self::new()
    }
}
