//! Filter and sort policies for the analyze phase.
//!
//! Two deliberate permissive policies live here, both named so they can
//! be tested directly:
//!
//! * Missing departure times default to "00:00" before bucketing and
//!   sorting, mirroring the provider's own placeholder.
//! * Departure strings whose hour cannot be read as 0-23 match every
//!   time bucket rather than being dropped.

use crate::domain::{Itinerary, TimePreference};

/// Placeholder departure used when the provider omitted the time.
const DEFAULT_DEPARTURE: &str = "00:00";

/// Read the departure hour from an "HH:MM" string.
///
/// Lenient: accepts non-zero-padded hours ("9:15"). Returns `None` when
/// the leading field is not a number in 0-23.
pub fn departure_hour(time: &str) -> Option<u32> {
    let hour_field = time.split(':').next()?;
    let hour: u32 = hour_field.trim().parse().ok()?;

    (hour <= 23).then_some(hour)
}

/// Check whether an itinerary's departure matches a time preference.
///
/// Itineraries with no readable departure hour match every preference
/// (the permissive fallback), so filtering never discards an option the
/// user might have wanted merely because the provider sent bad data.
pub fn matches_time_preference(itinerary: &Itinerary, preference: TimePreference) -> bool {
    if preference == TimePreference::Any {
        return true;
    }

    let departure = itinerary
        .departure_time
        .as_deref()
        .unwrap_or(DEFAULT_DEPARTURE);

    match departure_hour(departure) {
        Some(hour) => preference.matches_hour(hour),
        None => true,
    }
}

/// Filter itineraries by time preference and sort by departure time.
///
/// Sorting uses the zero-padded "HH:MM" string as a lexicographic key,
/// which coincides with chronological order; missing departures take the
/// "00:00" placeholder and sort first. The sort is stable, so ties keep
/// the provider's order.
pub fn filter_and_sort(itineraries: &[Itinerary], preference: TimePreference) -> Vec<Itinerary> {
    let mut filtered: Vec<Itinerary> = itineraries
        .iter()
        .filter(|it| matches_time_preference(it, preference))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| {
        let key_a = a.departure_time.as_deref().unwrap_or(DEFAULT_DEPARTURE);
        let key_b = b.departure_time.as_deref().unwrap_or(DEFAULT_DEPARTURE);
        key_a.cmp(key_b)
    });

    filtered
}
