//! Normalized itinerary records.
//!
//! An [`Itinerary`] is one transit option between two stations, produced by
//! the rail search client from raw provider JSON and read-only afterward.
//! Fields the provider omits stay `None`; display layers substitute "N/A".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Summary of one end of an itinerary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointSummary {
    /// Station code as reported by the provider.
    pub code: Option<String>,

    /// Station name.
    pub name: Option<String>,

    /// City the station serves.
    pub city: Option<String>,
}

/// Seat availability and fare for one quota of a service class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaAvailability {
    /// Availability status string (e.g. "AVAILABLE-0042", "WL15").
    pub status: String,

    /// Fare in rupees, as reported.
    pub fare: String,

    /// Confirmation prediction text, when the provider supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<String>,

    /// Confirmation probability percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction_percentage: Option<f64>,
}

impl QuotaAvailability {
    /// The provider's placeholder for classes with no availability data.
    pub fn unavailable() -> Self {
        Self {
            status: "NOT AVAILABLE".to_string(),
            fare: "0".to_string(),
            prediction: None,
            prediction_percentage: None,
        }
    }
}

/// Availability for one service class: the general quota plus tatkal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassAvailability {
    pub general: QuotaAvailability,
    pub tatkal: QuotaAvailability,
}

/// One normalized transit option between two stations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Itinerary {
    /// Train number (e.g. "12951").
    pub train_number: Option<String>,

    /// Train name (e.g. "Mumbai Rajdhani").
    pub train_name: Option<String>,

    /// Origin station summary.
    pub from_station: EndpointSummary,

    /// Destination station summary.
    pub to_station: EndpointSummary,

    /// Departure time as an "HH:MM" string. Kept raw: the analyze phase
    /// owns the policy for unparsable values.
    pub departure_time: Option<String>,

    /// Departure date, when the provider reports one.
    pub departure_date: Option<String>,

    /// Arrival time as an "HH:MM" string.
    pub arrival_time: Option<String>,

    /// Journey duration in minutes.
    pub duration_mins: Option<u32>,

    /// Route distance in kilometres.
    pub distance_km: Option<u32>,

    /// Service classes offered (e.g. "SL", "3A", "2A").
    #[serde(default)]
    pub available_classes: Vec<String>,

    /// Per-class availability, keyed by class code.
    #[serde(default)]
    pub availability: BTreeMap<String, ClassAvailability>,

    /// Running-days bitmap as reported (e.g. "1111111").
    pub running_days: Option<String>,

    /// Whether the train has a pantry car.
    #[serde(default)]
    pub has_pantry: bool,

    /// Provider's aggregate rating for the train.
    pub train_rating: Option<f64>,
}

impl Default for QuotaAvailability {
    fn default() -> Self {
        Self::unavailable()
    }
}

impl Default for ClassAvailability {
    fn default() -> Self {
        Self {
            general: QuotaAvailability::unavailable(),
            tatkal: QuotaAvailability::unavailable(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_stable_class_order() {
        let mut availability = BTreeMap::new();
        availability.insert("SL".to_string(), ClassAvailability::default());
        availability.insert("2A".to_string(), ClassAvailability::default());
        availability.insert("3A".to_string(), ClassAvailability::default());

        let itinerary = Itinerary {
            train_number: Some("12951".to_string()),
            availability,
            ..Itinerary::default()
        };

        let json = serde_json::to_string(&itinerary).unwrap();
        let two_a = json.find("\"2A\"").unwrap();
        let three_a = json.find("\"3A\"").unwrap();
        let sl = json.find("\"SL\"").unwrap();
        assert!(two_a < three_a && three_a < sl);
    }

    #[test]
    fn unavailable_placeholder_matches_provider_wording() {
        let quota = QuotaAvailability::unavailable();
        assert_eq!(quota.status, "NOT AVAILABLE");
        assert_eq!(quota.fare, "0");
        assert!(quota.prediction.is_none());
    }

    #[test]
    fn prediction_fields_are_omitted_when_absent() {
        let json = serde_json::to_string(&QuotaAvailability::unavailable()).unwrap();
        assert!(!json.contains("prediction"));
    }
}
