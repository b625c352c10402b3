//! Conversion from provider DTOs to normalized itineraries.
//!
//! Both provider revisions collapse into the single [`Itinerary`] shape.
//! Normalization is permissive: missing fields stay `None` rather than
//! failing the whole response, matching what the provider actually sends.

use std::collections::BTreeMap;

use crate::domain::{ClassAvailability, EndpointSummary, Itinerary, QuotaAvailability};

use super::types::{FlatTrain, QuotaDto, SearchEnvelope, TrainDto};

/// Extract the itinerary list from a search response.
///
/// Prefers the nested `data.trainList` revision; falls back to the flat
/// `trains` list; an envelope carrying neither yields an empty list.
pub fn convert_search_response(envelope: &SearchEnvelope) -> Vec<Itinerary> {
    if let Some(data) = &envelope.data {
        return data.train_list.iter().map(convert_train).collect();
    }

    if let Some(trains) = &envelope.trains {
        return trains.iter().map(convert_flat_train).collect();
    }

    Vec::new()
}

/// Convert one train from the nested revision.
fn convert_train(dto: &TrainDto) -> Itinerary {
    // Availability is keyed by the advertised class list; classes with no
    // cached quota get the provider's NOT AVAILABLE placeholder.
    let mut availability = BTreeMap::new();
    for class in &dto.avl_classes {
        let general = dto
            .availability_cache
            .get(class)
            .map(convert_quota)
            .unwrap_or_else(QuotaAvailability::unavailable);

        let tatkal = dto
            .availability_cache_tatkal
            .get(class)
            .map(convert_tatkal_quota)
            .unwrap_or_else(QuotaAvailability::unavailable);

        availability.insert(class.clone(), ClassAvailability { general, tatkal });
    }

    Itinerary {
        train_number: dto.train_number.clone(),
        train_name: dto.train_name.clone(),
        from_station: EndpointSummary {
            code: dto.from_stn_code.clone(),
            name: dto.from_stn_name.clone(),
            city: dto.from_city_name.clone(),
        },
        to_station: EndpointSummary {
            code: dto.to_stn_code.clone(),
            name: dto.to_stn_name.clone(),
            city: dto.to_city_name.clone(),
        },
        departure_time: dto.departure_time.clone(),
        departure_date: dto.departure_date.clone(),
        arrival_time: dto.arrival_time.clone(),
        duration_mins: dto.duration,
        distance_km: dto.distance,
        available_classes: dto.avl_classes.clone(),
        availability,
        running_days: dto.running_days.clone(),
        has_pantry: dto.has_pantry,
        train_rating: dto.train_rating,
    }
}

/// Convert one train from the flat revision.
fn convert_flat_train(dto: &FlatTrain) -> Itinerary {
    Itinerary {
        train_number: dto.train_number.clone(),
        train_name: dto.train_name.clone(),
        from_station: EndpointSummary {
            code: dto.from_station_code.clone(),
            ..EndpointSummary::default()
        },
        to_station: EndpointSummary {
            code: dto.to_station_code.clone(),
            ..EndpointSummary::default()
        },
        departure_time: dto.from_std.clone(),
        arrival_time: dto.to_std.clone(),
        duration_mins: dto.duration,
        ..Itinerary::default()
    }
}

fn convert_quota(dto: &QuotaDto) -> QuotaAvailability {
    QuotaAvailability {
        status: dto
            .availability
            .clone()
            .unwrap_or_else(|| "NOT AVAILABLE".to_string()),
        fare: dto.fare.clone().unwrap_or_else(|| "0".to_string()),
        prediction: dto.prediction.clone(),
        prediction_percentage: dto.prediction_percentage,
    }
}

/// Tatkal quotas carry no prediction data.
fn convert_tatkal_quota(dto: &QuotaDto) -> QuotaAvailability {
    QuotaAvailability {
        status: dto
            .availability
            .clone()
            .unwrap_or_else(|| "NOT AVAILABLE".to_string()),
        fare: dto.fare.clone().unwrap_or_else(|| "0".to_string()),
        prediction: None,
        prediction_percentage: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_envelope(json: &str) -> SearchEnvelope {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn nested_revision_converts_fully() {
        let envelope = nested_envelope(
            r#"{
                "data": {
                    "trainList": [
                        {
                            "trainNumber": "12951",
                            "trainName": "Mumbai Rajdhani",
                            "fromStnCode": "NDLS",
                            "toStnCode": "BCT",
                            "departureTime": "16:25",
                            "arrivalTime": "08:15",
                            "duration": 950,
                            "avlClasses": ["3A"],
                            "availabilityCache": {
                                "3A": {"availability": "AVAILABLE-0042", "fare": "3075"}
                            }
                        }
                    ]
                }
            }"#,
        );

        let itineraries = convert_search_response(&envelope);
        assert_eq!(itineraries.len(), 1);

        let it = &itineraries[0];
        assert_eq!(it.train_number.as_deref(), Some("12951"));
        assert_eq!(it.from_station.code.as_deref(), Some("NDLS"));
        assert_eq!(it.departure_time.as_deref(), Some("16:25"));
        assert_eq!(it.duration_mins, Some(950));

        let class = &it.availability["3A"];
        assert_eq!(class.general.status, "AVAILABLE-0042");
        assert_eq!(class.general.fare, "3075");
        // No tatkal cache entry for the class.
        assert_eq!(class.tatkal.status, "NOT AVAILABLE");
        assert_eq!(class.tatkal.fare, "0");
    }

    #[test]
    fn advertised_class_without_quota_gets_placeholder() {
        let envelope = nested_envelope(
            r#"{"data": {"trainList": [{"trainNumber": "12009", "avlClasses": ["CC", "EC"]}]}}"#,
        );

        let itineraries = convert_search_response(&envelope);
        let availability = &itineraries[0].availability;
        assert_eq!(availability.len(), 2);
        assert_eq!(availability["CC"].general.status, "NOT AVAILABLE");
        assert_eq!(availability["EC"].general.status, "NOT AVAILABLE");
    }

    #[test]
    fn tatkal_prediction_fields_are_dropped() {
        let envelope = nested_envelope(
            r#"{
                "data": {
                    "trainList": [
                        {
                            "avlClasses": ["SL"],
                            "availabilityCacheTatkal": {
                                "SL": {
                                    "availability": "WL4",
                                    "fare": "520",
                                    "prediction": "Likely",
                                    "predictionPercentage": 80.0
                                }
                            }
                        }
                    ]
                }
            }"#,
        );

        let itineraries = convert_search_response(&envelope);
        let tatkal = &itineraries[0].availability["SL"].tatkal;
        assert_eq!(tatkal.status, "WL4");
        assert!(tatkal.prediction.is_none());
        assert!(tatkal.prediction_percentage.is_none());
    }

    #[test]
    fn flat_revision_converts() {
        let envelope = nested_envelope(
            r#"{
                "trains": [
                    {
                        "train_number": "12009",
                        "train_name": "Shatabdi Express",
                        "from_std": "06:00",
                        "to_std": "12:40",
                        "duration": 400
                    }
                ]
            }"#,
        );

        let itineraries = convert_search_response(&envelope);
        assert_eq!(itineraries.len(), 1);
        assert_eq!(itineraries[0].departure_time.as_deref(), Some("06:00"));
        assert_eq!(itineraries[0].arrival_time.as_deref(), Some("12:40"));
        assert!(itineraries[0].availability.is_empty());
    }

    #[test]
    fn nested_revision_wins_when_both_present() {
        let envelope = nested_envelope(
            r#"{
                "data": {"trainList": [{"trainNumber": "11111"}]},
                "trains": [{"train_number": "22222"}]
            }"#,
        );

        let itineraries = convert_search_response(&envelope);
        assert_eq!(itineraries.len(), 1);
        assert_eq!(itineraries[0].train_number.as_deref(), Some("11111"));
    }

    #[test]
    fn empty_envelope_yields_no_itineraries() {
        let envelope = nested_envelope("{}");
        assert!(convert_search_response(&envelope).is_empty());
    }
}
