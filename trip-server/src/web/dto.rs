//! Data transfer objects for web requests and responses.
//!
//! Failure payloads follow the upstream convention of `success: false`
//! in a 200 response rather than HTTP error statuses, so API consumers
//! handle one response shape per endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::Itinerary;
use crate::stations::StationMatch;

/// Request to plan a trip from a natural-language query.
#[derive(Debug, Deserialize)]
pub struct TripPlanRequest {
    /// Free-text query, e.g. "trains from Delhi to Mumbai tomorrow morning"
    pub query: String,
}

/// Request to search trains directly by station codes.
#[derive(Debug, Deserialize)]
pub struct DirectSearchRequest {
    /// Source station code (e.g. "NDLS")
    pub from_station: String,

    /// Destination station code (e.g. "BCT")
    pub to_station: String,

    /// Time window in hours (clamped to 1-72, defaults to 24)
    pub hours: Option<u32>,
}

/// Response for the direct train search.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DirectSearchResponse {
    Success {
        success: bool,
        total_trains: usize,
        trains: Vec<Itinerary>,
        from_station: String,
        to_station: String,
    },
    Failure {
        success: bool,
        error: String,
        trains: Vec<Itinerary>,
    },
}

impl DirectSearchResponse {
    /// Failure payload carrying the upstream cause.
    pub fn failure(error: impl Into<String>) -> Self {
        DirectSearchResponse::Failure {
            success: false,
            error: error.into(),
            trains: Vec::new(),
        }
    }
}

/// Query parameters for station search.
#[derive(Debug, Deserialize)]
pub struct StationSearchParams {
    /// City or station name to search
    pub query: String,
}

/// Response for station search.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StationSearchResponse {
    Success {
        success: bool,
        stations: Vec<StationMatch>,
    },
    Failure {
        success: bool,
        error: String,
        stations: Vec<StationMatch>,
    },
}

/// Response for the workflow visualization endpoint.
#[derive(Debug, Serialize)]
pub struct WorkflowDiagramResponse {
    pub success: bool,
    pub workflow: &'static str,
}

/// Response for the API health endpoint.
#[derive(Debug, Serialize)]
pub struct ApiHealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub features: &'static [&'static str],
}

/// Endpoint listing in the API info response.
#[derive(Debug, Serialize)]
pub struct EndpointListing {
    pub main: &'static str,
    pub direct_search: &'static str,
    pub station_search: &'static str,
    pub workflow: &'static str,
    pub health: &'static str,
}

/// Response for the API info endpoint.
#[derive(Debug, Serialize)]
pub struct ApiInfoResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub endpoints: EndpointListing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_search_request_deserializes() {
        let json = r#"{"from_station": "NDLS", "to_station": "BCT", "hours": 12}"#;
        let req: DirectSearchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.from_station, "NDLS");
        assert_eq!(req.hours, Some(12));

        let json = r#"{"from_station": "NDLS", "to_station": "BCT"}"#;
        let req: DirectSearchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.hours, None);
    }

    #[test]
    fn failure_payload_shape() {
        let response = DirectSearchResponse::failure("API error 503: unavailable");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "API error 503: unavailable");
        assert_eq!(json["trains"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn success_payload_shape() {
        let response = DirectSearchResponse::Success {
            success: true,
            total_trains: 1,
            trains: vec![Itinerary::default()],
            from_station: "NDLS".to_string(),
            to_station: "BCT".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["total_trains"], 1);
        assert_eq!(json["from_station"], "NDLS");
    }
}
