//! Mock rail search client for testing without provider access.

use crate::domain::{Itinerary, StationCode};

use super::client::MAX_RESULTS;
use super::error::RailError;
use super::{RailSearch, SearchOutcome};

/// Mock rail search that serves canned itineraries for any station pair.
///
/// Mimics the real [`RailClient`](super::RailClient) behavior, including
/// truncation to the result limit. Construct with [`failing`](Self::failing)
/// to simulate an upstream outage.
#[derive(Debug, Clone)]
pub struct MockRailClient {
    itineraries: Vec<Itinerary>,
    failure: Option<String>,
}

impl MockRailClient {
    /// Create a mock that returns the given itineraries for every search.
    pub fn new(itineraries: Vec<Itinerary>) -> Self {
        Self {
            itineraries,
            failure: None,
        }
    }

    /// Create a mock whose every search fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            itineraries: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

#[async_trait::async_trait]
impl RailSearch for MockRailClient {
    async fn search(
        &self,
        _from: &StationCode,
        _to: &StationCode,
        _window_hours: u32,
    ) -> Result<SearchOutcome, RailError> {
        if let Some(message) = &self.failure {
            return Err(RailError::Api {
                status: 0,
                message: message.clone(),
            });
        }

        let total_found = self.itineraries.len();
        let mut itineraries = self.itineraries.clone();
        itineraries.truncate(MAX_RESULTS);

        Ok(SearchOutcome {
            itineraries,
            total_found,
        })
    }
}
