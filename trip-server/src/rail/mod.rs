//! Rail itinerary search.
//!
//! The [`RailSearch`] trait is the seam the workflow engine depends on;
//! [`RailClient`] is the production HTTP implementation and
//! [`MockRailClient`] serves canned data for tests and offline runs.

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{MAX_RESULTS, RailClient, RailConfig};
pub use convert::convert_search_response;
pub use error::RailError;
pub use mock::MockRailClient;
pub use types::SearchEnvelope;

use crate::domain::{Itinerary, StationCode};

/// Result of a successful itinerary search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Normalized itineraries, truncated to [`MAX_RESULTS`].
    pub itineraries: Vec<Itinerary>,

    /// Total itineraries the provider reported before truncation.
    pub total_found: usize,
}

/// An itinerary search data source.
#[async_trait::async_trait]
pub trait RailSearch: Send + Sync {
    /// Search for itineraries between two stations within a time window.
    async fn search(
        &self,
        from: &StationCode,
        to: &StationCode,
        window_hours: u32,
    ) -> Result<SearchOutcome, RailError>;
}
