//! Application state for the web layer.

use std::sync::Arc;

use crate::orchestrator::TripOrchestrator;
use crate::rail::RailSearch;
use crate::stations::StationSearchClient;

/// Shared application state.
///
/// Contains all the services needed to handle requests. Everything is
/// constructed once at startup; requests share it by reference.
#[derive(Clone)]
pub struct AppState {
    /// Workflow orchestrator for natural-language planning
    pub orchestrator: Arc<TripOrchestrator>,

    /// Rail search client for the direct-search endpoint
    pub rail: Arc<dyn RailSearch>,

    /// Station search client for name lookups
    pub stations: Arc<StationSearchClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        orchestrator: TripOrchestrator,
        rail: Arc<dyn RailSearch>,
        stations: StationSearchClient,
    ) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            rail,
            stations: Arc::new(stations),
        }
    }
}
