//! Web layer: HTTP routing and request/response shaping.
//!
//! Thin plumbing over the orchestrator and the direct-search clients.

mod dto;
mod routes;
mod state;

pub use dto::{
    DirectSearchRequest, DirectSearchResponse, StationSearchParams, StationSearchResponse,
    TripPlanRequest,
};
pub use routes::create_router;
pub use state::AppState;
