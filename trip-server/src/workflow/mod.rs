//! The five-phase trip planning workflow.
//!
//! This module is the core of the server: a fixed sequence of phases with
//! conditional routing that turns a free-text query into filtered, ranked
//! itineraries and model-written advice. Each phase consumes the previous
//! state and produces a new one; the router after each phase decides
//! whether to continue, stop for clarification, or stop on error.

mod analyze;
mod engine;
mod state;

pub use analyze::{departure_hour, filter_and_sort, matches_time_preference};
pub use engine::TripPlanner;
pub use state::{
    ANALYSIS_REASONING, CLARIFICATION_MESSAGE, FALLBACK_REASONING, FALLBACK_RECOMMENDATION,
    MISSING_CODES_ERROR, NO_MATCH_REASONING, NO_MATCH_RECOMMENDATION, NO_TRAINS_ERROR, PlanState,
    WorkflowStep,
};
