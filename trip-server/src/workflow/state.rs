//! Workflow state record and step tags.
//!
//! One [`PlanState`] is created per request and threaded through every
//! phase. Phases never mutate a state in place; each returns a new state
//! built by struct update over the previous one, so every overlay is
//! checked at compile time.

use serde::Serialize;

use crate::domain::{BudgetPreference, Itinerary, StationCode, TimePreference};

/// Clarification prompt when origin or destination is missing.
pub const CLARIFICATION_MESSAGE: &str = "Please specify both source and destination cities.";

/// Error when station codes are absent at the fetch phase. Indicates a
/// broken upstream phase rather than bad user input.
pub const MISSING_CODES_ERROR: &str = "Missing station codes";

/// Soft error when the search returns zero itineraries.
pub const NO_TRAINS_ERROR: &str = "No trains available for this route";

/// Recommendation text when filtering leaves no itineraries.
pub const NO_MATCH_RECOMMENDATION: &str =
    "No trains found matching your preferences. Try adjusting your search criteria.";

/// Reasoning text paired with [`NO_MATCH_RECOMMENDATION`].
pub const NO_MATCH_REASONING: &str = "No trains available";

/// Reasoning text for a successful model-backed recommendation.
pub const ANALYSIS_REASONING: &str =
    "Analysis based on departure times, duration, and user preferences";

/// Fallback recommendation when the model call fails but itineraries exist.
pub const FALLBACK_RECOMMENDATION: &str =
    "Here are the available trains. Please review the options above.";

/// Reasoning text for the degraded-mode fallback.
pub const FALLBACK_REASONING: &str = "Basic listing due to processing error";

/// Tag identifying the last completed workflow phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStep {
    Initialized,
    IntentExtracted,
    LocationsValidated,
    TrainsFetched,
    TrainsAnalyzed,
    NoTrainsFound,
    Completed,
    Error,
    NeedsClarification,
}

impl WorkflowStep {
    /// Returns the snake_case tag used in responses and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStep::Initialized => "initialized",
            WorkflowStep::IntentExtracted => "intent_extracted",
            WorkflowStep::LocationsValidated => "locations_validated",
            WorkflowStep::TrainsFetched => "trains_fetched",
            WorkflowStep::TrainsAnalyzed => "trains_analyzed",
            WorkflowStep::NoTrainsFound => "no_trains_found",
            WorkflowStep::Completed => "completed",
            WorkflowStep::Error => "error",
            WorkflowStep::NeedsClarification => "needs_clarification",
        }
    }
}

impl std::fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The state record threaded through the workflow.
///
/// At termination exactly one of these holds: `error` is set,
/// `needs_clarification` is true, or `current_step` is `Completed`.
#[derive(Debug, Clone)]
pub struct PlanState {
    /// The raw user query. Immutable once set.
    pub user_query: String,

    // Extracted intent
    pub from_location: Option<String>,
    pub to_location: Option<String>,
    pub travel_date: String,
    pub time_preference: TimePreference,
    pub budget_preference: BudgetPreference,
    pub direct_only: bool,

    // Resolved identifiers
    pub from_station_code: Option<StationCode>,
    pub to_station_code: Option<StationCode>,

    // Search results
    pub available_trains: Vec<Itinerary>,
    pub total_trains: usize,

    // Derived results
    pub filtered_trains: Vec<Itinerary>,
    pub top_recommendations: Vec<Itinerary>,

    // AI output
    pub ai_recommendation: String,
    pub reasoning: String,

    // Control
    pub current_step: WorkflowStep,
    pub error: Option<String>,
    pub needs_clarification: bool,
    pub clarification_message: Option<String>,

    // Metadata
    pub processing_time: f64,
    pub timestamp: String,
}

impl PlanState {
    /// Create the initial state for a query.
    pub fn new(user_query: impl Into<String>) -> Self {
        Self {
            user_query: user_query.into(),
            from_location: None,
            to_location: None,
            travel_date: "today".to_string(),
            time_preference: TimePreference::Any,
            budget_preference: BudgetPreference::Any,
            direct_only: false,
            from_station_code: None,
            to_station_code: None,
            available_trains: Vec::new(),
            total_trains: 0,
            filtered_trains: Vec::new(),
            top_recommendations: Vec::new(),
            ai_recommendation: String::new(),
            reasoning: String::new(),
            current_step: WorkflowStep::Initialized,
            error: None,
            needs_clarification: false,
            clarification_message: None,
            processing_time: 0.0,
            timestamp: String::new(),
        }
    }

    /// Terminal failure overlay: records the message and marks the run failed.
    pub fn fail(self, message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            current_step: WorkflowStep::Error,
            ..self
        }
    }

    /// Whether the state is terminal for the router.
    pub fn is_terminal(&self) -> bool {
        self.error.is_some()
            || self.needs_clarification
            || matches!(
                self.current_step,
                WorkflowStep::Completed | WorkflowStep::Error | WorkflowStep::NeedsClarification
            )
    }
}
