//! Request orchestration and response projection.
//!
//! The orchestrator owns one [`TripPlanner`] for the lifetime of the
//! process. For each request it builds the initial state, runs the
//! workflow to termination, and projects the final state into the
//! caller-facing [`TripPlanResponse`]. Callers always receive a
//! well-formed response, never a raw fault.

use std::time::Instant;

use serde::Serialize;

use crate::domain::Itinerary;
use crate::workflow::{PlanState, TripPlanner, WorkflowStep};

/// How many filtered itineraries a success response includes.
const MAX_LISTED_TRAINS: usize = 10;

/// How many top recommendations a success response includes.
const MAX_TOP_RECOMMENDATIONS: usize = 3;

/// Echo of the extracted intent in a success response.
#[derive(Debug, Clone, Serialize)]
pub struct IntentSummary {
    pub from_location: Option<String>,
    pub to_location: Option<String>,
    pub from_station: Option<String>,
    pub to_station: Option<String>,
    pub travel_date: String,
    pub time_preference: String,
    pub budget_preference: String,
    pub direct_only: bool,
}

/// Itinerary counts and listings in a success response.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsSummary {
    pub total_trains_found: usize,
    pub filtered_trains_count: usize,
    pub top_recommendations: Vec<Itinerary>,
    pub all_filtered_trains: Vec<Itinerary>,
}

/// Model-generated advice in a success response.
#[derive(Debug, Clone, Serialize)]
pub struct AiAnalysis {
    pub recommendation: String,
    pub reasoning: String,
}

/// Run metadata in a success response.
#[derive(Debug, Clone, Serialize)]
pub struct RunMetadata {
    pub processing_time_seconds: f64,
    pub workflow_step: WorkflowStep,
    pub timestamp: String,
}

/// Caller-facing result of a trip planning run.
///
/// Serialized untagged, so each variant keeps the flat field layout
/// callers expect: failures carry `error`, clarifications carry
/// `needs_clarification` + `message`, successes carry the full payload.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TripPlanResponse {
    Failure {
        success: bool,
        error: String,
        query: String,
    },
    Clarification {
        success: bool,
        needs_clarification: bool,
        message: Option<String>,
        query: String,
    },
    Success {
        success: bool,
        query: String,
        intent: IntentSummary,
        results: ResultsSummary,
        ai_analysis: AiAnalysis,
        metadata: RunMetadata,
    },
}

impl TripPlanResponse {
    /// Whether this response reports success.
    pub fn is_success(&self) -> bool {
        matches!(self, TripPlanResponse::Success { .. })
    }
}

/// High-level orchestrator over the workflow engine.
pub struct TripOrchestrator {
    planner: TripPlanner,
}

impl TripOrchestrator {
    /// Create an orchestrator around a constructed engine.
    pub fn new(planner: TripPlanner) -> Self {
        Self { planner }
    }

    /// Process a free-text query through the workflow.
    pub async fn plan_trip(&self, user_query: &str) -> TripPlanResponse {
        tracing::info!(query = %user_query, "processing trip planning request");
        let started = Instant::now();

        let initial = PlanState::new(user_query);
        let final_state = self.planner.run(initial).await;

        let elapsed = started.elapsed().as_secs_f64();
        tracing::info!(
            elapsed_secs = format!("{elapsed:.2}"),
            step = %final_state.current_step,
            "workflow finished"
        );

        project_response(final_state, elapsed)
    }

    /// Static textual rendering of the workflow graph.
    pub fn describe_workflow(&self) -> &'static str {
        TripPlanner::describe()
    }
}

/// Project a terminal workflow state into the caller-facing response.
///
/// Precedence mirrors the router: error first, then clarification, then
/// the success payload.
fn project_response(state: PlanState, elapsed_secs: f64) -> TripPlanResponse {
    if let Some(error) = state.error {
        return TripPlanResponse::Failure {
            success: false,
            error,
            query: state.user_query,
        };
    }

    if state.needs_clarification {
        return TripPlanResponse::Clarification {
            success: false,
            needs_clarification: true,
            message: state.clarification_message,
            query: state.user_query,
        };
    }

    let filtered_trains_count = state.filtered_trains.len();

    TripPlanResponse::Success {
        success: true,
        query: state.user_query,
        intent: IntentSummary {
            from_location: state.from_location,
            to_location: state.to_location,
            from_station: state.from_station_code.map(|c| c.as_str().to_string()),
            to_station: state.to_station_code.map(|c| c.as_str().to_string()),
            travel_date: state.travel_date,
            time_preference: state.time_preference.to_string(),
            budget_preference: state.budget_preference.to_string(),
            direct_only: state.direct_only,
        },
        results: ResultsSummary {
            total_trains_found: state.total_trains,
            filtered_trains_count,
            top_recommendations: state
                .top_recommendations
                .into_iter()
                .take(MAX_TOP_RECOMMENDATIONS)
                .collect(),
            all_filtered_trains: state
                .filtered_trains
                .into_iter()
                .take(MAX_LISTED_TRAINS)
                .collect(),
        },
        ai_analysis: AiAnalysis {
            recommendation: state.ai_recommendation,
            reasoning: state.reasoning,
        },
        metadata: RunMetadata {
            processing_time_seconds: (elapsed_secs * 100.0).round() / 100.0,
            workflow_step: state.current_step,
            timestamp: state.timestamp,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StationCode, TimePreference};
    use crate::workflow::CLARIFICATION_MESSAGE;

    fn train(number: &str, time: &str) -> Itinerary {
        Itinerary {
            train_number: Some(number.to_string()),
            departure_time: Some(time.to_string()),
            ..Itinerary::default()
        }
    }

    fn completed_state() -> PlanState {
        PlanState {
            from_location: Some("Delhi".to_string()),
            to_location: Some("Mumbai".to_string()),
            from_station_code: Some(StationCode::parse("NDLS").unwrap()),
            to_station_code: Some(StationCode::parse("BCT").unwrap()),
            time_preference: TimePreference::Morning,
            available_trains: (0..12).map(|i| train(&i.to_string(), "08:00")).collect(),
            total_trains: 12,
            filtered_trains: (0..12).map(|i| train(&i.to_string(), "08:00")).collect(),
            top_recommendations: (0..3).map(|i| train(&i.to_string(), "08:00")).collect(),
            ai_recommendation: "Take the first one.".to_string(),
            reasoning: "reasons".to_string(),
            current_step: WorkflowStep::Completed,
            timestamp: "2025-08-06T09:00:00+05:30".to_string(),
            ..PlanState::new("Delhi to Mumbai tomorrow morning")
        }
    }

    #[test]
    fn error_state_projects_to_failure() {
        let state = PlanState::new("query").fail("Failed to fetch trains: timeout");
        let response = project_response(state, 0.8);

        assert!(!response.is_success());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Failed to fetch trains: timeout");
        assert_eq!(json["query"], "query");
        assert!(json.get("needs_clarification").is_none());
    }

    #[test]
    fn clarification_state_projects_to_clarification() {
        let state = PlanState {
            needs_clarification: true,
            clarification_message: Some(CLARIFICATION_MESSAGE.to_string()),
            current_step: WorkflowStep::NeedsClarification,
            ..PlanState::new("trains from Delhi")
        };

        let response = project_response(state, 0.2);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["needs_clarification"], true);
        assert_eq!(json["message"], CLARIFICATION_MESSAGE);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn error_wins_over_clarification() {
        // Both set is a broken invariant; projection falls back to the
        // same precedence the router uses.
        let state = PlanState {
            needs_clarification: true,
            ..PlanState::new("query").fail("boom")
        };

        let json = serde_json::to_value(project_response(state, 0.1)).unwrap();
        assert_eq!(json["error"], "boom");
        assert!(json.get("message").is_none());
    }

    #[test]
    fn success_projects_full_payload() {
        let response = project_response(completed_state(), 1.237);
        assert!(response.is_success());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["intent"]["from_station"], "NDLS");
        assert_eq!(json["intent"]["to_station"], "BCT");
        assert_eq!(json["intent"]["time_preference"], "morning");
        assert_eq!(json["results"]["total_trains_found"], 12);
        assert_eq!(json["results"]["filtered_trains_count"], 12);
        assert_eq!(json["ai_analysis"]["recommendation"], "Take the first one.");
        assert_eq!(json["metadata"]["workflow_step"], "completed");
    }

    #[test]
    fn success_truncates_listings() {
        let response = project_response(completed_state(), 0.5);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["results"]["all_filtered_trains"].as_array().unwrap().len(), 10);
        assert_eq!(json["results"]["top_recommendations"].as_array().unwrap().len(), 3);
        // Counts still reflect the full sets.
        assert_eq!(json["results"]["filtered_trains_count"], 12);
    }

    #[test]
    fn processing_time_is_rounded_to_centiseconds() {
        let json = serde_json::to_value(project_response(completed_state(), 1.23789)).unwrap();
        assert_eq!(json["metadata"]["processing_time_seconds"], 1.24);
    }
}
