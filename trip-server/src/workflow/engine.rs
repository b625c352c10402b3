//! The five-phase trip planning engine.
//!
//! Phases run in a fixed order with a router decision after each one:
//! `extract_intent` → `validate_locations` → `fetch_trains` →
//! `analyze_trains` → `generate_recommendations`. A set error ends the
//! run, a clarification request ends the run, and anything else advances
//! to the next phase until completion.
//!
//! The engine is constructed once at startup with its collaborators
//! injected and is shared by reference across requests. All per-request
//! data lives in the [`PlanState`] each run owns.

use std::sync::Arc;
use std::time::Instant;

use chrono::Local;

use crate::ai::CompletionProvider;
use crate::domain::{Itinerary, TravelIntent};
use crate::rail::RailSearch;
use crate::stations::CityResolver;

use super::analyze::filter_and_sort;
use super::state::{
    ANALYSIS_REASONING, CLARIFICATION_MESSAGE, FALLBACK_REASONING, FALLBACK_RECOMMENDATION,
    MISSING_CODES_ERROR, NO_MATCH_REASONING, NO_MATCH_RECOMMENDATION, NO_TRAINS_ERROR, PlanState,
    WorkflowStep,
};

/// Search window passed to the rail client, in hours.
const DEFAULT_SEARCH_WINDOW_HOURS: u32 = 24;

/// How many itineraries the advisor prompt embeds.
const ADVISOR_SHORTLIST: usize = 5;

/// How many itineraries the final recommendation carries.
const TOP_RECOMMENDATIONS: usize = 3;

/// System instruction for the intent extraction call.
const INTENT_SYSTEM_PROMPT: &str = "\
You are a travel intent extraction expert. Extract structured travel information from user queries.

Extract these fields:
- from_location: origin city (or null)
- to_location: destination city (or null)
- travel_date: date mentioned (or \"today\")
- time_preference: morning/afternoon/evening/night/any
- budget_preference: budget/standard/premium/any
- direct_only: true if user wants only direct routes

Return ONLY valid JSON, no markdown or extra text.";

/// System instruction for the recommendation call.
const ADVISOR_SYSTEM_PROMPT: &str = "\
You are an expert Indian Railways travel advisor. Analyze the available trains and provide personalized recommendations.
Consider:
1. Departure and arrival times
2. Journey duration
3. Train type and class
4. User's time preferences

Provide:
- Top 3 train recommendations with clear reasoning
- Pros and cons of each option
- Best overall choice

Be concise, friendly, and practical.";

/// Static textual rendering of the workflow, served by the
/// visualization endpoint.
const WORKFLOW_DIAGRAM: &str = "\
Trip Planning Workflow:
================================

[User Query]
     |
[Extract Intent] -> Extract locations, preferences
     |
[Validate Locations] -> Get station codes
     |
[Fetch Trains] -> Query rail search API
     |
[Analyze Trains] -> Filter by preferences
     |
[Generate Recommendations] -> AI analysis
     |
[Final Response]

Conditional edges:
- If error at any step -> END with error
- If needs clarification -> END with clarification request
- If successful -> Continue to next step
";

/// The phases the router can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    ExtractIntent,
    ValidateLocations,
    FetchTrains,
    AnalyzeTrains,
    GenerateRecommendations,
}

/// Router: choose the next phase from the current state.
///
/// Errors and clarification requests win over step dispatch; an
/// unrecognized step ends the run.
fn next_phase(state: &PlanState) -> Option<Phase> {
    if state.error.is_some() || state.needs_clarification {
        return None;
    }

    match state.current_step {
        WorkflowStep::Initialized => Some(Phase::ExtractIntent),
        WorkflowStep::IntentExtracted => Some(Phase::ValidateLocations),
        WorkflowStep::LocationsValidated => Some(Phase::FetchTrains),
        WorkflowStep::TrainsFetched => Some(Phase::AnalyzeTrains),
        WorkflowStep::TrainsAnalyzed => Some(Phase::GenerateRecommendations),
        _ => None,
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

/// The trip planning workflow engine.
pub struct TripPlanner {
    ai: Arc<dyn CompletionProvider>,
    rail: Arc<dyn RailSearch>,
    resolver: CityResolver,
}

impl TripPlanner {
    /// Create an engine with its collaborators injected.
    pub fn new(
        ai: Arc<dyn CompletionProvider>,
        rail: Arc<dyn RailSearch>,
        resolver: CityResolver,
    ) -> Self {
        Self { ai, rail, resolver }
    }

    /// Run the workflow to a terminal state.
    pub async fn run(&self, mut state: PlanState) -> PlanState {
        loop {
            let Some(phase) = next_phase(&state) else {
                return state;
            };

            state = match phase {
                Phase::ExtractIntent => self.extract_intent(state).await,
                Phase::ValidateLocations => self.validate_locations(state).await,
                Phase::FetchTrains => self.fetch_trains(state).await,
                Phase::AnalyzeTrains => self.analyze_trains(state),
                Phase::GenerateRecommendations => self.generate_recommendations(state).await,
            };
        }
    }

    /// Static textual rendering of the workflow.
    pub fn describe() -> &'static str {
        WORKFLOW_DIAGRAM
    }

    /// Phase 1: extract structured intent from the raw query.
    async fn extract_intent(&self, state: PlanState) -> PlanState {
        tracing::info!("phase: extracting intent");
        let started = Instant::now();

        let user_payload = format!("Extract intent from: {}", state.user_query);

        let value = match self
            .ai
            .complete_json(INTENT_SYSTEM_PROMPT, &user_payload)
            .await
        {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(error = %e, "intent extraction failed");
                return state.fail(format!("Failed to extract intent: {e}"));
            }
        };

        let intent: TravelIntent = match serde_json::from_value(value) {
            Ok(intent) => intent,
            Err(e) => {
                tracing::error!(error = %e, "intent did not match the expected shape");
                return state.fail(format!("Failed to extract intent: {e}"));
            }
        };

        PlanState {
            from_location: intent.from_location,
            to_location: intent.to_location,
            travel_date: intent.travel_date,
            time_preference: intent.time_preference,
            budget_preference: intent.budget_preference,
            direct_only: intent.direct_only,
            current_step: WorkflowStep::IntentExtracted,
            processing_time: started.elapsed().as_secs_f64(),
            timestamp: Local::now().to_rfc3339(),
            ..state
        }
    }

    /// Phase 2: require both locations, then resolve them to station codes.
    ///
    /// Missing locations are a clarification request, not an error: the
    /// user can fix them by resupplying input.
    async fn validate_locations(&self, state: PlanState) -> PlanState {
        tracing::info!("phase: validating locations");

        if !has_text(&state.from_location) || !has_text(&state.to_location) {
            return PlanState {
                needs_clarification: true,
                clarification_message: Some(CLARIFICATION_MESSAGE.to_string()),
                current_step: WorkflowStep::NeedsClarification,
                ..state
            };
        }

        let from = self
            .resolver
            .resolve(state.from_location.as_deref().unwrap_or_default());
        let to = self
            .resolver
            .resolve(state.to_location.as_deref().unwrap_or_default());

        tracing::info!(%from, %to, "station codes resolved");

        PlanState {
            from_station_code: Some(from),
            to_station_code: Some(to),
            current_step: WorkflowStep::LocationsValidated,
            needs_clarification: false,
            ..state
        }
    }

    /// Phase 3: fetch itineraries from the rail search client.
    async fn fetch_trains(&self, state: PlanState) -> PlanState {
        tracing::info!("phase: fetching trains");

        let (Some(from), Some(to)) = (
            state.from_station_code.clone(),
            state.to_station_code.clone(),
        ) else {
            // Codes are set by the previous phase; missing codes mean a
            // broken pipeline, not bad user input.
            return state.fail(MISSING_CODES_ERROR);
        };

        match self
            .rail
            .search(&from, &to, DEFAULT_SEARCH_WINDOW_HOURS)
            .await
        {
            Ok(outcome) => {
                let total_trains = outcome.itineraries.len();
                tracing::info!(total_trains, "trains fetched");

                PlanState {
                    available_trains: outcome.itineraries,
                    total_trains,
                    current_step: WorkflowStep::TrainsFetched,
                    ..state
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "train fetch failed");
                state.fail(format!("Failed to fetch trains: {e}"))
            }
        }
    }

    /// Phase 4: filter by time preference and sort by departure.
    ///
    /// Zero fetched itineraries is a soft error: terminal for this run,
    /// but descriptive rather than exceptional.
    fn analyze_trains(&self, state: PlanState) -> PlanState {
        tracing::info!("phase: analyzing trains");

        if state.available_trains.is_empty() {
            return PlanState {
                filtered_trains: Vec::new(),
                current_step: WorkflowStep::NoTrainsFound,
                error: Some(NO_TRAINS_ERROR.to_string()),
                ..state
            };
        }

        let filtered = filter_and_sort(&state.available_trains, state.time_preference);
        tracing::info!(
            kept = filtered.len(),
            of = state.available_trains.len(),
            preference = %state.time_preference,
            "trains filtered"
        );

        PlanState {
            filtered_trains: filtered,
            current_step: WorkflowStep::TrainsAnalyzed,
            ..state
        }
    }

    /// Phase 5: ask the model for advice over the shortlist.
    ///
    /// Once itineraries exist this phase never fails the run: a model
    /// error degrades to a fixed listing message instead.
    async fn generate_recommendations(&self, state: PlanState) -> PlanState {
        tracing::info!("phase: generating recommendations");

        if state.filtered_trains.is_empty() {
            return PlanState {
                ai_recommendation: NO_MATCH_RECOMMENDATION.to_string(),
                reasoning: NO_MATCH_REASONING.to_string(),
                top_recommendations: Vec::new(),
                current_step: WorkflowStep::Completed,
                ..state
            };
        }

        let shortlist: Vec<Itinerary> = state
            .filtered_trains
            .iter()
            .take(ADVISOR_SHORTLIST)
            .cloned()
            .collect();

        let payload = advisor_payload(&state, &shortlist);

        match self.ai.complete(ADVISOR_SYSTEM_PROMPT, &payload).await {
            Ok(text) => PlanState {
                ai_recommendation: text,
                top_recommendations: shortlist.into_iter().take(TOP_RECOMMENDATIONS).collect(),
                reasoning: ANALYSIS_REASONING.to_string(),
                current_step: WorkflowStep::Completed,
                ..state
            },
            Err(e) => {
                tracing::warn!(error = %e, "advisor call failed, degrading to fixed listing");
                PlanState {
                    ai_recommendation: FALLBACK_RECOMMENDATION.to_string(),
                    top_recommendations: shortlist.into_iter().take(TOP_RECOMMENDATIONS).collect(),
                    reasoning: FALLBACK_REASONING.to_string(),
                    current_step: WorkflowStep::Completed,
                    ..state
                }
            }
        }
    }
}

/// Build the advisor's user payload from preferences and the shortlist.
fn advisor_payload(state: &PlanState, shortlist: &[Itinerary]) -> String {
    let trains_data: Vec<String> = shortlist
        .iter()
        .enumerate()
        .map(|(i, t)| {
            format!(
                "Train {}: {} ({}) - Departs: {}, Arrives: {}, Duration: {} mins",
                i + 1,
                t.train_name.as_deref().unwrap_or("N/A"),
                t.train_number.as_deref().unwrap_or("N/A"),
                t.departure_time.as_deref().unwrap_or("N/A"),
                t.arrival_time.as_deref().unwrap_or("N/A"),
                t.duration_mins
                    .map_or_else(|| "N/A".to_string(), |d| d.to_string()),
            )
        })
        .collect();

    format!(
        "User preferences:\n\
         - From: {} ({})\n\
         - To: {} ({})\n\
         - Time preference: {}\n\
         - Budget: {}\n\
         Available trains:\n\
         {}\n\
         Provide your recommendations:",
        state.from_location.as_deref().unwrap_or("N/A"),
        state
            .from_station_code
            .as_ref()
            .map_or("N/A", |c| c.as_str()),
        state.to_location.as_deref().unwrap_or("N/A"),
        state.to_station_code.as_ref().map_or("N/A", |c| c.as_str()),
        state.time_preference,
        state.budget_preference,
        trains_data.join("\n"),
    )
}
