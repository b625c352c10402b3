//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domain::StationCode;
use crate::orchestrator::TripPlanResponse;

use super::dto::*;
use super::state::AppState;

/// Default search window for the direct-search endpoint, in hours.
const DEFAULT_DIRECT_WINDOW_HOURS: u32 = 24;

/// Largest accepted search window, in hours.
const MAX_DIRECT_WINDOW_HOURS: u32 = 72;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1", get(api_info))
        .route("/api/v1/health", get(api_health))
        .route("/api/v1/plan-trip", post(plan_trip))
        .route("/api/v1/trains/search", post(search_trains_direct))
        .route("/api/v1/stations/search", get(search_stations))
        .route("/api/v1/workflow/visualization", get(workflow_visualization))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness probe.
async fn health() -> &'static str {
    "ok"
}

/// Plan a trip from a natural-language query.
async fn plan_trip(
    State(state): State<AppState>,
    Json(request): Json<TripPlanRequest>,
) -> Json<TripPlanResponse> {
    Json(state.orchestrator.plan_trip(&request.query).await)
}

/// Search trains directly by station codes, bypassing the model.
async fn search_trains_direct(
    State(state): State<AppState>,
    Json(request): Json<DirectSearchRequest>,
) -> Json<DirectSearchResponse> {
    let from = match StationCode::parse_normalized(&request.from_station) {
        Ok(code) => code,
        Err(e) => {
            return Json(DirectSearchResponse::failure(format!(
                "Invalid source station code '{}': {e}",
                request.from_station
            )));
        }
    };

    let to = match StationCode::parse_normalized(&request.to_station) {
        Ok(code) => code,
        Err(e) => {
            return Json(DirectSearchResponse::failure(format!(
                "Invalid destination station code '{}': {e}",
                request.to_station
            )));
        }
    };

    let hours = request
        .hours
        .unwrap_or(DEFAULT_DIRECT_WINDOW_HOURS)
        .clamp(1, MAX_DIRECT_WINDOW_HOURS);

    match state.rail.search(&from, &to, hours).await {
        Ok(outcome) => Json(DirectSearchResponse::Success {
            success: true,
            total_trains: outcome.itineraries.len(),
            trains: outcome.itineraries,
            from_station: from.as_str().to_string(),
            to_station: to.as_str().to_string(),
        }),
        Err(e) => {
            tracing::error!(error = %e, "direct train search failed");
            Json(DirectSearchResponse::failure(e.to_string()))
        }
    }
}

/// Search station codes by name.
async fn search_stations(
    State(state): State<AppState>,
    Query(params): Query<StationSearchParams>,
) -> Json<StationSearchResponse> {
    match state.stations.search(&params.query).await {
        Ok(stations) => Json(StationSearchResponse::Success {
            success: true,
            stations,
        }),
        Err(e) => {
            tracing::error!(error = %e, "station search failed");
            Json(StationSearchResponse::Failure {
                success: false,
                error: e.to_string(),
                stations: Vec::new(),
            })
        }
    }
}

/// Textual rendering of the planning workflow.
async fn workflow_visualization(State(state): State<AppState>) -> Json<WorkflowDiagramResponse> {
    Json(WorkflowDiagramResponse {
        success: true,
        workflow: state.orchestrator.describe_workflow(),
    })
}

/// API health descriptor.
async fn api_health() -> Json<ApiHealthResponse> {
    Json(ApiHealthResponse {
        status: "healthy",
        service: "Trip Planning Server",
        features: &[
            "Natural language trip planning",
            "AI-powered recommendations",
            "Real-time train data",
            "Intelligent intent extraction",
            "Multi-step workflow orchestration",
        ],
    })
}

/// API info payload.
async fn api_info() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        name: "Trip Planning API",
        version: env!("CARGO_PKG_VERSION"),
        description: "Intelligent train travel planning from natural-language queries",
        endpoints: EndpointListing {
            main: "/api/v1/plan-trip",
            direct_search: "/api/v1/trains/search",
            station_search: "/api/v1/stations/search",
            workflow: "/api/v1/workflow/visualization",
            health: "/api/v1/health",
        },
    })
}
