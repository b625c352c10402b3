use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use trip_server::ai::{GeminiClient, GeminiConfig};
use trip_server::cache::{CacheConfig, CachedRailClient};
use trip_server::config::Settings;
use trip_server::orchestrator::TripOrchestrator;
use trip_server::rail::{RailClient, RailConfig, RailSearch};
use trip_server::stations::{CityResolver, StationClientConfig, StationSearchClient};
use trip_server::web::{AppState, create_router};
use trip_server::workflow::TripPlanner;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("trip_server=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env();

    // Model completion client
    let mut gemini_config = GeminiConfig::new(&settings.gemini_api_key);
    if let Some(model) = &settings.gemini_model {
        gemini_config = gemini_config.with_model(model);
    }
    let gemini = GeminiClient::new(gemini_config).expect("Failed to create Gemini client");

    // Rail search client, wrapped with a response cache
    let mut rail_config = RailConfig::new();
    if let Some(base_url) = &settings.rail_base_url {
        rail_config = rail_config.with_base_url(base_url);
    }
    let rail_client = RailClient::new(rail_config).expect("Failed to create rail client");
    let rail: Arc<dyn RailSearch> = Arc::new(CachedRailClient::new(
        Arc::new(rail_client),
        &CacheConfig::default(),
    ));

    // Station search client for the direct lookup endpoint
    let station_client =
        StationSearchClient::new(StationClientConfig::new(&settings.station_api_key))
            .expect("Failed to create station search client");

    // Workflow engine and orchestrator, constructed once and shared
    let planner = TripPlanner::new(Arc::new(gemini), rail.clone(), CityResolver::new());
    let orchestrator = TripOrchestrator::new(planner);

    let state = AppState::new(orchestrator, rail, station_client);
    let app = create_router(state);

    tracing::info!("Trip Planning Server listening on http://{}", settings.bind_addr);
    tracing::info!("API endpoints:");
    tracing::info!("  POST /api/v1/plan-trip              - Natural-language trip planning");
    tracing::info!("  POST /api/v1/trains/search          - Direct train search");
    tracing::info!("  GET  /api/v1/stations/search        - Station code lookup");
    tracing::info!("  GET  /api/v1/workflow/visualization - Workflow diagram");

    let listener = tokio::net::TcpListener::bind(settings.bind_addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
