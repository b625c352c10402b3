//! Server settings loaded from the environment.

use std::net::SocketAddr;

/// Environment-derived settings for the composition root.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Gemini API key (`GEMINI_API_KEY`). Model calls fail without it.
    pub gemini_api_key: String,

    /// Gemini model override (`GEMINI_MODEL`), if set.
    pub gemini_model: Option<String>,

    /// Rail search base URL override (`RAIL_API_BASE_URL`), if set.
    pub rail_base_url: Option<String>,

    /// Station search API key (`RAPIDAPI_KEY`).
    pub station_api_key: String,

    /// Address to bind the HTTP server on.
    pub bind_addr: SocketAddr,
}

impl Settings {
    /// Load settings from environment variables.
    ///
    /// Missing API keys produce a warning rather than a startup failure,
    /// matching a development workflow where only some endpoints are
    /// exercised.
    pub fn from_env() -> Self {
        let gemini_api_key = std::env::var("GEMINI_API_KEY").unwrap_or_else(|_| {
            tracing::warn!("GEMINI_API_KEY not set; model calls will fail");
            String::new()
        });

        let station_api_key = std::env::var("RAPIDAPI_KEY").unwrap_or_else(|_| {
            tracing::warn!("RAPIDAPI_KEY not set; station search will fail");
            String::new()
        });

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        Self {
            gemini_api_key,
            gemini_model: std::env::var("GEMINI_MODEL").ok(),
            rail_base_url: std::env::var("RAIL_API_BASE_URL").ok(),
            station_api_key,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], port)),
        }
    }
}
