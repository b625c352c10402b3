//! Rail search HTTP client.
//!
//! Performs a single outbound request per search with a bounded timeout
//! and no retries. Responses are normalized through
//! [`convert_search_response`](super::convert::convert_search_response)
//! and truncated to the first [`MAX_RESULTS`] itineraries.

use std::time::Duration;

use crate::domain::StationCode;

use super::convert::convert_search_response;
use super::error::RailError;
use super::types::SearchEnvelope;
use super::{RailSearch, SearchOutcome};

/// Default base URL for the rail search provider.
const DEFAULT_BASE_URL: &str = "https://cttrainsapi.confirmtkt.com/api/v1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Maximum itineraries returned per search.
pub const MAX_RESULTS: usize = 15;

/// Configuration for the rail search client.
#[derive(Debug, Clone)]
pub struct RailConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RailConfig {
    /// Create a config with production defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for RailConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Rail search API client.
#[derive(Debug, Clone)]
pub struct RailClient {
    http: reqwest::Client,
    base_url: String,
}

impl RailClient {
    /// Create a new rail search client with the given configuration.
    pub fn new(config: RailConfig) -> Result<Self, RailError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }
}

#[async_trait::async_trait]
impl RailSearch for RailClient {
    async fn search(
        &self,
        from: &StationCode,
        to: &StationCode,
        window_hours: u32,
    ) -> Result<SearchOutcome, RailError> {
        let url = format!("{}/trains/search", self.base_url);

        tracing::info!(%from, %to, window_hours, "searching trains");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("sourceStationCode", from.as_str()),
                ("destinationStationCode", to.as_str()),
                ("hours", &window_hours.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RailError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let body = response.text().await?;

        let envelope: SearchEnvelope =
            serde_json::from_str(&body).map_err(|e| RailError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        let all = convert_search_response(&envelope);
        let total_found = all.len();

        let mut itineraries = all;
        itineraries.truncate(MAX_RESULTS);

        tracing::info!(total_found, returned = itineraries.len(), "search complete");

        Ok(SearchOutcome {
            itineraries,
            total_found,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = RailConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn config_builder() {
        let config = RailConfig::new()
            .with_base_url("http://localhost:8080")
            .with_timeout(5);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn client_creation() {
        let client = RailClient::new(RailConfig::new());
        assert!(client.is_ok());
    }
}
