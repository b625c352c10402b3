//! Station search API client.
//!
//! Serves the direct station-lookup endpoint: free-text name in, candidate
//! stations out. The workflow engine does not use this client; it resolves
//! cities through the in-process [`CityResolver`](super::CityResolver).

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};

use super::error::StationError;

/// Default base URL for the station search API.
const DEFAULT_BASE_URL: &str = "https://irctc1.p.rapidapi.com/api/v1";

/// Default API host header value.
const DEFAULT_API_HOST: &str = "irctc1.p.rapidapi.com";

/// Maximum matches returned per query.
const MAX_MATCHES: usize = 5;

/// Wrapper for the station search response.
#[derive(Debug, Deserialize)]
pub struct StationSearchEnvelope {
    #[serde(default)]
    pub data: Vec<StationMatch>,
}

/// One candidate station for a name query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationMatch {
    /// Station code.
    pub code: Option<String>,

    /// Station name.
    pub name: Option<String>,

    /// English station name, when it differs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eng_name: Option<String>,
}

/// Configuration for the station search client.
#[derive(Debug, Clone)]
pub struct StationClientConfig {
    /// API key for the x-rapidapi-key header
    pub api_key: String,
    /// API host for the x-rapidapi-host header
    pub api_host: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StationClientConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_host: DEFAULT_API_HOST.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Client for the station search API.
#[derive(Debug, Clone)]
pub struct StationSearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl StationSearchClient {
    /// Create a new station search client.
    pub fn new(config: StationClientConfig) -> Result<Self, StationError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| StationError::Api {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert(HeaderName::from_static("x-rapidapi-key"), api_key);

        let api_host = HeaderValue::from_str(&config.api_host).map_err(|_| StationError::Api {
            status: 0,
            message: "Invalid API host format".to_string(),
        })?;
        headers.insert(HeaderName::from_static("x-rapidapi-host"), api_host);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Search for stations matching a name, returning the top matches.
    pub async fn search(&self, query: &str) -> Result<Vec<StationMatch>, StationError> {
        let url = format!("{}/searchStation", self.base_url);

        let response = self.http.get(&url).query(&[("query", query)]).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StationError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let body = response.text().await?;

        let envelope: StationSearchEnvelope =
            serde_json::from_str(&body).map_err(|e| StationError::Json {
                message: e.to_string(),
            })?;

        let mut matches = envelope.data;
        matches.truncate(MAX_MATCHES);

        Ok(matches)
    }
}
