//! Gemini REST completion client.
//!
//! Calls the `generateContent` endpoint over plain REST. The system prompt
//! and user payload are concatenated into a single content part, which is
//! how the REST transport expects instruction-style prompts.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::AiError;
use super::CompletionProvider;

/// Default base URL for the Gemini REST API.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default model identifier.
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Configuration for the Gemini client.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key passed as a query parameter
    pub api_key: String,
    /// Model identifier (defaults to gemini-2.0-flash)
    pub model: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum completion tokens
    pub max_output_tokens: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: 0.5,
            max_output_tokens: 1024,
            timeout_secs: 30,
        }
    }

    /// Set a custom model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
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

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Gemini completion client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new Gemini client with the given configuration.
    ///
    /// An empty API key is tolerated so the server can start without
    /// credentials; completion calls will fail with an API error.
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        if config.api_key.is_empty() {
            tracing::warn!("Gemini API key is empty; completion calls will fail");
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    async fn generate(&self, prompt: String) -> Result<String, AiError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_output_tokens,
            },
        };

        let url = format!(
            "{}/{}:generateContent?key={}",
            self.config.base_url, self.config.model, self.config.api_key
        );

        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let body: GenerateResponse = response.json().await?;

        let candidate = body
            .candidates
            .into_iter()
            .next()
            .ok_or(AiError::EmptyCompletion("no candidates in response"))?;

        let part = candidate
            .content
            .parts
            .into_iter()
            .next()
            .ok_or(AiError::EmptyCompletion("no parts in candidate"))?;

        Ok(part.text)
    }
}

#[async_trait::async_trait]
impl CompletionProvider for GeminiClient {
    async fn complete(&self, system_prompt: &str, user_payload: &str) -> Result<String, AiError> {
        tracing::debug!(model = %self.config.model, "sending completion request");
        self.generate(format!("{system_prompt}\n\n{user_payload}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = GeminiConfig::new("test-key");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_output_tokens, 1024);
    }

    #[test]
    fn config_builder() {
        let config = GeminiConfig::new("test-key")
            .with_model("gemini-1.5-pro")
            .with_base_url("http://localhost:8080")
            .with_timeout(60);

        assert_eq!(config.model, "gemini-1.5-pro");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn client_tolerates_empty_key() {
        let client = GeminiClient::new(GeminiConfig::new(""));
        assert!(client.is_ok());
    }

    #[test]
    fn client_creation() {
        let client = GeminiClient::new(GeminiConfig::new("test-key"));
        assert!(client.is_ok());
    }

    #[test]
    fn response_with_candidates_deserializes() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "{\"from_location\": \"Delhi\"}"}]}}
            ]
        }"#;

        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.candidates.len(), 1);
        assert_eq!(
            response.candidates[0].content.parts[0].text,
            "{\"from_location\": \"Delhi\"}"
        );
    }

    #[test]
    fn empty_response_deserializes() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(response.candidates.is_empty());
    }
}
