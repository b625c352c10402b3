//! Rail search client error types.

/// Errors from the rail search HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum RailError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        /// Truncated response body, for diagnostics.
        body: Option<String>,
    },
}
