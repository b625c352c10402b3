//! Completion provider error types.

/// Errors from a language-model completion provider.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The response carried no usable completion text
    #[error("empty completion: {0}")]
    EmptyCompletion(&'static str),

    /// Structured output could not be decoded as JSON
    #[error("malformed structured output: {message}")]
    Decode {
        message: String,
        /// Truncated completion text, for diagnostics.
        body: Option<String>,
    },
}
