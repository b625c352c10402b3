//! Station search client error types.

/// Errors from the station search HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StationError::Api {
            status: 401,
            message: "invalid key".into(),
        };
        assert_eq!(err.to_string(), "API error 401: invalid key");
    }
}
