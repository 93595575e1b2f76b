//! # Error Types
//!
//! Typed error handling for the Tinker Payments SDK.
//! All SDK operations return `Result<T, Error>`.

use thiserror::Error;

/// Core error type for all SDK operations
#[derive(Debug, Error)]
pub enum Error {
    /// The Tinker API rejected the request (4xx/5xx with a message)
    #[error("API error: {0}")]
    Api(String),

    /// Network/HTTP error communicating with the Tinker API
    #[error("Network error: {0}")]
    Network(String),

    /// Credential exchange failed or returned a malformed body
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Malformed or schema-violating input (bad JSON, unknown webhook source)
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Local body-read failure (e.g. non-UTF-8 webhook bytes)
    #[error("Stream error: {0}")]
    Stream(String),

    /// Local misconfiguration (missing keys, invalid base URL)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Returns true if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Network(_))
    }
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(Error::Network("timeout".into()).is_retryable());
        assert!(!Error::Api("Invalid amount".into()).is_retryable());
        assert!(!Error::Authentication("bad credentials".into()).is_retryable());
        assert!(!Error::InvalidPayload("missing field".into()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let error = Error::Api("Invalid amount".into());
        assert_eq!(error.to_string(), "API error: Invalid amount");

        let error = Error::Network("connection refused".into());
        assert_eq!(error.to_string(), "Network error: connection refused");

        let error = Error::InvalidPayload("Unknown webhook source: refund".into());
        assert_eq!(
            error.to_string(),
            "Invalid payload: Unknown webhook source: refund"
        );
    }
}
