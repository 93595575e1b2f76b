//! # Client Configuration
//!
//! API credentials and endpoint layout for the Tinker gateway.
//! The auth-token endpoint lives at the base URL root; everything else is
//! served under the `/api` prefix.

use std::env;
use tinker_core::{Error, Result};

/// Production base URL of the Tinker payment gateway
pub const DEFAULT_BASE_URL: &str = "https://payments.tinker.co.ke";

/// Token-exchange endpoint path (not under the `/api` prefix)
pub const AUTH_TOKEN_PATH: &str = "/auth/token";

/// Payment-initiation endpoint path
pub const PAYMENT_INITIATE_PATH: &str = "/payment/initiate";

/// Payment-query endpoint path
pub const PAYMENT_QUERY_PATH: &str = "/payment/query";

/// Tinker API configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API public key (pk_test_... or pk_live_...)
    pub api_public_key: String,

    /// API secret key (sk_test_... or sk_live_...)
    pub api_secret_key: String,

    /// API base URL (for testing/sandbox)
    pub base_url: String,
}

impl Config {
    /// Create config with explicit credentials
    pub fn new(api_public_key: impl Into<String>, api_secret_key: impl Into<String>) -> Self {
        Self {
            api_public_key: api_public_key.into(),
            api_secret_key: api_secret_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `TINKER_API_PUBLIC_KEY`
    /// - `TINKER_API_SECRET_KEY`
    ///
    /// Optional:
    /// - `TINKER_BASE_URL` (defaults to the production gateway)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_public_key = env::var("TINKER_API_PUBLIC_KEY")
            .map_err(|_| Error::Configuration("TINKER_API_PUBLIC_KEY not set".to_string()))?;

        let api_secret_key = env::var("TINKER_API_SECRET_KEY")
            .map_err(|_| Error::Configuration("TINKER_API_SECRET_KEY not set".to_string()))?;

        if api_public_key.is_empty() || api_secret_key.is_empty() {
            return Err(Error::Configuration(
                "Tinker API keys must not be empty".to_string(),
            ));
        }

        let config = Self::new(api_public_key, api_secret_key);
        match env::var("TINKER_BASE_URL") {
            Ok(url) if !url.is_empty() => Ok(config.with_base_url(url)),
            _ => Ok(config),
        }
    }

    /// Builder: set a custom base URL (for testing/sandbox)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.api_secret_key.starts_with("sk_test_")
    }

    /// Full URL of the token-exchange endpoint
    pub fn auth_token_url(&self) -> String {
        format!("{}{}", self.base_url, AUTH_TOKEN_PATH)
    }

    /// Full URL of an API endpoint under the `/api` prefix
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_layout() {
        let config = Config::new("pk_test_123", "sk_test_456");

        assert_eq!(
            config.auth_token_url(),
            "https://payments.tinker.co.ke/auth/token"
        );
        assert_eq!(
            config.api_url(PAYMENT_INITIATE_PATH),
            "https://payments.tinker.co.ke/api/payment/initiate"
        );
        assert_eq!(
            config.api_url("payment/query"),
            "https://payments.tinker.co.ke/api/payment/query"
        );
    }

    #[test]
    fn test_base_url_override_trims_trailing_slash() {
        let config = Config::new("pk_test_123", "sk_test_456")
            .with_base_url("http://127.0.0.1:8080/");

        assert_eq!(config.auth_token_url(), "http://127.0.0.1:8080/auth/token");
        assert_eq!(
            config.api_url(PAYMENT_QUERY_PATH),
            "http://127.0.0.1:8080/api/payment/query"
        );
    }

    #[test]
    fn test_test_mode_detection() {
        assert!(Config::new("pk_test_123", "sk_test_456").is_test_mode());
        assert!(!Config::new("pk_live_123", "sk_live_456").is_test_mode());
    }

    #[test]
    fn test_from_env_missing_key() {
        env::remove_var("TINKER_API_PUBLIC_KEY");

        let result = Config::from_env();
        assert!(result.is_err());
    }
}
