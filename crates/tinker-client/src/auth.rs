//! # Authentication
//!
//! Bearer-token exchange with in-process caching.
//!
//! The gateway issues short-lived bearer tokens in exchange for the
//! base64-encoded `public:secret` key pair. Tokens are cached until 60
//! seconds before expiry; the cache lock is held across a refresh so
//! concurrent callers never issue duplicate fetches.

use crate::config::Config;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tinker_core::{Error, Result};
use tokio::sync::Mutex;
use tracing::{debug, error, instrument};

/// Safety margin subtracted from the token expiry
const EXPIRY_MARGIN_SECS: i64 = 60;

/// Token lifetime assumed when the gateway omits `expires_in`
const DEFAULT_EXPIRES_IN_SECS: i64 = 3600;

/// A fetched bearer token with its absolute expiry instant
#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_valid(&self) -> bool {
        Utc::now() < self.expires_at - Duration::seconds(EXPIRY_MARGIN_SECS)
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: Option<String>,
    expires_in: Option<i64>,
}

/// Exchanges API credentials for bearer tokens, caching them until stale
pub struct AuthenticationManager {
    config: Config,
    client: Client,
    cache: Mutex<Option<CachedToken>>,
}

impl AuthenticationManager {
    /// Create a new manager sharing the given HTTP client
    pub fn new(config: Config, client: Client) -> Self {
        Self {
            config,
            client,
            cache: Mutex::new(None),
        }
    }

    /// Return a valid bearer token, fetching a fresh one only when the
    /// cached token is missing or within 60 seconds of expiry.
    #[instrument(skip(self))]
    pub async fn get_token(&self) -> Result<String> {
        let mut cache = self.cache.lock().await;

        if let Some(cached) = cache.as_ref() {
            if cached.is_valid() {
                return Ok(cached.token.clone());
            }
        }

        let fetched = self.fetch_token().await?;
        let token = fetched.token.clone();
        *cache = Some(fetched);

        Ok(token)
    }

    async fn fetch_token(&self) -> Result<CachedToken> {
        let credentials = STANDARD.encode(format!(
            "{}:{}",
            self.config.api_public_key, self.config.api_secret_key
        ));

        debug!("fetching bearer token from {}", self.config.auth_token_url());

        let response = self
            .client
            .post(self.config.auth_token_url())
            .header("Accept", "application/json")
            .form(&[("credentials", credentials.as_str())])
            .send()
            .await
            .map_err(|e| Error::Network(format!("Failed to authenticate: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(format!("Failed to authenticate: {e}")))?;

        if status.as_u16() >= 400 {
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
                .unwrap_or_else(|| "Authentication failed".to_string());
            error!("token exchange rejected: status={status}, message={message}");
            return Err(Error::Authentication(message));
        }

        let parsed: TokenResponse = serde_json::from_str(&body).map_err(|_| {
            Error::Authentication("Invalid authentication response: token missing".to_string())
        })?;

        let token = parsed.token.ok_or_else(|| {
            Error::Authentication("Invalid authentication response: token missing".to_string())
        })?;
        let expires_in = parsed.expires_in.unwrap_or(DEFAULT_EXPIRES_IN_SECS);

        debug!("bearer token fetched, expires in {expires_in}s");

        Ok(CachedToken {
            token,
            expires_at: Utc::now() + Duration::seconds(expires_in),
        })
    }
}
