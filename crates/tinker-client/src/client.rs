//! # SDK Entry Point
//!
//! `TinkerPayments` wires the shared HTTP client, the token cache and the
//! transaction client together with caller-controlled lifetime. Construct one
//! instance per credential pair and share it.

use crate::auth::AuthenticationManager;
use crate::config::Config;
use crate::transactions::TransactionClient;
use crate::webhook::WebhookHandler;
use reqwest::Client;
use std::sync::Arc;
use tinker_core::Result;

/// Client for the Tinker Payments API
pub struct TinkerPayments {
    config: Config,
    auth: Arc<AuthenticationManager>,
    transactions: TransactionClient,
}

impl TinkerPayments {
    /// Create a client for the production gateway
    pub fn new(api_public_key: impl Into<String>, api_secret_key: impl Into<String>) -> Self {
        Self::with_config(Config::new(api_public_key, api_secret_key))
    }

    /// Create a client from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self::with_config(Config::from_env()?))
    }

    /// Create a client with an explicit configuration (custom base URL, sandbox)
    pub fn with_config(config: Config) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let auth = Arc::new(AuthenticationManager::new(config.clone(), client.clone()));
        let transactions = TransactionClient::new(config.clone(), client, Arc::clone(&auth));

        Self {
            config,
            auth,
            transactions,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The shared token cache
    pub fn auth(&self) -> &AuthenticationManager {
        &self.auth
    }

    /// The payment initiate/query operations
    pub fn transactions(&self) -> &TransactionClient {
        &self.transactions
    }

    /// A webhook parser (stateless, fresh per call)
    pub fn webhooks(&self) -> WebhookHandler {
        WebhookHandler::new()
    }
}
