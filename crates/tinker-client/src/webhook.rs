//! # Webhook Handling
//!
//! Parses untrusted inbound webhook payloads into typed `WebhookEvent`s.
//! Parsing is a single pass: any malformed input fails immediately and no
//! partial event is ever returned.

use serde_json::Value;
use tinker_core::{Error, Result, Transaction, WebhookEvent};
use tracing::debug;

/// Stateless parser for inbound Tinker webhook notifications
#[derive(Debug, Default)]
pub struct WebhookHandler;

impl WebhookHandler {
    /// Create a new handler
    pub fn new() -> Self {
        Self
    }

    /// Parse a raw JSON payload into a validated event
    pub fn handle(&self, payload: &str) -> Result<WebhookEvent> {
        let value: Value = serde_json::from_str(payload)
            .map_err(|e| Error::InvalidPayload(format!("Invalid JSON payload: {e}")))?;
        self.handle_value(&value)
    }

    /// Parse an already-decoded payload into a validated event
    pub fn handle_value(&self, payload: &Value) -> Result<WebhookEvent> {
        let event = WebhookEvent::from_value(payload)?;
        debug!(
            "parsed webhook event: id={}, source={}",
            event.id,
            event.source()
        );
        Ok(event)
    }

    /// Parse a raw request body.
    ///
    /// Bodies that are not valid UTF-8 fail with a stream error before any
    /// JSON parsing is attempted.
    pub fn handle_bytes(&self, payload: &[u8]) -> Result<WebhookEvent> {
        let text = std::str::from_utf8(payload)
            .map_err(|e| Error::Stream(format!("Unable to read webhook request body: {e}")))?;
        self.handle(text)
    }

    /// Parse a payload and derive a `Transaction` from it.
    ///
    /// Returns `None` for events that are not payment-sourced.
    pub fn handle_as_transaction(&self, payload: &str) -> Result<Option<Transaction>> {
        Ok(self.handle(payload)?.to_transaction())
    }
}
