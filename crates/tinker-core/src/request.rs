//! # Request DTOs
//!
//! Outbound payloads for the initiate and query endpoints.
//!
//! The initiate endpoint speaks camelCase (`merchantReference`, `callbackUrl`);
//! the query endpoint speaks snake_case (`payment_reference`). Both shapes are
//! fixed by the gateway's wire contract.

use crate::gateway::Gateway;
use serde::Serialize;
use std::collections::HashMap;

/// Payload for initiating a payment
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiatePaymentRequest {
    /// Amount in major currency units
    pub amount: f64,

    /// ISO 4217 currency code
    pub currency: String,

    /// Gateway to route the payment through
    pub gateway: Gateway,

    /// Merchant-supplied reference for correlating callbacks and queries
    pub merchant_reference: String,

    /// URL the gateway calls back with the payment result
    pub callback_url: String,

    /// Customer phone number (required by mobile-money gateways)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,

    /// Customer email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,

    /// Human-readable description shown on statements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_desc: Option<String>,

    /// Custom metadata echoed back in callbacks
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl InitiatePaymentRequest {
    /// Create a new initiation request with the required fields
    pub fn new(
        amount: f64,
        currency: impl Into<String>,
        gateway: Gateway,
        merchant_reference: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            currency: currency.into(),
            gateway,
            merchant_reference: merchant_reference.into(),
            callback_url: callback_url.into(),
            customer_phone: None,
            customer_email: None,
            transaction_desc: None,
            metadata: HashMap::new(),
        }
    }

    /// Set the customer phone number
    pub fn with_customer_phone(mut self, phone: impl Into<String>) -> Self {
        self.customer_phone = Some(phone.into());
        self
    }

    /// Set the customer email
    pub fn with_customer_email(mut self, email: impl Into<String>) -> Self {
        self.customer_email = Some(email.into());
        self
    }

    /// Set the statement description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.transaction_desc = Some(desc.into());
        self
    }

    /// Add a metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Payload for querying a payment by reference
#[derive(Debug, Clone, Serialize)]
pub struct QueryPaymentRequest {
    /// Reference returned by the initiate endpoint or supplied by the merchant
    pub payment_reference: String,

    /// Gateway the payment was routed through
    pub gateway: Gateway,
}

impl QueryPaymentRequest {
    /// Create a new query request
    pub fn new(payment_reference: impl Into<String>, gateway: Gateway) -> Self {
        Self {
            payment_reference: payment_reference.into(),
            gateway,
        }
    }
}
