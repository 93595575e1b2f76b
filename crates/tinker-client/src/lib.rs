//! # tinker-client
//!
//! HTTP client for the Tinker Payments API.
//!
//! This crate provides:
//!
//! 1. **TinkerPayments** - the SDK entry point
//!    - Bearer-token authentication with in-process caching
//!    - Payment initiation and query operations
//!    - Webhook payload parsing
//!
//! 2. **WebhookHandler** - standalone parser for inbound notifications
//!    - Source-discriminated typed payloads
//!    - Optional HMAC-SHA256 signature verification
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tinker_client::TinkerPayments;
//! use tinker_core::{Gateway, InitiatePaymentRequest, QueryPaymentRequest};
//!
//! let sdk = TinkerPayments::new("pk_live_...", "sk_live_...");
//!
//! // Initiate a payment
//! let request = InitiatePaymentRequest::new(
//!     150.0,
//!     "KES",
//!     Gateway::Mpesa,
//!     "ORDER-001",
//!     "https://merchant.example/callback",
//! )
//! .with_customer_phone("+254700000000");
//!
//! let transaction = sdk.transactions().initiate(&request).await?;
//! let reference = &transaction.initiation_data().unwrap().payment_reference;
//!
//! // Query it later
//! let request = QueryPaymentRequest::new(reference, Gateway::Mpesa);
//! let transaction = sdk.transactions().query(&request).await?;
//! if transaction.is_successful() {
//!     // fulfill the order
//! }
//! ```
//!
//! ## Webhook Handling
//!
//! ```rust,ignore
//! use tinker_client::TinkerPayments;
//!
//! // In your webhook endpoint:
//! let event = sdk.webhooks().handle(&body)?;
//! if event.security.verify(body.as_bytes(), &webhook_secret) {
//!     if let Some(transaction) = event.to_transaction() {
//!         // payment update
//!     }
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod transactions;
pub mod webhook;

// Re-exports
pub use auth::AuthenticationManager;
pub use client::TinkerPayments;
pub use config::Config;
pub use transactions::TransactionClient;
pub use webhook::WebhookHandler;

// Core types callers interact with
pub use tinker_core::{Error, Result};
