//! # tinker-core
//!
//! Core types and errors for the Tinker Payments SDK.
//!
//! This crate provides:
//! - `Transaction` and its endpoint-specific payloads (`InitiationData`, `QueryData`)
//! - `InitiatePaymentRequest` and `QueryPaymentRequest` outbound DTOs
//! - `WebhookEvent` and the source-discriminated webhook payload model
//! - `PaymentStatus` and `Gateway` enumerations
//! - `Error` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use tinker_core::{Gateway, InitiatePaymentRequest, WebhookEvent};
//!
//! // Build an initiation request
//! let request = InitiatePaymentRequest::new(
//!     150.0,
//!     "KES",
//!     Gateway::Mpesa,
//!     "ORDER-001",
//!     "https://merchant.example/callback",
//! )
//! .with_customer_phone("+254700000000");
//!
//! // Parse an inbound webhook payload
//! let event = WebhookEvent::from_value(&payload)?;
//! if let Some(transaction) = event.to_transaction() {
//!     println!("payment {} is {}", event.id, transaction.status());
//! }
//! ```

pub mod error;
mod fields;
pub mod gateway;
pub mod request;
pub mod status;
pub mod transaction;
pub mod webhook;

// Re-exports for convenience
pub use error::{Error, Result};
pub use gateway::Gateway;
pub use request::{InitiatePaymentRequest, QueryPaymentRequest};
pub use status::PaymentStatus;
pub use transaction::{InitiationData, QueryData, Transaction, TransactionData};
pub use webhook::{
    InvoiceEventData, PaymentEventData, SettlementEventData, SubscriptionEventData, WebhookEvent,
    WebhookEventData, WebhookMeta, WebhookSecurity,
};
