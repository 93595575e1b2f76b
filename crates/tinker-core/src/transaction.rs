//! # Transaction Types
//!
//! Payment state as returned by the initiate and query endpoints.
//!
//! The two endpoints return different shapes: initiation responses carry a
//! payment reference and an optional authorization URL, query responses carry
//! the settled transaction record. `Transaction` holds exactly one of the two,
//! discriminated by which call produced it.

use crate::error::Result;
use crate::fields;
use crate::status::PaymentStatus;
use serde::Serialize;
use serde_json::Value;

/// Response data from the payment-initiation endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InitiationData {
    /// Gateway-assigned reference correlating this initiation with later queries
    pub payment_reference: String,
    /// Payment status at initiation time
    pub status: PaymentStatus,
    /// Hosted authorization page, when the gateway requires customer action
    pub authorization_url: Option<String>,
}

impl InitiationData {
    /// Parse from an initiate-endpoint response body
    pub fn from_value(value: &Value) -> Result<Self> {
        let obj = fields::require_object(value, "Initiation response")?;

        Ok(Self {
            payment_reference: fields::require_str(obj, "payment_reference")?,
            status: fields::status_or_pending(obj)?,
            authorization_url: fields::opt_str(obj, "authorization_url"),
        })
    }

    /// Serialize back to the snake_case wire form
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Response data from the payment-query endpoint (and payment webhooks)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryData {
    /// Gateway-assigned transaction id
    pub id: String,
    /// Current payment status
    pub status: PaymentStatus,
    /// Merchant or gateway payment reference
    pub reference: String,
    /// Transaction amount in major units
    pub amount: f64,
    /// ISO 4217 currency code
    pub currency: String,
    /// Settlement timestamp, absent until the payment completes
    pub paid_at: Option<String>,
    /// Creation timestamp
    pub created_at: String,
    /// Gateway channel the payment was routed through (e.g. "mpesa")
    pub channel: String,
}

impl QueryData {
    /// Parse from a query-endpoint response body
    pub fn from_value(value: &Value) -> Result<Self> {
        let obj = fields::require_object(value, "Query response")?;

        Ok(Self {
            id: fields::require_str(obj, "id")?,
            status: fields::status_or_pending(obj)?,
            reference: fields::require_str(obj, "reference")?,
            amount: fields::require_amount(obj, "amount")?,
            currency: fields::require_str(obj, "currency")?,
            paid_at: fields::opt_str(obj, "paid_at"),
            created_at: fields::require_str(obj, "created_at")?,
            channel: fields::require_str(obj, "channel")?,
        })
    }

    /// Serialize back to the snake_case wire form
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Endpoint-specific transaction payload
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionData {
    /// Produced by the initiate endpoint
    Initiation(InitiationData),
    /// Produced by the query endpoint or a payment webhook
    Query(QueryData),
}

/// A payment transaction as reported by the Tinker API
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    status: PaymentStatus,
    data: TransactionData,
}

impl Transaction {
    /// Build a transaction from an initiate-endpoint response
    pub fn from_initiation(value: &Value) -> Result<Self> {
        let data = InitiationData::from_value(value)?;
        Ok(Self {
            status: data.status,
            data: TransactionData::Initiation(data),
        })
    }

    /// Build a transaction from a query-endpoint response
    pub fn from_query(value: &Value) -> Result<Self> {
        let data = QueryData::from_value(value)?;
        Ok(Self::from_query_data(data))
    }

    /// Build a transaction from an already-parsed query payload
    pub(crate) fn from_query_data(data: QueryData) -> Self {
        Self {
            status: data.status,
            data: TransactionData::Query(data),
        }
    }

    /// Current payment status
    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    /// True when the payment completed successfully
    pub fn is_successful(&self) -> bool {
        self.status == PaymentStatus::Success
    }

    /// True while the payment is awaiting completion
    pub fn is_pending(&self) -> bool {
        self.status == PaymentStatus::Pending
    }

    /// Initiation payload, when this transaction came from the initiate endpoint
    pub fn initiation_data(&self) -> Option<&InitiationData> {
        match &self.data {
            TransactionData::Initiation(data) => Some(data),
            TransactionData::Query(_) => None,
        }
    }

    /// Query payload, when this transaction came from the query endpoint
    pub fn query_data(&self) -> Option<&QueryData> {
        match &self.data {
            TransactionData::Query(data) => Some(data),
            TransactionData::Initiation(_) => None,
        }
    }
}
