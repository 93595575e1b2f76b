//! # Webhook Event Types
//!
//! Typed model for inbound Tinker webhook notifications.
//!
//! Every webhook envelope carries `id`, `type`, `source` and `timestamp`,
//! plus a `data` block whose shape is selected by `source` alone - the four
//! payload variants are mutually exclusive. `meta` and `security` blocks are
//! optional and default to empty structures.

use crate::error::{Error, Result};
use crate::fields;
use crate::status::PaymentStatus;
use crate::transaction::{QueryData, Transaction};
use serde::Serialize;
use serde_json::{Map, Value};

/// Payment-sourced webhook payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentEventData {
    /// Gateway-assigned transaction id
    pub id: String,
    /// Payment status at notification time
    pub status: PaymentStatus,
    /// Payment reference
    pub reference: String,
    /// Amount in major units
    pub amount: f64,
    /// ISO 4217 currency code
    pub currency: String,
    /// Gateway channel the payment was routed through
    pub channel: String,
    /// Creation timestamp
    pub created_at: String,
    /// Settlement timestamp, absent until the payment completes
    pub paid_at: Option<String>,
}

impl PaymentEventData {
    fn from_object(obj: &Map<String, Value>) -> Result<Self> {
        Ok(Self {
            id: fields::require_str(obj, "id")?,
            status: fields::status_or_pending(obj)?,
            reference: fields::require_str(obj, "reference")?,
            amount: fields::require_amount(obj, "amount")?,
            currency: fields::require_str(obj, "currency")?,
            channel: fields::require_str(obj, "channel")?,
            created_at: fields::require_str(obj, "created_at")?,
            paid_at: fields::opt_str(obj, "paid_at"),
        })
    }
}

/// Subscription-sourced webhook payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionEventData {
    /// Subscription id
    pub id: String,
    /// Subscription lifecycle state (gateway-defined, not the payment enum)
    pub status: String,
    /// Billing plan id
    pub plan_id: String,
    /// Customer id
    pub customer_id: String,
    /// Creation timestamp
    pub created_at: String,
    /// Cancellation timestamp, when cancelled
    pub cancelled_at: Option<String>,
    /// Pause timestamp, when paused
    pub paused_at: Option<String>,
    /// Reactivation timestamp, when resumed
    pub reactivated_at: Option<String>,
}

impl SubscriptionEventData {
    fn from_object(obj: &Map<String, Value>) -> Result<Self> {
        Ok(Self {
            id: fields::require_str(obj, "id")?,
            status: fields::require_str(obj, "status")?,
            plan_id: fields::str_or(obj, "plan_id", ""),
            customer_id: fields::str_or(obj, "customer_id", ""),
            created_at: fields::str_or(obj, "created_at", ""),
            cancelled_at: fields::opt_str(obj, "cancelled_at"),
            paused_at: fields::opt_str(obj, "paused_at"),
            reactivated_at: fields::opt_str(obj, "reactivated_at"),
        })
    }
}

/// Invoice-sourced webhook payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceEventData {
    /// Invoice id
    pub id: String,
    /// Invoice lifecycle state
    pub status: String,
    /// Human-readable invoice number
    pub invoice_number: String,
    /// Invoiced amount in major units
    pub amount: f64,
    /// ISO 4217 currency code
    pub currency: String,
    /// Subscription this invoice bills, if any
    pub subscription_id: String,
    /// Creation timestamp
    pub created_at: String,
    /// Payment timestamp, absent until paid
    pub paid_at: Option<String>,
}

impl InvoiceEventData {
    fn from_object(obj: &Map<String, Value>) -> Result<Self> {
        Ok(Self {
            id: fields::require_str(obj, "id")?,
            status: fields::require_str(obj, "status")?,
            invoice_number: fields::str_or(obj, "invoice_number", ""),
            amount: fields::require_amount(obj, "amount")?,
            currency: fields::require_str(obj, "currency")?,
            subscription_id: fields::str_or(obj, "subscription_id", ""),
            created_at: fields::str_or(obj, "created_at", ""),
            paid_at: fields::opt_str(obj, "paid_at"),
        })
    }
}

/// Settlement-sourced webhook payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettlementEventData {
    /// Settlement batch id
    pub id: String,
    /// Settlement lifecycle state
    pub status: String,
    /// Settled amount in major units
    pub amount: f64,
    /// ISO 4217 currency code
    pub currency: String,
    /// Business date the settlement covers
    pub settlement_date: String,
    /// Creation timestamp
    pub created_at: String,
    /// Processing timestamp, absent until processed
    pub processed_at: Option<String>,
}

impl SettlementEventData {
    fn from_object(obj: &Map<String, Value>) -> Result<Self> {
        Ok(Self {
            id: fields::require_str(obj, "id")?,
            status: fields::require_str(obj, "status")?,
            amount: fields::require_amount(obj, "amount")?,
            currency: fields::require_str(obj, "currency")?,
            settlement_date: fields::str_or(obj, "settlement_date", ""),
            created_at: fields::str_or(obj, "created_at", ""),
            processed_at: fields::opt_str(obj, "processed_at"),
        })
    }
}

/// Webhook payload, discriminated by the envelope's `source` field
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookEventData {
    /// `source = "payment"`
    Payment(PaymentEventData),
    /// `source = "subscription"`
    Subscription(SubscriptionEventData),
    /// `source = "invoice"`
    Invoice(InvoiceEventData),
    /// `source = "settlement"`
    Settlement(SettlementEventData),
}

impl WebhookEventData {
    fn from_source(source: &str, data: &Map<String, Value>) -> Result<Self> {
        match source {
            "payment" => Ok(Self::Payment(PaymentEventData::from_object(data)?)),
            "subscription" => Ok(Self::Subscription(SubscriptionEventData::from_object(data)?)),
            "invoice" => Ok(Self::Invoice(InvoiceEventData::from_object(data)?)),
            "settlement" => Ok(Self::Settlement(SettlementEventData::from_object(data)?)),
            other => Err(Error::InvalidPayload(format!(
                "Unknown webhook source: {other}"
            ))),
        }
    }

    /// The `source` value this payload was selected by
    pub fn source(&self) -> &'static str {
        match self {
            Self::Payment(_) => "payment",
            Self::Subscription(_) => "subscription",
            Self::Invoice(_) => "invoice",
            Self::Settlement(_) => "settlement",
        }
    }
}

/// Webhook delivery metadata
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookMeta {
    /// Webhook schema version
    pub version: String,
    /// Application the event was delivered for
    pub app_id: String,
    /// Gateway that originated the event
    pub gateway: Option<String>,
}

impl WebhookMeta {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            version: fields::str_or(obj, "version", "1.0"),
            app_id: fields::str_or(obj, "app_id", ""),
            gateway: fields::opt_str(obj, "gateway"),
        }
    }
}

impl Default for WebhookMeta {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            app_id: String::new(),
            gateway: None,
        }
    }
}

/// Webhook signature block
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookSecurity {
    /// Hex-encoded signature over the raw request body
    pub signature: String,
    /// Signature algorithm
    pub algorithm: String,
}

impl WebhookSecurity {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            signature: fields::str_or(obj, "signature", ""),
            algorithm: fields::str_or(obj, "algorithm", "HMAC-SHA256"),
        }
    }

    /// Verify the signature against the raw request body.
    ///
    /// Computes HMAC-SHA256 over `payload` with `secret`, hex-encodes the
    /// result and compares it to the delivered signature in constant time.
    pub fn verify(&self, payload: &[u8], secret: &str) -> bool {
        if self.signature.is_empty() {
            return false;
        }
        let expected = compute_hmac_sha256(secret, payload);
        constant_time_compare(&self.signature, &expected)
    }
}

impl Default for WebhookSecurity {
    fn default() -> Self {
        Self {
            signature: String::new(),
            algorithm: "HMAC-SHA256".to_string(),
        }
    }
}

/// A validated webhook notification
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookEvent {
    /// Event id
    pub id: String,
    /// Event name (e.g. "payment.completed")
    pub event_type: String,
    /// Delivery timestamp
    pub timestamp: String,
    /// Source-discriminated payload
    pub data: WebhookEventData,
    /// Delivery metadata
    pub meta: WebhookMeta,
    /// Signature block
    pub security: WebhookSecurity,
}

impl WebhookEvent {
    /// Parse a decoded webhook payload.
    ///
    /// `id`, `type`, `source`, `timestamp` and `data` are required; an
    /// unrecognized `source` is a fatal error. `meta` and `security` default
    /// to empty structures when absent.
    pub fn from_value(value: &Value) -> Result<Self> {
        let payload = fields::require_object(value, "Webhook payload")?;

        let id = fields::require_str(payload, "id")?;
        let event_type = fields::require_str(payload, "type")?;
        let source = fields::require_str(payload, "source")?;
        let timestamp = fields::require_str(payload, "timestamp")?;

        let data = payload
            .get("data")
            .ok_or_else(|| Error::InvalidPayload("Missing required field: data".to_string()))?;
        let data = fields::require_object(data, "Webhook data")?;
        let data = WebhookEventData::from_source(&source, data)?;

        let meta = payload
            .get("meta")
            .and_then(Value::as_object)
            .map(WebhookMeta::from_object)
            .unwrap_or_default();

        let security = payload
            .get("security")
            .and_then(Value::as_object)
            .map(WebhookSecurity::from_object)
            .unwrap_or_default();

        Ok(Self {
            id,
            event_type,
            timestamp,
            data,
            meta,
            security,
        })
    }

    /// The `source` value of the payload
    pub fn source(&self) -> &'static str {
        self.data.source()
    }

    /// True for payment-sourced events
    pub fn is_payment_event(&self) -> bool {
        matches!(self.data, WebhookEventData::Payment(_))
    }

    /// True for subscription-sourced events
    pub fn is_subscription_event(&self) -> bool {
        matches!(self.data, WebhookEventData::Subscription(_))
    }

    /// True for invoice-sourced events
    pub fn is_invoice_event(&self) -> bool {
        matches!(self.data, WebhookEventData::Invoice(_))
    }

    /// True for settlement-sourced events
    pub fn is_settlement_event(&self) -> bool {
        matches!(self.data, WebhookEventData::Settlement(_))
    }

    /// Payment payload, for payment-sourced events
    pub fn payment_data(&self) -> Option<&PaymentEventData> {
        match &self.data {
            WebhookEventData::Payment(data) => Some(data),
            _ => None,
        }
    }

    /// Subscription payload, for subscription-sourced events
    pub fn subscription_data(&self) -> Option<&SubscriptionEventData> {
        match &self.data {
            WebhookEventData::Subscription(data) => Some(data),
            _ => None,
        }
    }

    /// Invoice payload, for invoice-sourced events
    pub fn invoice_data(&self) -> Option<&InvoiceEventData> {
        match &self.data {
            WebhookEventData::Invoice(data) => Some(data),
            _ => None,
        }
    }

    /// Settlement payload, for settlement-sourced events
    pub fn settlement_data(&self) -> Option<&SettlementEventData> {
        match &self.data {
            WebhookEventData::Settlement(data) => Some(data),
            _ => None,
        }
    }

    /// Derive a `Transaction` from a payment-sourced event.
    ///
    /// Returns `None` for every other source.
    pub fn to_transaction(&self) -> Option<Transaction> {
        let data = self.payment_data()?;
        Some(Transaction::from_query_data(QueryData {
            id: data.id.clone(),
            status: data.status,
            reference: data.reference.clone(),
            amount: data.amount,
            currency: data.currency.clone(),
            paid_at: data.paid_at.clone(),
            created_at: data.created_at.clone(),
            channel: data.channel.clone(),
        }))
    }
}

fn compute_hmac_sha256(secret: &str, payload: &[u8]) -> String {
    use hmac::{Hmac, Mac};
    use sha2::Sha256;

    type HmacSha256 = Hmac<Sha256>;

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(payload);
    let result = mac.finalize();
    hex::encode(result.into_bytes())
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0, |acc, (x, y)| acc | (x ^ y))
        == 0
}
