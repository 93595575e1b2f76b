//! Field extraction helpers for untrusted JSON payloads.
//!
//! Required fields fail hard with a named `InvalidPayload` error; optional
//! fields fall back to the documented default.

use crate::error::{Error, Result};
use crate::status::PaymentStatus;
use serde_json::{Map, Value};

/// Extract a required string field
pub(crate) fn require_str(obj: &Map<String, Value>, key: &str) -> Result<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or_else(|| Error::InvalidPayload(format!("Missing required field: {key}")))
}

/// Extract an optional string field
pub(crate) fn opt_str(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(String::from)
}

/// Extract an optional string field, falling back to a default
pub(crate) fn str_or(obj: &Map<String, Value>, key: &str, default: &str) -> String {
    opt_str(obj, key).unwrap_or_else(|| default.to_string())
}

/// Extract a required amount, coercing JSON numbers and numeric strings
pub(crate) fn require_amount(obj: &Map<String, Value>, key: &str) -> Result<f64> {
    match obj.get(key) {
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| Error::InvalidPayload(format!("Invalid amount in field: {key}"))),
        Some(Value::String(s)) => s
            .parse::<f64>()
            .map_err(|_| Error::InvalidPayload(format!("Invalid amount in field: {key}"))),
        _ => Err(Error::InvalidPayload(format!(
            "Missing required field: {key}"
        ))),
    }
}

/// Extract a payment status, defaulting to `Pending` when the field is absent.
/// A present-but-unknown value is still a hard error.
pub(crate) fn status_or_pending(obj: &Map<String, Value>) -> Result<PaymentStatus> {
    match obj.get("status").and_then(Value::as_str) {
        Some(s) => s.parse(),
        None => Ok(PaymentStatus::Pending),
    }
}

/// Require the value to be a JSON object
pub(crate) fn require_object<'a>(value: &'a Value, context: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| Error::InvalidPayload(format!("{context} must be an object")))
}
