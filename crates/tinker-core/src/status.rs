//! # Payment Status
//!
//! The fixed payment-state enumeration returned by the Tinker API.
//! Unknown status values are a hard parse error, never a silent default.

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Payment state as reported by initiate/query responses and webhooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Payment initiated, awaiting completion
    Pending,
    /// Payment completed successfully
    Success,
    /// Customer or gateway cancelled the payment
    Cancelled,
    /// Payment failed
    Failed,
}

impl PaymentStatus {
    /// Returns the wire form of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Success => "success",
            PaymentStatus::Cancelled => "cancelled",
            PaymentStatus::Failed => "failed",
        }
    }

    /// Returns true once the gateway will no longer change this status
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PaymentStatus::Pending)
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "success" => Ok(PaymentStatus::Success),
            "cancelled" => Ok(PaymentStatus::Cancelled),
            "failed" => Ok(PaymentStatus::Failed),
            other => Err(Error::InvalidPayload(format!(
                "Unknown payment status: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_statuses() {
        assert_eq!(
            "pending".parse::<PaymentStatus>().unwrap(),
            PaymentStatus::Pending
        );
        assert_eq!(
            "success".parse::<PaymentStatus>().unwrap(),
            PaymentStatus::Success
        );
        assert_eq!(
            "cancelled".parse::<PaymentStatus>().unwrap(),
            PaymentStatus::Cancelled
        );
        assert_eq!(
            "failed".parse::<PaymentStatus>().unwrap(),
            PaymentStatus::Failed
        );
    }

    #[test]
    fn test_unknown_status_is_an_error() {
        let err = "successful".parse::<PaymentStatus>().unwrap_err();
        assert!(matches!(err, Error::InvalidPayload(_)));
        assert!(err.to_string().contains("successful"));
    }

    #[test]
    fn test_terminal_states() {
        assert!(!PaymentStatus::Pending.is_terminal());
        assert!(PaymentStatus::Success.is_terminal());
        assert!(PaymentStatus::Cancelled.is_terminal());
        assert!(PaymentStatus::Failed.is_terminal());
    }

    #[test]
    fn test_serde_wire_form() {
        let json = serde_json::to_string(&PaymentStatus::Success).unwrap();
        assert_eq!(json, "\"success\"");

        let status: PaymentStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, PaymentStatus::Cancelled);
    }
}
