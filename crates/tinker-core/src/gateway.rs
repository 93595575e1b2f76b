//! # Gateway
//!
//! The payment rails a transaction can be routed through.

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Supported payment gateways
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gateway {
    /// M-Pesa mobile money
    Mpesa,
    /// Paystack card processing
    Paystack,
    /// Stripe card processing
    Stripe,
}

impl Gateway {
    /// Returns the wire form of the gateway identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Gateway::Mpesa => "mpesa",
            Gateway::Paystack => "paystack",
            Gateway::Stripe => "stripe",
        }
    }
}

impl std::fmt::Display for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Gateway {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mpesa" => Ok(Gateway::Mpesa),
            "paystack" => Ok(Gateway::Paystack),
            "stripe" => Ok(Gateway::Stripe),
            other => Err(Error::InvalidPayload(format!("Unknown gateway: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_form() {
        assert_eq!(Gateway::Mpesa.as_str(), "mpesa");
        assert_eq!(Gateway::Paystack.to_string(), "paystack");
        assert_eq!(serde_json::to_string(&Gateway::Stripe).unwrap(), "\"stripe\"");
    }

    #[test]
    fn test_parse() {
        assert_eq!("mpesa".parse::<Gateway>().unwrap(), Gateway::Mpesa);
        assert!("paypal".parse::<Gateway>().is_err());
    }
}
