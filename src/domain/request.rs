use crate::error::{BridgeError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Caller-supplied configuration for one checkout session.
///
/// Immutable once handed to the session adapter.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequestParameters {
    pub amount: Decimal,
    pub currency: String,
    pub order_reference: String,
    #[serde(default)]
    pub session_token: Option<String>,
}

impl PaymentRequestParameters {
    /// Parses and validates the raw parameter mapping from the hosting runtime.
    ///
    /// Field constraints: `amount` positive, `currency` a 3-letter ISO code,
    /// `orderReference` non-empty.
    pub fn from_value(raw: serde_json::Value) -> Result<Self> {
        let params: Self = serde_json::from_value(raw)
            .map_err(|e| BridgeError::MalformedRequest(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    fn validate(&self) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(BridgeError::MalformedRequest("invalid amount".to_owned()));
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(BridgeError::MalformedRequest("invalid currency".to_owned()));
        }
        if self.order_reference.is_empty() {
            return Err(BridgeError::MalformedRequest(
                "missing order reference".to_owned(),
            ));
        }
        Ok(())
    }
}
