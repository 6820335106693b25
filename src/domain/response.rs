use crate::domain::outcome::PaymentOutcome;
use crate::error::BridgeError;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

/// Outbound structured message to the hosting runtime: exactly one per
/// accepted invocation, shaped `{ outcome: "ok"|"error"|"cancelled", payload? }`.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "outcome", content = "payload", rename_all = "lowercase")]
pub enum BridgeResponse {
    Ok(SuccessPayload),
    Error(ErrorPayload),
    Cancelled,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuccessPayload {
    pub transaction_ref: String,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ErrorPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub message: String,
}

impl BridgeResponse {
    /// Translates a terminal session outcome into its response shape.
    pub fn from_outcome(outcome: PaymentOutcome) -> Self {
        match outcome {
            PaymentOutcome::Success {
                transaction_ref,
                amount,
                metadata,
            } => Self::Ok(SuccessPayload {
                transaction_ref,
                amount,
                metadata,
            }),
            PaymentOutcome::Failure { code, message } => Self::Error(ErrorPayload {
                code: Some(code),
                message,
            }),
            PaymentOutcome::Cancelled => Self::Cancelled,
        }
    }

    /// Synchronous rejection of an invocation that never reached the SDK.
    pub fn rejection(err: &BridgeError) -> Self {
        Self::Error(ErrorPayload {
            code: None,
            message: err.to_string(),
        })
    }
}
