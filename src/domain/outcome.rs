use rust_decimal::Decimal;
use std::collections::HashMap;

/// Terminal result of one checkout session.
///
/// Produced exactly once per session by the adapter and consumed exactly
/// once by the bridge. Cancellation is a distinct outcome, not a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentOutcome {
    Success {
        transaction_ref: String,
        amount: Decimal,
        metadata: HashMap<String, String>,
    },
    Failure {
        code: String,
        message: String,
    },
    Cancelled,
}
