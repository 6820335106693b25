use crate::domain::ports::{CheckoutGateway, SessionDelegate};
use crate::domain::request::PaymentRequestParameters;
use crate::error::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// One scripted terminal signal, consumed per launched session.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "signal", rename_all = "lowercase")]
pub enum ScriptedOutcome {
    Success {
        #[serde(rename = "transactionRef", default)]
        transaction_ref: Option<String>,
    },
    Failure {
        code: String,
        message: String,
    },
    Cancel,
}

/// Deterministic `CheckoutGateway` used by the CLI harness and tests.
///
/// Each launched session consumes the next scripted outcome; once the
/// script is exhausted every session succeeds with a transaction reference
/// synthesized from the order reference. Signals are fired from a spawned
/// task so they reach the delegate off the caller's execution context,
/// the way a native SDK's completion would.
pub struct ScriptedCheckout {
    script: Mutex<VecDeque<ScriptedOutcome>>,
}

impl ScriptedCheckout {
    pub fn new(script: impl IntoIterator<Item = ScriptedOutcome>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
        }
    }
}

impl Default for ScriptedCheckout {
    fn default() -> Self {
        Self::new([])
    }
}

#[async_trait]
impl CheckoutGateway for ScriptedCheckout {
    async fn launch(
        &self,
        params: PaymentRequestParameters,
        delegate: Arc<dyn SessionDelegate>,
    ) -> Result<()> {
        let outcome = self
            .script
            .lock()
            .expect("script lock poisoned")
            .pop_front()
            .unwrap_or(ScriptedOutcome::Success {
                transaction_ref: None,
            });

        tokio::spawn(async move {
            match outcome {
                ScriptedOutcome::Success { transaction_ref } => {
                    let transaction_ref = transaction_ref
                        .unwrap_or_else(|| format!("TX-{}", params.order_reference));
                    delegate.on_success(transaction_ref, params.amount, HashMap::new());
                }
                ScriptedOutcome::Failure { code, message } => delegate.on_failure(code, message),
                ScriptedOutcome::Cancel => delegate.on_cancel(),
            }
        });
        Ok(())
    }
}
