use crate::domain::outcome::PaymentOutcome;
use crate::domain::ports::{CheckoutGateway, OutcomeCallback, SessionDelegate};
use crate::domain::request::PaymentRequestParameters;
use crate::error::{BridgeError, Result};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Wraps the external checkout SDK's session object.
///
/// `SessionAdapter` registers itself as the exclusive recipient of the
/// SDK's three terminal signals and forwards them to the caller as a
/// single `PaymentOutcome`. The `active` slot holds the pending result
/// callback; taking it on the first signal enforces at-most-once delivery
/// even if the SDK misbehaves and fires twice.
pub struct SessionAdapter {
    gateway: Arc<dyn CheckoutGateway>,
    active: Mutex<Option<OutcomeCallback>>,
}

impl SessionAdapter {
    pub fn new(gateway: Arc<dyn CheckoutGateway>) -> Arc<Self> {
        Arc::new(Self {
            gateway,
            active: Mutex::new(None),
        })
    }

    /// Starts one native checkout flow.
    ///
    /// Fails with `SessionAlreadyActive` while a previous session on this
    /// adapter has not reached a terminal state; a second native flow is
    /// never started. On a launch error the parked callback is dropped and
    /// the adapter is ready for the next attempt.
    pub async fn start_session(
        self: &Arc<Self>,
        params: PaymentRequestParameters,
        on_outcome: OutcomeCallback,
    ) -> Result<()> {
        {
            let mut active = self.active.lock().expect("active session lock poisoned");
            if active.is_some() {
                return Err(BridgeError::SessionAlreadyActive);
            }
            *active = Some(on_outcome);
        }

        let delegate: Arc<dyn SessionDelegate> = Arc::clone(self) as Arc<dyn SessionDelegate>;
        if let Err(err) = self.gateway.launch(params, delegate).await {
            // No signal will arrive for a flow that failed to launch.
            self.active
                .lock()
                .expect("active session lock poisoned")
                .take();
            return Err(err);
        }
        Ok(())
    }

    fn deliver(&self, outcome: PaymentOutcome) {
        let callback = self
            .active
            .lock()
            .expect("active session lock poisoned")
            .take();
        match callback {
            Some(on_outcome) => on_outcome(outcome),
            None => tracing::warn!("terminal signal for an already resolved session, ignoring"),
        }
    }
}

impl SessionDelegate for SessionAdapter {
    fn on_success(
        &self,
        transaction_ref: String,
        amount: Decimal,
        metadata: HashMap<String, String>,
    ) {
        self.deliver(PaymentOutcome::Success {
            transaction_ref,
            amount,
            metadata,
        });
    }

    fn on_failure(&self, code: String, message: String) {
        self.deliver(PaymentOutcome::Failure { code, message });
    }

    fn on_cancel(&self) {
        self.deliver(PaymentOutcome::Cancelled);
    }
}
