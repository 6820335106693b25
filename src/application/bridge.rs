use crate::application::adapter::SessionAdapter;
use crate::domain::invocation::InvocationId;
use crate::domain::outcome::PaymentOutcome;
use crate::domain::ports::ResponseSink;
use crate::domain::request::PaymentRequestParameters;
use crate::domain::response::BridgeResponse;
use crate::error::BridgeError;
use std::sync::{Arc, Mutex};

/// Correlates one in-flight invocation with the terminal outcome of the
/// checkout session it started.
///
/// The bridge is long-lived and cycles between idle (`pending` empty) and
/// awaiting-outcome (`pending` holds the invocation id). At most one
/// invocation is in flight at a time; a concurrent start is rejected with
/// an immediate error response and leaves the pending one untouched.
pub struct InvocationBridge {
    adapter: Arc<SessionAdapter>,
    sink: Arc<dyn ResponseSink>,
    pending: Mutex<Option<InvocationId>>,
}

impl InvocationBridge {
    pub fn new(adapter: Arc<SessionAdapter>, sink: Arc<dyn ResponseSink>) -> Arc<Self> {
        Arc::new(Self {
            adapter,
            sink,
            pending: Mutex::new(None),
        })
    }

    /// Handles one `startPayment` invocation from the hosting runtime.
    ///
    /// Every invocation receives exactly one response: malformed parameters
    /// and concurrent starts are rejected synchronously, accepted ones
    /// resolve later when the session's terminal signal arrives.
    pub async fn handle_start_payment(
        self: &Arc<Self>,
        invocation_id: InvocationId,
        parameters: serde_json::Value,
    ) {
        let params = match PaymentRequestParameters::from_value(parameters) {
            Ok(params) => params,
            Err(err) => {
                self.sink
                    .respond(&invocation_id, BridgeResponse::rejection(&err));
                return;
            }
        };

        let accepted = {
            let mut pending = self.pending.lock().expect("pending slot lock poisoned");
            if pending.is_some() {
                false
            } else {
                *pending = Some(invocation_id.clone());
                true
            }
        };
        if !accepted {
            self.sink.respond(
                &invocation_id,
                BridgeResponse::rejection(&BridgeError::SessionAlreadyActive),
            );
            return;
        }

        let bridge = Arc::clone(self);
        let on_outcome = Box::new(move |outcome| bridge.complete(outcome));
        if let Err(err) = self.adapter.start_session(params, on_outcome).await {
            // The flow never launched, so the invocation parked above is
            // taken back and answered here.
            let stale = self.pending.lock().expect("pending slot lock poisoned").take();
            if let Some(invocation_id) = stale {
                self.sink
                    .respond(&invocation_id, BridgeResponse::rejection(&err));
            }
        }
    }

    /// Resolves the pending invocation with the session's terminal outcome.
    ///
    /// The slot is cleared before the response is emitted so a re-entrant
    /// `handle_start_payment` from the caller is not blocked by a stale slot.
    fn complete(&self, outcome: PaymentOutcome) {
        let invocation_id = self.pending.lock().expect("pending slot lock poisoned").take();
        let Some(invocation_id) = invocation_id else {
            tracing::warn!("payment outcome with no pending invocation, ignoring");
            return;
        };
        self.sink
            .respond(&invocation_id, BridgeResponse::from_outcome(outcome));
    }
}
