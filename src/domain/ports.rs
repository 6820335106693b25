use crate::domain::invocation::InvocationId;
use crate::domain::outcome::PaymentOutcome;
use crate::domain::request::PaymentRequestParameters;
use crate::domain::response::BridgeResponse;
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

/// Single-shot result callback handed to the session adapter; invoked at
/// most once with the terminal outcome of the session it started.
pub type OutcomeCallback = Box<dyn FnOnce(PaymentOutcome) + Send + 'static>;

/// The external checkout SDK's session-start entry point.
///
/// `launch` returns once the native flow is running; the terminal signal
/// arrives later through the registered delegate, possibly on another
/// thread. The SDK fires at most one terminal signal per launched flow,
/// and none at all when `launch` returns an error.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    async fn launch(
        &self,
        params: PaymentRequestParameters,
        delegate: Arc<dyn SessionDelegate>,
    ) -> Result<()>;
}

/// The capability set the SDK invokes to end a session: exactly one of
/// these fires per launched flow.
pub trait SessionDelegate: Send + Sync {
    fn on_success(
        &self,
        transaction_ref: String,
        amount: Decimal,
        metadata: HashMap<String, String>,
    );
    fn on_failure(&self, code: String, message: String);
    fn on_cancel(&self);
}

/// The hosting runtime's response channel. `respond` must not block.
pub trait ResponseSink: Send + Sync {
    fn respond(&self, invocation_id: &InvocationId, response: BridgeResponse);
}
