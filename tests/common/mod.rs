use async_trait::async_trait;
use checkout_bridge::domain::invocation::InvocationId;
use checkout_bridge::domain::ports::{CheckoutGateway, ResponseSink, SessionDelegate};
use checkout_bridge::domain::request::PaymentRequestParameters;
use checkout_bridge::domain::response::BridgeResponse;
use checkout_bridge::error::Result;
use std::sync::{Arc, Mutex};

/// Gateway that parks each session's delegate so tests can fire the
/// terminal signals themselves.
#[derive(Default)]
pub struct ManualGateway {
    delegate: Mutex<Option<Arc<dyn SessionDelegate>>>,
    launches: Mutex<Vec<PaymentRequestParameters>>,
}

impl ManualGateway {
    pub fn delegate(&self) -> Arc<dyn SessionDelegate> {
        self.delegate
            .lock()
            .unwrap()
            .clone()
            .expect("no session launched")
    }

    pub fn launches(&self) -> Vec<PaymentRequestParameters> {
        self.launches.lock().unwrap().clone()
    }
}

#[async_trait]
impl CheckoutGateway for ManualGateway {
    async fn launch(
        &self,
        params: PaymentRequestParameters,
        delegate: Arc<dyn SessionDelegate>,
    ) -> Result<()> {
        *self.delegate.lock().unwrap() = Some(delegate);
        self.launches.lock().unwrap().push(params);
        Ok(())
    }
}

/// Sink that records every response the bridge emits.
#[derive(Default)]
pub struct RecordingSink {
    responses: Mutex<Vec<(InvocationId, BridgeResponse)>>,
}

impl RecordingSink {
    pub fn responses(&self) -> Vec<(InvocationId, BridgeResponse)> {
        self.responses.lock().unwrap().clone()
    }
}

impl ResponseSink for RecordingSink {
    fn respond(&self, invocation_id: &InvocationId, response: BridgeResponse) {
        self.responses
            .lock()
            .unwrap()
            .push((invocation_id.clone(), response));
    }
}
