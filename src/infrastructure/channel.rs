use crate::domain::invocation::InvocationId;
use crate::domain::ports::ResponseSink;
use crate::domain::response::BridgeResponse;
use tokio::sync::mpsc::UnboundedSender;

/// `ResponseSink` over a tokio channel, modelling the hosting runtime's
/// response transport. Sending never blocks; responses arriving after the
/// receiver is gone are dropped with a warning.
pub struct ChannelSink {
    tx: UnboundedSender<(InvocationId, BridgeResponse)>,
}

impl ChannelSink {
    pub fn new(tx: UnboundedSender<(InvocationId, BridgeResponse)>) -> Self {
        Self { tx }
    }
}

impl ResponseSink for ChannelSink {
    fn respond(&self, invocation_id: &InvocationId, response: BridgeResponse) {
        if self.tx.send((invocation_id.clone(), response)).is_err() {
            tracing::warn!(%invocation_id, "response channel closed, dropping response");
        }
    }
}
