use crate::domain::invocation::Invocation;
use crate::error::{BridgeError, Result};
use std::io::Read;

/// Streaming reader of whitespace-separated JSON invocations (JSON lines
/// included) from the hosting runtime.
pub struct InvocationReader<R: Read> {
    source: R,
}

impl<R: Read> InvocationReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn invocations(self) -> impl Iterator<Item = Result<Invocation>> {
        serde_json::Deserializer::from_reader(self.source)
            .into_iter::<Invocation>()
            .map(|result| result.map_err(BridgeError::from))
    }
}
