use crate::domain::invocation::InvocationId;
use crate::domain::response::BridgeResponse;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResponseRecord<'a> {
    invocation_id: &'a InvocationId,
    #[serde(flatten)]
    response: &'a BridgeResponse,
}

/// Writes one JSON line per resolved invocation back to the hosting runtime.
pub struct ResponseWriter<W: Write> {
    writer: W,
}

impl<W: Write> ResponseWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_response(
        &mut self,
        invocation_id: &InvocationId,
        response: &BridgeResponse,
    ) -> Result<()> {
        let record = ResponseRecord {
            invocation_id,
            response,
        };
        serde_json::to_writer(&mut self.writer, &record)?;
        writeln!(self.writer)?;
        Ok(())
    }
}
