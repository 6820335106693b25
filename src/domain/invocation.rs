use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier correlating a caller's request to its eventual response.
///
/// Supplied by the hosting runtime, unique per call. The bridge never
/// inspects it; it only carries it across the asynchronous boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvocationId(pub String);

impl InvocationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for InvocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InvocationId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// One inbound call from the hosting runtime: an invocation id plus the
/// raw, not-yet-validated payment parameters.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invocation {
    pub invocation_id: InvocationId,
    pub parameters: serde_json::Value,
}
