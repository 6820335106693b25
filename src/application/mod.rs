//! Application layer containing the request/response correlation logic.
//!
//! This module defines the `InvocationBridge`, the primary entry point for
//! payment invocations, and the `SessionAdapter` wrapping the external
//! checkout SDK's session lifecycle.

pub mod adapter;
pub mod bridge;
