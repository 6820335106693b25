pub mod invocation;
pub mod outcome;
pub mod ports;
pub mod request;
pub mod response;
