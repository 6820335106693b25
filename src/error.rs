use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("{0}")]
    MalformedRequest(String),
    #[error("payment already in progress")]
    SessionAlreadyActive,
    #[error("failed to start checkout session: {0}")]
    SessionStart(String),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
