//! Agent error type for library code; the binary wraps these in anyhow.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("timestamp formatting failed: {0}")]
    Time(#[from] time::error::Format),
}
