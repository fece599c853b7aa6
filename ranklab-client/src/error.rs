//! Structured error types for the client layer.
//!
//! The engine itself never fails; everything that can go wrong lives out
//! here — transport, contract violations, files, configuration. Designed
//! to be displayable in both CLI and TUI contexts.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("backend contract violation: {0}")]
    Contract(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),
}
