//! Error types.

use thiserror::Error;

/// The one failure synthesized by the managed client: the deadline elapsed
/// before the transport settled.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("The requested operation timed out following the application's SLO of {timeout_ms}.")]
pub struct TimeoutError {
    pub timeout_ms: u64,
}

impl TimeoutError {
    pub fn new(timeout_ms: u64) -> Self {
        Self { timeout_ms }
    }
}

/// Construction and config-loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("timeout_ms must be greater than zero")]
    ZeroTimeout,

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors produced by the bundled reqwest transport.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Timeout(#[from] TimeoutError),
}

impl HttpError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, HttpError::Timeout(_))
    }
}
