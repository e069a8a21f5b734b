//! # managed-http
//!
//! A timeout-bounded HTTP client decorator. `ManagedHttpClient` wraps any
//! [`Transport`](transport::Transport) and races each request against a timer.
//! Transport results and errors pass through unchanged; a request that outlives
//! its deadline fails with a [`TimeoutError`](error::TimeoutError).
//!
//! ## Layout
//!
//! 1. **Core** — `Transport` capability, `Deadline` race, errors, config
//!    (always available, runtime-agnostic)
//! 2. **HTTP** — `ReqwestTransport`, a JSON-over-reqwest transport (feature `http`)
//! 3. **Client** — `ManagedHttpClient` and its builder
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use managed_http::prelude::*;
//!
//! let client = ManagedHttpClient::builder()
//!     .timeout_ms(500)
//!     .build(ReqwestTransport::<serde_json::Value>::new()?)?;
//!
//! match client.get("https://my-api.com/path/to/resource").await {
//!     Ok(body) => println!("{body}"),
//!     Err(e) if e.is_timeout() => eprintln!("{e}"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

// ── Core ─────────────────────────────────────────────────────────────────────

/// Error types.
pub mod error;

/// Default constants.
pub mod network;

/// Client configuration.
pub mod config;

/// The transport capability trait.
pub mod transport;

/// Request/timer race future.
pub mod deadline;

// ── HTTP ─────────────────────────────────────────────────────────────────────

/// Network transport backed by reqwest.
#[cfg(feature = "http")]
pub mod http;

// ── Client ───────────────────────────────────────────────────────────────────

/// `ManagedHttpClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::client::{ManagedHttpClient, ManagedHttpClientBuilder};
    pub use crate::config::ManagedConfig;
    pub use crate::deadline::{deadline, Deadline};
    pub use crate::error::{ConfigError, HttpError, TimeoutError};
    pub use crate::network::DEFAULT_TIMEOUT_MS;
    pub use crate::transport::{FnTransport, Transport};

    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;
}
