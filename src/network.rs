//! Default constants for the managed client.

/// Default deadline applied when no timeout is configured.
pub const DEFAULT_TIMEOUT_MS: u64 = 500;

/// User agent sent by the bundled reqwest transport.
pub const DEFAULT_USER_AGENT: &str = concat!("managed-http/", env!("CARGO_PKG_VERSION"));
