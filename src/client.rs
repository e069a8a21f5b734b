//! `ManagedHttpClient` — a transport decorator that bounds every request by a
//! deadline.
//!
//! Each [`get`](ManagedHttpClient::get) races the transport's request against
//! a timer. Whichever settles first decides the outcome:
//!
//! - the transport settles first: its value or its error is returned untouched
//! - the timer fires first: the call fails with a [`TimeoutError`] converted
//!   into the transport's error type
//!
//! The losing branch is dropped together with the call's future.
//!
//! [`TimeoutError`]: crate::error::TimeoutError

use std::fmt;
use std::time::Duration;

use crate::config::ManagedConfig;
use crate::deadline::deadline;
use crate::error::ConfigError;
use crate::network::DEFAULT_TIMEOUT_MS;
use crate::transport::Transport;

/// Timeout-bounded wrapper around a [`Transport`].
///
/// Immutable after construction. Share one transport between several clients
/// by handing each an `Arc<T>` or `&T`.
#[derive(Clone)]
pub struct ManagedHttpClient<T> {
    transport: T,
    timeout_ms: u64,
}

impl ManagedHttpClient<()> {
    pub fn builder() -> ManagedHttpClientBuilder {
        ManagedHttpClientBuilder::default()
    }
}

impl<T: Transport> ManagedHttpClient<T> {
    pub fn new(transport: T, timeout_ms: u64) -> Result<Self, ConfigError> {
        if timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(Self {
            transport,
            timeout_ms,
        })
    }

    pub fn from_config(transport: T, config: &ManagedConfig) -> Result<Self, ConfigError> {
        Self::new(transport, config.timeout_ms)
    }

    /// Fetch `url` through the transport, failing with a timeout if it has
    /// not settled within `timeout_ms`.
    ///
    /// Every call runs its own race; nothing is shared between calls.
    pub async fn get(&self, url: &str) -> Result<T::Output, T::Error> {
        tracing::debug!(url, timeout_ms = self.timeout_ms, "Dispatching request");
        deadline(self.transport.get(url), self.timeout_ms).await
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }
}

impl<T> fmt::Debug for ManagedHttpClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagedHttpClient")
            .field("timeout_ms", &self.timeout_ms)
            .finish_non_exhaustive()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ManagedHttpClientBuilder {
    timeout_ms: u64,
}

impl Default for ManagedHttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ManagedHttpClientBuilder {
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn config(mut self, config: &ManagedConfig) -> Self {
        self.timeout_ms = config.timeout_ms;
        self
    }

    pub fn build<T: Transport>(self, transport: T) -> Result<ManagedHttpClient<T>, ConfigError> {
        ManagedHttpClient::new(transport, self.timeout_ms)
    }
}
