//! Client configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::network::DEFAULT_TIMEOUT_MS;

/// Configuration for a [`ManagedHttpClient`](crate::client::ManagedHttpClient).
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ManagedConfig {
    /// Deadline for a single request, in milliseconds. Must be non-zero.
    pub timeout_ms: u64,
}

impl Default for ManagedConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ManagedConfig {
    pub fn new(timeout_ms: u64) -> Result<Self, ConfigError> {
        let config = Self { timeout_ms };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document such as `{"timeout_ms": 750}`.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ManagedConfig::default();
        assert_eq!(config.timeout_ms, 500);
        assert_eq!(config.timeout(), Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(matches!(
            ManagedConfig::new(0),
            Err(ConfigError::ZeroTimeout)
        ));
    }

    #[test]
    fn test_from_json() {
        let config = ManagedConfig::from_json(r#"{"timeout_ms": 750}"#).unwrap();
        assert_eq!(config.timeout_ms, 750);
    }

    #[test]
    fn test_from_json_missing_field_uses_default() {
        let config = ManagedConfig::from_json("{}").unwrap();
        assert_eq!(config, ManagedConfig::default());
    }

    #[test]
    fn test_from_json_rejects_zero_and_garbage() {
        assert!(matches!(
            ManagedConfig::from_json(r#"{"timeout_ms": 0}"#),
            Err(ConfigError::ZeroTimeout)
        ));
        assert!(matches!(
            ManagedConfig::from_json(r#"{"timeout_ms": "soon"}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            ManagedConfig::from_json(r#"{"timeout_ms": -5}"#),
            Err(ConfigError::Parse(_))
        ));
    }
}
