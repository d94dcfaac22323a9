// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What a leak check does when live user-owned objects remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeakPolicy {
    /// Build the report silently.
    Ignore,
    /// Log each leaked type at `warn`.
    #[default]
    Warn,
    /// Log, then fail with [`LifetimeError::Leaked`](crate::LifetimeError::Leaked).
    Fail,
}

/// Settings for [`leak::check`](crate::leak::check).
///
/// Missing keys take their defaults, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LeakCheckConfig {
    /// Reaction to leaks.
    pub policy: LeakPolicy,
    /// Cap on individual objects listed in a report.
    pub max_reported: usize,
}

impl Default for LeakCheckConfig {
    fn default() -> Self {
        Self {
            policy: LeakPolicy::Warn,
            max_reported: 32,
        }
    }
}

impl LeakCheckConfig {
    /// Parses a JSON config. Empty input yields the defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Serde`] on malformed JSON or an unknown key.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Serializes the config as pretty JSON.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Serde`] if serialization fails.
    pub fn to_json(&self) -> Result<Vec<u8>, ConfigError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

/// Error type for config parsing.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_partial_configs_use_defaults() {
        assert_eq!(
            LeakCheckConfig::from_json_slice(b"  \n").unwrap(),
            LeakCheckConfig::default()
        );
        let cfg = LeakCheckConfig::from_json_slice(br#"{"policy":"fail"}"#).unwrap();
        assert_eq!(cfg.policy, LeakPolicy::Fail);
        assert_eq!(cfg.max_reported, 32);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = LeakCheckConfig::from_json_slice(br#"{"polcy":"fail"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Serde(_)));
    }

    #[test]
    fn config_survives_serialization() {
        let cfg = LeakCheckConfig {
            policy: LeakPolicy::Ignore,
            max_reported: 4,
        };
        let bytes = cfg.to_json().unwrap();
        assert_eq!(LeakCheckConfig::from_json_slice(&bytes).unwrap(), cfg);
    }
}
