//! Sync and display limits.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Records pulled per sync run.
const fn default_batch_limit() -> u32 {
    50
}

/// Ledger rows shown by the status view.
const fn default_recent_limit() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SyncConfig {
    #[serde(default = "default_batch_limit")]
    pub batch_limit: u32,

    #[serde(default = "default_recent_limit")]
    pub recent_limit: u32,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            batch_limit: default_batch_limit(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl SyncConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if either limit is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("sync.batch_limit", self.batch_limit),
            ("sync.recent_limit", self.recent_limit),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = SyncConfig::default();
        assert_eq!(config.batch_limit, 50);
        assert_eq!(config.recent_limit, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_limit_is_rejected() {
        let config = SyncConfig {
            batch_limit: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("sync.batch_limit"));
    }
}
