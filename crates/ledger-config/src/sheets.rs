//! Remote ledger (Google Sheets) configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_api_base() -> String {
    "https://sheets.googleapis.com".to_string()
}

/// Default per-request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SheetsConfig {
    /// Identifier of the target spreadsheet (the long id in its URL).
    #[serde(default)]
    pub spreadsheet_id: String,

    /// OAuth bearer token with the `spreadsheets` scope.
    #[serde(default)]
    pub access_token: String,

    /// API root; overridden in tests or behind a proxy.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: String::new(),
            access_token: String::new(),
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SheetsConfig {
    /// Check if both the spreadsheet identifier and credentials are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.spreadsheet_id.trim().is_empty() && !self.access_token.trim().is_empty()
    }

    /// Fail with the first missing required field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] naming the missing field, or
    /// [`ConfigError::InvalidValue`] for a zero timeout.
    pub fn require(&self) -> Result<(), ConfigError> {
        let missing = |field: &str| ConfigError::NotConfigured {
            section: "sheets".to_string(),
            field: field.to_string(),
        };
        if self.spreadsheet_id.trim().is_empty() {
            return Err(missing("spreadsheet_id"));
        }
        if self.access_token.trim().is_empty() {
            return Err(missing("access_token"));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "sheets.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
