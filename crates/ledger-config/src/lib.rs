//! # ledger-config
//!
//! Layered configuration loading for scanledger using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SCANLEDGER_*` prefix, `__` as separator)
//! 2. Legacy variables `GOOGLE_SPREADSHEET_ID` and `GOOGLE_SHEETS_ACCESS_TOKEN`
//! 3. Project-level `scanledger.toml`
//! 4. User-level `~/.config/scanledger/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SCANLEDGER_SHEETS__SPREADSHEET_ID` -> `sheets.spreadsheet_id`,
//! `SCANLEDGER_SYNC__BATCH_LIMIT` -> `sync.batch_limit`, etc.
//!
//! The configuration is loaded once at process start and handed to every
//! component by reference; no other crate reads settings from the environment.
//!
//! ```no_run
//! use ledger_config::ScanLedgerConfig;
//!
//! let config = ScanLedgerConfig::load_with_dotenv().expect("config");
//! if config.sheets.is_configured() {
//!     println!("ledger: {}", config.sheets.spreadsheet_id);
//! }
//! ```

mod database;
mod error;
mod sheets;
mod sync;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use sheets::SheetsConfig;
pub use sync::SyncConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Legacy variable naming the target spreadsheet.
pub const SPREADSHEET_ID_ALIAS: &str = "GOOGLE_SPREADSHEET_ID";

/// Legacy variable carrying the OAuth access token for the ledger.
pub const ACCESS_TOKEN_ALIAS: &str = "GOOGLE_SHEETS_ACCESS_TOKEN";

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "scanledger.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScanLedgerConfig {
    #[serde(default)]
    pub sheets: SheetsConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub sync: SyncConfig,
}

impl ScanLedgerConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a section is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.sync.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a section is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
            .merge(Self::legacy_env())
            .merge(Env::prefixed("SCANLEDGER_").split("__"))
    }

    /// Map the unprefixed variables older deployments set.
    fn legacy_env() -> Env {
        Env::raw()
            .only(&[SPREADSHEET_ID_ALIAS, ACCESS_TOKEN_ALIAS])
            .map(|key| {
                if key.as_str().eq_ignore_ascii_case(SPREADSHEET_ID_ALIAS) {
                    "sheets.spreadsheet_id".into()
                } else {
                    "sheets.access_token".into()
                }
            })
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("scanledger").join("config.toml"))
    }
}
