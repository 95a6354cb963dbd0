//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use ledger_config::{LOCAL_CONFIG_FILE, ScanLedgerConfig};

#[test]
fn loads_sheets_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[sheets]
spreadsheet_id = "1AbCdEf"
access_token = "ya29.toml-token"
api_base = "http://127.0.0.1:8080"
timeout_secs = 5
"#,
        )?;

        let config: ScanLedgerConfig =
            Figment::from(Serialized::defaults(ScanLedgerConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract()?;

        assert_eq!(config.sheets.spreadsheet_id, "1AbCdEf");
        assert_eq!(config.sheets.access_token, "ya29.toml-token");
        assert_eq!(config.sheets.api_base, "http://127.0.0.1:8080");
        assert_eq!(config.sheets.timeout_secs, 5);
        assert!(config.sheets.is_configured());
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[sync]
batch_limit = 200
"#,
        )?;

        let config: ScanLedgerConfig =
            Figment::from(Serialized::defaults(ScanLedgerConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract()?;

        assert_eq!(config.sync.batch_limit, 200);
        assert_eq!(config.sync.recent_limit, 10);
        assert_eq!(config.sheets.api_base, "https://sheets.googleapis.com");
        assert_eq!(config.database.path, "scanledger.db");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_file(
            LOCAL_CONFIG_FILE,
            r#"
[database]
path = "scans.db"

[sync]
recent_limit = 25
"#,
        )?;

        let config = ScanLedgerConfig::load().expect("config loads");
        assert_eq!(config.database.path, "scans.db");
        assert_eq!(config.sync.recent_limit, 25);
        Ok(())
    });
}

#[test]
fn load_rejects_zero_batch_limit() {
    Jail::expect_with(|jail| {
        jail.create_file(
            LOCAL_CONFIG_FILE,
            r#"
[sync]
batch_limit = 0
"#,
        )?;

        let err = ScanLedgerConfig::load().unwrap_err();
        assert!(err.to_string().contains("sync.batch_limit"));
        Ok(())
    });
}
