use anyhow::Context;
use ledger_config::ScanLedgerConfig;
use ledger_sheets::SheetsClient;
use ledger_store::ScanStore;
use ledger_sync::SyncService;

pub type LedgerService = SyncService<SheetsClient, ScanStore>;

/// Open the scan database, creating the schema if needed.
pub async fn open_store(config: &ScanLedgerConfig) -> anyhow::Result<ScanStore> {
    let path = &config.database.path;
    ScanStore::open_local(path)
        .await
        .with_context(|| format!("failed to open scan database at {path}"))
}

/// Build the sync service. Fails before any remote call when the
/// spreadsheet id or access token is missing.
pub async fn sync_service(config: &ScanLedgerConfig) -> anyhow::Result<LedgerService> {
    let client = SheetsClient::from_config(&config.sheets)
        .context("Google Sheets is not configured")?;
    let store = open_store(config).await?;
    Ok(SyncService::new(client, store))
}
