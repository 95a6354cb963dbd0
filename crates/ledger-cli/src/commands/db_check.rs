use anyhow::Context;
use ledger_config::ScanLedgerConfig;
use ledger_store::ScanStore;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `scanledger db-check`.
///
/// Opens the database without migrating so a missing `scanned_data` table
/// shows up as an absent record count.
pub async fn handle(config: &ScanLedgerConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = &config.database.path;
    let store = ScanStore::open_existing(path)
        .await
        .with_context(|| format!("failed to open scan database at {path}"))?;
    let health = ledger_sync::db_health(&store).await?;
    output(&health, flags.format)
}
