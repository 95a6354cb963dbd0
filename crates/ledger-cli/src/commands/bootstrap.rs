use ledger_config::ScanLedgerConfig;

use crate::cli::GlobalFlags;
use crate::context;
use crate::output::output;

/// Handle `scanledger bootstrap`.
pub async fn handle(config: &ScanLedgerConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let service = context::sync_service(config).await?;
    let result = service.ensure_worksheet().await?;
    output(&result, flags.format)
}
