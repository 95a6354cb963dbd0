use ledger_config::ScanLedgerConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SyncArgs;
use crate::context;
use crate::output::output;

/// Handle `scanledger sync`.
pub async fn handle(
    args: &SyncArgs,
    config: &ScanLedgerConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = context::sync_service(config).await?;
    let report = service
        .sync_batch(args.limit.unwrap_or(config.sync.batch_limit))
        .await?;
    output(&report, flags.format)?;

    if let Some(detail) = &report.first_error {
        anyhow::bail!(
            "sync stopped after {} of {} records: {}",
            report.succeeded,
            report.attempted,
            detail.message
        );
    }
    Ok(())
}
