use ledger_config::ScanLedgerConfig;
use ledger_core::Status;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatusArgs;
use crate::context;
use crate::output::output;

/// Handle `scanledger status`.
pub async fn handle(
    args: &StatusArgs,
    config: &ScanLedgerConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = context::sync_service(config).await?;
    let limit = usize::try_from(args.recent.unwrap_or(config.sync.recent_limit))?;

    let response = service.status(limit).await;
    output(&response, flags.format)?;

    if response.status == Status::Error {
        anyhow::bail!("ledger status check failed");
    }
    Ok(())
}
