use ledger_config::ScanLedgerConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RecentArgs;
use crate::context;
use crate::output::output_rows;

/// Handle `scanledger recent`.
pub async fn handle(
    args: &RecentArgs,
    config: &ScanLedgerConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = context::sync_service(config).await?;
    let limit = usize::try_from(args.limit.unwrap_or(config.sync.recent_limit))?;
    let rows = service.recent(limit).await?;
    output_rows(&rows, flags.format)
}
