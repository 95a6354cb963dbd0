use ledger_config::ScanLedgerConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ClearArgs;
use crate::context;
use crate::output::output;

/// Handle `scanledger clear --yes`.
pub async fn handle(
    args: &ClearArgs,
    config: &ScanLedgerConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if !args.yes {
        anyhow::bail!("refusing to clear ledger data without --yes (this cannot be undone)");
    }

    let service = context::sync_service(config).await?;
    let result = service.reset_ledger_data().await?;
    output(&result, flags.format)
}
