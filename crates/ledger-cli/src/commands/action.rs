use ledger_config::ScanLedgerConfig;
use ledger_core::{ActionResponse, ActionType};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ActionArgs;
use crate::context;
use crate::output::output;

/// Handle `scanledger action <name>`.
///
/// The response is printed even when the action fails; the exit status
/// reflects `success`.
pub async fn handle(
    args: &ActionArgs,
    config: &ScanLedgerConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = match args.action.parse::<ActionType>() {
        Ok(action) => {
            let service = context::sync_service(config).await?;
            service.perform(action, config.sync.batch_limit).await
        }
        Err(error) => ActionResponse::failed(error.to_string()),
    };

    output(&response, flags.format)?;

    if !response.success {
        anyhow::bail!("action '{}' failed", args.action);
    }
    Ok(())
}
