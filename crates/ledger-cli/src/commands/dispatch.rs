use ledger_config::ScanLedgerConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &ScanLedgerConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Status(args) => commands::status::handle(&args, config, flags).await,
        Commands::Action(args) => commands::action::handle(&args, config, flags).await,
        Commands::Bootstrap => commands::bootstrap::handle(config, flags).await,
        Commands::Sync(args) => commands::sync::handle(&args, config, flags).await,
        Commands::Recent(args) => commands::recent::handle(&args, config, flags).await,
        Commands::Clear(args) => commands::clear::handle(&args, config, flags).await,
        Commands::Record(args) => commands::record::handle(&args, config, flags).await,
        Commands::DbCheck => commands::db_check::handle(config, flags).await,
    }
}
