use chrono::Utc;
use ledger_config::ScanLedgerConfig;
use ledger_core::ScanRecord;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RecordArgs;
use crate::context;
use crate::output::output;

#[derive(Serialize)]
struct Recorded {
    id: i64,
    #[serde(flatten)]
    scan: ScanRecord,
}

/// Handle `scanledger record <data>`.
pub async fn handle(
    args: &RecordArgs,
    config: &ScanLedgerConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let store = context::open_store(config).await?;
    let scanned_at = args.at.unwrap_or_else(Utc::now);
    let id = store.record_scan(&args.data, scanned_at).await?;

    tracing::info!(id, "scan recorded");
    output(
        &Recorded {
            id,
            scan: ScanRecord::new(args.data.clone(), scanned_at),
        },
        flags.format,
    )
}
