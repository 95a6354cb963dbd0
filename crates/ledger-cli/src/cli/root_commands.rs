use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Bootstrap the worksheet and show recent rows and spreadsheet info.
    Status(StatusArgs),
    /// Run an operator action by name (syncData, clearSheets).
    Action(ActionArgs),
    /// Create the scan worksheet if missing and rewrite its header.
    Bootstrap,
    /// Append the most recent scans to the ledger.
    Sync(SyncArgs),
    /// Show the most recent ledger rows, newest first.
    Recent(RecentArgs),
    /// Blank every ledger row below the header.
    Clear(ClearArgs),
    /// Insert a scan into the local database.
    Record(RecordArgs),
    /// Check database connectivity.
    DbCheck,
}

#[derive(Clone, Debug, Args)]
pub struct StatusArgs {
    /// Number of recent rows to include
    #[arg(long)]
    pub recent: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct ActionArgs {
    /// Action name
    pub action: String,
}

#[derive(Clone, Debug, Args)]
pub struct SyncArgs {
    /// Maximum number of scans to append
    #[arg(short, long)]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct RecentArgs {
    /// Maximum number of rows to show
    #[arg(short, long)]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct ClearArgs {
    /// Confirm the clear. Cleared rows cannot be recovered.
    #[arg(long)]
    pub yes: bool,
}

#[derive(Clone, Debug, Args)]
pub struct RecordArgs {
    /// Scanned QR payload
    pub data: String,

    /// Scan time as RFC 3339 (defaults to now)
    #[arg(long, value_parser = parse_timestamp)]
    pub at: Option<DateTime<Utc>>,
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|error| format!("expected an RFC 3339 timestamp: {error}"))
}
