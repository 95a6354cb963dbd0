//! # ledger-sync
//!
//! Mirrors scan records from the relational store into the remote ledger.
//!
//! [`format_record`] turns one [`ScanRecord`](ledger_core::ScanRecord) into a
//! [`LedgerRow`](ledger_core::LedgerRow). [`SyncService`] drives batches,
//! resets and status snapshots against any [`LedgerApi`](ledger_sheets::LedgerApi)
//! and [`ScanSource`](ledger_store::ScanSource).

pub mod diagnostics;
pub mod error;
pub mod format;
pub mod service;

pub use diagnostics::db_health;
pub use error::{SyncError, error_chain};
pub use format::format_record;
pub use service::SyncService;
