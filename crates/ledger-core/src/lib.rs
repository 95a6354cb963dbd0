//! # ledger-core
//!
//! Core types shared by every scanledger crate:
//! - [`RangeAddress`] and [`CellSpan`] for A1-notation addressing
//! - [`LedgerRow`], the fixed-arity row written to the remote ledger
//! - [`ScanRecord`], one row of the relational `scanned_data` table
//! - result and report types returned by ledger and sync operations
//! - the canonical worksheet layout ([`layout`])
//! - operator-facing response shapes ([`responses`])

pub mod errors;
pub mod layout;
pub mod range;
pub mod report;
pub mod responses;
pub mod row;
pub mod scan;
pub mod spreadsheet;

pub use errors::CoreError;
pub use range::{CellSpan, RangeAddress, column_letter};
pub use report::{ErrorDetail, SyncReport};
pub use responses::{
    ActionResponse, ActionType, DbHealth, SpreadsheetInfo, Status, StatusResponse,
};
pub use row::{LEDGER_COLUMNS, LedgerRow};
pub use scan::ScanRecord;
pub use spreadsheet::{
    AppendResult, BootstrapResult, ClearResult, CreateResult, SpreadsheetDescriptor,
    UpdateResult,
};
