//! # ledger-sheets
//!
//! Remote ledger access for scanledger.
//!
//! - [`LedgerApi`]: the range-level operations every ledger backend offers
//! - [`SheetsClient`]: the Google Sheets v4 REST implementation
//! - [`ensure_worksheet`]: idempotent worksheet + header bootstrap
//! - `memory::InMemoryLedger` (feature `test-support`): an in-process ledger
//!   with failure injection for tests
//!
//! No operation retries. Every failure reaches the caller as a
//! [`LedgerError`] carrying the service's own message.

pub mod bootstrap;
pub mod client;
#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod session;

mod error;
mod http;

pub use bootstrap::ensure_worksheet;
pub use client::{ClientOptions, SheetsClient};
pub use error::LedgerError;
pub use session::Session;

use std::future::Future;

use ledger_core::{
    AppendResult, ClearResult, CreateResult, LedgerRow, RangeAddress, SpreadsheetDescriptor,
    UpdateResult,
};

/// Range-level operations over one remote spreadsheet.
///
/// Each call suspends until the remote store answers and has no side effect
/// beyond the named mutation.
pub trait LedgerApi: Send + Sync {
    /// Read every row in `range`. Empty ranges yield an empty vector.
    fn read(
        &self,
        range: &RangeAddress,
    ) -> impl Future<Output = Result<Vec<LedgerRow>, LedgerError>> + Send;

    /// Append `rows` after existing content. Values are interpreted as if typed by a user.
    fn append(
        &self,
        range: &RangeAddress,
        rows: &[LedgerRow],
    ) -> impl Future<Output = Result<AppendResult, LedgerError>> + Send;

    /// Overwrite exactly the addressed cells.
    fn update(
        &self,
        range: &RangeAddress,
        rows: &[LedgerRow],
    ) -> impl Future<Output = Result<UpdateResult, LedgerError>> + Send;

    /// Blank all cells in `range`. The worksheet and its formatting remain.
    fn clear(
        &self,
        range: &RangeAddress,
    ) -> impl Future<Output = Result<ClearResult, LedgerError>> + Send;

    /// Add a worksheet. Fails if the title is already taken.
    fn create_worksheet(
        &self,
        title: &str,
    ) -> impl Future<Output = Result<CreateResult, LedgerError>> + Send;

    /// Snapshot spreadsheet metadata.
    fn describe(&self) -> impl Future<Output = Result<SpreadsheetDescriptor, LedgerError>> + Send;
}
