//! Worksheet bootstrap: make sure a worksheet exists and carries its header.

use ledger_core::layout::header_range;
use ledger_core::{BootstrapResult, LedgerRow};

use crate::LedgerApi;
use crate::error::LedgerError;

/// Ensure `title` exists and its first row equals `header`.
///
/// The header is rewritten on every call, so a bootstrap that failed between
/// creating the worksheet and writing the header is repaired by the next one.
/// Two concurrent calls against a spreadsheet without the worksheet can both
/// try to create it; the loser gets the service's duplicate-name error.
///
/// # Errors
///
/// Propagates any [`LedgerError`] from `describe`, `create_worksheet` or `update`.
pub async fn ensure_worksheet<L: LedgerApi>(
    ledger: &L,
    title: &str,
    header: &LedgerRow,
) -> Result<BootstrapResult, LedgerError> {
    let descriptor = ledger.describe().await?;
    let created = if descriptor.has_worksheet(title) {
        tracing::debug!(title, "worksheet already present");
        false
    } else {
        ledger.create_worksheet(title).await?;
        true
    };

    ledger
        .update(&header_range(title), std::slice::from_ref(header))
        .await?;

    let message = if created {
        format!("worksheet '{title}' created and header written")
    } else {
        format!("worksheet '{title}' ready, header verified")
    };
    tracing::info!(title, created, "worksheet bootstrap complete");
    Ok(BootstrapResult { created, message })
}
