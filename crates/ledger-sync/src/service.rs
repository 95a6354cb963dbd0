//! Sync orchestration over a remote ledger and a scan source.

use ledger_core::layout::{SCAN_WORKSHEET, append_range, body_range, header_row};
use ledger_core::{
    ActionResponse, ActionType, BootstrapResult, ClearResult, ErrorDetail, LedgerRow, Status,
    StatusResponse, SyncReport,
};
use ledger_sheets::{LedgerApi, ensure_worksheet};
use ledger_store::ScanSource;

use crate::error::{SyncError, error_chain};
use crate::format::format_record;

/// Mirrors scans from `S` into the canonical worksheet of `L`.
///
/// Operations run one at a time to completion. Nothing here serializes
/// concurrent callers: two overlapping `sync_batch` runs append duplicates.
pub struct SyncService<L, S> {
    ledger: L,
    source: S,
}

impl<L: LedgerApi, S: ScanSource> SyncService<L, S> {
    pub const fn new(ledger: L, source: S) -> Self {
        Self { ledger, source }
    }

    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Create the scan worksheet if missing and (re)write its header.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Ledger` if any remote call fails.
    pub async fn ensure_worksheet(&self) -> Result<BootstrapResult, SyncError> {
        ensure_worksheet(&self.ledger, SCAN_WORKSHEET, &header_row())
            .await
            .map_err(SyncError::ledger("ensure_worksheet"))
    }

    /// Append up to `limit` most recent scans, newest first, one row per call.
    ///
    /// Stops at the first failing append. Rows appended before it stay in the
    /// ledger and are counted in `succeeded`; the failure is reported in
    /// `first_error` rather than as an `Err`.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Store` if the scans cannot be fetched.
    pub async fn sync_batch(&self, limit: u32) -> Result<SyncReport, SyncError> {
        let records = self
            .source
            .recent_scans(limit)
            .await
            .map_err(SyncError::store("recent_scans"))?;

        let mut report = SyncReport {
            attempted: records.len(),
            ..SyncReport::default()
        };
        let range = append_range();

        for (index, record) in records.iter().enumerate() {
            let row = format_record(record, true);
            match self.ledger.append(&range, std::slice::from_ref(&row)).await {
                Ok(result) => {
                    report.succeeded += 1;
                    tracing::debug!(row = index + 1, range = %result.updated_range, "scan appended");
                }
                Err(error) => {
                    tracing::warn!(row = index + 1, %error, "append failed, stopping batch");
                    report.first_error = Some(ErrorDetail {
                        operation: "append".to_string(),
                        message: error_chain(&error),
                        row: Some(index + 1),
                    });
                    break;
                }
            }
        }

        tracing::info!(
            attempted = report.attempted,
            succeeded = report.succeeded,
            "sync batch finished"
        );
        Ok(report)
    }

    /// Blank every data row below the header.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Ledger` if the clear fails.
    pub async fn reset_ledger_data(&self) -> Result<ClearResult, SyncError> {
        let result = self
            .ledger
            .clear(&body_range())
            .await
            .map_err(SyncError::ledger("clear"))?;
        tracing::info!(range = %result.cleared_range, "ledger data cleared");
        Ok(result)
    }

    /// The last `limit` data rows of the worksheet, most recent first.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Ledger` if the read fails.
    pub async fn recent(&self, limit: usize) -> Result<Vec<LedgerRow>, SyncError> {
        let mut rows = self
            .ledger
            .read(&body_range())
            .await
            .map_err(SyncError::ledger("read"))?;
        let mut recent = rows.split_off(rows.len().saturating_sub(limit));
        recent.reverse();
        Ok(recent)
    }

    /// Bootstrap the worksheet, then collect recent rows and spreadsheet info.
    ///
    /// Failures are folded into an error-status response.
    pub async fn status(&self, recent_limit: usize) -> StatusResponse {
        match self.load_status(recent_limit).await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(%error, "ledger status unavailable");
                StatusResponse::error("Unable to connect to Google Sheets", error_chain(&error))
            }
        }
    }

    async fn load_status(&self, recent_limit: usize) -> Result<StatusResponse, SyncError> {
        self.ensure_worksheet().await?;
        let recent = self.recent(recent_limit).await?;
        let descriptor = self
            .ledger
            .describe()
            .await
            .map_err(SyncError::ledger("describe"))?;

        Ok(StatusResponse {
            status: Status::Success,
            message: "Connected to Google Sheets".to_string(),
            recent_scans: Some(recent),
            spreadsheet_info: Some(descriptor.into()),
            error_detail: None,
        })
    }

    /// Run an operator action. `batch_limit` bounds `SyncData`.
    pub async fn perform(&self, action: ActionType, batch_limit: u32) -> ActionResponse {
        tracing::debug!(%action, "performing action");
        match action {
            ActionType::SyncData => match self.sync_batch(batch_limit).await {
                Ok(report) => sync_outcome(&report),
                Err(error) => ActionResponse::failed(error_chain(&error)),
            },
            ActionType::ClearSheets => match self.reset_ledger_data().await {
                Ok(_) => ActionResponse::ok("Cleared Google Sheets data"),
                Err(error) => ActionResponse::failed(error_chain(&error)),
            },
        }
    }
}

fn sync_outcome(report: &SyncReport) -> ActionResponse {
    match &report.first_error {
        None => ActionResponse::ok(format!(
            "Synced {} records to Google Sheets",
            report.succeeded
        )),
        Some(detail) => ActionResponse::failed(format!(
            "synced {} of {} records before {} failed at record {}: {}",
            report.succeeded,
            report.attempted,
            detail.operation,
            detail.row.unwrap_or(report.succeeded + 1),
            detail.message
        )),
    }
}
