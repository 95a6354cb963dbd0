//! Relational store connectivity check.

use ledger_core::DbHealth;
use ledger_store::ScanStore;

use crate::error::SyncError;
use crate::format::render_default_time;

/// Database time in Taipei local time and the scan count, if countable.
///
/// # Errors
///
/// Returns `SyncError::Store` if the database cannot be reached.
pub async fn db_health(store: &ScanStore) -> Result<DbHealth, SyncError> {
    let health = store.health().await.map_err(SyncError::store("health"))?;
    Ok(DbHealth {
        db_time: render_default_time(&health.db_time),
        record_count: health.record_count,
    })
}
