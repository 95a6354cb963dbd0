//! Database migration runner.
//!
//! SQL is embedded at compile time; every statement uses `IF NOT EXISTS` so
//! opening an existing database re-runs it harmlessly.

use crate::ScanStore;
use crate::error::StoreError;

const MIGRATION_001: &str = include_str!("../migrations/001_scanned_data.sql");

impl ScanStore {
    pub(crate) async fn run_migrations(&self) -> Result<(), StoreError> {
        let conn = self.connect()?;
        conn.execute_batch(MIGRATION_001)
            .await
            .map_err(|e| StoreError::Migration(format!("001_scanned_data: {e}")))?;
        Ok(())
    }
}
