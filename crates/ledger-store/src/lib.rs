//! # ledger-store
//!
//! libSQL access to the relational `scanned_data` table, the source of truth
//! the ledger mirrors.
//!
//! Every operation acquires its own connection and drops it on return, so a
//! connection is released on success, query error, and row-parsing error
//! alike.

pub mod error;
pub mod helpers;
mod migrations;

use std::future::Future;

use chrono::{DateTime, Utc};
use ledger_core::ScanRecord;

use error::StoreError;
use helpers::{format_timestamp, parse_datetime};

/// Read side the sync orchestrator depends on.
pub trait ScanSource: Send + Sync {
    /// Up to `limit` most recent scans, newest first.
    fn recent_scans(
        &self,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<ScanRecord>, StoreError>> + Send;
}

/// Database clock and row count, for connectivity diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreHealth {
    pub db_time: DateTime<Utc>,
    /// `None` when `scanned_data` could not be counted (e.g. it does not exist).
    pub record_count: Option<u64>,
}

/// Handle to the scan database.
pub struct ScanStore {
    db: libsql::Database,
}

impl ScanStore {
    /// Open (or create) a local database file and run migrations.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, StoreError> {
        let db = libsql::Builder::new_local(path).build().await?;
        let store = Self { db };
        store.run_migrations().await?;
        tracing::debug!(path, "scan store opened");
        Ok(store)
    }

    /// Open a database without touching its schema.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened.
    pub async fn open_existing(path: &str) -> Result<Self, StoreError> {
        let db = libsql::Builder::new_local(path).build().await?;
        Ok(Self { db })
    }

    fn connect(&self) -> Result<libsql::Connection, StoreError> {
        Ok(self.db.connect()?)
    }

    /// Insert one scan. Returns the new row id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the insert fails.
    pub async fn record_scan(
        &self,
        data: &str,
        scanned_at: DateTime<Utc>,
    ) -> Result<i64, StoreError> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO scanned_data (data, scanned_at) VALUES (?1, ?2)",
            libsql::params![data, format_timestamp(&scanned_at)],
        )
        .await?;
        Ok(conn.last_insert_rowid())
    }

    /// Probe the database clock and count stored scans.
    ///
    /// A failing count is logged and reported as `None`; a failing clock query
    /// is an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if no connection can be made or the clock query fails.
    pub async fn health(&self) -> Result<StoreHealth, StoreError> {
        let conn = self.connect()?;
        let mut rows = conn.query("SELECT datetime('now')", ()).await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        let db_time = parse_datetime(&row.get::<String>(0)?)?;

        let record_count = match Self::count_scans(&conn).await {
            Ok(count) => Some(count),
            Err(error) => {
                tracing::warn!(%error, "scanned_data could not be counted");
                None
            }
        };

        Ok(StoreHealth {
            db_time,
            record_count,
        })
    }

    async fn count_scans(conn: &libsql::Connection) -> Result<u64, StoreError> {
        let mut rows = conn.query("SELECT COUNT(*) FROM scanned_data", ()).await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count).map_err(|e| StoreError::Query(format!("negative count: {e}")))
    }
}

impl ScanSource for ScanStore {
    async fn recent_scans(&self, limit: u32) -> Result<Vec<ScanRecord>, StoreError> {
        let conn = self.connect()?;
        let mut rows = conn
            .query(
                "SELECT data, scanned_at FROM scanned_data ORDER BY scanned_at DESC, id DESC LIMIT ?1",
                libsql::params![i64::from(limit)],
            )
            .await?;

        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(ScanRecord {
                data: row.get::<String>(0)?,
                scanned_at: parse_datetime(&row.get::<String>(1)?)?,
            });
        }
        tracing::debug!(limit, fetched = records.len(), "fetched recent scans");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    use super::*;

    async fn test_store() -> (tempfile::TempDir, ScanStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scans.db");
        let store = ScanStore::open_local(path.to_str().unwrap()).await.unwrap();
        (dir, store)
    }

    fn at(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    #[tokio::test]
    async fn recent_scans_newest_first() {
        let (_dir, store) = test_store().await;
        store.record_scan("first", at(0)).await.unwrap();
        store.record_scan("third", at(20)).await.unwrap();
        store.record_scan("second", at(10)).await.unwrap();

        let scans = store.recent_scans(50).await.unwrap();
        let data: Vec<&str> = scans.iter().map(|s| s.data.as_str()).collect();
        assert_eq!(data, vec!["third", "second", "first"]);
        assert_eq!(scans[0].scanned_at, at(20));
    }

    #[tokio::test]
    async fn recent_scans_respects_limit() {
        let (_dir, store) = test_store().await;
        for i in 0..5 {
            store.record_scan(&format!("{i}"), at(i)).await.unwrap();
        }

        let scans = store.recent_scans(2).await.unwrap();
        assert_eq!(scans.len(), 2);
        assert_eq!(scans[0].data, "4");
        assert_eq!(scans[1].data, "3");
    }

    #[tokio::test]
    async fn empty_table_yields_no_scans() {
        let (_dir, store) = test_store().await;
        assert!(store.recent_scans(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scans.db");
        let path = path.to_str().unwrap();

        let store = ScanStore::open_local(path).await.unwrap();
        store.record_scan("kept", at(0)).await.unwrap();
        drop(store);

        let reopened = ScanStore::open_local(path).await.unwrap();
        assert_eq!(reopened.recent_scans(10).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn health_reports_count() {
        let (_dir, store) = test_store().await;
        store.record_scan("1700000000000", at(0)).await.unwrap();

        let health = store.health().await.unwrap();
        assert_eq!(health.record_count, Some(1));
        assert!(health.db_time.timestamp() > 0);
    }

    #[tokio::test]
    async fn health_tolerates_missing_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.db");
        let store = ScanStore::open_existing(path.to_str().unwrap())
            .await
            .unwrap();

        let health = store.health().await.unwrap();
        assert_eq!(health.record_count, None);
    }

    #[tokio::test]
    async fn query_error_on_missing_table_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.db");
        let store = ScanStore::open_existing(path.to_str().unwrap())
            .await
            .unwrap();

        assert!(matches!(
            store.recent_scans(10).await,
            Err(StoreError::LibSql(_))
        ));
    }
}
