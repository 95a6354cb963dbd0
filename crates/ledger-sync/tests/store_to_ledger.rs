//! End-to-end: scans recorded in a libSQL file reach the in-memory ledger.

use chrono::{TimeZone, Utc};
use ledger_core::Status;
use ledger_core::layout::{SCAN_WORKSHEET, header_row};
use ledger_sheets::memory::InMemoryLedger;
use ledger_store::ScanStore;
use ledger_sync::SyncService;
use pretty_assertions::assert_eq;

async fn store_with(scans: &[(&str, u32)]) -> (tempfile::TempDir, ScanStore) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scans.db");
    let store = ScanStore::open_local(path.to_str().unwrap()).await.unwrap();
    for (data, minute) in scans {
        let at = Utc.with_ymd_and_hms(2023, 11, 14, 22, *minute, 0).unwrap();
        store.record_scan(data, at).await.unwrap();
    }
    (dir, store)
}

#[tokio::test]
async fn synced_rows_carry_formatted_columns() {
    let (_dir, store) = store_with(&[("1700000000000", 13), ("hello", 20)]).await;
    let service = SyncService::new(InMemoryLedger::new(), store);
    service.ensure_worksheet().await.unwrap();

    let report = service.sync_batch(50).await.unwrap();
    assert!(report.is_complete());

    let rows = service.ledger().worksheet_rows(SCAN_WORKSHEET).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], header_row());

    assert_eq!(rows[1].raw_content(), "hello");
    assert_eq!(rows[1].scan_time_local(), "2023/11/15 上午06:20:00");
    assert_eq!(rows[1].decoded_content_time(), "Invalid Date");

    assert_eq!(rows[2].raw_content(), "1700000000000");
    assert_eq!(rows[2].validity_label(), "有效");
    assert_eq!(rows[2].decoded_content_time(), "2023/11/15 上午6:13:20");
}

#[tokio::test]
async fn bootstrap_is_idempotent() {
    let (_dir, store) = store_with(&[]).await;
    let service = SyncService::new(InMemoryLedger::new(), store);

    assert!(service.ensure_worksheet().await.unwrap().created);
    assert!(!service.ensure_worksheet().await.unwrap().created);

    let status = service.status(10).await;
    assert_eq!(status.status, Status::Success);
    let sheets = status.spreadsheet_info.unwrap().sheets;
    assert_eq!(sheets.iter().filter(|s| *s == SCAN_WORKSHEET).count(), 1);
    assert_eq!(
        service.ledger().worksheet_rows(SCAN_WORKSHEET),
        Some(vec![header_row()])
    );
}
