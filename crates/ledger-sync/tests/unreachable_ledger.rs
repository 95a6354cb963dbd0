//! Transport failures keep their root cause all the way to the operator.

use std::time::Duration;

use chrono::Utc;
use ledger_core::Status;
use ledger_sheets::{ClientOptions, Session, SheetsClient};
use ledger_store::ScanStore;
use ledger_sync::SyncService;
use pretty_assertions::assert_eq;

fn closed_port_client() -> SheetsClient {
    SheetsClient::new(
        "1AbC",
        Session::bearer("token"),
        ClientOptions {
            // Nothing listens on port 1; the connect is refused immediately.
            api_base: "http://127.0.0.1:1".to_string(),
            timeout: Duration::from_secs(5),
        },
    )
    .unwrap()
}

fn names_connect_cause(message: &str) -> bool {
    message.contains("Connection refused") || message.contains("tcp connect error")
}

#[tokio::test]
async fn failed_append_reports_connect_cause() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scans.db");
    let store = ScanStore::open_local(path.to_str().unwrap()).await.unwrap();
    store.record_scan("1700000000000", Utc::now()).await.unwrap();
    let service = SyncService::new(closed_port_client(), store);

    let report = service.sync_batch(50).await.unwrap();

    assert_eq!(report.attempted, 1);
    assert_eq!(report.succeeded, 0);
    let detail = report.first_error.unwrap();
    assert!(detail.message.starts_with("HTTP error: "), "{}", detail.message);
    assert!(names_connect_cause(&detail.message), "{}", detail.message);
}

#[tokio::test]
async fn status_detail_reports_connect_cause() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scans.db");
    let store = ScanStore::open_local(path.to_str().unwrap()).await.unwrap();
    let service = SyncService::new(closed_port_client(), store);

    let status = service.status(10).await;

    assert_eq!(status.status, Status::Error);
    let detail = status.error_detail.unwrap();
    assert!(detail.starts_with("ensure_worksheet failed: "), "{detail}");
    assert!(names_connect_cause(&detail), "{detail}");
}
