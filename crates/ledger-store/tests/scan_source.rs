//! `ScanStore` through the `ScanSource` seam the sync service uses.

use chrono::{TimeZone, Utc};
use ledger_store::{ScanSource, ScanStore};
use pretty_assertions::assert_eq;

async fn newest_first<S: ScanSource>(source: &S, limit: u32) -> Vec<String> {
    source
        .recent_scans(limit)
        .await
        .unwrap()
        .into_iter()
        .map(|scan| scan.data)
        .collect()
}

#[tokio::test]
async fn millisecond_precision_orders_scans() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scans.db");
    let store = ScanStore::open_local(path.to_str().unwrap()).await.unwrap();

    let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    store
        .record_scan("later", base + chrono::Duration::milliseconds(5))
        .await
        .unwrap();
    store.record_scan("earlier", base).await.unwrap();

    assert_eq!(newest_first(&store, 50).await, vec!["later", "earlier"]);
}

#[tokio::test]
async fn stored_instant_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scans.db");
    let store = ScanStore::open_local(path.to_str().unwrap()).await.unwrap();
    let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();

    store.record_scan("1700000000123", at).await.unwrap();

    let scans = store.recent_scans(1).await.unwrap();
    assert_eq!(scans[0].scanned_at, at);
}
