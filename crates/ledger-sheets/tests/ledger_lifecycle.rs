//! Bootstrap, write, and clear the canonical worksheet through the public API.

use ledger_core::LedgerRow;
use ledger_core::layout::{SCAN_WORKSHEET, append_range, body_range, header_row};
use ledger_sheets::memory::InMemoryLedger;
use ledger_sheets::{LedgerApi, ensure_worksheet};
use pretty_assertions::assert_eq;

fn scan_row(n: u32) -> LedgerRow {
    LedgerRow::new(format!("2024/01/0{n} 上午09:00:00"), format!("{n}"), "有效", "Invalid Date")
}

#[tokio::test]
async fn header_survives_body_clear() {
    let ledger = InMemoryLedger::new();
    ensure_worksheet(&ledger, SCAN_WORKSHEET, &header_row())
        .await
        .unwrap();

    for n in 1..=3 {
        ledger.append(&append_range(), &[scan_row(n)]).await.unwrap();
    }
    assert_eq!(ledger.read(&body_range()).await.unwrap().len(), 3);

    ledger.clear(&body_range()).await.unwrap();

    assert!(ledger.read(&body_range()).await.unwrap().is_empty());
    assert_eq!(ledger.worksheet_rows(SCAN_WORKSHEET), Some(vec![header_row()]));
}

#[tokio::test]
async fn appends_after_clear_start_below_header() {
    let ledger = InMemoryLedger::new();
    ensure_worksheet(&ledger, SCAN_WORKSHEET, &header_row())
        .await
        .unwrap();
    ledger.append(&append_range(), &[scan_row(1)]).await.unwrap();
    ledger.clear(&body_range()).await.unwrap();

    let result = ledger.append(&append_range(), &[scan_row(2)]).await.unwrap();

    assert_eq!(result.updated_range, "掃描記錄!A2:D2");
    assert_eq!(ledger.read(&body_range()).await.unwrap(), vec![scan_row(2)]);
}

#[tokio::test]
async fn bootstrap_after_partial_failure_writes_missing_header() {
    // Worksheet exists but the header write never happened.
    let ledger = InMemoryLedger::with_worksheet(SCAN_WORKSHEET);
    assert_eq!(ledger.worksheet_rows(SCAN_WORKSHEET), Some(vec![]));

    let result = ensure_worksheet(&ledger, SCAN_WORKSHEET, &header_row())
        .await
        .unwrap();

    assert!(!result.created);
    assert_eq!(ledger.worksheet_rows(SCAN_WORKSHEET), Some(vec![header_row()]));
}
