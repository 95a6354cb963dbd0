//! Canonical worksheet layout of the scan ledger.
//!
//! These are deployment constants: callers cannot choose another worksheet
//! or header at call time.

use crate::range::{RangeAddress, column_letter};
use crate::row::{LEDGER_COLUMNS, LedgerRow};

/// Title of the worksheet that receives scan rows.
pub const SCAN_WORKSHEET: &str = "掃描記錄";

/// Header cells, in column order.
pub const HEADER: [&str; LEDGER_COLUMNS] = ["掃描時間", "QR Code 內容", "驗證狀態", "QR Code 時間戳"];

/// Validity label for rows that passed verification.
pub const VALID_LABEL: &str = "有效";

/// Validity label for rows that failed verification.
pub const INVALID_LABEL: &str = "無效";

#[must_use]
pub fn header_row() -> LedgerRow {
    let [a, b, c, d] = HEADER;
    LedgerRow::new(a, b, c, d)
}

/// Letter of the last ledger column (`D`).
#[must_use]
pub fn last_column() -> String {
    column_letter(u32::try_from(LEDGER_COLUMNS).unwrap_or(u32::MAX))
}

/// Whole-column range that appends target (`掃描記錄!A:D`).
#[must_use]
pub fn append_range() -> RangeAddress {
    RangeAddress::new(SCAN_WORKSHEET, format!("A:{}", last_column()))
}

/// The header row of a worksheet (`<title>!A1:D1`).
#[must_use]
pub fn header_range(title: &str) -> RangeAddress {
    let last = last_column();
    RangeAddress::new(title, format!("A1:{last}1"))
}

/// Everything below the header (`掃描記錄!A2:D`).
#[must_use]
pub fn body_range() -> RangeAddress {
    RangeAddress::new(SCAN_WORKSHEET, format!("A2:{}", last_column()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn canonical_ranges() {
        assert_eq!(append_range().to_string(), "掃描記錄!A:D");
        assert_eq!(header_range(SCAN_WORKSHEET).to_string(), "掃描記錄!A1:D1");
        assert_eq!(body_range().to_string(), "掃描記錄!A2:D");
    }

    #[test]
    fn header_row_matches_constants() {
        let header = header_row();
        assert_eq!(header.cells(), &HEADER.map(String::from));
    }
}
