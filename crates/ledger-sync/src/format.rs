//! Scan record to ledger row formatting.
//!
//! Timestamps are rendered in `Asia/Taipei` following the zh-TW locale
//! conventions: `YYYY/MM/DD` dates and a 12-hour clock prefixed with
//! `上午` (AM) or `下午` (PM).

use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::Asia::Taipei;
use chrono_tz::Tz;
use ledger_core::layout::{INVALID_LABEL, VALID_LABEL};
use ledger_core::{LedgerRow, ScanRecord};

/// Rendered in column 4 when the payload is not a usable epoch timestamp.
pub const INVALID_DATE: &str = "Invalid Date";

/// Largest absolute epoch-millisecond value treated as a valid instant.
const MAX_EPOCH_MILLIS: i128 = 8_640_000_000_000_000;

/// Build the ledger row for one scan. Never fails.
#[must_use]
pub fn format_record(record: &ScanRecord, is_valid: bool) -> LedgerRow {
    let label = if is_valid { VALID_LABEL } else { INVALID_LABEL };
    LedgerRow::new(
        render_scan_time(&record.scanned_at),
        record.data.clone(),
        label,
        render_payload_time(&record.data),
    )
}

/// Column 1: zero-padded local time, e.g. `2024/01/05 下午03:04:05`.
#[must_use]
pub fn render_scan_time(at: &DateTime<Utc>) -> String {
    let local = at.with_timezone(&Taipei);
    let (meridiem, hour) = twelve_hour(&local);
    format!(
        "{}/{:02}/{:02} {meridiem}{hour:02}:{:02}:{:02}",
        local.year(),
        local.month(),
        local.day(),
        local.minute(),
        local.second(),
    )
}

/// Column 4: the payload read as epoch milliseconds, or [`INVALID_DATE`].
#[must_use]
pub fn render_payload_time(data: &str) -> String {
    parse_leading_int(data)
        .and_then(epoch_millis_to_utc)
        .map_or_else(|| INVALID_DATE.to_string(), |at| render_default_time(&at))
}

/// Unpadded local time, e.g. `2023/11/15 上午6:13:20`.
#[must_use]
pub fn render_default_time(at: &DateTime<Utc>) -> String {
    let local = at.with_timezone(&Taipei);
    let (meridiem, hour) = twelve_hour(&local);
    format!(
        "{}/{}/{} {meridiem}{hour}:{:02}:{:02}",
        local.year(),
        local.month(),
        local.day(),
        local.minute(),
        local.second(),
    )
}

fn twelve_hour(local: &DateTime<Tz>) -> (&'static str, u32) {
    let (is_pm, hour) = local.hour12();
    (if is_pm { "下午" } else { "上午" }, hour)
}

fn epoch_millis_to_utc(millis: i128) -> Option<DateTime<Utc>> {
    if millis.abs() > MAX_EPOCH_MILLIS {
        return None;
    }
    DateTime::from_timestamp_millis(i64::try_from(millis).ok()?)
}

/// Lenient leading-integer parse.
///
/// Skips leading whitespace, accepts one sign and a `0x`/`0X` hex prefix,
/// then reads digits until the first character that is not one. Returns
/// `None` when no digit was read. Magnitudes saturate rather than overflow.
fn parse_leading_int(input: &str) -> Option<i128> {
    let s = input.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match s.get(..2) {
        Some("0x" | "0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value: i128 = 0;
    let mut seen = false;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        value = value
            .saturating_mul(i128::from(radix))
            .saturating_add(i128::from(digit));
        seen = true;
    }

    seen.then_some(if negative { -value } else { value })
}
