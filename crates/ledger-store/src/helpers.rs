//! Timestamp conversion between `DateTime<Utc>` and TEXT columns.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::StoreError;

/// Render a timestamp the way `scanned_at` is stored.
#[must_use]
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a TEXT timestamp column.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00.000Z"`) and `SQLite`'s
/// default format (`"2026-02-09 14:30:00"`, assumed UTC).
///
/// # Errors
///
/// Returns `StoreError::Query` if the string matches neither format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, StoreError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| StoreError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn stored_format_is_fixed_width_utc() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-03-05T07:08:09.000Z");
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let ts = parse_datetime("2024-03-05T15:08:09+08:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap());
    }

    #[test]
    fn parses_sqlite_default_format() {
        let ts = parse_datetime("2024-03-05 07:08:09").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_datetime("yesterday"),
            Err(StoreError::Query(_))
        ));
    }
}
