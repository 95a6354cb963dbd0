//! A1-notation range addressing.
//!
//! [`RangeAddress`] is what callers pass to the ledger; it is never validated
//! on the client side. [`CellSpan`] is the parsed form of the span half and is
//! only used by components that interpret ranges locally.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A rectangular region of one worksheet, e.g. `掃描記錄!A:D`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeAddress {
    /// Worksheet title. Must name an existing worksheet for reads and writes to succeed.
    pub sheet_name: String,
    /// Column span (`A:D`), cell span (`A1:D1`) or open-ended span (`A2:D`).
    pub span: String,
}

impl RangeAddress {
    pub fn new(sheet_name: impl Into<String>, span: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            span: span.into(),
        }
    }

    /// Parse the span half locally.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidSpan`] if the span is not A1 notation.
    pub fn cell_span(&self) -> Result<CellSpan, CoreError> {
        self.span.parse()
    }

    /// The sheet name as it must appear in A1 notation.
    ///
    /// Plain names (letters, digits, `_`) are emitted as-is; anything else is
    /// single-quoted with embedded quotes doubled.
    #[must_use]
    pub fn quoted_sheet_name(&self) -> String {
        let plain = !self.sheet_name.is_empty()
            && self
                .sheet_name
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_');
        if plain {
            self.sheet_name.clone()
        } else {
            format!("'{}'", self.sheet_name.replace('\'', "''"))
        }
    }
}

impl fmt::Display for RangeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!{}", self.quoted_sheet_name(), self.span)
    }
}

impl FromStr for RangeAddress {
    type Err = CoreError;

    /// Parse `<sheet>!<span>`, accepting a quoted sheet name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sheet, span) = s
            .rsplit_once('!')
            .ok_or_else(|| CoreError::InvalidRange(s.to_string()))?;
        let sheet = match sheet.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')) {
            Some(quoted) => quoted.replace("''", "'"),
            None => sheet.to_string(),
        };
        if sheet.is_empty() || span.is_empty() {
            return Err(CoreError::InvalidRange(s.to_string()));
        }
        Ok(Self::new(sheet, span))
    }
}

/// Parsed A1 span. Columns and rows are 1-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpan {
    pub first_col: u32,
    pub last_col: u32,
    pub first_row: u32,
    /// `None` means the span runs to the end of the sheet.
    pub last_row: Option<u32>,
}

impl CellSpan {
    /// Number of columns covered.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.last_col - self.first_col + 1
    }

    /// Whether a 1-based row index falls inside the span.
    #[must_use]
    pub fn contains_row(&self, row: u32) -> bool {
        row >= self.first_row && self.last_row.is_none_or(|last| row <= last)
    }
}

impl FromStr for CellSpan {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CoreError::InvalidSpan {
            span: s.to_string(),
            reason: reason.to_string(),
        };

        let (left, right) = match s.split_once(':') {
            Some((l, r)) => (l, Some(r)),
            None => (s, None),
        };

        let (first_col, first_row) = parse_cell(left).ok_or_else(|| invalid("bad start cell"))?;
        let (last_col, last_row) = match right {
            Some(r) => parse_cell(r).ok_or_else(|| invalid("bad end cell"))?,
            // A lone cell (`B3`) addresses itself; a lone column (`B`) the whole column.
            None => (first_col, first_row),
        };

        if last_col < first_col {
            return Err(invalid("end column precedes start column"));
        }
        let first_row = first_row.unwrap_or(1);
        if let Some(last) = last_row
            && last < first_row
        {
            return Err(invalid("end row precedes start row"));
        }

        Ok(Self {
            first_col,
            last_col,
            first_row,
            last_row,
        })
    }
}

/// Split `AB12` into (column index, optional row). Rejects row 0.
fn parse_cell(cell: &str) -> Option<(u32, Option<u32>)> {
    let split = cell
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(cell.len());
    let (letters, digits) = cell.split_at(split);
    let col = column_index(letters)?;
    if digits.is_empty() {
        return Some((col, None));
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let row: u32 = digits.parse().ok()?;
    (row > 0).then_some((col, Some(row)))
}

/// Convert column letters (`A`, `Z`, `AA`) to a 1-based index.
fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() || letters.len() > 3 {
        return None;
    }
    letters.chars().try_fold(0_u32, |acc, c| {
        c.is_ascii_alphabetic()
            .then(|| acc * 26 + u32::from(c.to_ascii_uppercase()) - u32::from('A') + 1)
    })
}

/// Convert a 1-based column index into its letters (`1` → `A`, `27` → `AA`).
///
/// Index `0` has no column and yields an empty string.
#[must_use]
pub fn column_letter(index: u32) -> String {
    let mut n = index;
    let mut out = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        out.push(char::from_u32(u32::from('A') + rem).unwrap_or('A'));
        n = (n - 1) / 26;
    }
    out.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_plain_sheet_name() {
        let range = RangeAddress::new("Scans", "A:D");
        assert_eq!(range.to_string(), "Scans!A:D");
    }

    #[test]
    fn display_cjk_sheet_name_unquoted() {
        let range = RangeAddress::new("掃描記錄", "A1:D1");
        assert_eq!(range.to_string(), "掃描記錄!A1:D1");
    }

    #[test]
    fn display_quotes_names_with_spaces_and_quotes() {
        let range = RangeAddress::new("Bob's Scans", "A2:D");
        assert_eq!(range.to_string(), "'Bob''s Scans'!A2:D");
    }

    #[test]
    fn parse_quoted_range_roundtrips() {
        let range: RangeAddress = "'Bob''s Scans'!A2:D".parse().unwrap();
        assert_eq!(range.sheet_name, "Bob's Scans");
        assert_eq!(range.span, "A2:D");
    }

    #[test]
    fn parse_range_without_separator_fails() {
        assert!("A1:D1".parse::<RangeAddress>().is_err());
    }

    #[test]
    fn column_span() {
        let span: CellSpan = "A:D".parse().unwrap();
        assert_eq!(
            span,
            CellSpan {
                first_col: 1,
                last_col: 4,
                first_row: 1,
                last_row: None
            }
        );
        assert_eq!(span.width(), 4);
    }

    #[test]
    fn header_span() {
        let span: CellSpan = "A1:D1".parse().unwrap();
        assert_eq!(span.first_row, 1);
        assert_eq!(span.last_row, Some(1));
        assert!(span.contains_row(1));
        assert!(!span.contains_row(2));
    }

    #[test]
    fn open_ended_body_span() {
        let span: CellSpan = "A2:D".parse().unwrap();
        assert_eq!(span.first_row, 2);
        assert_eq!(span.last_row, None);
        assert!(!span.contains_row(1));
        assert!(span.contains_row(5000));
    }

    #[test]
    fn single_cell_span() {
        let span: CellSpan = "B3".parse().unwrap();
        assert_eq!((span.first_col, span.last_col), (2, 2));
        assert_eq!((span.first_row, span.last_row), (3, Some(3)));
    }

    #[test]
    fn malformed_spans_are_rejected() {
        for bad in ["", "1:2", "D:A", "A5:D2", "A0:D1", "A1:D1x", "ABCD1"] {
            assert!(bad.parse::<CellSpan>().is_err(), "'{bad}' should be rejected");
        }
    }

    #[test]
    fn column_letters() {
        assert_eq!(column_letter(1), "A");
        assert_eq!(column_letter(4), "D");
        assert_eq!(column_letter(26), "Z");
        assert_eq!(column_letter(27), "AA");
        assert_eq!(column_letter(0), "");
    }
}
