//! Fixed-arity ledger rows and the conversion boundary for remote cell values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of positional columns in every ledger row.
pub const LEDGER_COLUMNS: usize = 4;

/// One row of the ledger: scan time, raw content, validity label, decoded content time.
///
/// Columns are positional. Remote cell values only become a `LedgerRow`
/// through [`LedgerRow::from_cells`]; nothing past the client edge sees
/// untyped JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LedgerRow(pub [String; LEDGER_COLUMNS]);

impl LedgerRow {
    pub fn new(
        scan_time_local: impl Into<String>,
        raw_content: impl Into<String>,
        validity_label: impl Into<String>,
        decoded_content_time: impl Into<String>,
    ) -> Self {
        Self([
            scan_time_local.into(),
            raw_content.into(),
            validity_label.into(),
            decoded_content_time.into(),
        ])
    }

    /// Build a row from remote cell values.
    ///
    /// Short rows are padded with empty cells (the remote store omits
    /// trailing blanks); cells past the fourth are dropped.
    #[must_use]
    pub fn from_cells(cells: &[Value]) -> Self {
        let mut row: [String; LEDGER_COLUMNS] = Default::default();
        for (slot, cell) in row.iter_mut().zip(cells) {
            *slot = cell_to_string(cell);
        }
        Self(row)
    }

    /// Cells as JSON values for a write request.
    #[must_use]
    pub fn to_cells(&self) -> Vec<Value> {
        self.0.iter().cloned().map(Value::String).collect()
    }

    #[must_use]
    pub fn cells(&self) -> &[String; LEDGER_COLUMNS] {
        &self.0
    }

    #[must_use]
    pub fn scan_time_local(&self) -> &str {
        &self.0[0]
    }

    #[must_use]
    pub fn raw_content(&self) -> &str {
        &self.0[1]
    }

    #[must_use]
    pub fn validity_label(&self) -> &str {
        &self.0[2]
    }

    #[must_use]
    pub fn decoded_content_time(&self) -> &str {
        &self.0[3]
    }

    /// True when every cell is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(String::is_empty)
    }
}

fn cell_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
