//! Spreadsheet metadata and per-operation result types.

use serde::{Deserialize, Serialize};

/// Read-only metadata snapshot of the remote spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadsheetDescriptor {
    pub title: String,
    pub url: String,
    pub worksheet_titles: Vec<String>,
}

impl SpreadsheetDescriptor {
    #[must_use]
    pub fn has_worksheet(&self, title: &str) -> bool {
        self.worksheet_titles.iter().any(|t| t == title)
    }
}

/// Outcome of an append. `updated_range` is where the rows actually landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppendResult {
    pub updated_range: String,
    pub updated_rows: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResult {
    pub updated_range: String,
    pub updated_rows: u32,
    pub updated_cells: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearResult {
    pub cleared_range: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateResult {
    pub sheet_id: i64,
    pub title: String,
}

/// Outcome of a worksheet bootstrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapResult {
    /// Whether the worksheet had to be created in this call.
    pub created: bool,
    pub message: String,
}
