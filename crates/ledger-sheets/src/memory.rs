//! In-process ledger mirroring the remote store's range semantics.
//!
//! Used by tests across the workspace. Supports injected failures so
//! partial-sync and error-propagation paths can be exercised without a
//! network.

use std::sync::{Mutex, MutexGuard, PoisonError};

use ledger_core::{
    AppendResult, CellSpan, ClearResult, CreateResult, LedgerRow, RangeAddress,
    SpreadsheetDescriptor, UpdateResult, column_letter,
};
use serde_json::Value;

use crate::LedgerApi;
use crate::error::LedgerError;

#[derive(Debug)]
struct Worksheet {
    title: String,
    /// Row-major cells; row 0 is sheet row 1.
    grid: Vec<Vec<String>>,
}

impl Worksheet {
    fn set(&mut self, row: u32, col: u32, value: String) {
        let (r, c) = (row as usize - 1, col as usize - 1);
        if self.grid.len() <= r {
            self.grid.resize_with(r + 1, Vec::new);
        }
        let cells = &mut self.grid[r];
        if cells.len() <= c {
            cells.resize(c + 1, String::new());
        }
        cells[c] = value;
    }

    fn cell(&self, row: u32, col: u32) -> &str {
        self.grid
            .get(row as usize - 1)
            .and_then(|cells| cells.get(col as usize - 1))
            .map_or("", String::as_str)
    }

    fn row_is_blank(&self, row: u32, span: &CellSpan) -> bool {
        (span.first_col..=span.last_col).all(|col| self.cell(row, col).is_empty())
    }

    fn last_row(&self) -> u32 {
        u32::try_from(self.grid.len()).unwrap_or(u32::MAX)
    }
}

#[derive(Debug, Default)]
struct State {
    worksheets: Vec<Worksheet>,
    next_sheet_id: i64,
    calls: Vec<&'static str>,
    appends: usize,
    fail_append_at: Option<(usize, String)>,
    fail_all: Option<(u16, String)>,
}

impl State {
    fn enter(&mut self, operation: &'static str) -> Result<(), LedgerError> {
        self.calls.push(operation);
        match &self.fail_all {
            Some((status, message)) => Err(LedgerError::Api {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn resolve(&mut self, range: &RangeAddress) -> Result<(&mut Worksheet, CellSpan), LedgerError> {
        let unparseable = || LedgerError::Api {
            status: 400,
            message: format!("Unable to parse range: {range}"),
        };
        let span = range.cell_span().map_err(|_| unparseable())?;
        let sheet = self
            .worksheets
            .iter_mut()
            .find(|w| w.title == range.sheet_name)
            .ok_or_else(unparseable)?;
        Ok((sheet, span))
    }

    fn add_worksheet(&mut self, title: &str) -> i64 {
        let sheet_id = self.next_sheet_id;
        self.next_sheet_id += 1;
        self.worksheets.push(Worksheet {
            title: title.to_string(),
            grid: Vec::new(),
        });
        sheet_id
    }
}

/// A spreadsheet held in memory.
#[derive(Debug)]
pub struct InMemoryLedger {
    title: String,
    spreadsheet_id: String,
    state: Mutex<State>,
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLedger {
    /// A fresh spreadsheet with a single default `Sheet1`.
    #[must_use]
    pub fn new() -> Self {
        let ledger = Self {
            title: "QR Scans".to_string(),
            spreadsheet_id: "in-memory".to_string(),
            state: Mutex::new(State::default()),
        };
        ledger.lock().add_worksheet("Sheet1");
        ledger
    }

    /// A spreadsheet that already contains an empty worksheet named `title`.
    #[must_use]
    pub fn with_worksheet(title: &str) -> Self {
        let ledger = Self::new();
        ledger.lock().add_worksheet(title);
        ledger
    }

    /// Make the `k`-th append from now (1-based) fail with `message`.
    pub fn fail_append_at(&self, k: usize, message: impl Into<String>) {
        let mut state = self.lock();
        let at = state.appends + k;
        state.fail_append_at = Some((at, message.into()));
    }

    /// Make every subsequent operation fail, like a revoked credential would.
    pub fn fail_all(&self, status: u16, message: impl Into<String>) {
        self.lock().fail_all = Some((status, message.into()));
    }

    /// Operation names in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<&'static str> {
        self.lock().calls.clone()
    }

    pub fn reset_calls(&self) {
        self.lock().calls.clear();
    }

    /// All rows of a worksheet up to its last non-blank row, or `None` if absent.
    #[must_use]
    pub fn worksheet_rows(&self, title: &str) -> Option<Vec<LedgerRow>> {
        let state = self.lock();
        let sheet = state.worksheets.iter().find(|w| w.title == title)?;
        let mut rows: Vec<LedgerRow> = sheet
            .grid
            .iter()
            .map(|cells| {
                let values: Vec<Value> = cells.iter().cloned().map(Value::String).collect();
                LedgerRow::from_cells(&values)
            })
            .collect();
        while rows.last().is_some_and(LedgerRow::is_blank) {
            rows.pop();
        }
        Some(rows)
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn span_label(range: &RangeAddress, span: &CellSpan, first_row: u32, last_row: u32) -> String {
    format!(
        "{}!{}{first_row}:{}{last_row}",
        range.quoted_sheet_name(),
        column_letter(span.first_col),
        column_letter(span.last_col)
    )
}

impl LedgerApi for InMemoryLedger {
    async fn read(&self, range: &RangeAddress) -> Result<Vec<LedgerRow>, LedgerError> {
        let mut state = self.lock();
        state.enter("read")?;
        let (sheet, span) = state.resolve(range)?;

        let mut rows: Vec<LedgerRow> = (span.first_row..=sheet.last_row())
            .filter(|row| span.contains_row(*row))
            .map(|row| {
                let values: Vec<Value> = (span.first_col..=span.last_col)
                    .map(|col| Value::String(sheet.cell(row, col).to_string()))
                    .collect();
                LedgerRow::from_cells(&values)
            })
            .collect();
        while rows.last().is_some_and(LedgerRow::is_blank) {
            rows.pop();
        }
        Ok(rows)
    }

    async fn append(
        &self,
        range: &RangeAddress,
        rows: &[LedgerRow],
    ) -> Result<AppendResult, LedgerError> {
        let mut state = self.lock();
        state.enter("append")?;
        state.appends += 1;
        if let Some((at, message)) = &state.fail_append_at
            && *at == state.appends
        {
            return Err(LedgerError::Api {
                status: 500,
                message: message.clone(),
            });
        }

        let (sheet, span) = state.resolve(range)?;
        let occupied = (1..=sheet.last_row())
            .rev()
            .find(|row| !sheet.row_is_blank(*row, &span))
            .unwrap_or(0);
        let start = (occupied + 1).max(span.first_row);

        let mut row_index = start;
        for row in rows {
            for (offset, value) in row.cells().iter().enumerate() {
                let col = span.first_col + u32::try_from(offset).unwrap_or(u32::MAX);
                sheet.set(row_index, col, value.clone());
            }
            row_index += 1;
        }

        let count = u32::try_from(rows.len()).unwrap_or(u32::MAX);
        Ok(AppendResult {
            updated_range: span_label(range, &span, start, start + count.saturating_sub(1)),
            updated_rows: count,
        })
    }

    async fn update(
        &self,
        range: &RangeAddress,
        rows: &[LedgerRow],
    ) -> Result<UpdateResult, LedgerError> {
        let mut state = self.lock();
        state.enter("update")?;
        let (sheet, span) = state.resolve(range)?;

        let count = u32::try_from(rows.len()).unwrap_or(u32::MAX);
        let last_written = span.first_row + count.saturating_sub(1);
        if let Some(last) = span.last_row
            && count > 0
            && last_written > last
        {
            return Err(LedgerError::Api {
                status: 400,
                message: format!(
                    "Requested writing within range [{range}], but tried writing to row [{last_written}]"
                ),
            });
        }
        let width = rows.first().map_or(0, |row| row.cells().len());
        if u32::try_from(width).unwrap_or(u32::MAX) > span.width() {
            return Err(LedgerError::Api {
                status: 400,
                message: format!(
                    "Requested writing within range [{range}], but tried writing to column [{}]",
                    column_letter(span.first_col + u32::try_from(width).unwrap_or(u32::MAX) - 1)
                ),
            });
        }

        for (row_offset, row) in (0_u32..).zip(rows) {
            for (col_offset, value) in (0_u32..).zip(row.cells()) {
                sheet.set(span.first_row + row_offset, span.first_col + col_offset, value.clone());
            }
        }

        Ok(UpdateResult {
            updated_range: span_label(range, &span, span.first_row, last_written),
            updated_rows: count,
            updated_cells: count * u32::try_from(width).unwrap_or(u32::MAX),
        })
    }

    async fn clear(&self, range: &RangeAddress) -> Result<ClearResult, LedgerError> {
        let mut state = self.lock();
        state.enter("clear")?;
        let (sheet, span) = state.resolve(range)?;

        let rows: Vec<u32> = (span.first_row..=sheet.last_row())
            .filter(|row| span.contains_row(*row))
            .collect();
        for row in rows {
            for col in span.first_col..=span.last_col {
                if !sheet.cell(row, col).is_empty() {
                    sheet.set(row, col, String::new());
                }
            }
        }

        Ok(ClearResult {
            cleared_range: range.to_string(),
        })
    }

    async fn create_worksheet(&self, title: &str) -> Result<CreateResult, LedgerError> {
        let mut state = self.lock();
        state.enter("create_worksheet")?;
        if state.worksheets.iter().any(|w| w.title == title) {
            return Err(LedgerError::Api {
                status: 400,
                message: format!(
                    "Invalid requests[0].addSheet: A sheet with the name \"{title}\" already exists. Please enter another name."
                ),
            });
        }
        let sheet_id = state.add_worksheet(title);
        Ok(CreateResult {
            sheet_id,
            title: title.to_string(),
        })
    }

    async fn describe(&self) -> Result<SpreadsheetDescriptor, LedgerError> {
        let mut state = self.lock();
        state.enter("describe")?;
        Ok(SpreadsheetDescriptor {
            title: self.title.clone(),
            url: format!(
                "https://docs.google.com/spreadsheets/d/{}/edit",
                self.spreadsheet_id
            ),
            worksheet_titles: state.worksheets.iter().map(|w| w.title.clone()).collect(),
        })
    }
}
