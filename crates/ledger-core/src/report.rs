//! Sync run reporting.

use serde::{Deserialize, Serialize};

/// Where and why a sync run stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Operation that failed (`append`, `read`, ...).
    pub operation: String,
    /// Underlying diagnostic message, unmodified.
    pub message: String,
    /// 1-based position in the batch of the failing record, when applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
}

/// Result of one best-effort batch sync.
///
/// A partial sync is a normal outcome: rows appended before `first_error`
/// stay in the ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Records fetched from the relational store for this run.
    pub attempted: usize,
    /// Records appended before the first failure (or all of them).
    pub succeeded: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_error: Option<ErrorDetail>,
}

impl SyncReport {
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.first_error.is_none() && self.succeeded == self.attempted
    }
}
