//! Cross-cutting error types for scanledger.
//!
//! Domain-specific errors (`LedgerError`, `StoreError`, `SyncError`) live in
//! their respective crates. The CLI converges all of them through `anyhow`.

use thiserror::Error;

/// Errors raised by core value types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A span could not be interpreted as A1 notation.
    #[error("Invalid range span '{span}': {reason}")]
    InvalidSpan { span: String, reason: String },

    /// An A1 range string had no `!` separating the sheet from the span.
    #[error("Invalid range '{0}': expected '<sheet>!<span>'")]
    InvalidRange(String),

    /// An operator action name was not recognized.
    #[error("Unknown action type: {0}")]
    UnknownAction(String),
}
