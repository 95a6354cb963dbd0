//! Relational store error types.

use thiserror::Error;

/// Errors from relational store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A query returned data that could not be interpreted.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error (connection or statement).
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
