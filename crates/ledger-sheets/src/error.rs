//! Remote ledger error types.

use ledger_config::ConfigError;
use thiserror::Error;

/// Errors that can occur when talking to the remote ledger.
///
/// Messages from the service are carried unmodified so callers can show
/// them as diagnostics.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The ledger API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Service error message, or the raw response body.
        message: String,
    },

    /// The service returned a 429 Too Many Requests response.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the service asked us to wait.
        retry_after_secs: u64,
    },

    /// A success response did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// The client was constructed from incomplete configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
