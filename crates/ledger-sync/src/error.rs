//! Sync error types.

use std::error::Error;

use ledger_sheets::LedgerError;
use ledger_store::error::StoreError;
use thiserror::Error;

/// A sync operation failed. Each variant names the operation that failed.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("{operation} failed: {source}")]
    Ledger {
        operation: &'static str,
        #[source]
        source: LedgerError,
    },

    #[error("{operation} failed: {source}")]
    Store {
        operation: &'static str,
        #[source]
        source: StoreError,
    },
}

impl SyncError {
    /// Name of the operation that failed.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Ledger { operation, .. } | Self::Store { operation, .. } => operation,
        }
    }

    pub(crate) fn ledger(operation: &'static str) -> impl FnOnce(LedgerError) -> Self {
        move |source| Self::Ledger { operation, source }
    }

    pub(crate) fn store(operation: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::Store { operation, source }
    }
}

/// Render an error and every `source()` beneath it, joined with `: `.
///
/// Causes whose text already appears in the rendered message are skipped, so
/// wrappers that embed their source in `Display` are not repeated.
#[must_use]
pub fn error_chain(error: &dyn Error) -> String {
    let mut rendered = error.to_string();
    let mut cause = error.source();
    while let Some(current) = cause {
        let text = current.to_string();
        if !rendered.contains(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        cause = current.source();
    }
    rendered
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug)]
    struct Layer {
        text: &'static str,
        inner: Option<Box<Self>>,
    }

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.text)
        }
    }

    impl Error for Layer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            self.inner.as_deref().map(|inner| inner as &(dyn Error + 'static))
        }
    }

    fn layers(texts: &[&'static str]) -> Layer {
        texts
            .iter()
            .rev()
            .fold(None, |inner, text| {
                Some(Layer {
                    text: *text,
                    inner: inner.map(Box::new),
                })
            })
            .unwrap()
    }

    #[test]
    fn chain_includes_root_cause() {
        let error = layers(&[
            "error sending request",
            "client error (Connect)",
            "Connection refused (os error 111)",
        ]);

        assert_eq!(
            error_chain(&error),
            "error sending request: client error (Connect): Connection refused (os error 111)"
        );
    }

    #[test]
    fn embedded_sources_are_not_repeated() {
        let error = SyncError::Ledger {
            operation: "append",
            source: LedgerError::Api {
                status: 429,
                message: "Quota exceeded".to_string(),
            },
        };

        assert_eq!(
            error_chain(&error),
            "append failed: API error (429): Quota exceeded"
        );
    }
}
