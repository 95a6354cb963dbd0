//! Injected authentication session.

use std::fmt;

/// Bearer credentials for the ledger service.
///
/// Minting the token (service-account JWT exchange, refresh) happens outside
/// this crate; the client only attaches it to requests.
#[derive(Clone)]
pub struct Session {
    access_token: String,
}

impl Session {
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub(crate) fn access_token(&self) -> &str {
        &self.access_token
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_token() {
        let session = Session::bearer("ya29.secret");
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("ya29.secret"));
        assert!(rendered.contains("redacted"));
    }
}
