//! Relational source entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the `scanned_data` table. Owned by the relational store; read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRecord {
    /// Raw QR-code payload. Usually an epoch-millisecond timestamp, but not guaranteed.
    pub data: String,
    pub scanned_at: DateTime<Utc>,
}

impl ScanRecord {
    pub fn new(data: impl Into<String>, scanned_at: DateTime<Utc>) -> Self {
        Self {
            data: data.into(),
            scanned_at,
        }
    }
}
