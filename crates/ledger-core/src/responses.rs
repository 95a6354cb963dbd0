//! Operator-facing response shapes.
//!
//! These mirror what the sheets management page consumes: a status snapshot
//! for display and the outcome of an operator action.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::row::LedgerRow;
use crate::spreadsheet::SpreadsheetDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Success,
    Error,
}

/// Spreadsheet summary shown alongside recent scans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadsheetInfo {
    pub title: String,
    pub url: String,
    pub sheets: Vec<String>,
}

impl From<SpreadsheetDescriptor> for SpreadsheetInfo {
    fn from(descriptor: SpreadsheetDescriptor) -> Self {
        Self {
            title: descriptor.title,
            url: descriptor.url,
            sheets: descriptor.worksheet_titles,
        }
    }
}

/// Read snapshot: bootstrap outcome, recent ledger rows and spreadsheet info.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: Status,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_scans: Option<Vec<LedgerRow>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spreadsheet_info: Option<SpreadsheetInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl StatusResponse {
    pub fn error(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
            recent_scans: None,
            spreadsheet_info: None,
            error_detail: Some(detail.into()),
        }
    }
}

/// Operator actions accepted by the action surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionType {
    /// Mirror the most recent scans into the ledger.
    SyncData,
    /// Blank every data row below the header.
    ClearSheets,
}

impl ActionType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SyncData => "syncData",
            Self::ClearSheets => "clearSheets",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "syncData" => Ok(Self::SyncData),
            "clearSheets" => Ok(Self::ClearSheets),
            other => Err(CoreError::UnknownAction(other.to_string())),
        }
    }
}

/// Outcome of an operator action. Exactly one of `message` / `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

/// Relational store diagnostic snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbHealth {
    /// Database clock rendered in Asia/Taipei local time.
    pub db_time: String,
    /// Row count of `scanned_data`; absent when the table does not exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_count: Option<u64>,
}
