//! Google Sheets v4 REST client.

use std::time::Duration;

use ledger_config::SheetsConfig;
use ledger_core::{
    AppendResult, ClearResult, CreateResult, LedgerRow, RangeAddress, SpreadsheetDescriptor,
    UpdateResult,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::LedgerApi;
use crate::error::LedgerError;
use crate::http::check_response;
use crate::session::Session;

/// Values are parsed as if a user typed them, so dates and numbers get coerced.
const VALUE_INPUT_OPTION: &str = "USER_ENTERED";

/// Only the metadata `describe` needs.
const DESCRIBE_FIELDS: &str = "spreadsheetId,spreadsheetUrl,properties.title,sheets.properties.title";

#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub api_base: String,
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_base: "https://sheets.googleapis.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Authenticated access to one spreadsheet.
pub struct SheetsClient {
    http: reqwest::Client,
    session: Session,
    spreadsheet_id: String,
    api_base: String,
}

impl SheetsClient {
    /// Create a client for `spreadsheet_id` using an injected session.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Http`] if the HTTP client cannot be built.
    pub fn new(
        spreadsheet_id: impl Into<String>,
        session: Session,
        options: ClientOptions,
    ) -> Result<Self, LedgerError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("scanledger/", env!("CARGO_PKG_VERSION")))
            .timeout(options.timeout)
            .build()?;
        Ok(Self {
            http,
            session,
            spreadsheet_id: spreadsheet_id.into(),
            api_base: options.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from configuration.
    ///
    /// Fails before any remote call when the spreadsheet identifier or the
    /// credentials are missing.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Config`] for incomplete configuration, or
    /// [`LedgerError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &SheetsConfig) -> Result<Self, LedgerError> {
        config.require()?;
        Self::new(
            config.spreadsheet_id.trim(),
            Session::bearer(config.access_token.trim()),
            ClientOptions {
                api_base: config.api_base.clone(),
                timeout: Duration::from_secs(config.timeout_secs),
            },
        )
    }

    #[must_use]
    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    fn spreadsheet_url(&self) -> String {
        format!(
            "{}/v4/spreadsheets/{}",
            self.api_base,
            urlencoding::encode(&self.spreadsheet_id)
        )
    }

    fn values_url(&self, range: &RangeAddress) -> String {
        format!(
            "{}/values/{}",
            self.spreadsheet_url(),
            urlencoding::encode(&range.to_string())
        )
    }

    fn append_url(&self, range: &RangeAddress) -> String {
        format!(
            "{}:append?valueInputOption={VALUE_INPUT_OPTION}&insertDataOption=INSERT_ROWS",
            self.values_url(range)
        )
    }

    fn update_url(&self, range: &RangeAddress) -> String {
        format!(
            "{}?valueInputOption={VALUE_INPUT_OPTION}",
            self.values_url(range)
        )
    }
}

impl LedgerApi for SheetsClient {
    async fn read(&self, range: &RangeAddress) -> Result<Vec<LedgerRow>, LedgerError> {
        tracing::debug!(%range, "reading ledger range");
        let resp = self
            .http
            .get(self.values_url(range))
            .bearer_auth(self.session.access_token())
            .send()
            .await?;
        let data: ValueRange = check_response(resp).await?.json().await?;
        Ok(data.into_rows())
    }

    async fn append(
        &self,
        range: &RangeAddress,
        rows: &[LedgerRow],
    ) -> Result<AppendResult, LedgerError> {
        tracing::debug!(%range, rows = rows.len(), "appending ledger rows");
        let resp = self
            .http
            .post(self.append_url(range))
            .bearer_auth(self.session.access_token())
            .json(&ValueRange::write(range, rows))
            .send()
            .await?;
        let data: AppendValuesResponse = check_response(resp).await?.json().await?;
        Ok(data.into())
    }

    async fn update(
        &self,
        range: &RangeAddress,
        rows: &[LedgerRow],
    ) -> Result<UpdateResult, LedgerError> {
        tracing::debug!(%range, rows = rows.len(), "updating ledger range");
        let resp = self
            .http
            .put(self.update_url(range))
            .bearer_auth(self.session.access_token())
            .json(&ValueRange::write(range, rows))
            .send()
            .await?;
        let data: UpdateValuesResponse = check_response(resp).await?.json().await?;
        Ok(data.into())
    }

    async fn clear(&self, range: &RangeAddress) -> Result<ClearResult, LedgerError> {
        tracing::debug!(%range, "clearing ledger range");
        let resp = self
            .http
            .post(format!("{}:clear", self.values_url(range)))
            .bearer_auth(self.session.access_token())
            .json(&json!({}))
            .send()
            .await?;
        let data: ClearValuesResponse = check_response(resp).await?.json().await?;
        Ok(ClearResult {
            cleared_range: data.cleared_range,
        })
    }

    async fn create_worksheet(&self, title: &str) -> Result<CreateResult, LedgerError> {
        tracing::info!(title, "creating worksheet");
        let body = json!({
            "requests": [
                { "addSheet": { "properties": { "title": title } } }
            ]
        });
        let resp = self
            .http
            .post(format!("{}:batchUpdate", self.spreadsheet_url()))
            .bearer_auth(self.session.access_token())
            .json(&body)
            .send()
            .await?;
        let data: BatchUpdateResponse = check_response(resp).await?.json().await?;
        data.into_create_result()
    }

    async fn describe(&self) -> Result<SpreadsheetDescriptor, LedgerError> {
        let url = format!(
            "{}?fields={}",
            self.spreadsheet_url(),
            urlencoding::encode(DESCRIBE_FIELDS)
        );
        let resp = self
            .http
            .get(url)
            .bearer_auth(self.session.access_token())
            .send()
            .await?;
        let data: Spreadsheet = check_response(resp).await?.json().await?;
        Ok(data.into())
    }
}

// ── Wire types ─────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValueRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    major_dimension: Option<String>,
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

impl ValueRange {
    fn write(range: &RangeAddress, rows: &[LedgerRow]) -> Self {
        Self {
            range: Some(range.to_string()),
            major_dimension: Some("ROWS".to_string()),
            values: rows.iter().map(LedgerRow::to_cells).collect(),
        }
    }

    fn into_rows(self) -> Vec<LedgerRow> {
        self.values
            .iter()
            .map(|cells| LedgerRow::from_cells(cells))
            .collect()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateValuesResponse {
    #[serde(default)]
    updated_range: String,
    #[serde(default)]
    updated_rows: u32,
    #[serde(default)]
    updated_cells: u32,
}

impl From<UpdateValuesResponse> for UpdateResult {
    fn from(data: UpdateValuesResponse) -> Self {
        Self {
            updated_range: data.updated_range,
            updated_rows: data.updated_rows,
            updated_cells: data.updated_cells,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendValuesResponse {
    #[serde(default)]
    updates: UpdateValuesResponse,
}

impl From<AppendValuesResponse> for AppendResult {
    fn from(data: AppendValuesResponse) -> Self {
        Self {
            updated_range: data.updates.updated_range,
            updated_rows: data.updates.updated_rows,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClearValuesResponse {
    #[serde(default)]
    cleared_range: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SheetProperties {
    #[serde(default)]
    sheet_id: i64,
    #[serde(default)]
    title: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddSheetReply {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Reply {
    #[serde(default)]
    add_sheet: Option<AddSheetReply>,
}

#[derive(Debug, Deserialize)]
struct BatchUpdateResponse {
    #[serde(default)]
    replies: Vec<Reply>,
}

impl BatchUpdateResponse {
    fn into_create_result(self) -> Result<CreateResult, LedgerError> {
        let props = self
            .replies
            .into_iter()
            .find_map(|reply| reply.add_sheet)
            .map(|reply| reply.properties)
            .ok_or_else(|| LedgerError::Parse("batchUpdate reply has no addSheet".to_string()))?;
        Ok(CreateResult {
            sheet_id: props.sheet_id,
            title: props.title,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct SpreadsheetProperties {
    #[serde(default)]
    title: String,
}

#[derive(Debug, Deserialize)]
struct Sheet {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Spreadsheet {
    #[serde(default)]
    spreadsheet_url: String,
    #[serde(default)]
    properties: SpreadsheetProperties,
    #[serde(default)]
    sheets: Vec<Sheet>,
}

impl From<Spreadsheet> for SpreadsheetDescriptor {
    fn from(data: Spreadsheet) -> Self {
        Self {
            title: data.properties.title,
            url: data.spreadsheet_url,
            worksheet_titles: data.sheets.into_iter().map(|s| s.properties.title).collect(),
        }
    }
}
