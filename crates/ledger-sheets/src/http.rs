//! Shared HTTP response checks for the Sheets client.
//!
//! Maps 429 to [`LedgerError::RateLimited`] and every other non-success
//! status to [`LedgerError::Api`], unwrapping Google's JSON error envelope
//! (`{"error": {"code", "message", "status"}}`) when present.

use serde::Deserialize;

use crate::error::LedgerError;

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Check an HTTP response for error statuses. Returns it unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, LedgerError> {
    let status = resp.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(LedgerError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(LedgerError::Api {
            status: status.as_u16(),
            message: error_message(&body),
        });
    }
    Ok(resp)
}

/// Extract `error.message` from a Google error body, else return the body as-is.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.to_string())
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(429)
                .header("Retry-After", value)
                .body(String::new())
                .unwrap(),
        )
    }

    #[test]
    fn error_message_unwraps_google_envelope() {
        let body = r#"{
            "error": {
                "code": 400,
                "message": "Unable to parse range: Missing!A:D",
                "status": "INVALID_ARGUMENT"
            }
        }"#;
        assert_eq!(error_message(body), "Unable to parse range: Missing!A:D");
    }

    #[test]
    fn error_message_keeps_plain_body() {
        assert_eq!(error_message("upstream timeout"), "upstream timeout");
    }

    #[tokio::test]
    async fn check_response_rate_limited_with_header() {
        let err = check_response(mock_response_with_retry_after("30"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn check_response_rate_limited_default() {
        let err = check_response(mock_response_with_retry_after("soon"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::RateLimited {
                retry_after_secs: 60
            }
        ));
    }

    #[tokio::test]
    async fn check_response_api_error_preserves_message() {
        let body = r#"{"error":{"code":403,"message":"The caller does not have permission","status":"PERMISSION_DENIED"}}"#;
        let err = check_response(mock_response(403, body)).await.unwrap_err();
        match err {
            LedgerError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "The caller does not have permission");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_success() {
        assert!(check_response(mock_response(200, "{}")).await.is_ok());
    }
}
