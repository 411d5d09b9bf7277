//! HTTP client for the shorten endpoint

use crate::constants::SHORTEN_ENDPOINT;
use crate::types::{ApiErrorBody, ShortUrlData, ShortenRequest};
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

/// Failure of a shorten submission. All variants are recoverable by
/// resubmitting the form.
#[derive(Debug, Error)]
pub enum ShortenError {
    /// Server answered with a non-success status.
    #[error("server returned HTTP {status}")]
    Api {
        status: StatusCode,
        message: Option<String>,
    },
    /// Request never produced a response (DNS, connect, timeout, ...).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ShortenError {
    /// Human-readable message for the error alert. A server-supplied
    /// `message` field wins over the generic transport/status text.
    pub fn display_message(&self) -> String {
        match self {
            ShortenError::Api {
                message: Some(msg), ..
            } => msg.clone(),
            other => other.to_string(),
        }
    }
}

/// Build an API error from a non-success response's status and body,
/// pulling out the optional `{ "message": ... }` field.
fn api_error(status: StatusCode, body: &[u8]) -> ShortenError {
    let message = serde_json::from_slice::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message);
    ShortenError::Api { status, message }
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Origin used to compose shortened URLs (`{origin}/{alias}`)
    pub fn origin(&self) -> &str {
        &self.base_url
    }

    /// Submit one shorten request. Exactly one outbound call; no retries.
    pub async fn shorten(&self, request: &ShortenRequest) -> Result<ShortUrlData, ShortenError> {
        let endpoint = format!("{}{}", self.base_url, SHORTEN_ENDPOINT);
        debug!(url = %request.url, endpoint = %endpoint, "Submitting shorten request");

        let response = self.client.post(&endpoint).json(request).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<ShortUrlData>().await?)
        } else {
            let body = response.bytes().await.unwrap_or_default();
            Err(api_error(status, &body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_preferred() {
        let err = api_error(
            StatusCode::CONFLICT,
            br#"{"message":"That alias is already taken"}"#,
        );
        assert_eq!(err.display_message(), "That alias is already taken");
    }

    #[test]
    fn unparseable_body_falls_back_to_status_text() {
        let err = api_error(StatusCode::INTERNAL_SERVER_ERROR, b"<html>oops</html>");
        assert_eq!(
            err.display_message(),
            "server returned HTTP 500 Internal Server Error"
        );
    }

    #[test]
    fn body_without_message_field_falls_back() {
        let err = api_error(StatusCode::BAD_REQUEST, br#"{"error":"nope"}"#);
        assert_eq!(err.display_message(), "server returned HTTP 400 Bad Request");
    }

    #[test]
    fn empty_body_falls_back() {
        let err = api_error(StatusCode::BAD_GATEWAY, b"");
        assert_eq!(err.display_message(), "server returned HTTP 502 Bad Gateway");
    }
}
