//! Transport helpers shared by the adapters

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use dine_core::DomainError;

const USER_AGENT: &str = concat!("dine-server/", env!("CARGO_PKG_VERSION"));
const PREVIEW_CHAR_LIMIT: usize = 160;

/// Client with the crate user agent; timeouts stay at reqwest defaults
pub(crate) fn build_client() -> Result<Client, reqwest::Error> {
    Client::builder().user_agent(USER_AGENT).build()
}

pub(crate) fn trim_base(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

pub(crate) fn map_transport_error(service: &'static str, error: reqwest::Error) -> DomainError {
    if error.is_timeout() {
        DomainError::upstream(service, "request timed out")
    } else {
        // Without the URL: query strings carry API keys
        DomainError::upstream(service, error.without_url().to_string())
    }
}

pub(crate) fn map_status_error(service: &'static str, status: StatusCode, body: &[u8]) -> DomainError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {preview}", status.as_u16())
    };
    DomainError::upstream(service, message)
}

/// Read the body, reject non-success statuses, decode JSON
pub(crate) async fn read_json<T: DeserializeOwned>(
    service: &'static str,
    response: Response,
) -> Result<T, DomainError> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| map_transport_error(service, e))?;

    if !status.is_success() {
        return Err(map_status_error(service, status, body.as_ref()));
    }

    serde_json::from_slice(body.as_ref())
        .map_err(|e| DomainError::upstream(service, format!("invalid JSON payload: {e}")))
}

pub(crate) fn body_preview(body: &[u8]) -> String {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
