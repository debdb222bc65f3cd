//! HTTP client construction and status mapping.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::error::SiteChatError;

/// Build the reqwest client used for generation calls.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, SiteChatError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(4)
        .build()
        .map_err(|e| SiteChatError::ClientInit(e.to_string()))
}

/// Build Google-style headers (x-goog-api-key). The key stays out of the URL,
/// so transport errors that echo the URL never carry it.
pub fn gemini_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(mut val) = HeaderValue::from_str(api_key) {
        val.set_sensitive(true);
        headers.insert("x-goog-api-key", val);
    }
    headers
}

/// Map a non-success HTTP status to an error.
pub fn status_to_error(status: u16, body: &str) -> SiteChatError {
    let message = extract_error_message(body).unwrap_or_else(|| body.to_string());
    match status {
        401 | 403 => SiteChatError::Authentication(message),
        429 => SiteChatError::QuotaExceeded(message),
        _ => SiteChatError::api(status, message),
    }
}

/// Pull `error.message` out of a Google-style JSON error body.
fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
}
