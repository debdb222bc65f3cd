//! Google Gemini API provider.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::SiteChatError;
use crate::models::GeminiModel;

use super::http::{build_client, gemini_headers, status_to_error};
use super::TextGenerator;

pub const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Finish reasons Gemini reports when it withheld the reply.
const BLOCKED_FINISH_REASONS: &[&str] =
    &["SAFETY", "RECITATION", "BLOCKLIST", "PROHIBITED_CONTENT", "SPII"];

pub struct GeminiProvider {
    model: GeminiModel,
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a provider. Fails before touching the network if the key is
    /// empty or the HTTP client cannot be built.
    pub fn new(
        model: GeminiModel,
        api_key: impl Into<String>,
        base_url: Option<String>,
        timeout: Duration,
    ) -> Result<Self, SiteChatError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(SiteChatError::MissingApiKey);
        }
        if reqwest::header::HeaderValue::from_str(&api_key).is_err() {
            return Err(SiteChatError::ClientInit(
                "API key contains characters not allowed in a header".into(),
            ));
        }
        let client = build_client(timeout)?;
        Ok(Self {
            model,
            api_key,
            base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| BASE_URL.to_string()),
            client,
        })
    }

    fn build_request_body(prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": prompt}],
            }]
        })
    }
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &"..")
            .finish()
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    fn model_id(&self) -> &str {
        self.model.as_str()
    }

    async fn generate(&self, prompt: &str) -> Result<String, SiteChatError> {
        let body = Self::build_request_body(prompt);
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url,
            self.model.as_str()
        );

        debug!(
            model = self.model.as_str(),
            prompt_chars = prompt.len(),
            "Gemini generateContent"
        );

        let resp = self
            .client
            .post(&url)
            .headers(gemini_headers(&self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if !(200..300).contains(&status) {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let body_text = resp.text().await?;
        let data: GeminiResponse = serde_json::from_str(&body_text)?;

        let candidate = data
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| SiteChatError::InvalidResponse("No candidates in Gemini response".into()))?;

        let finish_reason = candidate.finish_reason.as_deref().unwrap_or("unknown");
        if BLOCKED_FINISH_REASONS.contains(&finish_reason) {
            return Err(SiteChatError::InvalidResponse(format!(
                "Gemini withheld the reply (finish reason {finish_reason})"
            )));
        }

        let texts: Vec<String> = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();
        if texts.is_empty() {
            return Err(SiteChatError::InvalidResponse(format!(
                "Gemini candidate has no text (finish reason {finish_reason})"
            )));
        }
        let text = texts.concat();

        debug!(
            finish_reason,
            reply_chars = text.len(),
            "Gemini reply received"
        );

        Ok(text)
    }
}

// Internal Gemini response types

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiPart {
    text: Option<String>,
}
