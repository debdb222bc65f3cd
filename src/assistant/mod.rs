//! The assistant client: prompt assembly plus one remote call per reply.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error};

use crate::config::{SiteChatConfig, DEFAULT_TIMEOUT};
use crate::error::{fallback_reply, Result};
use crate::history::{render_transcript, Message};
use crate::models::GeminiModel;
use crate::provider::{GeminiProvider, TextGenerator};
use crate::util::with_timeout;

const INSTRUCTIONS: &str = "Please provide a helpful response as a customer support agent. \
Keep the context of the previous conversation in mind when responding.\n\
Be concise but helpful in your responses.";

/// Turns a conversation into a single reply from the remote model.
///
/// Each call is independent: the whole history and the page context are
/// sent every time, and failures come back as user-readable text rather
/// than errors.
#[derive(Clone)]
pub struct AssistantClient {
    generator: Arc<dyn TextGenerator>,
    context: String,
    timeout: Duration,
}

impl std::fmt::Debug for AssistantClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistantClient")
            .field("provider", &self.generator.provider_name())
            .field("model", &self.generator.model_id())
            .field("context_chars", &self.context.len())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl AssistantClient {
    /// Gemini client with the default model.
    ///
    /// Fails with `MissingApiKey` for an empty key and `ClientInit` if the
    /// HTTP client cannot be built. No request is made here.
    pub fn new(api_key: &str) -> Result<Self> {
        let generator =
            GeminiProvider::new(GeminiModel::default(), api_key, None, DEFAULT_TIMEOUT)?;
        Ok(Self::with_generator(Arc::new(generator)))
    }

    /// Gemini client from configuration.
    pub fn from_config(config: &SiteChatConfig) -> Result<Self> {
        let api_key = config.require_api_key()?;
        let generator = GeminiProvider::new(
            config.model.clone(),
            api_key,
            config.base_url.clone(),
            config.timeout,
        )?;
        Ok(Self::with_generator(Arc::new(generator)).with_timeout(config.timeout))
    }

    /// Client backed by any generator.
    pub fn with_generator(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            context: String::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the page context sent with every prompt.
    pub fn set_context(&mut self, context: impl Into<String>) {
        self.context = context.into();
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn generator(&self) -> &Arc<dyn TextGenerator> {
        &self.generator
    }

    /// Render the full history as `Role: content` lines.
    pub fn render_conversation(history: &[Message]) -> String {
        render_transcript(history)
    }

    /// Compose the prompt for `history`.
    pub fn build_prompt(&self, history: &[Message]) -> String {
        format!(
            "Context about the website: {}\n\nPrevious conversation:\n{}\n\n{}",
            self.context,
            Self::render_conversation(history),
            INSTRUCTIONS
        )
    }

    /// Ask the model for the next reply. Never fails: errors become one of
    /// the fixed fallback messages.
    pub async fn get_response(&self, history: &[Message]) -> String {
        let prompt = self.build_prompt(history);
        debug!(
            provider = self.generator.provider_name(),
            model = self.generator.model_id(),
            turns = history.len(),
            "requesting reply"
        );

        match with_timeout(self.timeout, self.generator.generate(&prompt)).await {
            Ok(text) => text,
            Err(e) => {
                error!(
                    error = %e,
                    category = ?e.category(),
                    provider = self.generator.provider_name(),
                    "AI response failed; replying with fallback"
                );
                fallback_reply(&e).to_string()
            }
        }
    }
}
