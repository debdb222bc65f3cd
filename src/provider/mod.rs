//! Text generation backends.

pub mod google;
pub mod http;

pub use google::GeminiProvider;

use async_trait::async_trait;

use crate::error::SiteChatError;

/// The one capability the assistant needs from a model: prompt in, text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider name (e.g., "google").
    fn provider_name(&self) -> &str;
    /// The model ID this generator serves.
    fn model_id(&self) -> &str;

    /// Generate a reply for a single prompt. One round trip, no streaming.
    async fn generate(&self, prompt: &str) -> Result<String, SiteChatError>;
}
