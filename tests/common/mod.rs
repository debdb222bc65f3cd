//! Shared test helpers and mock generator.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;

use sitechat::error::SiteChatError;
use sitechat::provider::TextGenerator;

/// A mock generator that returns canned outcomes and records prompts.
pub struct MockGenerator {
    outcomes: Mutex<Vec<Result<String, SiteChatError>>>,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(Vec::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful reply.
    pub fn queue_reply(&self, text: &str) {
        self.outcomes.lock().unwrap().push(Ok(text.to_string()));
    }

    /// Queue a failure.
    pub fn queue_error(&self, error: SiteChatError) {
        self.outcomes.lock().unwrap().push(Err(error));
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_id(&self) -> &str {
        "mock-model"
    }

    async fn generate(&self, prompt: &str) -> Result<String, SiteChatError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            return Ok("Mock response".to_string());
        }
        outcomes.remove(0)
    }
}
