//! Headless chat widget state.
//!
//! Holds everything a renderer needs (visibility, input box, loading
//! condition, scroll requests, history) and drives the [`AssistantClient`]
//! when the visitor submits. Rendering itself is left to the host.

use bon::Builder;
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{info, warn};

use crate::assistant::AssistantClient;
use crate::context::{PageContext, PageDocument};
use crate::history::{ConversationHistory, Message};

pub const DEFAULT_BOT_NAME: &str = "AI Assistant";
pub const DEFAULT_GREETING: &str = "Hi! How can I help you today?";
pub const DEFAULT_PRIMARY_COLOR: &str = "#4299E1";

/// Presentation options. Feature differences between widget flavours are
/// flags here rather than separate widgets.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    #[builder(into, default = DEFAULT_BOT_NAME.to_string())]
    pub bot_name: String,
    #[builder(into, default = DEFAULT_GREETING.to_string())]
    pub initial_message: String,
    #[builder(into, default = DEFAULT_PRIMARY_COLOR.to_string())]
    pub primary_color: String,
    #[builder(default = false)]
    pub open_by_default: bool,
    #[builder(default = true)]
    pub show_loading_indicator: bool,
    #[builder(default = true)]
    pub auto_scroll: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Whether the chat panel is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Visibility {
    Closed,
    Open,
}

/// A submitted message waiting for its reply.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    /// The full history at send time, ending with the new user message.
    pub history: Vec<Message>,
}

/// One chat session embedded in a page.
#[derive(Debug)]
pub struct ChatWidget {
    client: AssistantClient,
    config: WidgetConfig,
    visibility: Visibility,
    history: ConversationHistory,
    input: String,
    loading: bool,
    scroll_requested: bool,
}

impl ChatWidget {
    pub fn new(client: AssistantClient, config: WidgetConfig) -> Self {
        let visibility = if config.open_by_default {
            Visibility::Open
        } else {
            Visibility::Closed
        };
        let history = ConversationHistory::new(config.initial_message.clone());
        Self {
            client,
            scroll_requested: config.auto_scroll,
            config,
            visibility,
            history,
            input: String::new(),
            loading: false,
        }
    }

    /// Snapshot the page and hand it to the client. Called once when the
    /// widget is mounted; calling it again re-collects, which is how hosts
    /// with client-side navigation keep the context current.
    pub fn seed_context(&mut self, document: &PageDocument) -> PageContext {
        let context = PageContext::collect(document);
        self.client.set_context(context.to_context_string());
        context
    }

    pub fn client(&self) -> &AssistantClient {
        &self.client
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn open(&mut self) {
        if self.visibility == Visibility::Open {
            return;
        }
        self.visibility = Visibility::Open;
        self.request_scroll();
        info!(bot = %self.config.bot_name, "chat widget opened");
    }

    pub fn close(&mut self) {
        if self.visibility == Visibility::Closed {
            return;
        }
        self.visibility = Visibility::Closed;
        info!(bot = %self.config.bot_name, "chat widget closed");
    }

    pub fn toggle(&mut self) {
        match self.visibility {
            Visibility::Open => self.close(),
            Visibility::Closed => self.open(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the renderer should draw the typing indicator.
    pub fn shows_loading_indicator(&self) -> bool {
        self.loading && self.config.show_loading_indicator
    }

    /// Returns true once after the message list changed or the panel opened,
    /// if auto-scroll is enabled.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }

    fn request_scroll(&mut self) {
        if self.config.auto_scroll {
            self.scroll_requested = true;
        }
    }

    /// Start sending the current input.
    ///
    /// Returns `None` when the input is blank or a reply is still
    /// outstanding. Otherwise the user message is appended, the input is
    /// cleared and the widget stays loading until [`finish_send`].
    ///
    /// [`finish_send`]: Self::finish_send
    pub fn begin_send(&mut self) -> Option<PendingRequest> {
        if self.loading {
            warn!("submit ignored; a reply is still pending");
            return None;
        }
        if self.input.trim().is_empty() {
            return None;
        }
        let content = std::mem::take(&mut self.input);
        self.history.push_user(content);
        self.loading = true;
        self.request_scroll();
        info!(turns = self.history.len(), "message submitted");
        Some(PendingRequest {
            history: self.history.messages().to_vec(),
        })
    }

    /// Append the reply for the outstanding request and leave loading.
    pub fn finish_send(&mut self, reply: impl Into<String>) -> &Message {
        self.loading = false;
        self.request_scroll();
        self.history.push_bot(reply)
    }

    /// Submit the current input and wait for the reply. Returns the bot
    /// message, or `None` if nothing was sent.
    pub async fn send(&mut self) -> Option<&Message> {
        let pending = self.begin_send()?;
        let reply = self.client.get_response(&pending.history).await;
        Some(self.finish_send(reply))
    }
}
