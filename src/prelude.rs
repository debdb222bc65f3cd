//! Convenience re-exports for common use.

pub use crate::assistant::AssistantClient;
pub use crate::config::SiteChatConfig;
pub use crate::context::{collect_context_string, NavigationLink, PageContext, PageDocument};
pub use crate::error::{Result, SiteChatError};
pub use crate::history::{ConversationHistory, Message, MessageId, Sender};
pub use crate::models::GeminiModel;
pub use crate::provider::{GeminiProvider, TextGenerator};
pub use crate::widget::{ChatWidget, Visibility, WidgetConfig};
