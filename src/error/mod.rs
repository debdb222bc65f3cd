//! Error types for sitechat.

pub mod fallback;

pub use fallback::{fallback_for_message, fallback_reply};

use thiserror::Error;

/// Primary error type for all sitechat operations.
#[derive(Error, Debug)]
pub enum SiteChatError {
    #[error("API key is required")]
    MissingApiKey,

    #[error("Failed to initialize AI service: {0}")]
    ClientInit(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid API key: {0}")]
    Authentication(String),

    #[error("API quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("network timeout after {0}ms")]
    Timeout(u64),
}

/// Broad error category for routing recovery logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Initialization,
    Authentication,
    Quota,
    Network,
    Timeout,
    Server,
    Api,
    Configuration,
    Serialization,
}

impl SiteChatError {
    /// Create an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingApiKey | Self::ClientInit(_) => ErrorCategory::Initialization,
            Self::Authentication(_) => ErrorCategory::Authentication,
            Self::QuotaExceeded(_) => ErrorCategory::Quota,
            Self::Network(_) => ErrorCategory::Network,
            Self::Timeout(_) => ErrorCategory::Timeout,
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Serialization(_) => ErrorCategory::Serialization,
            Self::Api { status, .. } => match status {
                401 | 403 => ErrorCategory::Authentication,
                429 => ErrorCategory::Quota,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Api,
            },
            Self::InvalidResponse(_) => ErrorCategory::Api,
        }
    }

    /// Whether this error happened while constructing a client. Such errors
    /// are fatal: the widget cannot be set up without a working client.
    pub fn is_initialization(&self) -> bool {
        self.category() == ErrorCategory::Initialization
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SiteChatError>;
