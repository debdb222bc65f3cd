//! Model identifiers.

use strum::{Display, EnumString};

/// Gemini models the assistant can target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, EnumString)]
pub enum GeminiModel {
    #[strum(serialize = "gemini-2.0-flash")]
    Gemini20Flash,
    #[strum(serialize = "gemini-2.0-flash-lite")]
    Gemini20FlashLite,
    #[strum(serialize = "gemini-2.5-flash")]
    Gemini25Flash,
    #[strum(serialize = "gemini-2.5-pro")]
    Gemini25Pro,
    #[strum(serialize = "gemini-1.5-flash")]
    Gemini15Flash,
    /// Any other model by ID.
    #[strum(default)]
    Custom(String),
}

impl GeminiModel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Gemini20Flash => "gemini-2.0-flash",
            Self::Gemini20FlashLite => "gemini-2.0-flash-lite",
            Self::Gemini25Flash => "gemini-2.5-flash",
            Self::Gemini25Pro => "gemini-2.5-pro",
            Self::Gemini15Flash => "gemini-1.5-flash",
            Self::Custom(s) => s,
        }
    }
}

impl Default for GeminiModel {
    fn default() -> Self {
        Self::Gemini20Flash
    }
}
