//! Configuration (layered: code > env > TOML file).

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, SiteChatError};
use crate::models::GeminiModel;
use crate::widget::WidgetConfig;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings for the assistant client and the widget around it.
#[derive(Clone)]
pub struct SiteChatConfig {
    pub api_key: Option<String>,
    pub model: GeminiModel,
    pub base_url: Option<String>,
    pub timeout: Duration,
    pub widget: WidgetConfig,
}

impl std::fmt::Debug for SiteChatConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteChatConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| ".."))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("widget", &self.widget)
            .finish()
    }
}

impl Default for SiteChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: GeminiModel::default(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            widget: WidgetConfig::default(),
        }
    }
}

/// On-disk shape; every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    widget: Option<WidgetConfig>,
}

impl SiteChatConfig {
    /// Load from environment variables (GEMINI_API_KEY, GOOGLE_API_KEY,
    /// SITECHAT_MODEL, SITECHAT_BASE_URL, SITECHAT_TIMEOUT_SECS).
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(source)
            .map_err(|e| SiteChatError::Configuration(e.to_string()))?;
        let mut config = Self::default();
        config.api_key = file.api_key;
        config.base_url = file.base_url;
        if let Some(model) = file.model {
            config.model = parse_model(&model);
        }
        if let Some(secs) = file.timeout_secs {
            config.timeout = timeout_from_secs(secs, "timeout_secs")?;
        }
        if let Some(widget) = file.widget {
            config.widget = widget;
        }
        Ok(config)
    }

    /// Read a TOML file, then let environment variables override it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            SiteChatError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        let _ = dotenvy::dotenv();
        let mut config = Self::from_toml_str(&source)?;
        config.apply_env()?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        for var in ["GEMINI_API_KEY", "GOOGLE_API_KEY"] {
            if let Some(key) = non_empty_var(var) {
                self.api_key = Some(key);
                break;
            }
        }
        if let Some(model) = non_empty_var("SITECHAT_MODEL") {
            self.model = parse_model(&model);
        }
        if let Some(url) = non_empty_var("SITECHAT_BASE_URL") {
            self.base_url = Some(url);
        }
        if let Some(raw) = non_empty_var("SITECHAT_TIMEOUT_SECS") {
            let secs = raw.trim().parse().map_err(|_| {
                SiteChatError::Configuration(format!(
                    "SITECHAT_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}"
                ))
            })?;
            self.timeout = timeout_from_secs(secs, "SITECHAT_TIMEOUT_SECS")?;
        }
        Ok(())
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// The configured key, or `MissingApiKey` if absent or blank.
    pub fn require_api_key(&self) -> Result<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(SiteChatError::MissingApiKey),
        }
    }
}

/// A zero timeout would fail every call, so it is refused.
fn timeout_from_secs(secs: u64, source: &str) -> Result<Duration> {
    if secs == 0 {
        return Err(SiteChatError::Configuration(format!(
            "{source} must be at least 1 second"
        )));
    }
    Ok(Duration::from_secs(secs))
}

fn parse_model(id: &str) -> GeminiModel {
    id.parse()
        .unwrap_or_else(|_| GeminiModel::Custom(id.to_string()))
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
