//! Tests for configuration loading.

use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use sitechat::config::SiteChatConfig;
use sitechat::error::SiteChatError;
use sitechat::models::GeminiModel;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const CONFIG_ENV_VARS: [&str; 5] = [
    "GEMINI_API_KEY",
    "GOOGLE_API_KEY",
    "SITECHAT_MODEL",
    "SITECHAT_BASE_URL",
    "SITECHAT_TIMEOUT_SECS",
];

struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn capture(keys: &[&str]) -> Self {
        let saved = keys
            .iter()
            .map(|key| ((*key).to_string(), std::env::var(key).ok()))
            .collect();
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

fn env_lock_guard() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn clean_env() -> (std::sync::MutexGuard<'static, ()>, EnvGuard) {
    let lock = env_lock_guard();
    let guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    for key in CONFIG_ENV_VARS {
        std::env::remove_var(key);
    }
    (lock, guard)
}

#[test]
fn from_env_reads_key_model_url_and_timeout() {
    let _env = clean_env();
    std::env::set_var("GEMINI_API_KEY", "gemini-key");
    std::env::set_var("SITECHAT_MODEL", "gemini-2.5-pro");
    std::env::set_var("SITECHAT_BASE_URL", "http://localhost:9999");
    std::env::set_var("SITECHAT_TIMEOUT_SECS", "15");

    let config = SiteChatConfig::from_env().unwrap();

    assert_eq!(config.require_api_key().unwrap(), "gemini-key");
    assert_eq!(config.model, GeminiModel::Gemini25Pro);
    assert_eq!(config.base_url.as_deref(), Some("http://localhost:9999"));
    assert_eq!(config.timeout, Duration::from_secs(15));
}

#[test]
fn gemini_key_takes_precedence_over_google_key() {
    let _env = clean_env();
    std::env::set_var("GOOGLE_API_KEY", "google-key");
    std::env::set_var("GEMINI_API_KEY", "gemini-key");

    let config = SiteChatConfig::from_env().unwrap();
    assert_eq!(config.api_key.as_deref(), Some("gemini-key"));
}

#[test]
fn google_key_used_when_gemini_key_blank() {
    let _env = clean_env();
    std::env::set_var("GEMINI_API_KEY", "");
    std::env::set_var("GOOGLE_API_KEY", "google-key");

    let config = SiteChatConfig::from_env().unwrap();
    assert_eq!(config.api_key.as_deref(), Some("google-key"));
}

#[test]
fn missing_env_key_is_reported() {
    let _env = clean_env();
    let config = SiteChatConfig::from_env().unwrap();
    assert!(matches!(
        config.require_api_key(),
        Err(SiteChatError::MissingApiKey)
    ));
}

#[test]
fn toml_file_sets_widget_options() {
    let _env = clean_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sitechat.toml");
    std::fs::write(
        &path,
        r##"
api_key = "file-key"
model = "gemini-1.5-flash"
timeout_secs = 20

[widget]
bot_name = "Acme Helper"
primary_color = "#FF0000"
open_by_default = true
"##,
    )
    .unwrap();

    let config = SiteChatConfig::load(&path).unwrap();

    assert_eq!(config.api_key.as_deref(), Some("file-key"));
    assert_eq!(config.model, GeminiModel::Gemini15Flash);
    assert_eq!(config.timeout, Duration::from_secs(20));
    assert_eq!(config.widget.bot_name, "Acme Helper");
    assert_eq!(config.widget.primary_color, "#FF0000");
    assert!(config.widget.open_by_default);
    assert_eq!(config.widget.initial_message, "Hi! How can I help you today?");
}

#[test]
fn env_overrides_file_key() {
    let _env = clean_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sitechat.toml");
    std::fs::write(&path, "api_key = \"file-key\"\n").unwrap();
    std::env::set_var("GOOGLE_API_KEY", "env-key");

    let config = SiteChatConfig::load(&path).unwrap();
    assert_eq!(config.api_key.as_deref(), Some("env-key"));
}

#[test]
fn zero_timeout_from_env_is_rejected() {
    let _env = clean_env();
    std::env::set_var("SITECHAT_TIMEOUT_SECS", "0");

    let err = SiteChatConfig::from_env().unwrap_err();
    assert!(matches!(err, SiteChatError::Configuration(_)));
}

#[test]
fn non_numeric_timeout_from_env_is_rejected() {
    let _env = clean_env();
    std::env::set_var("SITECHAT_TIMEOUT_SECS", "soon");

    let err = SiteChatConfig::from_env().unwrap_err();
    assert!(matches!(err, SiteChatError::Configuration(_)));
}

#[test]
fn zero_timeout_in_file_is_rejected() {
    let _env = clean_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sitechat.toml");
    std::fs::write(&path, "timeout_secs = 0\n").unwrap();

    let err = SiteChatConfig::load(&path).unwrap_err();
    assert!(matches!(err, SiteChatError::Configuration(_)));
}

#[test]
fn missing_file_is_configuration_error() {
    let err = SiteChatConfig::load("/nonexistent/sitechat.toml").unwrap_err();
    assert!(matches!(err, SiteChatError::Configuration(_)));
}
