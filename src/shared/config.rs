//! Application configuration. Bot credentials, message styling, HTTP limits.

use crate::domain::{Markers, ParseMode};
use serde::Deserialize;
use std::time::Duration;

/// Default bound on the sendMessage HTTP request, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Bot credential for the API path. Read from TG_NOTIFY_BOT_TOKEN.
    pub bot_token: Option<String>,

    /// Destination chat identifier. Read from TG_NOTIFY_CHAT_ID.
    pub chat_id: Option<String>,

    /// Optional label prefixed in bold to every remote message. Read from TG_NOTIFY_SERVICE_NAME.
    #[serde(default)]
    pub service_name: Option<String>,

    /// Formatting mode for remote messages: "HTML" or "MarkdownV2". Read from TG_NOTIFY_PARSE_MODE.
    #[serde(default)]
    pub parse_mode: Option<String>,

    /// Timeout in seconds for the sendMessage request. Read from TG_NOTIFY_HTTP_TIMEOUT_SECS.
    #[serde(default)]
    pub http_timeout_secs: Option<u64>,

    /// Marker override for info messages. Read from TG_NOTIFY_MARKER_INFO.
    #[serde(default)]
    pub marker_info: Option<String>,

    /// Marker override for error messages. Read from TG_NOTIFY_MARKER_ERROR.
    #[serde(default)]
    pub marker_error: Option<String>,

    /// Marker override for fatal messages. Read from TG_NOTIFY_MARKER_FATAL.
    #[serde(default)]
    pub marker_fatal: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("TG_NOTIFY"));
        if let Ok(path) = std::env::var("TG_NOTIFY_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the bot token from config or TG_NOTIFY_BOT_TOKEN env.
    pub fn bot_token(&self) -> Option<String> {
        self.bot_token
            .clone()
            .or_else(|| std::env::var("TG_NOTIFY_BOT_TOKEN").ok())
    }

    /// Returns the chat ID from config or TG_NOTIFY_CHAT_ID env.
    pub fn chat_id(&self) -> Option<String> {
        self.chat_id
            .clone()
            .or_else(|| std::env::var("TG_NOTIFY_CHAT_ID").ok())
    }

    /// Returns the parse mode. Defaults to HTML if unset or unrecognized.
    pub fn parse_mode_or_default(&self) -> ParseMode {
        self.parse_mode
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Returns the HTTP timeout. Defaults to DEFAULT_HTTP_TIMEOUT_SECS if unset.
    pub fn http_timeout_or_default(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs.unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS))
    }

    /// Returns severity markers with any configured overrides applied.
    pub fn markers(&self) -> Markers {
        let mut markers = Markers::default();
        if let Some(m) = &self.marker_info {
            markers.info = m.clone();
        }
        if let Some(m) = &self.marker_error {
            markers.error = m.clone();
        }
        if let Some(m) = &self.marker_fatal {
            markers.fatal = m.clone();
        }
        markers
    }

    /// Returns true if remote delivery is fully configured (token and chat present).
    pub fn is_telegram_configured(&self) -> bool {
        self.bot_token().is_some() && self.chat_id().is_some()
    }
}
