//! Configuration System
//!
//! Handles loading configuration from TOML and environment variables.
//! The browser shell embeds its TOML at compile time; native hosts may load
//! it from disk.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub locale: LocaleConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API location and screen paths
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_local_url")]
    pub local_url: String,

    #[serde(default = "default_remote_url")]
    pub remote_url: String,

    #[serde(default = "default_local_hosts")]
    pub local_hosts: Vec<String>,

    /// Forces a base URL regardless of the page host
    #[serde(default)]
    pub override_url: Option<String>,

    #[serde(default = "default_login_path")]
    pub login_path: String,

    #[serde(default = "default_dashboard_path")]
    pub dashboard_path: String,
}

fn default_local_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_remote_url() -> String {
    "https://seu-backend.onrender.com/api".to_string()
}

fn default_local_hosts() -> Vec<String> {
    vec!["localhost".to_string(), "127.0.0.1".to_string()]
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_dashboard_path() -> String {
    "/".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            local_url: default_local_url(),
            remote_url: default_remote_url(),
            local_hosts: default_local_hosts(),
            override_url: None,
            login_path: default_login_path(),
            dashboard_path: default_dashboard_path(),
        }
    }
}

impl ApiConfig {
    /// Resolve the API base URL for the host the dashboard is served from
    pub fn base_url_for_host(&self, host: &str) -> String {
        let url = match &self.override_url {
            Some(url) if !url.trim().is_empty() => url.as_str(),
            _ if self.local_hosts.iter().any(|h| h == host) => self.local_url.as_str(),
            _ => self.remote_url.as_str(),
        };
        url.trim_end_matches('/').to_string()
    }
}

/// Durable storage keys for the session
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,

    #[serde(default = "default_user_key")]
    pub user_key: String,

    #[serde(default = "default_api_url_key")]
    pub api_url_key: String,
}

fn default_token_key() -> String {
    "silvess_token".to_string()
}

fn default_user_key() -> String {
    "silvess_user".to_string()
}

fn default_api_url_key() -> String {
    "silvess_api_url".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
            user_key: default_user_key(),
            api_url_key: default_api_url_key(),
        }
    }
}

/// Number and date presentation (pt-BR by default)
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,

    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: char,

    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default = "default_date_time_format")]
    pub date_time_format: String,
}

fn default_currency_symbol() -> String {
    "R$".to_string()
}

fn default_decimal_separator() -> char {
    ','
}

fn default_thousands_separator() -> char {
    '.'
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_date_time_format() -> String {
    "%d/%m/%Y, %H:%M".to_string()
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            decimal_separator: default_decimal_separator(),
            thousands_separator: default_thousands_separator(),
            date_format: default_date_format(),
            date_time_format: default_date_time_format(),
        }
    }
}

/// Dashboard behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_notice_timeout")]
    pub notice_timeout_ms: u32,

    #[serde(default = "default_search_debounce")]
    pub search_debounce_ms: u32,

    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint_px: u32,
}

fn default_notice_timeout() -> u32 {
    3000
}

fn default_search_debounce() -> u32 {
    300
}

fn default_mobile_breakpoint() -> u32 {
    768
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notice_timeout_ms: default_notice_timeout(),
            search_debounce_ms: default_search_debounce(),
            mobile_breakpoint_px: default_mobile_breakpoint(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    #[serde(default = "default_true")]
    pub timestamps: bool,

    #[serde(default = "default_true")]
    pub ansi: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            timestamps: true,
            ansi: true,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: None,
            error: e.to_string(),
        })
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            error: e.to_string(),
        })
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("SILVESS_API_URL") {
            self.api.override_url = Some(url);
        }

        if let Ok(level) = std::env::var("SILVESS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("SILVESS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config {path:?}: {error}")]
    Parse {
        path: Option<PathBuf>,
        error: String,
    },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# SILVESS Dashboard Configuration
#
# Environment variables override these settings (native hosts only):
# - SILVESS_API_URL
# - SILVESS_LOG_LEVEL
# - SILVESS_LOG_FORMAT

[api]
# Backend used when the dashboard is served from a local host
local_url = "http://localhost:5000/api"

# Backend used from any other host
remote_url = "https://seu-backend.onrender.com/api"

# Hosts considered local
local_hosts = ["localhost", "127.0.0.1"]

# Screens
login_path = "/login"
dashboard_path = "/"

[session]
# Durable storage keys
token_key = "silvess_token"
user_key = "silvess_user"
api_url_key = "silvess_api_url"

[locale]
currency_symbol = "R$"
decimal_separator = ","
thousands_separator = "."
date_format = "%d/%m/%Y"
date_time_format = "%d/%m/%Y, %H:%M"

[ui]
# How long notices stay on screen (ms)
notice_timeout_ms = 3000

# Delay before a search box triggers a reload (ms)
search_debounce_ms = 300

# Sidebar closes after navigation at or below this width (px)
mobile_breakpoint_px = 768

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

timestamps = true
ansi = true
"#
    .to_string()
}
