//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Support-platform export API settings
    #[serde(default)]
    pub platform: PlatformConfig,

    /// Logging behavior settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.platform.base_url.trim().is_empty() {
            return Err(AppError::validation("platform.base_url is empty"));
        }
        if self.platform.user_agent.trim().is_empty() {
            return Err(AppError::validation("platform.user_agent is empty"));
        }
        if self.platform.timeout_secs == 0 {
            return Err(AppError::validation("platform.timeout_secs must be > 0"));
        }
        if self.platform.max_concurrent == 0 {
            return Err(AppError::validation("platform.max_concurrent must be > 0"));
        }
        if self.platform.page_size == 0 {
            return Err(AppError::validation("platform.page_size must be > 0"));
        }
        if self.platform.max_pages == 0 {
            return Err(AppError::validation("platform.max_pages must be > 0"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platform: PlatformConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Support-platform export API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Base URL of the export API
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Bearer token for the export API (omit for unauthenticated access)
    #[serde(default)]
    pub api_token: Option<String>,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Delay between page requests in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,

    /// Maximum concurrent page requests
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,

    /// Records requested per page
    #[serde(default = "defaults::page_size")]
    pub page_size: usize,

    /// Upper bound on pages fetched in one run
    #[serde(default = "defaults::max_pages")]
    pub max_pages: usize,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            api_token: None,
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            request_delay_ms: defaults::request_delay(),
            max_concurrent: defaults::max_concurrent(),
            page_size: defaults::page_size(),
            max_pages: defaults::max_pages(),
        }
    }
}

/// Logging behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Show per-page progress during fetching
    #[serde(default = "defaults::show_progress")]
    pub show_progress: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            show_progress: defaults::show_progress(),
        }
    }
}

mod defaults {
    // Platform defaults
    pub fn base_url() -> String {
        "http://localhost:8080/api/v1".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; labeler/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn request_delay() -> u64 {
        100
    }
    pub fn max_concurrent() -> usize {
        5
    }
    pub fn page_size() -> usize {
        100
    }
    pub fn max_pages() -> usize {
        1000
    }

    // Logging defaults
    pub fn show_progress() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_base_url() {
        let mut config = Config::default();
        config.platform.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.platform.user_agent = "".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_concurrency() {
        let mut config = Config::default();
        config.platform.max_concurrent = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_page_size() {
        let mut config = Config::default();
        config.platform.page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn parse_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [platform]
            base_url = "https://support.example.com/api/v1"
            api_token = "secret"
            "#,
        )
        .unwrap();

        assert_eq!(config.platform.base_url, "https://support.example.com/api/v1");
        assert_eq!(config.platform.api_token.as_deref(), Some("secret"));
        assert_eq!(config.platform.page_size, 100);
        assert!(config.logging.show_progress);
    }
}
