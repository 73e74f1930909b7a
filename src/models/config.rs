// src/models/config.rs

//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Slack webhook settings
    #[serde(default)]
    pub slack: SlackConfig,

    /// Menu sources, in the order they appear in the message
    #[serde(default = "defaults::sources")]
    pub sources: Vec<SourceConfig>,
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
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::config("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::config("http.timeout_secs must be > 0"));
        }
        if self.slack.webhook_env.trim().is_empty() {
            return Err(AppError::config("slack.webhook_env is empty"));
        }
        if self.sources.is_empty() {
            return Err(AppError::config("No menu sources defined"));
        }
        for source in &self.sources {
            if source.title().trim().is_empty() {
                return Err(AppError::config("Source with empty title"));
            }
            if source.url().trim().is_empty() {
                return Err(AppError::config(format!(
                    "Source '{}' has an empty url",
                    source.title()
                )));
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            slack: SlackConfig::default(),
            sources: defaults::sources(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Slack webhook settings.
///
/// Only the name of the environment variable is configurable; the webhook
/// URL itself is always read from the process environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackConfig {
    /// Environment variable holding the webhook URL
    #[serde(default = "defaults::webhook_env")]
    pub webhook_env: String,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            webhook_env: defaults::webhook_env(),
        }
    }
}

/// One configured menu source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    /// Static HTML page with thumbnail galleries
    Gallery {
        /// Display title, e.g. "한양플라자 3층"
        title: String,

        /// Page URL (fetched and also used for the Slack link button)
        url: String,

        /// 0-based index of the gallery container on the page
        gallery_index: usize,
    },

    /// AJAX endpoint returning a weekly "carte" JSON payload
    Bistro {
        /// Display title, e.g. "제1생활관 식당"
        title: String,

        /// Human-facing page URL for the Slack link button
        url: String,

        /// Form-POST endpoint returning the weekly menu JSON
        endpoint: String,

        /// BISTRO_SEQ category id to keep from the payload
        category: i64,

        /// Display price for this category. The payload carries no price,
        /// so this is configuration data, not derived from the response.
        price: String,
    },
}

impl SourceConfig {
    /// Display title of the source.
    pub fn title(&self) -> &str {
        match self {
            Self::Gallery { title, .. } | Self::Bistro { title, .. } => title,
        }
    }

    /// Human-facing page URL of the source.
    pub fn url(&self) -> &str {
        match self {
            Self::Gallery { url, .. } | Self::Bistro { url, .. } => url,
        }
    }
}

mod defaults {
    use super::SourceConfig;

    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Slack defaults
    pub fn webhook_env() -> String {
        "SLACK_WEBHOOK_URL".into()
    }

    // Source defaults
    pub fn sources() -> Vec<SourceConfig> {
        vec![
            SourceConfig::Gallery {
                title: "신소재공학관 7층".to_string(),
                url: "https://www.hanyang.ac.kr/web/www/re4".to_string(),
                gallery_index: 0,
            },
            SourceConfig::Gallery {
                title: "생활과학관 7층".to_string(),
                url: "https://www.hanyang.ac.kr/web/www/re2".to_string(),
                gallery_index: 0,
            },
            SourceConfig::Gallery {
                title: "한양플라자 3층".to_string(),
                url: "https://www.hanyang.ac.kr/web/www/re1".to_string(),
                gallery_index: 1,
            },
            SourceConfig::Bistro {
                title: "제1생활관 식당".to_string(),
                url: "https://dorm.hanyang.ac.kr/food/carte.do".to_string(),
                endpoint: "https://dorm.hanyang.ac.kr/food/getWeekCarteList.do".to_string(),
                category: 1,
                price: "6,200원".to_string(),
            },
            SourceConfig::Bistro {
                title: "제2생활관 식당".to_string(),
                url: "https://dorm.hanyang.ac.kr/food/carte.do".to_string(),
                endpoint: "https://dorm.hanyang.ac.kr/food/getWeekCarteList.do".to_string(),
                category: 2,
                price: "5,200원".to_string(),
            },
        ]
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
    fn default_config_has_five_sources() {
        let config = Config::default();
        assert_eq!(config.sources.len(), 5);

        let galleries = config
            .sources
            .iter()
            .filter(|s| matches!(s, SourceConfig::Gallery { .. }))
            .count();
        assert_eq!(galleries, 3);
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.http.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_sources() {
        let mut config = Config::default();
        config.sources.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_source_kinds_from_toml() {
        let toml = r#"
            [[sources]]
            kind = "gallery"
            title = "한양플라자 3층"
            url = "https://www.hanyang.ac.kr/web/www/re1"
            gallery_index = 1

            [[sources]]
            kind = "bistro"
            title = "제1생활관 식당"
            url = "https://dorm.hanyang.ac.kr/food/carte.do"
            endpoint = "https://dorm.hanyang.ac.kr/food/getWeekCarteList.do"
            category = 1
            price = "6,200원"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.sources.len(), 2);
        assert!(matches!(config.sources[0], SourceConfig::Gallery { .. }));
        assert!(matches!(
            config.sources[1],
            SourceConfig::Bistro { category: 1, .. }
        ));
    }
}
