//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Placeholder in the search URL template that receives the encoded query.
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Search endpoint and markup contract
    #[serde(default)]
    pub search: SearchConfig,

    /// Embed service settings
    #[serde(default)]
    pub embed: EmbedConfig,
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
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if !self.search.url_template.contains(QUERY_PLACEHOLDER) {
            return Err(AppError::validation(format!(
                "search.url_template must contain {QUERY_PLACEHOLDER}"
            )));
        }
        for (name, value) in [
            ("search.item_selector", &self.search.item_selector),
            ("search.title_selector", &self.search.title_selector),
            ("search.link_selector", &self.search.link_selector),
            ("search.link_attr", &self.search.link_attr),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::validation(format!("{name} is empty")));
            }
        }
        if self.embed.base_url.trim().is_empty() {
            return Err(AppError::validation("embed.base_url is empty"));
        }
        Ok(())
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

/// Search endpoint and the selectors used to read its results page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search URL with a `{query}` placeholder
    #[serde(default = "defaults::url_template")]
    pub url_template: String,

    /// CSS selector for each result block
    #[serde(default = "defaults::item_selector")]
    pub item_selector: String,

    /// CSS selector for the title element within a block
    #[serde(default = "defaults::title_selector")]
    pub title_selector: String,

    /// CSS selector for the link element within a block
    #[serde(default = "defaults::link_selector")]
    pub link_selector: String,

    /// HTML attribute holding the link path
    #[serde(default = "defaults::link_attr")]
    pub link_attr: String,

    /// Index of the `/`-separated path segment holding the identifier
    #[serde(default = "defaults::id_segment")]
    pub id_segment: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            url_template: defaults::url_template(),
            item_selector: defaults::item_selector(),
            title_selector: defaults::title_selector(),
            link_selector: defaults::link_selector(),
            link_attr: defaults::link_attr(),
            id_segment: defaults::id_segment(),
        }
    }
}

/// Embed service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedConfig {
    /// Prefix the identifier is appended to
    #[serde(default = "defaults::embed_base_url")]
    pub base_url: String,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::embed_base_url(),
        }
    }
}

pub(crate) mod defaults {
    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; imdb-vidsrc/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Search defaults
    pub fn url_template() -> String {
        "https://www.imdb.com/find?q={query}&s=tt&ttype=tv,movie".into()
    }
    pub fn item_selector() -> String {
        ".findResult".into()
    }
    pub fn title_selector() -> String {
        ".result_text".into()
    }
    pub fn link_selector() -> String {
        "a".into()
    }
    pub fn link_attr() -> String {
        "href".into()
    }
    pub fn id_segment() -> usize {
        2
    }

    // Embed defaults
    pub const EMBED_BASE_URL: &str = "https://vidsrc.cc/v2/embed/movie/";

    pub fn embed_base_url() -> String {
        EMBED_BASE_URL.into()
    }
}
