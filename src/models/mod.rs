// src/models/mod.rs

//! Domain models for the lookup application.

mod config;
mod search_result;

// Re-export all public types
pub use config::{Config, EmbedConfig, HttpConfig, QUERY_PLACEHOLDER, SearchConfig};
pub use search_result::{ResultSet, SearchResult};

pub(crate) use config::defaults::EMBED_BASE_URL;
