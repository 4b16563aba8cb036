//! Embed link construction.

use crate::models::{EMBED_BASE_URL, EmbedConfig};

/// Build the default VidSrc movie embed URL for an identifier.
pub fn build_target_url(id: &str) -> String {
    format!("{EMBED_BASE_URL}{id}")
}

impl EmbedConfig {
    /// Build the embed URL for an identifier using the configured prefix.
    ///
    /// The identifier is appended as-is.
    pub fn target_url(&self, id: &str) -> String {
        format!("{}{}", self.base_url, id)
    }
}
