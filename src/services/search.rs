// src/services/search.rs

//! IMDb title search service.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::models::{Config, ResultSet};
use crate::services::extract::{ResultExtractor, SelectorExtractor};
use crate::utils::{http, search_url};

/// Anything that can answer a title query.
#[async_trait]
pub trait SearchSource: Send + Sync {
    async fn search(&self, query: &str) -> Result<ResultSet>;
}

/// Searches IMDb over HTTP and extracts results from the returned page.
pub struct ImdbSearch {
    client: Client,
    url_template: String,
    extractor: Box<dyn ResultExtractor>,
}

impl ImdbSearch {
    /// Create a search service from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = http::create_client(&config.http)?;
        let extractor = SelectorExtractor::new(&config.search)?;
        Ok(Self::with_extractor(
            client,
            &config.search.url_template,
            Box::new(extractor),
        ))
    }

    /// Create a search service with a custom extractor.
    pub fn with_extractor(
        client: Client,
        url_template: impl Into<String>,
        extractor: Box<dyn ResultExtractor>,
    ) -> Self {
        Self {
            client,
            url_template: url_template.into(),
            extractor,
        }
    }

    /// The URL a query will be sent to.
    pub fn url_for(&self, query: &str) -> Result<String> {
        search_url(&self.url_template, query)
    }
}

#[async_trait]
impl SearchSource for ImdbSearch {
    async fn search(&self, query: &str) -> Result<ResultSet> {
        let url = self.url_for(query)?;
        log::info!("Searching IMDb: {}", url);

        let markup = http::fetch_text(&self.client, &url).await?;
        self.extractor.extract(&markup)
    }
}
