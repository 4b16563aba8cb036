// src/services/extract.rs

//! Search results extraction.
//!
//! Turns a raw results page into a [`ResultSet`]. The page layout belongs to
//! IMDb and changes without notice, so everything that knows about it sits
//! behind [`ResultExtractor`].

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{ResultSet, SearchConfig, SearchResult};
use crate::utils::path_segment;

/// Reads search results out of page markup.
pub trait ResultExtractor: Send + Sync {
    fn extract(&self, markup: &str) -> Result<ResultSet>;
}

/// Extractor driven by configured CSS selectors.
#[derive(Debug)]
pub struct SelectorExtractor {
    item: Selector,
    title: Selector,
    link: Selector,
    link_attr: String,
    id_segment: usize,
}

impl SelectorExtractor {
    /// Compile the selectors from the search configuration.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        Ok(Self {
            item: Self::parse_selector(&config.item_selector)?,
            title: Self::parse_selector(&config.title_selector)?,
            link: Self::parse_selector(&config.link_selector)?,
            link_attr: config.link_attr.clone(),
            id_segment: config.id_segment,
        })
    }

    fn parse_item(&self, item: &ElementRef) -> Option<SearchResult> {
        let title_elem = item.select(&self.title).next()?;
        let title = title_elem.text().collect::<String>().trim().to_string();

        let href = item
            .select(&self.link)
            .next()?
            .value()
            .attr(&self.link_attr)?;
        let id = path_segment(href, self.id_segment)?;

        Some(SearchResult::new(title, id))
    }

    fn parse_selector(s: &str) -> Result<Selector> {
        Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
    }
}

impl ResultExtractor for SelectorExtractor {
    fn extract(&self, markup: &str) -> Result<ResultSet> {
        let document = Html::parse_document(markup);
        let mut results = Vec::new();

        for item in document.select(&self.item) {
            match self.parse_item(&item) {
                Some(result) => results.push(result),
                None => log::debug!("Skipping result block without title or link"),
            }
        }

        log::debug!("Extracted {} result(s)", results.len());
        Ok(results.into())
    }
}
