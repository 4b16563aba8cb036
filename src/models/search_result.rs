//! Search result data structures.

use crate::error::{AppError, Result};

/// A single title found on the search page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Display title as shown on the page
    pub title: String,

    /// Opaque identifier taken from the result link (e.g. `tt1375666`)
    pub id: String,
}

impl SearchResult {
    pub fn new(title: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            id: id.into(),
        }
    }
}

/// Results of one query, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    results: Vec<SearchResult>,
}

impl ResultSet {
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self { results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchResult> {
        self.results.iter()
    }

    /// Pick a result by its 1-based position in the listing.
    pub fn select(&self, position: usize) -> Result<&SearchResult> {
        position
            .checked_sub(1)
            .and_then(|index| self.results.get(index))
            .ok_or_else(|| {
                AppError::selection(format!(
                    "{} is out of range (1-{})",
                    position,
                    self.results.len()
                ))
            })
    }

    /// Parse a typed choice and pick the matching result.
    pub fn select_input(&self, input: &str) -> Result<&SearchResult> {
        let trimmed = input.trim();
        let position = trimmed
            .parse::<usize>()
            .map_err(|_| AppError::selection(format!("'{trimmed}' is not a number")))?;
        self.select(position)
    }
}

impl From<Vec<SearchResult>> for ResultSet {
    fn from(results: Vec<SearchResult>) -> Self {
        Self::new(results)
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a SearchResult;
    type IntoIter = std::slice::Iter<'a, SearchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
