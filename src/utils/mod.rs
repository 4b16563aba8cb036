//! Utility functions and helpers.

pub mod http;

use url::Url;

use crate::error::Result;
use crate::models::QUERY_PLACEHOLDER;

/// Substitute the query, as typed, into a search URL template.
///
/// Only characters a URL cannot carry (spaces, non-ASCII) get quoted by the
/// parser; `&` and `#` keep their URL meaning.
pub fn search_url(template: &str, query: &str) -> Result<String> {
    let url = Url::parse(&template.replace(QUERY_PLACEHOLDER, query))?;
    Ok(url.to_string())
}

/// Return the `index`-th `/`-separated segment of a link, if non-empty.
///
/// `"/title/tt1375666/?ref_=fn_al_tt_1"` has segments `["", "title", "tt1375666", ...]`.
pub fn path_segment(href: &str, index: usize) -> Option<&str> {
    href.split('/').nth(index).filter(|s| !s.is_empty())
}
