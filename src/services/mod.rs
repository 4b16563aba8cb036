//! Service layer for the lookup application.
//!
//! This module contains the business logic for:
//! - Searching IMDb (`ImdbSearch`)
//! - Reading results out of a page (`SelectorExtractor`)
//! - Building embed links (`build_target_url`)
//! - Opening links in a browser (`BrowserLauncher`)

mod embed;
mod extract;
mod launcher;
mod search;

pub use embed::build_target_url;
pub use extract::{ResultExtractor, SelectorExtractor};
pub use launcher::{BrowserLauncher, Launcher, launch};
pub use search::{ImdbSearch, SearchSource};

#[cfg(test)]
pub(crate) use launcher::tests::RecordingLauncher;
