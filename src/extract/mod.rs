//! Link discovery for downloadable files
//!
//! This module turns fetched page text into a lazy stream of candidate URLs:
//! - [`FileKind`] names the classes of files that can be requested
//! - [`PatternExtractor`] matches a static [`PatternSet`] against raw markup
//! - [`MarkupExtractor`] reads the same links from parsed HTML
//!
//! Candidates are emitted as found, possibly relative, and never deduplicated.

mod kinds;
mod markup;
mod patterns;

pub use kinds::FileKind;
pub use markup::MarkupExtractor;
pub use patterns::{PatternExtractor, PatternSet};

use serde::Deserialize;

/// Strategy for discovering candidate links in a page
pub trait LinkExtractor: Send + Sync {
    /// Yields every candidate link for the requested kinds
    ///
    /// Kinds are searched in the order given. The returned iterator is
    /// single-pass and finite. A page with no matches yields nothing.
    fn extract<'a>(
        &'a self,
        page: &'a str,
        kinds: &'a [FileKind],
    ) -> Box<dyn Iterator<Item = String> + 'a>;
}

/// Which [`LinkExtractor`] implementation a crawl uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorKind {
    /// Regex patterns over raw markup
    #[default]
    Pattern,
    /// CSS selectors over parsed HTML
    Markup,
}

impl ExtractorKind {
    /// Builds the extractor for this strategy
    pub fn build(&self) -> Box<dyn LinkExtractor> {
        match self {
            Self::Pattern => Box::new(PatternExtractor::new()),
            Self::Markup => Box::new(MarkupExtractor::new()),
        }
    }
}
