//! Structured link discovery using an HTML parser
//!
//! An alternative to [`PatternExtractor`](crate::extract::PatternExtractor)
//! behind the same [`LinkExtractor`] contract. Attribute values are read from
//! parsed elements instead of being matched against raw text.

use crate::extract::{FileKind, LinkExtractor};
use scraper::{Html, Selector};

/// Link extractor that walks parsed markup with CSS selectors
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupExtractor;

impl MarkupExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl LinkExtractor for MarkupExtractor {
    fn extract<'a>(
        &'a self,
        page: &'a str,
        kinds: &'a [FileKind],
    ) -> Box<dyn Iterator<Item = String> + 'a> {
        // Selected elements borrow the local document, so links are gathered
        // eagerly and handed out as an owned iterator.
        let document = Html::parse_document(page);
        let mut links = Vec::new();

        for kind in kinds {
            for (selector, attribute) in selectors_for(*kind) {
                let Ok(selector) = Selector::parse(selector) else {
                    continue;
                };

                for element in document.select(&selector) {
                    if let Some(value) = element.value().attr(attribute) {
                        if has_extension(value, kind.extension()) {
                            links.push(value.trim().to_string());
                        }
                    }
                }
            }
        }

        tracing::debug!("Markup extractor found {} candidate links", links.len());
        Box::new(links.into_iter())
    }
}

/// Returns the (selector, attribute) pairs searched for a kind, in order
fn selectors_for(kind: FileKind) -> Vec<(&'static str, &'static str)> {
    let mut selectors = Vec::with_capacity(2);
    if kind.is_image() {
        selectors.push(("img[src]", "src"));
    }
    if kind.is_audio() {
        selectors.push(("audio[src]", "src"));
    }
    selectors.push(("a[href]", "href"));
    selectors
}

/// Checks the link's path (query and fragment ignored) for an extension
fn has_extension(link: &str, extension: &str) -> bool {
    let path = link
        .trim()
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    path.len() > extension.len() + 1 && path.ends_with(&format!(".{}", extension))
}
