//! Regex-based link discovery over raw markup
//!
//! Patterns are applied to the page text as-is, without parsing it as HTML.
//! They tolerate malformed markup but do not validate it.

use crate::extract::{FileKind, LinkExtractor};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Ordered discovery patterns per file kind. Capture group 1 is the link.
const PATTERN_TABLE: &[(FileKind, &[&str])] = &[
    (
        FileKind::Jpg,
        &[
            r#"<img.*src="?([^" ]+\.jpg)"#,
            r#"<a.*href="?([^" ]+\.jpg)"#,
        ],
    ),
    (
        FileKind::Mp3,
        &[
            r#"<audio.*src="?([^" ]+\.mp3)"#,
            r#"<a.*href="?([^" ]+\.mp3)"#,
        ],
    ),
    (FileKind::Pdf, &[r#"<a.*href="?([^" ]+\.pdf)"#]),
    (
        FileKind::Png,
        &[
            r#"<img.*src="?([^" ]+\.png)"#,
            r#"<a.*href="?([^" ]+\.png)"#,
        ],
    ),
];

static DEFAULT_PATTERNS: LazyLock<PatternSet> = LazyLock::new(PatternSet::compile_default);

/// Mapping from file kind to its ordered list of compiled patterns
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: HashMap<FileKind, Vec<Regex>>,
}

impl PatternSet {
    /// Returns the process-wide default pattern set
    pub fn default_set() -> &'static PatternSet {
        &DEFAULT_PATTERNS
    }

    fn compile_default() -> Self {
        let patterns = PATTERN_TABLE
            .iter()
            .map(|(kind, sources)| {
                let compiled = sources
                    .iter()
                    .map(|source| Regex::new(source).expect("built-in link pattern is valid"))
                    .collect();
                (*kind, compiled)
            })
            .collect();

        Self { patterns }
    }

    /// Returns the patterns for a kind, in application order
    pub fn patterns_for(&self, kind: FileKind) -> &[Regex] {
        self.patterns.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Link extractor that applies a [`PatternSet`] to raw page text
#[derive(Debug, Clone, Copy)]
pub struct PatternExtractor {
    patterns: &'static PatternSet,
}

impl PatternExtractor {
    /// Creates an extractor backed by the default pattern set
    pub fn new() -> Self {
        Self {
            patterns: PatternSet::default_set(),
        }
    }
}

impl Default for PatternExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkExtractor for PatternExtractor {
    fn extract<'a>(
        &'a self,
        page: &'a str,
        kinds: &'a [FileKind],
    ) -> Box<dyn Iterator<Item = String> + 'a> {
        let patterns = self.patterns;
        Box::new(
            kinds
                .iter()
                .flat_map(move |kind| patterns.patterns_for(*kind).iter())
                .flat_map(move |regex| regex.captures_iter(page))
                .filter_map(|captures| captures.get(1).map(|m| m.as_str().to_string())),
        )
    }
}
