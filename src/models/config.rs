use crate::config::{
    DEFAULT_EXACT_SEARCH_CONFIG, DEFAULT_HIGHLIGHT_CONFIG, DEFAULT_SIMILARITY_SEARCH_CONFIG,
};
use crate::types::SimilarityScore;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ExactSearchConfig {
    /// `None` returns every occurrence.
    pub max_results: Option<usize>,
    pub case_sensitive: bool,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SimilaritySearchConfig {
    /// Minimum score, in `[0, 1]`, applied after the top `max_results` are taken.
    pub threshold: SimilarityScore,
    pub max_results: usize,
    pub case_sensitive: bool,
    /// Drop space and newline sentinels from both token sets before scoring.
    pub ignore_whitespace: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HighlightConfig<'a> {
    pub start_tag: &'a str,
    pub end_tag: &'a str,
    /// Highlight everything outside the spans instead of inside them.
    pub reverse: bool,
}

impl Default for ExactSearchConfig {
    fn default() -> Self {
        DEFAULT_EXACT_SEARCH_CONFIG
    }
}

impl Default for SimilaritySearchConfig {
    fn default() -> Self {
        DEFAULT_SIMILARITY_SEARCH_CONFIG
    }
}

impl Default for HighlightConfig<'static> {
    fn default() -> Self {
        DEFAULT_HIGHLIGHT_CONFIG
    }
}
