use crate::models::{ExactSearchConfig, HighlightConfig, SimilaritySearchConfig};

pub const DEFAULT_EXACT_SEARCH_CONFIG: ExactSearchConfig = ExactSearchConfig {
    max_results: Some(1),
    case_sensitive: false,
};

pub const DEFAULT_SIMILARITY_SEARCH_CONFIG: SimilaritySearchConfig = SimilaritySearchConfig {
    threshold: 0.0,
    max_results: 1,
    case_sensitive: false,
    ignore_whitespace: true,
};

pub const DEFAULT_HIGHLIGHT_CONFIG: HighlightConfig<'static> = HighlightConfig {
    start_tag: "<mark>",
    end_tag: "</mark>",
    reverse: false,
};
