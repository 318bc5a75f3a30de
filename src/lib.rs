//! Locate extracted phrases in a plaintext document and highlight them.
//!
//! Text is split into words and collapsed whitespace sentinels. Phrases are
//! found either verbatim ([`exact_search`]) or as the closest window by
//! Jaccard similarity over token sets ([`similarity_search`]), and matched
//! spans are rendered with [`mark`].

pub mod config;
pub use config::{
    DEFAULT_EXACT_SEARCH_CONFIG, DEFAULT_HIGHLIGHT_CONFIG, DEFAULT_SIMILARITY_SEARCH_CONFIG,
};
mod constants;
pub use constants::{NEWLINE_SENTINEL, SPACE_SENTINEL};
pub mod models;
pub use models::{
    detokenize, exact_search, highlight_phrases, mark, read_extraction_rows, resolve_extraction,
    resolve_question_answers, similarity_search, token_ranges, tokenize, write_resolved_rows,
    Error, ExactSearchConfig, HighlightConfig, HighlightMap, MatchSpan, QuestionAnswer,
    ResolvedExtraction, ResolvedQuestionAnswer, SimilaritySearchConfig, Token, TokenKind,
    TokenSequence,
};
pub mod types;
pub use types::{ExtractedText, QuestionLabel, SimilarityScore, TokenIndex};
pub mod utils;
pub use utils::{jaccard_similarity, validate_max_results, validate_threshold};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
