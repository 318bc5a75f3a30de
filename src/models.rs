pub mod config;
pub use config::{ExactSearchConfig, HighlightConfig, SimilaritySearchConfig};

pub mod error;
pub use error::Error;

pub mod exact_matcher;
pub use exact_matcher::exact_search;

pub mod extraction_csv;
pub use extraction_csv::{read_extraction_rows, write_resolved_rows};

pub mod extraction_resolver;
pub use extraction_resolver::{
    highlight_phrases, resolve_extraction, resolve_question_answers, QuestionAnswer,
    ResolvedExtraction, ResolvedQuestionAnswer,
};

pub mod highlighter;
pub use highlighter::{mark, HighlightMap};

pub mod match_span;
pub use match_span::MatchSpan;

pub mod similarity_matcher;
pub use similarity_matcher::similarity_search;

pub mod token;
pub use token::{Token, TokenKind};

pub mod token_sequence;
pub use token_sequence::TokenSequence;

pub mod tokenizer;
pub use tokenizer::{detokenize, token_ranges, tokenize, TokenRanges};
