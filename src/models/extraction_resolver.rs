use log::{debug, warn};

use crate::config::{DEFAULT_EXACT_SEARCH_CONFIG, DEFAULT_SIMILARITY_SEARCH_CONFIG};
use crate::models::{
    exact_search, mark, similarity_search, tokenize, Error, ExactSearchConfig, HighlightConfig,
    MatchSpan, Token, TokenSequence,
};
use crate::types::{ExtractedText, QuestionLabel, SimilarityScore};

/// The answers a model extracted for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionAnswer {
    pub question_label: QuestionLabel,
    pub extracted_text: Vec<ExtractedText>,
}

/// An extracted phrase replaced by the closest text actually present in the
/// source document.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedExtraction {
    pub original_text: ExtractedText,
    pub matched_text: ExtractedText,
    /// `None` when the phrase has no words or more tokens than the whole document.
    pub span: Option<MatchSpan>,
    pub score: SimilarityScore,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedQuestionAnswer {
    pub question_label: QuestionLabel,
    pub extractions: Vec<ResolvedExtraction>,
}

/// Replace a possibly imperfect extraction with text from `source`.
///
/// A verbatim occurrence wins with score `1.0`. Otherwise the best
/// similarity window (widened for context) is used along with its score.
/// Phrases without any words, or longer than the document, are left
/// unmatched with score `0.0`.
pub fn resolve_extraction(
    source: &TokenSequence,
    phrase: &str,
) -> Result<ResolvedExtraction, Error> {
    if tokenize(phrase).tokens().iter().all(Token::is_whitespace) {
        warn!("Extraction contains no words; leaving it unmatched");
        return Ok(unmatched(phrase));
    }

    if let Some(span) = exact_search(source, phrase, &DEFAULT_EXACT_SEARCH_CONFIG)?
        .into_iter()
        .next()
    {
        debug!("Extraction found verbatim at [{}, {})", span.start, span.end);
        return Ok(ResolvedExtraction {
            original_text: phrase.to_string(),
            matched_text: source.span_text(&span)?,
            span: Some(span),
            score: 1.0,
        });
    }

    match similarity_search(source, phrase, &DEFAULT_SIMILARITY_SEARCH_CONFIG)?
        .into_iter()
        .next()
    {
        Some(span) => {
            debug!(
                "Extraction resolved by similarity at [{}, {}) with score {:.4}",
                span.start,
                span.end,
                span.similarity()
            );
            Ok(ResolvedExtraction {
                original_text: phrase.to_string(),
                matched_text: source.span_text(&span)?,
                span: Some(span),
                score: span.similarity(),
            })
        }
        None => {
            warn!(
                "Extraction is longer than the source document ({} tokens); leaving it unmatched",
                source.len()
            );
            Ok(unmatched(phrase))
        }
    }
}

fn unmatched(phrase: &str) -> ResolvedExtraction {
    ResolvedExtraction {
        original_text: phrase.to_string(),
        matched_text: String::new(),
        span: None,
        score: 0.0,
    }
}

/// Resolve every extracted phrase of every question against `source`.
pub fn resolve_question_answers(
    source: &TokenSequence,
    question_answers: &[QuestionAnswer],
) -> Result<Vec<ResolvedQuestionAnswer>, Error> {
    question_answers
        .iter()
        .map(|question_answer| {
            let extractions = question_answer
                .extracted_text
                .iter()
                .map(|phrase| resolve_extraction(source, phrase))
                .collect::<Result<Vec<_>, Error>>()?;

            Ok(ResolvedQuestionAnswer {
                question_label: question_answer.question_label.clone(),
                extractions,
            })
        })
        .collect()
}

/// Highlight every verbatim occurrence of each phrase in `source`.
///
/// Phrases that do not occur are skipped.
pub fn highlight_phrases<S: AsRef<str>>(
    source: &TokenSequence,
    phrases: &[S],
    config: &HighlightConfig,
) -> Result<String, Error> {
    let search_config = ExactSearchConfig {
        max_results: None,
        ..DEFAULT_EXACT_SEARCH_CONFIG
    };

    let mut spans = Vec::new();
    for phrase in phrases {
        spans.extend(exact_search(source, phrase.as_ref(), &search_config)?);
    }

    debug!(
        "Highlighting {} span(s) for {} phrase(s)",
        spans.len(),
        phrases.len()
    );

    mark(source, &spans, config)
}
