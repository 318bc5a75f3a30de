use std::borrow::Cow;
use std::collections::HashSet;

use log::{debug, trace};

use crate::constants::SIMILARITY_CONTEXT_DIVISOR;
use crate::models::{tokenize, Error, MatchSpan, SimilaritySearchConfig, Token, TokenSequence};
use crate::types::{SimilarityScore, TokenIndex};
use crate::utils::{jaccard_similarity, sort_by_score, validate_threshold};

fn token_set<'a, I>(tokens: I, ignore_whitespace: bool) -> HashSet<&'a Token>
where
    I: IntoIterator<Item = &'a Token>,
{
    tokens
        .into_iter()
        .filter(|token| !(ignore_whitespace && token.is_whitespace()))
        .collect()
}

/// Find the windows of `source` whose token sets are most similar to the
/// token set of `query`.
///
/// The window width is fixed to the query's token count. Every offset is
/// scored with Jaccard similarity, the top `max_results` are taken, and only
/// then are those scoring below `threshold` dropped. Each surviving span is
/// widened by `ceil(window_size * 0.05)` tokens per side, clipped to the
/// source, to give reviewers surrounding context.
///
/// Fails with `Error::InvalidArgument` for a threshold outside `[0, 1]` or an
/// empty query (including a whitespace-only query when whitespace is
/// ignored).
pub fn similarity_search(
    source: &TokenSequence,
    query: &str,
    config: &SimilaritySearchConfig,
) -> Result<Vec<MatchSpan>, Error> {
    let threshold = validate_threshold(config.threshold)?;
    let case_sensitive = config.case_sensitive;
    let ignore_whitespace = config.ignore_whitespace;

    let query_tokens: Vec<Token> = tokenize(query)
        .tokens()
        .iter()
        .map(|token| token.fold_case(case_sensitive).into_owned())
        .collect();

    let window_size = query_tokens.len();
    if window_size == 0 {
        return Err(Error::InvalidArgument(
            "query must contain at least one token".to_string(),
        ));
    }

    let query_set = token_set(&query_tokens, ignore_whitespace);
    if query_set.is_empty() {
        return Err(Error::InvalidArgument(
            "query must contain at least one word when whitespace is ignored".to_string(),
        ));
    }

    if config.max_results == 0 || window_size > source.len() {
        debug!(
            "Skipping similarity search: query has {} tokens, source has {}, max_results {}",
            window_size,
            source.len(),
            config.max_results
        );
        return Ok(Vec::new());
    }

    let source_tokens: Vec<Cow<'_, Token>> = source
        .tokens()
        .iter()
        .map(|token| token.fold_case(case_sensitive))
        .collect();

    let mut similarities: Vec<(TokenIndex, SimilarityScore)> = source_tokens
        .windows(window_size)
        .enumerate()
        .map(|(start, window)| {
            let window_set = token_set(window.iter().map(|token| &**token), ignore_whitespace);
            // The query set is non-empty, so the union is too
            let score = jaccard_similarity(&query_set, &window_set).unwrap_or(0.0);
            (start, score)
        })
        .collect();

    debug!(
        "Scored {} windows of {} tokens",
        similarities.len(),
        window_size
    );

    sort_by_score(&mut similarities);
    similarities.truncate(config.max_results);

    let extra_tokens = window_size.div_ceil(SIMILARITY_CONTEXT_DIVISOR);

    let results = similarities
        .into_iter()
        .filter(|&(_, score)| score >= threshold)
        .map(|(start, score)| {
            trace!("Similarity match at offset {} scored {:.4}", start, score);
            MatchSpan::with_score(
                start.saturating_sub(extra_tokens),
                (start + window_size + extra_tokens).min(source.len()),
                score,
            )
        })
        .collect();

    Ok(results)
}
