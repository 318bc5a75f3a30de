use log::{debug, trace};

use crate::models::{tokenize, Error, ExactSearchConfig, MatchSpan, TokenSequence};

/// Find every window of `source` whose tokens equal the tokens of `query`.
///
/// Sentinels compare against sentinels and words against words, so `"a  b"`
/// matches `"a b"`. Results are in ascending offset order and truncated to
/// `max_results`. An empty query, or one longer than the source, has no
/// matches.
pub fn exact_search(
    source: &TokenSequence,
    query: &str,
    config: &ExactSearchConfig,
) -> Result<Vec<MatchSpan>, Error> {
    if config.max_results == Some(0) {
        return Ok(Vec::new());
    }

    let case_sensitive = config.case_sensitive;
    let query_tokens: Vec<_> = tokenize(query)
        .tokens()
        .iter()
        .map(|token| token.fold_case(case_sensitive).into_owned())
        .collect();

    let window_size = query_tokens.len();
    if window_size == 0 || window_size > source.len() {
        debug!(
            "Skipping exact search: query has {} tokens, source has {}",
            window_size,
            source.len()
        );
        return Ok(Vec::new());
    }

    let source_tokens: Vec<_> = source
        .tokens()
        .iter()
        .map(|token| token.fold_case(case_sensitive))
        .collect();

    let limit = config.max_results.unwrap_or(usize::MAX);
    let mut results = Vec::new();

    for (start, window) in source_tokens.windows(window_size).enumerate() {
        let is_match = window
            .iter()
            .zip(&query_tokens)
            .all(|(source_token, query_token)| **source_token == *query_token);

        if is_match {
            trace!("Exact match at [{}, {})", start, start + window_size);
            results.push(MatchSpan::new(start, start + window_size));
            if results.len() == limit {
                break;
            }
        }
    }

    debug!(
        "Exact search for {} query tokens found {} match(es)",
        window_size,
        results.len()
    );

    Ok(results)
}
