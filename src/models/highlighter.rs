use log::debug;

use crate::models::{detokenize, Error, HighlightConfig, MatchSpan, TokenSequence};

/// One flag per token: whether the token falls inside a highlighted run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightMap(Vec<bool>);

impl HighlightMap {
    /// OR together the coverage of every span, then optionally invert it.
    pub fn build(
        source: &TokenSequence,
        spans: &[MatchSpan],
        reverse: bool,
    ) -> Result<Self, Error> {
        let mut flags = vec![false; source.len()];

        for span in spans {
            source.check_span(span)?;
            flags[span.start..span.end].fill(true);
        }

        if reverse {
            flags.iter_mut().for_each(|flag| *flag = !*flag);
        }

        Ok(Self(flags))
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|&flag| flag)
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

/// Surround the tokens covered by `spans` with the configured tags.
///
/// Tags are placed only at the boundaries of each maximal run of highlighted
/// tokens, never inside a run. With `reverse`, the tokens outside the spans
/// are highlighted instead. When no token ends up highlighted the plain text
/// is returned.
///
/// Nothing is escaped: the caller sanitises the source text before it is
/// tokenized.
pub fn mark(
    source: &TokenSequence,
    spans: &[MatchSpan],
    config: &HighlightConfig,
) -> Result<String, Error> {
    let highlight_map = HighlightMap::build(source, spans, config.reverse)?;

    if !highlight_map.any() {
        return Ok(detokenize(source.tokens()));
    }

    let mut marked = String::new();
    let mut runs = 0;

    for (index, token) in source.tokens().iter().enumerate() {
        let highlighted = highlight_map.is_highlighted(index);

        if highlighted && (index == 0 || !highlight_map.is_highlighted(index - 1)) {
            marked.push_str(config.start_tag);
            runs += 1;
        }

        marked.push_str(token.as_text());

        if highlighted && !highlight_map.is_highlighted(index + 1) {
            marked.push_str(config.end_tag);
        }
    }

    debug!("Marked {} highlighted run(s)", runs);

    Ok(marked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_HIGHLIGHT_CONFIG;
    use crate::models::tokenize;

    #[test]
    fn test_overlapping_spans_merge_into_one_run() {
        let source = tokenize("one two three four");
        let spans = [MatchSpan::new(0, 3), MatchSpan::new(2, 5)];
        let marked = mark(&source, &spans, &DEFAULT_HIGHLIGHT_CONFIG).unwrap();
        assert_eq!(marked, "<mark>one two three</mark> four");
    }

    #[test]
    fn test_separate_runs() {
        let source = tokenize("one two three");
        let spans = [MatchSpan::new(0, 1), MatchSpan::new(4, 5)];
        let marked = mark(&source, &spans, &DEFAULT_HIGHLIGHT_CONFIG).unwrap();
        assert_eq!(marked, "<mark>one</mark> two <mark>three</mark>");
    }

    #[test]
    fn test_reverse_highlights_the_complement() {
        let source = tokenize("keep this part");
        let config = HighlightConfig {
            reverse: true,
            ..DEFAULT_HIGHLIGHT_CONFIG
        };
        let marked = mark(&source, &[MatchSpan::new(2, 3)], &config).unwrap();
        assert_eq!(marked, "<mark>keep </mark>this<mark> part</mark>");
    }

    #[test]
    fn test_empty_spans_are_ignored() {
        let source = tokenize("nothing here");
        let marked = mark(&source, &[MatchSpan::new(1, 1)], &DEFAULT_HIGHLIGHT_CONFIG).unwrap();
        assert_eq!(marked, "nothing here");
    }

    #[test]
    fn test_rejects_malformed_span() {
        let source = tokenize("a b");
        assert!(matches!(
            mark(&source, &[MatchSpan::new(2, 9)], &DEFAULT_HIGHLIGHT_CONFIG),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_highlight_map_reverse() {
        let source = tokenize("a b");
        let map = HighlightMap::build(&source, &[MatchSpan::new(0, 1)], true).unwrap();
        assert_eq!(map.as_slice(), &[false, true, true]);
    }
}
