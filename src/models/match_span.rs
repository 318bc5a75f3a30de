use crate::types::{SimilarityScore, TokenIndex};

/// A half-open `[start, end)` range of token indices into the `TokenSequence`
/// it was searched against.
///
/// Exact matches carry no score (implicitly `1.0`); similarity matches carry
/// their Jaccard score.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MatchSpan {
    pub start: TokenIndex,
    pub end: TokenIndex,
    pub score: Option<SimilarityScore>,
}

impl MatchSpan {
    pub fn new(start: TokenIndex, end: TokenIndex) -> Self {
        Self {
            start,
            end,
            score: None,
        }
    }

    pub fn with_score(start: TokenIndex, end: TokenIndex, score: SimilarityScore) -> Self {
        Self {
            start,
            end,
            score: Some(score),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Score of the match, `1.0` for exact matches.
    pub fn similarity(&self) -> SimilarityScore {
        self.score.unwrap_or(1.0)
    }
}
