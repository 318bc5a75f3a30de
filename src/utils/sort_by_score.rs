use crate::types::{SimilarityScore, TokenIndex};

/// Sorts `(offset, score)` pairs by score, highest first.
///
/// The sort is stable, so windows with equal scores stay in ascending offset
/// order. NaN scores compare as equal.
pub fn sort_by_score(scores: &mut [(TokenIndex, SimilarityScore)]) {
    scores.sort_by(|a, b| {
        b.1.partial_cmp(&a.1) // Sort by score (descending)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_keep_offset_order() {
        let mut scores = vec![(0, 0.5), (1, 0.9), (2, 0.5), (3, 0.9)];
        sort_by_score(&mut scores);
        assert_eq!(scores, vec![(1, 0.9), (3, 0.9), (0, 0.5), (2, 0.5)]);
    }
}
