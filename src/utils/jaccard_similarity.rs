use std::collections::HashSet;
use std::hash::Hash;

/// Compute the Jaccard similarity `|a ∩ b| / |a ∪ b|` between two sets.
///
/// Returns `None` when both sets are empty, since the ratio is undefined.
pub fn jaccard_similarity<T: Eq + Hash>(set1: &HashSet<T>, set2: &HashSet<T>) -> Option<f64> {
    let intersection_size = set1.intersection(set2).count();
    let union_size = set1.len() + set2.len() - intersection_size;

    if union_size == 0 {
        return None;
    }

    Some(intersection_size as f64 / union_size as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_overlap() {
        let a: HashSet<_> = ["a", "b", "c"].into_iter().collect();
        let b: HashSet<_> = ["b", "c", "d"].into_iter().collect();
        assert_eq!(jaccard_similarity(&a, &b), Some(0.5));
    }

    #[test]
    fn test_disjoint_and_identical() {
        let a: HashSet<_> = ["x"].into_iter().collect();
        let b: HashSet<_> = ["y"].into_iter().collect();
        assert_eq!(jaccard_similarity(&a, &b), Some(0.0));
        assert_eq!(jaccard_similarity(&a, &a), Some(1.0));
    }

    #[test]
    fn test_both_empty_is_undefined() {
        let empty: HashSet<&str> = HashSet::new();
        assert_eq!(jaccard_similarity(&empty, &empty), None);
    }
}
