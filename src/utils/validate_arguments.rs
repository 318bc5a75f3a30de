use crate::models::Error;
use crate::types::SimilarityScore;

/// Convert a caller-supplied result limit into an unsigned one.
///
/// `None` means unbounded. Negative limits are rejected.
pub fn validate_max_results(max_results: Option<i64>) -> Result<Option<usize>, Error> {
    match max_results {
        None => Ok(None),
        Some(value) => usize::try_from(value).map(Some).map_err(|_| {
            Error::InvalidArgument(format!(
                "max_results must be None or a non-negative integer, got {}",
                value
            ))
        }),
    }
}

/// Ensure a similarity threshold lies within `[0, 1]`.
pub fn validate_threshold(threshold: SimilarityScore) -> Result<SimilarityScore, Error> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(Error::InvalidArgument(format!(
            "threshold must be between 0 and 1, got {}",
            threshold
        )));
    }
    Ok(threshold)
}
