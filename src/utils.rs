pub mod jaccard_similarity;
pub mod sort_by_score;
pub mod validate_arguments;

pub use jaccard_similarity::jaccard_similarity;
pub use sort_by_score::sort_by_score;
pub use validate_arguments::{validate_max_results, validate_threshold};
