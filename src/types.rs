// Types listed here are either shared across multiple files and/or exposed via the library.

/// Index of a token within a `TokenSequence`.
pub type TokenIndex = usize;

/// A Jaccard similarity score in the closed range `[0, 1]`.
///
/// Exact matches are implicitly scored `1.0`.
pub type SimilarityScore = f64;

/// Label identifying a question whose answer was extracted from a document.
pub type QuestionLabel = String;

/// A phrase extracted from a document, either verbatim or paraphrased by a model.
pub type ExtractedText = String;
