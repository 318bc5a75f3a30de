/// Placeholder shown for a collapsed run of non-newline whitespace.
pub const SPACE_SENTINEL: &str = "<SPACE_TOKEN>";

/// Placeholder shown for a collapsed run of newlines.
pub const NEWLINE_SENTINEL: &str = "<NEWLINE_TOKEN>";

/// A similarity match is widened by `ceil(window_size / 20)` tokens (5%) on each side.
pub const SIMILARITY_CONTEXT_DIVISOR: usize = 20;
