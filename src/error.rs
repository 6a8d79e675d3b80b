//! Error taxonomy for matcher operations.

/// Alias for `std::result::Result` with [`Error`] as the failure type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by [`KeywordMatcher`](crate::KeywordMatcher) operations.
///
/// Every operation is all-or-nothing: a returned error means the matcher
/// state is unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A keyword with zero Unicode scalar values was added.
    #[error("keyword must contain at least one character")]
    EmptyKeyword,

    /// A match strategy string was neither `"all"` nor `"longest"`.
    #[error("unknown match strategy `{0}` (expected \"all\" or \"longest\")")]
    UnknownStrategy(String),

    /// A fuzzy-search threshold outside `0.0..=1.0`.
    #[error("similarity threshold must lie in 0.0..=1.0, got {0}")]
    ThresholdOutOfRange(f64),
}
