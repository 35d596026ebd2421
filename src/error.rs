//! Error type shared by every stage of the sort.

/// Errors reported by `quantsort`.
///
/// All validation happens before any output is produced, so a failed call
/// never leaves caller-owned data partially rearranged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// A sample-size request or configuration value is malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The element at `index` cannot be ordered against the others
    /// (for example a floating-point NaN).
    #[error("element at index {index} is not comparable")]
    IncomparableElement { index: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SortError>;
