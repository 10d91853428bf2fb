//! Error types for bisect-core
//!
//! Searching itself never fails; errors only arise when a caller asks for
//! the sorted precondition to be verified.

/// Errors from precondition checks
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Sequence descends between `index - 1` and `index`
    #[error("sequence is not sorted ascending: element at index {index} is smaller than its predecessor")]
    Unsorted {
        /// First index whose element is smaller than its predecessor
        index: usize,
    },
}

impl SearchError {
    /// Index where the sorted order first breaks, if relevant
    #[inline]
    #[must_use]
    pub const fn unsorted_at(&self) -> Option<usize> {
        match self {
            Self::Unsorted { index } => Some(*index),
        }
    }
}
