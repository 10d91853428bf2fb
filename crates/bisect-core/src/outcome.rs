//! Search results
//!
//! Provides [`SearchOutcome`], the two-way result of a search, and its
//! conversion to and from the conventional `-1` sentinel.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Sentinel index reported for an absent target
pub const NOT_FOUND: i64 = -1;

/// Result of a search: a matching position, or absence
///
/// Not-found is an ordinary outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Zero-based index of an element equal to the target
    Found(usize),

    /// No element equals the target
    NotFound,
}

impl SearchOutcome {
    /// Matching index, if any
    #[inline]
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(index),
            Self::NotFound => None,
        }
    }

    /// Check if the target was found
    #[inline]
    #[must_use]
    pub const fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Index as a signed integer, or [`NOT_FOUND`]
    ///
    /// Indices beyond `i64::MAX` cannot come from an addressable sequence,
    /// so the conversion saturates rather than wraps.
    #[inline]
    #[must_use]
    pub fn sentinel(self) -> i64 {
        match self {
            Self::Found(index) => i64::try_from(index).unwrap_or(i64::MAX),
            Self::NotFound => NOT_FOUND,
        }
    }

    /// Rebuild an outcome from its sentinel form
    ///
    /// Every negative value means not found.
    #[inline]
    #[must_use]
    pub fn from_sentinel(value: i64) -> Self {
        match usize::try_from(value) {
            Ok(index) => Self::Found(index),
            Err(_) => Self::NotFound,
        }
    }
}

impl From<SearchOutcome> for Option<usize> {
    #[inline]
    fn from(outcome: SearchOutcome) -> Self {
        outcome.index()
    }
}

impl From<Option<usize>> for SearchOutcome {
    #[inline]
    fn from(index: Option<usize>) -> Self {
        index.map_or(Self::NotFound, Self::Found)
    }
}

impl Display for SearchOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(index) => write!(f, "found at index {index}"),
            Self::NotFound => f.write_str("not found"),
        }
    }
}
