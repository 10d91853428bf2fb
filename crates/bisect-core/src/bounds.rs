//! Occurrence bounds
//!
//! [`crate::search`] returns whichever equal element it meets first. The
//! functions here pin down a specific occurrence instead: [`lower_bound`]
//! and [`upper_bound`] bracket the run of elements equal to a target, and
//! [`equal_range`] returns that run.

use crate::access::RandomAccess;
use crate::outcome::SearchOutcome;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// First index whose element is not less than `target`
///
/// Returns `len` when every element is less than `target`.
#[must_use]
pub fn lower_bound<S>(sequence: &S, target: &S::Item) -> usize
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    partition_point(sequence, |element| element < target)
}

/// First index whose element is greater than `target`
///
/// Returns `len` when no element is greater than `target`.
#[must_use]
pub fn upper_bound<S>(sequence: &S, target: &S::Item) -> usize
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    partition_point(sequence, |element| element <= target)
}

/// Run of indices holding elements equal to `target`
#[must_use]
pub fn equal_range<S>(sequence: &S, target: &S::Item) -> EqualRange
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    let start = lower_bound(sequence, target);
    let end = start + partition_point_from(sequence, start, |element| element <= target);
    EqualRange { start, end }
}

/// Index of the first element for which `pred` is false
///
/// `pred` must hold for a prefix of the sequence and fail for the rest.
fn partition_point<S, P>(sequence: &S, pred: P) -> usize
where
    S: RandomAccess + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    partition_point_from(sequence, 0, pred)
}

/// Like [`partition_point`] over `sequence[offset..]`, relative to `offset`
fn partition_point_from<S, P>(sequence: &S, offset: usize, mut pred: P) -> usize
where
    S: RandomAccess + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let mut low = offset;
    let mut high = sequence.len();

    while low < high {
        let mid = low + (high - low) / 2;
        if pred(sequence.at(mid)) {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    low - offset
}

/// Half-open run `[start, end)` of elements equal to a target
///
/// When empty, `start == end` is the insertion point that keeps the
/// sequence sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EqualRange {
    /// First matching index (or insertion point)
    pub start: usize,
    /// One past the last matching index
    pub end: usize,
}

impl EqualRange {
    /// Number of matching elements
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if no element matched
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// First occurrence of the target
    #[inline]
    #[must_use]
    pub const fn first(&self) -> SearchOutcome {
        if self.is_empty() {
            SearchOutcome::NotFound
        } else {
            SearchOutcome::Found(self.start)
        }
    }

    /// Last occurrence of the target
    #[inline]
    #[must_use]
    pub const fn last(&self) -> SearchOutcome {
        if self.is_empty() {
            SearchOutcome::NotFound
        } else {
            SearchOutcome::Found(self.end - 1)
        }
    }

    /// As a standard range, usable for slicing
    #[inline]
    #[must_use]
    pub const fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<EqualRange> for Range<usize> {
    fn from(range: EqualRange) -> Self {
        range.as_range()
    }
}
