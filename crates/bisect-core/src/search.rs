//! Closed-interval binary search
//!
//! Provides [`search`] and its comparator/key variants. All of them assume
//! the sequence is sorted ascending under the ordering used; the
//! precondition is not checked (see [`crate::SortedSlice`] for a checked
//! wrapper). On unsorted input the result is unspecified, but the search
//! still terminates in O(log n) steps and never panics.
//!
//! When several elements equal the target, the index returned is whichever
//! one the bisection path meets first. Use [`crate::equal_range`] for a
//! specific occurrence.

use crate::access::RandomAccess;
use crate::outcome::SearchOutcome;
use std::cmp::Ordering;

/// Search an ascending sequence for `target`
///
/// O(log n) comparisons, O(1) extra space.
///
/// # Examples
///
/// ```rust
/// use bisect_core::{search, SearchOutcome};
///
/// let sorted = [2, 3, 4, 10, 40];
/// assert_eq!(search(&sorted, &10), SearchOutcome::Found(3));
/// assert_eq!(search(&sorted, &5), SearchOutcome::NotFound);
/// ```
#[inline]
#[must_use]
pub fn search<S>(sequence: &S, target: &S::Item) -> SearchOutcome
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    search_by(sequence, |element| element.cmp(target))
}

/// Search with a comparator
///
/// `compare` returns the ordering of an element relative to the sought
/// value: `Less` when the element sorts before it.
#[must_use]
pub fn search_by<S, F>(sequence: &S, compare: F) -> SearchOutcome
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item) -> Ordering,
{
    bisect(sequence, compare, |_| {})
}

/// Search by a key extracted from each element
#[inline]
#[must_use]
pub fn search_by_key<S, K, F>(sequence: &S, key: &K, mut f: F) -> SearchOutcome
where
    S: RandomAccess + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    search_by(sequence, |element| f(element).cmp(key))
}

/// Search returning the index, or `-1` when absent
///
/// ```rust
/// assert_eq!(bisect_core::search_sentinel(&[2, 3, 4, 10, 40], &5), -1);
/// ```
#[inline]
#[must_use]
pub fn search_sentinel<S>(sequence: &S, target: &S::Item) -> i64
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    search(sequence, target).sentinel()
}

/// One comparison made while bisecting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Step {
    pub(crate) low: usize,
    pub(crate) high: usize,
    pub(crate) mid: usize,
    pub(crate) ordering: Ordering,
}

/// Bisection over the closed interval `[low, high]`
///
/// `on_step` sees every comparison in order.
pub(crate) fn bisect<S, F, P>(sequence: &S, mut compare: F, mut on_step: P) -> SearchOutcome
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item) -> Ordering,
    P: FnMut(Step),
{
    if sequence.is_empty() {
        return SearchOutcome::NotFound;
    }

    let mut low = 0;
    let mut high = sequence.len() - 1;

    while low <= high {
        let mid = low + (high - low) / 2;
        let ordering = compare(sequence.at(mid));
        on_step(Step {
            low,
            high,
            mid,
            ordering,
        });

        match ordering {
            Ordering::Equal => return SearchOutcome::Found(mid),
            Ordering::Less => low = mid + 1,
            // high = mid - 1 would underflow; the interval is empty either way
            Ordering::Greater if mid == 0 => break,
            Ordering::Greater => high = mid - 1,
        }
    }

    SearchOutcome::NotFound
}
