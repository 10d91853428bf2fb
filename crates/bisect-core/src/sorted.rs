//! Checked sorted slices
//!
//! [`SortedSlice`] verifies the ascending-order precondition once, when it
//! is built, so every later search on it is known to be well-defined.

use crate::access::RandomAccess;
use crate::bounds::{self, EqualRange};
use crate::error::SearchError;
use crate::outcome::SearchOutcome;
use crate::search;
use crate::trace::{self, SearchTrace};
use std::ops::Deref;

/// Verify that `slice` is non-decreasing
///
/// # Errors
/// Returns [`SearchError::Unsorted`] naming the first index whose element
/// is smaller than its predecessor
pub fn check_sorted<T: Ord>(slice: &[T]) -> Result<(), SearchError> {
    match slice.windows(2).position(|pair| pair[0] > pair[1]) {
        Some(descent) => Err(SearchError::Unsorted { index: descent + 1 }),
        None => Ok(()),
    }
}

/// Borrowed slice known to be sorted ascending
///
/// Searches on a `SortedSlice` always satisfy their precondition.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SortedSlice<'a, T> {
    inner: &'a [T],
}

impl<T> Clone for SortedSlice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SortedSlice<'_, T> {}

impl<'a, T: Ord> SortedSlice<'a, T> {
    /// Wrap `slice` after verifying it is sorted
    ///
    /// O(n), once.
    ///
    /// # Errors
    /// Returns [`SearchError::Unsorted`] if any element is smaller than its
    /// predecessor
    pub fn new(slice: &'a [T]) -> Result<Self, SearchError> {
        check_sorted(slice)?;
        Ok(Self { inner: slice })
    }

    /// Search for `target`
    #[inline]
    #[must_use]
    pub fn search(&self, target: &T) -> SearchOutcome {
        search::search(self.inner, target)
    }

    /// Search for `target`, recording every probe
    #[inline]
    #[must_use]
    pub fn search_traced(&self, target: &T) -> (SearchOutcome, SearchTrace) {
        trace::search_traced(self.inner, target)
    }

    /// Check if `target` occurs
    #[inline]
    #[must_use]
    pub fn contains(&self, target: &T) -> bool {
        self.search(target).is_found()
    }

    /// First index whose element is not less than `target`
    #[inline]
    #[must_use]
    pub fn lower_bound(&self, target: &T) -> usize {
        bounds::lower_bound(self.inner, target)
    }

    /// First index whose element is greater than `target`
    #[inline]
    #[must_use]
    pub fn upper_bound(&self, target: &T) -> usize {
        bounds::upper_bound(self.inner, target)
    }

    /// Run of indices equal to `target`
    #[inline]
    #[must_use]
    pub fn equal_range(&self, target: &T) -> EqualRange {
        bounds::equal_range(self.inner, target)
    }
}

impl<'a, T> SortedSlice<'a, T> {
    /// Wrap `slice` without verifying it
    ///
    /// The caller asserts the slice is sorted ascending. Breaking that only
    /// makes search results unspecified; it is never memory-unsafe.
    #[inline]
    #[must_use]
    pub const fn new_unchecked(slice: &'a [T]) -> Self {
        Self { inner: slice }
    }

    /// Underlying slice
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &'a [T] {
        self.inner
    }

    /// Number of elements
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<T> Deref for SortedSlice<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.inner
    }
}

impl<T> AsRef<[T]> for SortedSlice<'_, T> {
    fn as_ref(&self) -> &[T] {
        self.inner
    }
}

impl<T> RandomAccess for SortedSlice<'_, T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self.inner[index]
    }
}

impl<'a, T: Ord> TryFrom<&'a [T]> for SortedSlice<'a, T> {
    type Error = SearchError;

    fn try_from(slice: &'a [T]) -> Result<Self, Self::Error> {
        Self::new(slice)
    }
}
