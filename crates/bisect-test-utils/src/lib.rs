//! Testing utilities for bisect workspace
//!
//! Shared fixtures, proptest strategies, and a linear-scan oracle.

#![allow(missing_docs)]

use bisect_core::SearchOutcome;
use proptest::prelude::*;

/// Sorted array from the canonical example
pub const DEMO_VALUES: [i64; 5] = [2, 3, 4, 10, 40];

/// Target the canonical example looks for
pub const DEMO_TARGET: i64 = 10;

/// Index of [`DEMO_TARGET`] in [`DEMO_VALUES`]
pub const DEMO_INDEX: usize = 3;

/// Upper bound on comparisons for a sequence of `len` elements
#[must_use]
pub fn max_comparisons(len: usize) -> usize {
    if len == 0 {
        0
    } else {
        len.ilog2() as usize + 1
    }
}

/// Every index holding `target`, by linear scan
#[must_use]
pub fn occurrences<T: PartialEq>(values: &[T], target: &T) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| *v == target)
        .map(|(i, _)| i)
        .collect()
}

/// Check that `outcome` is a correct answer for `target` in `values`
#[must_use]
pub fn is_valid_outcome<T: PartialEq>(values: &[T], target: &T, outcome: SearchOutcome) -> bool {
    match outcome {
        SearchOutcome::Found(i) => values.get(i) == Some(target),
        SearchOutcome::NotFound => !values.contains(target),
    }
}

/// Ascending values, possibly with repeats
pub fn sorted_vec(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000i64..1_000, 0..=max_len).prop_map(|mut v| {
        v.sort_unstable();
        v
    })
}

/// Strictly ascending values, so every element has exactly one index
pub fn distinct_sorted_vec(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::btree_set(-1_000i64..1_000, 0..=max_len)
        .prop_map(|set| set.into_iter().collect())
}

/// Sorted values paired with one of their own elements
pub fn sorted_vec_with_member(max_len: usize) -> impl Strategy<Value = (Vec<i64>, i64)> {
    sorted_vec(max_len)
        .prop_filter("needs at least one element", |v| !v.is_empty())
        .prop_flat_map(|v| {
            let len = v.len();
            (Just(v), 0..len)
        })
        .prop_map(|(v, i)| {
            let target = v[i];
            (v, target)
        })
}

/// Sorted values with long runs of repeated elements
pub fn sorted_vec_with_runs(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..8, 0..=max_len).prop_map(|mut v| {
        v.sort_unstable();
        v
    })
}
