//! Property tests for the search contract.
//!
//! Every property runs over generated ascending sequences and checks the
//! result against a linear-scan oracle.

use bisect_core::{
    check_sorted, equal_range, lower_bound, search, search_sentinel, search_traced, upper_bound,
    SearchOutcome, SortedSlice,
};
use bisect_test_utils::{
    distinct_sorted_vec, is_valid_outcome, max_comparisons, occurrences, sorted_vec,
    sorted_vec_with_member, sorted_vec_with_runs,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_member_is_found((values, target) in sorted_vec_with_member(64)) {
        let outcome = search(&values, &target);
        let index = outcome.index();
        prop_assert!(index.is_some());
        prop_assert_eq!(values[index.unwrap()], target);
    }

    #[test]
    fn prop_non_member_is_not_found(values in sorted_vec(64), target in -1_100i64..1_100) {
        prop_assume!(!values.contains(&target));
        prop_assert_eq!(search(&values, &target), SearchOutcome::NotFound);
        prop_assert_eq!(search_sentinel(&values, &target), -1);
    }

    #[test]
    fn prop_distinct_values_found_at_their_index(values in distinct_sorted_vec(64)) {
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(search(&values, v), SearchOutcome::Found(i));
        }
    }

    #[test]
    fn prop_comparisons_are_logarithmic(values in sorted_vec(256), target in -1_100i64..1_100) {
        let (_, trace) = search_traced(&values, &target);
        prop_assert!(trace.comparisons() <= max_comparisons(values.len()));
    }

    #[test]
    fn prop_traced_agrees_with_plain(values in sorted_vec(64), target in -1_100i64..1_100) {
        let (outcome, _) = search_traced(&values, &target);
        prop_assert_eq!(outcome, search(&values, &target));
    }

    #[test]
    fn prop_repeated_calls_agree(values in sorted_vec(64), target in -1_100i64..1_100) {
        let first = search(&values, &target);
        for _ in 0..3 {
            prop_assert_eq!(search(&values, &target), first);
        }
    }

    #[test]
    fn prop_unsorted_input_never_lies(
        values in prop::collection::vec(-50i64..50, 0..64),
        target in -60i64..60,
    ) {
        let outcome = search(&values, &target);
        if let SearchOutcome::Found(i) = outcome {
            prop_assert_eq!(values[i], target);
        }
    }

    #[test]
    fn prop_bounds_match_partition_point(values in sorted_vec_with_runs(64), target in -1i64..9) {
        prop_assert_eq!(lower_bound(&values, &target), values.partition_point(|&v| v < target));
        prop_assert_eq!(upper_bound(&values, &target), values.partition_point(|&v| v <= target));
    }

    #[test]
    fn prop_equal_range_covers_all_occurrences(values in sorted_vec_with_runs(64), target in -1i64..9) {
        let range = equal_range(&values, &target);
        let expected = occurrences(&values, &target);
        prop_assert_eq!(range.len(), expected.len());
        prop_assert_eq!(range.first().index(), expected.first().copied());
        prop_assert_eq!(range.last().index(), expected.last().copied());
    }

    #[test]
    fn prop_check_sorted_accepts_sorted(values in sorted_vec(64)) {
        prop_assert!(check_sorted(&values).is_ok());
        prop_assert!(SortedSlice::new(&values).is_ok());
    }

    #[test]
    fn prop_check_sorted_finds_first_descent(values in prop::collection::vec(-20i64..20, 0..32)) {
        let expected = values.windows(2).position(|w| w[0] > w[1]).map(|i| i + 1);
        prop_assert_eq!(check_sorted(&values).err().and_then(|e| e.unsorted_at()), expected);
    }

    #[test]
    fn prop_sentinel_round_trips(index in 0usize..1_000_000, found in any::<bool>()) {
        let outcome = if found { SearchOutcome::Found(index) } else { SearchOutcome::NotFound };
        prop_assert_eq!(SearchOutcome::from_sentinel(outcome.sentinel()), outcome);
    }

    #[test]
    fn prop_outcome_is_valid_with_duplicates(values in sorted_vec_with_runs(64), target in -1i64..9) {
        prop_assert!(is_valid_outcome(&values, &target, search(&values, &target)));
    }
}
