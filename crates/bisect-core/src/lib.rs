//! bisect core
//!
//! Closed-interval binary search over sorted, randomly-accessible sequences.
//!
//! # Core Concepts
//!
//! - [`search`]: position of an element equal to the target, or not found
//! - [`SearchOutcome`]: the two-way result, convertible to the `-1` sentinel
//! - [`search_traced`]: the same search, recording each [`Probe`]
//! - [`SortedSlice`]: a slice whose ascending order was verified up front
//! - [`equal_range`]: first/last occurrence when elements repeat
//! - [`RandomAccess`]: the container view searches run over
//!
//! # Example
//!
//! ```rust
//! use bisect_core::{search, search_traced, SearchOutcome};
//!
//! let sorted = [2, 3, 4, 10, 40];
//!
//! assert_eq!(search(&sorted, &10), SearchOutcome::Found(3));
//! assert_eq!(search(&sorted, &5).sentinel(), -1);
//!
//! let (outcome, trace) = search_traced(&sorted, &10);
//! assert_eq!(outcome.index(), Some(3));
//! assert_eq!(trace.comparisons(), 2);
//! ```
//!
//! The sequence must be sorted ascending under the ordering used to search.
//! [`search`] does not check this; on unsorted input its result is
//! unspecified but it still terminates without panicking.

#![warn(unreachable_pub)]

// Core modules
mod access;
mod bounds;
mod error;
mod outcome;
mod search;
mod sorted;
mod trace;

// Re-exports
pub use access::RandomAccess;
pub use bounds::{equal_range, lower_bound, upper_bound, EqualRange};
pub use error::SearchError;
pub use outcome::{SearchOutcome, NOT_FOUND};
pub use search::{search, search_by, search_by_key, search_sentinel};
pub use sorted::{check_sorted, SortedSlice};
pub use trace::{search_by_traced, search_traced, Probe, ProbeOrdering, SearchTrace};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for search operations
    pub use crate::{
        equal_range, search, search_by, search_by_key, search_traced, RandomAccess,
        SearchError, SearchOutcome, SortedSlice,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
