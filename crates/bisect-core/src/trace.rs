//! Instrumented search
//!
//! [`search_traced`] runs the same bisection as [`crate::search`] and
//! records every probe, so callers can show how the interval narrowed.

use crate::access::RandomAccess;
use crate::outcome::SearchOutcome;
use crate::search::{bisect, Step};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

/// Element-at-mid compared to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeOrdering {
    /// Element sorts before the target; the lower half is discarded
    Less,
    /// Element equals the target
    Equal,
    /// Element sorts after the target; the upper half is discarded
    Greater,
}

impl From<Ordering> for ProbeOrdering {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

impl From<ProbeOrdering> for Ordering {
    fn from(ordering: ProbeOrdering) -> Self {
        match ordering {
            ProbeOrdering::Less => Self::Less,
            ProbeOrdering::Equal => Self::Equal,
            ProbeOrdering::Greater => Self::Greater,
        }
    }
}

/// A single comparison: the interval before it, the midpoint, the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Probe {
    /// Lower bound of the closed interval
    pub low: usize,
    /// Upper bound of the closed interval
    pub high: usize,
    /// Index compared
    pub mid: usize,
    /// Element at `mid` relative to the target
    pub ordering: ProbeOrdering,
}

impl Probe {
    fn from_step(step: Step) -> Self {
        Self {
            low: step.low,
            high: step.high,
            mid: step.mid,
            ordering: step.ordering.into(),
        }
    }
}

impl Display for Probe {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let verdict = match self.ordering {
            ProbeOrdering::Less => "less than target, search right half",
            ProbeOrdering::Equal => "equal to target",
            ProbeOrdering::Greater => "greater than target, search left half",
        };
        write!(f, "[{}, {}] mid={}: {verdict}", self.low, self.high, self.mid)
    }
}

/// Ordered record of the probes made by one search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchTrace {
    probes: Vec<Probe>,
}

impl SearchTrace {
    /// Create empty trace
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Probes in the order they were made
    #[inline]
    #[must_use]
    pub fn probes(&self) -> &[Probe] {
        &self.probes
    }

    /// Number of element comparisons
    #[inline]
    #[must_use]
    pub fn comparisons(&self) -> usize {
        self.probes.len()
    }

    /// Check if no comparison was made
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// Final probe, if any
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&Probe> {
        self.probes.last()
    }

    fn record(&mut self, probe: Probe) {
        tracing::trace!(
            low = probe.low,
            high = probe.high,
            mid = probe.mid,
            ordering = ?probe.ordering,
            "probe"
        );
        self.probes.push(probe);
    }
}

impl<'a> IntoIterator for &'a SearchTrace {
    type Item = &'a Probe;
    type IntoIter = std::slice::Iter<'a, Probe>;

    fn into_iter(self) -> Self::IntoIter {
        self.probes.iter()
    }
}

/// Search an ascending sequence, recording every probe
///
/// The outcome is always the one [`crate::search`] returns.
#[must_use]
pub fn search_traced<S>(sequence: &S, target: &S::Item) -> (SearchOutcome, SearchTrace)
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    search_by_traced(sequence, |element| element.cmp(target))
}

/// Comparator form of [`search_traced`]
#[must_use]
pub fn search_by_traced<S, F>(sequence: &S, compare: F) -> (SearchOutcome, SearchTrace)
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item) -> Ordering,
{
    let mut trace = SearchTrace::new();
    let outcome = bisect(sequence, compare, |step| trace.record(Probe::from_step(step)));
    (outcome, trace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search;
    use pretty_assertions::assert_eq;

    #[test]
    fn demo_path() {
        let (outcome, trace) = search_traced(&[2, 3, 4, 10, 40], &10);

        assert_eq!(outcome, SearchOutcome::Found(3));
        assert_eq!(
            trace.probes(),
            &[
                Probe {
                    low: 0,
                    high: 4,
                    mid: 2,
                    ordering: ProbeOrdering::Less
                },
                Probe {
                    low: 3,
                    high: 4,
                    mid: 3,
                    ordering: ProbeOrdering::Equal
                },
            ]
        );
    }

    #[test]
    fn empty_trace_for_empty_input() {
        let empty: Vec<i32> = Vec::new();
        let (outcome, trace) = search_traced(&empty, &1);
        assert_eq!(outcome, SearchOutcome::NotFound);
        assert!(trace.is_empty());
    }

    #[test]
    fn agrees_with_plain_search() {
        let data: Vec<i32> = (0..50).map(|n| n * 3).collect();
        for target in -2..155 {
            let (outcome, _) = search_traced(&data, &target);
            assert_eq!(outcome, search(&data, &target));
        }
    }

    #[test]
    fn last_probe_matches_found_index() {
        let (outcome, trace) = search_traced(&[1, 5, 9, 13], &13);
        let last = trace.last().unwrap();
        assert_eq!(outcome.index(), Some(last.mid));
        assert_eq!(last.ordering, ProbeOrdering::Equal);
    }

    #[test]
    fn probe_display() {
        let probe = Probe {
            low: 0,
            high: 4,
            mid: 2,
            ordering: ProbeOrdering::Less,
        };
        assert_eq!(probe.to_string(), "[0, 4] mid=2: less than target, search right half");
    }

    #[test]
    fn trace_serializes_as_list() {
        let (_, trace) = search_traced(&[7], &7);
        let json = serde_json::to_string(&trace).unwrap();
        assert_eq!(json, r#"[{"low":0,"high":0,"mid":0,"ordering":"equal"}]"#);
    }
}
