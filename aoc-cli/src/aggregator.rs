//! Re-ordering of results that arrive out of order from parallel workers
//!
//! Results are held back until every result with a smaller
//! `(year, day, part)` key has been emitted. Both the keys still expected and
//! the results waiting for their turn live in min-heaps.

use crate::executor::SolverResult;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Output position of a result, ordered by year, then day, then part
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// A buffered result, compared by its key only
struct Pending {
    key: ResultKey,
    result: SolverResult,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Pending {}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

pub struct ResultAggregator {
    expected: BinaryHeap<Reverse<ResultKey>>,
    pending: BinaryHeap<Reverse<Pending>>,
}

impl ResultAggregator {
    pub fn new(expected_keys: impl IntoIterator<Item = ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Buffer `result` and return everything now ready, in order
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        let key = ResultKey::from(&result);
        self.pending.push(Reverse(Pending { key, result }));

        let mut ready = Vec::new();
        while let (Some(Reverse(next)), Some(Reverse(head))) =
            (self.expected.peek(), self.pending.peek())
        {
            if head.key != *next {
                break;
            }
            self.expected.pop();
            if let Some(Reverse(pending)) = self.pending.pop() {
                ready.push(pending.result);
            }
        }
        ready
    }

    /// Whatever is still buffered, in order
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let mut rest: Vec<Pending> = self.pending.drain().map(|Reverse(p)| p).collect();
        rest.sort();
        rest.into_iter().map(|p| p.result).collect()
    }

    /// Number of expected results not yet emitted
    pub fn outstanding(&self) -> usize {
        self.expected.len()
    }

    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use proptest::prelude::*;

    fn key(day: u8, part: u8) -> ResultKey {
        ResultKey {
            year: 2023,
            day,
            part,
        }
    }

    fn make_result(day: u8, part: u8) -> SolverResult {
        SolverResult {
            year: 2023,
            day,
            part,
            answer: Ok(format!("{day}.{part}")),
            solve_duration: TimeDelta::milliseconds(10),
            parse_duration: (part == 1).then(|| TimeDelta::milliseconds(5)),
        }
    }

    #[test]
    fn test_in_order_results() {
        let mut agg = ResultAggregator::new([key(1, 1), key(1, 2)]);

        let ready = agg.add(make_result(1, 1));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 1);

        let ready = agg.add(make_result(1, 2));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 2);

        assert!(agg.is_complete());
    }

    #[test]
    fn test_out_of_order_results() {
        let mut agg = ResultAggregator::new([key(1, 1), key(1, 2), key(2, 1)]);

        assert!(agg.add(make_result(1, 2)).is_empty());
        assert!(agg.add(make_result(2, 1)).is_empty());
        assert_eq!(agg.outstanding(), 3);

        let ready = agg.add(make_result(1, 1));
        let order: Vec<(u8, u8)> = ready.iter().map(|r| (r.day, r.part)).collect();
        assert_eq!(order, vec![(1, 1), (1, 2), (2, 1)]);
        assert!(agg.is_complete());
    }

    #[test]
    fn test_drain_remaining() {
        let mut agg = ResultAggregator::new([key(1, 1), key(1, 2), key(3, 1)]);

        agg.add(make_result(3, 1));
        agg.add(make_result(1, 2));

        let remaining = agg.drain();
        let order: Vec<(u8, u8)> = remaining.iter().map(|r| (r.day, r.part)).collect();
        assert_eq!(order, vec![(1, 2), (3, 1)]);
        assert!(!agg.is_complete());
    }

    proptest! {
        #[test]
        fn prop_any_arrival_order_is_emitted_sorted(
            keys in prop::collection::btree_set((1u8..=20, 1u8..=2), 1..30)
                .prop_map(|set| set.into_iter().collect::<Vec<_>>())
                .prop_shuffle()
        ) {
            let mut agg = ResultAggregator::new(keys.iter().map(|&(d, p)| key(d, p)));
            let mut emitted = Vec::new();
            for &(day, part) in &keys {
                emitted.extend(agg.add(make_result(day, part)).iter().map(|r| (r.day, r.part)));
            }

            let mut sorted = keys.clone();
            sorted.sort();
            prop_assert_eq!(emitted, sorted);
            prop_assert!(agg.is_complete());
            prop_assert!(agg.drain().is_empty());
        }
    }
}
