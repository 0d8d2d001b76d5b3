//! Linear sweep over sorted ranges.
//!
//! Once the ranges are ordered by `(label, start, stop)`, every mergeable pair
//! is adjacent in the sequence (or bridged by a chain of adjacent mergeable
//! pairs), so one forward scan that extends the current run is enough. This is
//! the O(n log n) alternative to the fixed-point strategy in [`crate::merge`]
//! and produces the same normalized output.

use std::iter::Peekable;

use crate::labeled_range::{Adjacency, LabeledRange};

/// Iterator adapter merging runs of mergeable ranges from a sorted stream.
///
/// Requirements on the input iterator:
/// * Ranges are ordered by `(label, start)`; in particular all ranges of a
///   label are contiguous in the stream.
/// * Every range is valid (`start <= stop`).
///
/// Output guarantees under those requirements:
/// * Ranges are yielded in `(label, start)` order.
/// * No two yielded ranges satisfy the merge predicate for `adjacency`.
///
/// Complexity: O(n) comparisons, one range of look-ahead.
pub struct CoalesceSorted<I: Iterator> {
    inner: Peekable<I>,
    adjacency: Adjacency,
}

impl<I: Iterator> CoalesceSorted<I> {
    pub fn new(inner: I, adjacency: Adjacency) -> Self {
        CoalesceSorted {
            inner: inner.peekable(),
            adjacency,
        }
    }
}

impl<I, L> Iterator for CoalesceSorted<I>
where
    I: Iterator<Item = LabeledRange<L>>,
    L: PartialEq,
{
    type Item = LabeledRange<L>;

    fn next(&mut self) -> Option<Self::Item> {
        let adjacency = self.adjacency;
        let mut cur = self.inner.next()?;
        while let Some(next) = self.inner.next_if(|next| cur.can_merge(next, adjacency)) {
            debug_assert!(next.start >= cur.start, "input is not sorted by start");
            if next.stop > cur.stop {
                cur.stop = next.stop;
            }
        }
        Some(cur)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.inner.size_hint();
        (lo.min(1), hi)
    }
}

/// Extension trait for constructing [`CoalesceSorted`] from any iterator of
/// labeled ranges.
pub trait LabeledRangeIteratorsExt<L>: Iterator<Item = LabeledRange<L>> + Sized {
    /// Merges runs of mergeable ranges. The iterator must already be sorted by
    /// `(label, start)`.
    fn coalesce_sorted(self, adjacency: Adjacency) -> CoalesceSorted<Self> {
        CoalesceSorted::new(self, adjacency)
    }
}

impl<L, I: Iterator<Item = LabeledRange<L>>> LabeledRangeIteratorsExt<L> for I {}

/// Sorts a copy of `ranges` and sweeps it, returning the coalesced list in
/// normalized order.
pub fn sweep_merge<L>(ranges: &[LabeledRange<L>], adjacency: Adjacency) -> Vec<LabeledRange<L>>
where
    L: Ord + Clone,
{
    let mut sorted = ranges.to_vec();
    crate::normalize::sort_ranges(&mut sorted);
    sorted.into_iter().coalesce_sorted(adjacency).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(label: u8, start: i64, stop: i64) -> LabeledRange<u8> {
        LabeledRange::new(label, start, stop)
    }

    #[test]
    fn test_sweep_empty() {
        let ranges: Vec<LabeledRange<u8>> = vec![];
        assert!(sweep_merge(&ranges, Adjacency::Overlapping).is_empty());
    }

    #[test]
    fn test_sweep_chain() {
        let ranges = vec![r(0, 2, 5), r(0, 0, 2), r(0, 1, 3)];
        assert_eq!(
            sweep_merge(&ranges, Adjacency::Overlapping),
            vec![r(0, 0, 5)]
        );
    }

    #[test]
    fn test_sweep_keeps_labels_apart() {
        let ranges = vec![r(1, 0, 5), r(2, 1, 4), r(1, 3, 9)];
        assert_eq!(
            sweep_merge(&ranges, Adjacency::Overlapping),
            vec![r(1, 0, 9), r(2, 1, 4)]
        );
    }

    #[test]
    fn test_sweep_nested_range_does_not_shrink_stop() {
        let sorted = vec![r(0, 0, 10), r(0, 2, 3), r(0, 4, 12)];
        let merged: Vec<_> = sorted
            .into_iter()
            .coalesce_sorted(Adjacency::Overlapping)
            .collect();
        assert_eq!(merged, vec![r(0, 0, 12)]);
    }

    #[test]
    fn test_sweep_touching() {
        let sorted = vec![r(0, 0, 2), r(0, 3, 4), r(0, 6, 6), r(1, 7, 8)];
        let merged: Vec<_> = sorted
            .clone()
            .into_iter()
            .coalesce_sorted(Adjacency::Touching)
            .collect();
        assert_eq!(merged, vec![r(0, 0, 4), r(0, 6, 6), r(1, 7, 8)]);

        let merged: Vec<_> = sorted
            .into_iter()
            .coalesce_sorted(Adjacency::Overlapping)
            .collect();
        assert_eq!(merged.len(), 4);
    }
}
