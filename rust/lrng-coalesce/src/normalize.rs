//! Output normalization and the coalescing postcondition check.

use crate::labeled_range::{Adjacency, LabeledRange};

/// Sorts ranges by `(label, start, stop)` ascending.
pub fn sort_ranges<L: Ord>(ranges: &mut [LabeledRange<L>]) {
    ranges.sort_unstable();
}

/// Returns `true` if `ranges` is in `(label, start, stop)` order.
pub fn is_normalized<L: Ord>(ranges: &[LabeledRange<L>]) -> bool {
    ranges.is_sorted()
}

/// Finds a pair of ranges that still satisfies the merge predicate.
///
/// Returns the positions of the two ranges in `ranges` (smaller position
/// first), or `None` when the list is fully coalesced under `adjacency`.
/// Runs in O(n log n): after ordering by `(label, start)`, any mergeable pair
/// implies a mergeable pair of neighbours.
pub fn find_mergeable_pair<L: Ord>(
    ranges: &[LabeledRange<L>],
    adjacency: Adjacency,
) -> Option<(usize, usize)> {
    let mut order: Vec<usize> = (0..ranges.len()).collect();
    order.sort_unstable_by(|&a, &b| ranges[a].cmp(&ranges[b]));
    order.windows(2).find_map(|pair| {
        let (a, b) = (pair[0], pair[1]);
        ranges[a]
            .can_merge(&ranges[b], adjacency)
            .then(|| (a.min(b), a.max(b)))
    })
}

/// Returns `true` if no two ranges in `ranges` satisfy the merge predicate.
pub fn is_coalesced<L: Ord>(ranges: &[LabeledRange<L>], adjacency: Adjacency) -> bool {
    find_mergeable_pair(ranges, adjacency).is_none()
}
