//! Quadratic single-pass merge and the fixed-point driver built on top of it.
//!
//! [`merge_pass`] combines each input range with the first already-placed range
//! it can merge with. A single pass is not confluent: a chain such as
//! `[0, 2], [5, 7], [2, 5]` needs a second pass to collapse completely, so
//! [`MergePasses`] repeats the pass until the range count stops shrinking.
//!
//! Complexity is O(n²) per pass and O(n³) in the worst case overall; see
//! [`crate::sweep`] for the O(n log n) alternative.

use crate::labeled_range::{Adjacency, LabeledRange};

/// Performs one merge pass over `ranges`, returning a new list.
///
/// Ranges are visited in order. Each range is merged into the first entry of
/// the output accumulator that satisfies the merge predicate; the entry is
/// replaced in place by the union. A range that merges with nothing is
/// appended. The input is left untouched.
pub fn merge_pass<L>(ranges: &[LabeledRange<L>], adjacency: Adjacency) -> Vec<LabeledRange<L>>
where
    L: PartialEq + Clone,
{
    let mut merged: Vec<LabeledRange<L>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged
            .iter_mut()
            .find(|placed| placed.can_merge(range, adjacency))
        {
            Some(placed) => *placed = placed.union(range),
            None => merged.push(range.clone()),
        }
    }
    merged
}

/// Bookkeeping for a single merge pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassStats {
    /// One-based pass number.
    pub pass: usize,
    /// Range count before the pass.
    pub before: usize,
    /// Range count after the pass.
    pub after: usize,
}

impl PassStats {
    /// Number of merges performed by the pass.
    pub fn merged(&self) -> usize {
        self.before - self.after
    }
}

/// Iterator driving [`merge_pass`] towards a fixed point.
///
/// Every call to `next()` runs exactly one pass and yields its [`PassStats`].
/// The iterator ends after the first pass that does not reduce the range count;
/// at that point [`ranges`](Self::ranges) is fully coalesced. The first pass
/// always runs, even for empty input.
///
/// Dropping the iterator early is the supported way to bound the work, e.g.
/// when the caller enforces a deadline between passes. The intermediate state
/// is still a valid cover of the input, just not minimal.
pub struct MergePasses<L> {
    ranges: Vec<LabeledRange<L>>,
    adjacency: Adjacency,
    pass: usize,
    converged: bool,
}

impl<L> MergePasses<L>
where
    L: PartialEq + Clone,
{
    pub fn new(ranges: Vec<LabeledRange<L>>, adjacency: Adjacency) -> Self {
        MergePasses {
            ranges,
            adjacency,
            pass: 0,
            converged: false,
        }
    }

    /// The current state of the range list.
    pub fn ranges(&self) -> &[LabeledRange<L>] {
        &self.ranges
    }

    /// Number of passes performed so far.
    pub fn passes(&self) -> usize {
        self.pass
    }

    /// Returns `true` once a pass has completed without merging anything.
    pub fn is_converged(&self) -> bool {
        self.converged
    }

    pub fn into_ranges(self) -> Vec<LabeledRange<L>> {
        self.ranges
    }

    /// Runs the remaining passes and returns the coalesced list along with the
    /// total pass count.
    pub fn run(mut self) -> (Vec<LabeledRange<L>>, usize) {
        for _ in self.by_ref() {}
        (self.ranges, self.pass)
    }
}

impl<L> Iterator for MergePasses<L>
where
    L: PartialEq + Clone,
{
    type Item = PassStats;

    fn next(&mut self) -> Option<PassStats> {
        if self.converged {
            return None;
        }

        let before = self.ranges.len();
        self.ranges = merge_pass(&self.ranges, self.adjacency);
        self.pass += 1;
        let after = self.ranges.len();
        // Every merge drops one entry, so an unchanged count means no merge
        // happened and no pair of ranges is mergeable any more.
        self.converged = after >= before;

        log::trace!("merge pass {}: {} -> {} ranges", self.pass, before, after);
        Some(PassStats {
            pass: self.pass,
            before,
            after,
        })
    }
}

/// Applies [`merge_pass`] until the range count stops shrinking.
///
/// The output order follows the accumulator order of the last pass; callers
/// that need deterministic ordering sort afterwards.
pub fn merge_to_fixed_point<L>(
    ranges: &[LabeledRange<L>],
    adjacency: Adjacency,
) -> Vec<LabeledRange<L>>
where
    L: PartialEq + Clone,
{
    MergePasses::new(ranges.to_vec(), adjacency).run().0
}
