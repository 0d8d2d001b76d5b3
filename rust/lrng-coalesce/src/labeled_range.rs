//! The [`LabeledRange`] value type and the merge predicate.
//!
//! A labeled range is a closed integer interval `[start, stop]` tagged with a
//! label. Both bounds are inclusive. Two ranges are candidates for merging only
//! when their labels are equal; whether their bounds qualify is decided by an
//! [`Adjacency`] policy.

use std::ops::RangeInclusive;

use lrng_common::{Result, result::verify_range};
use serde::{Deserialize, Serialize};

/// Policy deciding when two same-label intervals are close enough to merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Adjacency {
    /// Merge only when the closed intervals share at least one point:
    /// `stop_a >= start_b && stop_b >= start_a`.
    ///
    /// `[0, 2]` and `[3, 5]` stay separate under this policy.
    #[default]
    Overlapping,
    /// Also merge intervals separated by no gap, i.e. where
    /// `stop_a + 1 == start_b`. `[0, 2]` and `[3, 5]` become `[0, 5]`.
    Touching,
}

impl Adjacency {
    /// Applies the policy to two closed intervals, ignoring labels.
    #[inline]
    pub fn intervals_merge(self, a_start: i64, a_stop: i64, b_start: i64, b_stop: i64) -> bool {
        match self {
            Adjacency::Overlapping => a_stop >= b_start && b_stop >= a_start,
            Adjacency::Touching => {
                a_stop.saturating_add(1) >= b_start && b_stop.saturating_add(1) >= a_start
            }
        }
    }
}

/// A closed integer interval `[start, stop]` tagged with a label.
///
/// The derived ordering compares `label`, then `start`, then `stop`, which is
/// the normalization order used for coalesced output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LabeledRange<L> {
    pub label: L,
    /// Inclusive lower bound.
    pub start: i64,
    /// Inclusive upper bound.
    pub stop: i64,
}

impl<L> LabeledRange<L> {
    /// Creates a range without validating the bounds.
    ///
    /// Use [`try_new`](Self::try_new) when the bounds come from untrusted input.
    pub fn new(label: L, start: i64, stop: i64) -> Self {
        LabeledRange { label, start, stop }
    }

    /// Creates a range, failing with `InvalidRange` when `start > stop`.
    pub fn try_new(label: L, start: i64, stop: i64) -> Result<Self> {
        verify_range(0, start, stop)?;
        Ok(LabeledRange { label, start, stop })
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start <= self.stop
    }

    /// Returns `true` for an inverted range, which covers no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.is_valid()
    }

    /// Number of integer points covered by the range, saturating at `u64::MAX`.
    pub fn len(&self) -> u64 {
        if self.is_valid() {
            self.stop.abs_diff(self.start).saturating_add(1)
        } else {
            0
        }
    }

    #[inline]
    pub fn contains(&self, pos: i64) -> bool {
        self.start <= pos && pos <= self.stop
    }

    pub fn as_range_inclusive(&self) -> RangeInclusive<i64> {
        self.start..=self.stop
    }

    /// Returns a copy of the bounds carrying a different label.
    pub fn with_label<M>(&self, label: M) -> LabeledRange<M> {
        LabeledRange::new(label, self.start, self.stop)
    }

    /// Transforms the label, keeping the bounds.
    pub fn map_label<M>(self, f: impl FnOnce(L) -> M) -> LabeledRange<M> {
        LabeledRange::new(f(self.label), self.start, self.stop)
    }

    /// Fallible counterpart of [`map_label`](Self::map_label).
    pub fn try_map_label<M, E>(
        self,
        f: impl FnOnce(L) -> std::result::Result<M, E>,
    ) -> std::result::Result<LabeledRange<M>, E> {
        Ok(LabeledRange::new(f(self.label)?, self.start, self.stop))
    }
}

impl<L: PartialEq> LabeledRange<L> {
    /// The merge predicate: same label and overlapping closed intervals.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.can_merge(other, Adjacency::Overlapping)
    }

    /// The merge predicate under an explicit adjacency policy.
    #[inline]
    pub fn can_merge(&self, other: &Self, adjacency: Adjacency) -> bool {
        self.label == other.label
            && adjacency.intervals_merge(self.start, self.stop, other.start, other.stop)
    }
}

impl<L: Clone> LabeledRange<L> {
    /// Smallest range covering both `self` and `other`, labeled like `self`.
    ///
    /// Callers are expected to have checked [`can_merge`](Self::can_merge) first;
    /// otherwise the result also covers the gap between the two ranges.
    pub fn union(&self, other: &Self) -> Self {
        LabeledRange::new(
            self.label.clone(),
            self.start.min(other.start),
            self.stop.max(other.stop),
        )
    }
}

impl<L> From<(L, i64, i64)> for LabeledRange<L> {
    fn from((label, start, stop): (L, i64, i64)) -> Self {
        LabeledRange::new(label, start, stop)
    }
}

impl<L> From<LabeledRange<L>> for (L, i64, i64) {
    fn from(range: LabeledRange<L>) -> Self {
        (range.label, range.start, range.stop)
    }
}

/// Verifies that every range in `ranges` has `start <= stop`.
///
/// Fails on the first inverted range, reporting its position in the slice.
pub fn validate_ranges<L>(ranges: &[LabeledRange<L>]) -> Result<()> {
    ranges
        .iter()
        .enumerate()
        .try_for_each(|(position, r)| verify_range(position, r.start, r.stop))
}
