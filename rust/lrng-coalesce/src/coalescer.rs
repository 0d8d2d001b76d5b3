//! The coalescing entry points.
//!
//! [`Coalescer`] validates its input, sorts a private copy, merges it with the
//! configured [`Strategy`] and returns the result in `(label, start, stop)`
//! order. Inputs are never mutated, and no state is kept between calls, so a
//! single `Coalescer` can be shared freely across threads.

use lrng_common::Result;

use crate::{
    labeled_range::{Adjacency, LabeledRange, validate_ranges},
    labels::LabelTable,
    merge::MergePasses,
    normalize::sort_ranges,
    sweep::LabeledRangeIteratorsExt,
};

/// Merge algorithm used by a [`Coalescer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Repeat the quadratic single pass until the range count stops shrinking.
    #[default]
    FixedPoint,
    /// Sort once and merge neighbours in a single linear scan.
    Sweep,
}

/// Configuration for a [`Coalescer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoalesceOptions {
    pub strategy: Strategy,
    pub adjacency: Adjacency,
}

impl CoalesceOptions {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_adjacency(mut self, adjacency: Adjacency) -> Self {
        self.adjacency = adjacency;
        self
    }
}

/// Summary of a single coalescing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoalesceReport {
    pub input_len: usize,
    pub output_len: usize,
    /// Merge passes performed. Always 1 for [`Strategy::Sweep`].
    pub passes: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Coalescer {
    options: CoalesceOptions,
}

impl Coalescer {
    pub fn new(options: CoalesceOptions) -> Coalescer {
        Coalescer { options }
    }

    pub fn options(&self) -> &CoalesceOptions {
        &self.options
    }

    /// Merges same-label overlapping ranges into a minimal, sorted list.
    ///
    /// Fails with `InvalidRange` if any input range has `start > stop`; no
    /// merging is attempted in that case.
    pub fn coalesce<L>(&self, ranges: &[LabeledRange<L>]) -> Result<Vec<LabeledRange<L>>>
    where
        L: Ord + Clone,
    {
        self.coalesce_with_report(ranges).map(|(ranges, _)| ranges)
    }

    /// Same as [`coalesce`](Self::coalesce), also returning a [`CoalesceReport`].
    pub fn coalesce_with_report<L>(
        &self,
        ranges: &[LabeledRange<L>],
    ) -> Result<(Vec<LabeledRange<L>>, CoalesceReport)>
    where
        L: Ord + Clone,
    {
        validate_ranges(ranges)?;

        let mut sorted = ranges.to_vec();
        sort_ranges(&mut sorted);

        let adjacency = self.options.adjacency;
        let (mut output, passes) = match self.options.strategy {
            Strategy::FixedPoint => MergePasses::new(sorted, adjacency).run(),
            Strategy::Sweep => (sorted.into_iter().coalesce_sorted(adjacency).collect(), 1),
        };
        sort_ranges(&mut output);

        let report = CoalesceReport {
            input_len: ranges.len(),
            output_len: output.len(),
            passes,
        };
        log::debug!(
            "coalesced {} ranges into {} ({:?}, {} passes)",
            report.input_len,
            report.output_len,
            self.options.strategy,
            report.passes
        );
        Ok((output, report))
    }

    /// Coalesces ranges carrying string labels.
    ///
    /// Labels are encoded through `table`, coalesced as integer codes and
    /// decoded again. The output is therefore ordered by each label's position
    /// in the table, then by `start` and `stop`.
    ///
    /// Fails with `InvalidRange` for an inverted range and with `LabelNotFound`
    /// for a label missing from `table`. Bounds are checked before labels.
    pub fn coalesce_with_labels<S>(
        &self,
        ranges: &[LabeledRange<S>],
        table: &LabelTable,
    ) -> Result<Vec<LabeledRange<String>>>
    where
        S: AsRef<str>,
    {
        validate_ranges(ranges)?;
        let encoded = table.encode_ranges(ranges)?;
        let coalesced = self.coalesce(&encoded)?;
        table.decode_ranges(&coalesced)
    }
}

/// Coalesces `ranges` with default options.
///
/// ```
/// use lrng_coalesce::{LabeledRange, coalesce};
///
/// let ranges = vec![
///     LabeledRange::new(1, 0, 2),
///     LabeledRange::new(1, 1, 3),
///     LabeledRange::new(1, 10, 12),
/// ];
/// let merged = coalesce(&ranges).unwrap();
/// assert_eq!(merged, vec![LabeledRange::new(1, 0, 3), LabeledRange::new(1, 10, 12)]);
/// ```
pub fn coalesce<L>(ranges: &[LabeledRange<L>]) -> Result<Vec<LabeledRange<L>>>
where
    L: Ord + Clone,
{
    Coalescer::default().coalesce(ranges)
}

/// Coalesces ranges with string labels resolved against `labels_order`.
///
/// ```
/// use lrng_coalesce::{LabeledRange, coalesce_with_labels};
///
/// let ranges = vec![
///     LabeledRange::new("cat", 0, 1),
///     LabeledRange::new("dog", 2, 3),
///     LabeledRange::new("cat", 1, 2),
/// ];
/// let merged = coalesce_with_labels(&ranges, &["cat", "dog"]).unwrap();
/// assert_eq!(merged[0], LabeledRange::new("cat".to_string(), 0, 2));
/// assert_eq!(merged[1], LabeledRange::new("dog".to_string(), 2, 3));
/// ```
pub fn coalesce_with_labels<S, T>(
    ranges: &[LabeledRange<S>],
    labels_order: &[T],
) -> Result<Vec<LabeledRange<String>>>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let table = LabelTable::new(labels_order.iter().map(|l| l.as_ref()));
    Coalescer::default().coalesce_with_labels(ranges, &table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let ranges = vec![
            LabeledRange::new(1, 0, 2),
            LabeledRange::new(1, 1, 3),
            LabeledRange::new(1, 2, 5),
        ];
        let (output, report) = Coalescer::default().coalesce_with_report(&ranges).unwrap();
        assert_eq!(output, vec![LabeledRange::new(1, 0, 5)]);
        assert_eq!(report.input_len, 3);
        assert_eq!(report.output_len, 1);
        assert!(report.passes >= 2);

        let sweep = Coalescer::new(CoalesceOptions::default().with_strategy(Strategy::Sweep));
        let (output, report) = sweep.coalesce_with_report(&ranges).unwrap();
        assert_eq!(output, vec![LabeledRange::new(1, 0, 5)]);
        assert_eq!(report.passes, 1);
    }

    #[test]
    fn test_invalid_range_is_reported_before_labels() {
        let table = LabelTable::new(["cat"]);
        let ranges = vec![LabeledRange::new("fox", 5, 2)];
        let err = Coalescer::default()
            .coalesce_with_labels(&ranges, &table)
            .unwrap_err();
        assert!(err.is_invalid_range());
    }

    #[test]
    fn test_output_follows_table_order() {
        let ranges = vec![
            LabeledRange::new("ant", 0, 1),
            LabeledRange::new("zebra", 0, 1),
        ];
        let merged = coalesce_with_labels(&ranges, &["zebra", "ant"]).unwrap();
        assert_eq!(merged[0].label, "zebra");
        assert_eq!(merged[1].label, "ant");
    }

    #[test]
    fn test_options_builder() {
        let options = CoalesceOptions::default()
            .with_strategy(Strategy::Sweep)
            .with_adjacency(Adjacency::Touching);
        assert_eq!(options.strategy, Strategy::Sweep);
        assert_eq!(options.adjacency, Adjacency::Touching);
        assert_eq!(CoalesceOptions::default().strategy, Strategy::FixedPoint);
        assert_eq!(CoalesceOptions::default().adjacency, Adjacency::Overlapping);
        assert_eq!(Coalescer::new(options).options(), &options);
        assert_eq!(Coalescer::default().options(), &CoalesceOptions::default());
    }

    #[test]
    fn test_touching_option() {
        let ranges = vec![LabeledRange::new(0, 0, 2), LabeledRange::new(0, 3, 5)];
        assert_eq!(coalesce(&ranges).unwrap().len(), 2);
        let touching =
            Coalescer::new(CoalesceOptions::default().with_adjacency(Adjacency::Touching));
        assert_eq!(
            touching.coalesce(&ranges).unwrap(),
            vec![LabeledRange::new(0, 0, 5)]
        );
    }
}
