//! Coalescing of labeled integer ranges.
//!
//! This crate merges overlapping closed intervals that carry the same label
//! into a minimal, non-overlapping, sorted set. It offers:
//!
//! - **A value type**: [`LabeledRange`], a `(label, start, stop)` triple with
//!   inclusive bounds and a generic `Ord` label
//! - **Two merge strategies**: the fixed point of a quadratic single pass
//!   ([`merge`]) and a sort-then-sweep pass ([`sweep`]) yielding identical output
//! - **A label table**: [`LabelTable`] maps string labels to compact integer
//!   codes and back
//!
//! # Key Types
//!
//! - [`Coalescer`] - Entry point combining validation, sorting and merging
//! - [`MergePasses`] - Step-wise fixed-point driver, one merge pass per `next()`
//! - [`LabeledRangeIteratorsExt`] - Extension trait for merging sorted range streams
//!
//! # Example
//!
//! ```
//! use lrng_coalesce::{LabeledRange, coalesce};
//!
//! let ranges = vec![
//!     LabeledRange::new(1, 0, 5),
//!     LabeledRange::new(2, 1, 4),
//! ];
//! // Different labels never merge, even when nested.
//! assert_eq!(coalesce(&ranges).unwrap(), ranges);
//! ```

pub mod coalescer;
pub mod labeled_range;
pub mod labels;
pub mod merge;
pub mod normalize;
pub mod sweep;

#[cfg(test)]
mod tests;

pub use lrng_common::{Error, ErrorKind, Result};

pub use coalescer::{
    CoalesceOptions, CoalesceReport, Coalescer, Strategy, coalesce, coalesce_with_labels,
};
pub use labeled_range::{Adjacency, LabeledRange, validate_ranges};
pub use labels::LabelTable;
pub use merge::{MergePasses, PassStats, merge_pass, merge_to_fixed_point};
pub use normalize::{find_mergeable_pair, is_coalesced, is_normalized, sort_ranges};
pub use sweep::{CoalesceSorted, LabeledRangeIteratorsExt, sweep_merge};
