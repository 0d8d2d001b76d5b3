//! Verify command implementation

use anyhow::{Result, bail};
use lrng_coalesce::{Adjacency, LabeledRange, find_mergeable_pair, validate_ranges};
use std::fmt::Debug;

use crate::range_file::RangeFile;

pub fn run(input: String, adjacency: Adjacency) -> Result<()> {
    let file = RangeFile::read(&input)?;
    match &file {
        RangeFile::Integer(ranges) => check(ranges, adjacency)?,
        RangeFile::Text(ranges) => check(ranges, adjacency)?,
    }
    println!("{}: {} ranges, fully coalesced", input, file.len());
    Ok(())
}

/// Fails if any range is inverted or if two ranges can still be merged.
pub fn check<L: Ord + Debug>(ranges: &[LabeledRange<L>], adjacency: Adjacency) -> Result<()> {
    validate_ranges(ranges)?;
    if let Some((a, b)) = find_mergeable_pair(ranges, adjacency) {
        bail!(
            "Ranges at positions {} and {} can still be merged: {:?} and {:?}",
            a,
            b,
            ranges[a],
            ranges[b]
        );
    }
    Ok(())
}
