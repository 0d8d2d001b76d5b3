//! Bidirectional mapping between string labels and integer label codes.
//!
//! The coalescing routines work on any `Ord` label. [`LabelTable`] lets callers
//! holding string labels run them on compact `usize` codes instead: labels are
//! encoded to their position in an ordered lookup table and decoded back
//! afterwards. The table knows nothing about merge semantics.

use ahash::AHashMap;
use lrng_common::{Error, Result};

use crate::labeled_range::LabeledRange;

/// An ordered list of label strings with O(1) lookup in both directions.
///
/// A label's code is its index in the list passed to [`LabelTable::new`].
/// When a label appears more than once, the first occurrence defines its code;
/// later duplicates still decode to the same string.
#[derive(Debug, Clone, Default)]
pub struct LabelTable {
    labels: Vec<String>,
    codes: AHashMap<String, usize>,
}

impl LabelTable {
    pub fn new<I, S>(labels_order: I) -> LabelTable
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels_order.into_iter().map(Into::into).collect();
        let mut codes = AHashMap::with_capacity(labels.len());
        for (code, label) in labels.iter().enumerate() {
            codes.entry(label.clone()).or_insert(code);
        }
        LabelTable { labels, codes }
    }

    /// Builds a table from the distinct labels of `ranges`, in order of first
    /// appearance.
    pub fn from_ranges<S: AsRef<str>>(ranges: &[LabeledRange<S>]) -> LabelTable {
        let mut table = LabelTable::default();
        for range in ranges {
            let label = range.label.as_ref();
            if !table.codes.contains_key(label) {
                table.codes.insert(label.to_string(), table.labels.len());
                table.labels.push(label.to_string());
            }
        }
        table
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The labels in table order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn code_of(&self, label: &str) -> Option<usize> {
        self.codes.get(label).copied()
    }

    pub fn label_at(&self, code: usize) -> Option<&str> {
        self.labels.get(code).map(String::as_str)
    }

    /// Maps a label to its code, failing with `LabelNotFound` when the label is
    /// not in the table.
    pub fn encode(&self, label: &str) -> Result<usize> {
        self.code_of(label)
            .ok_or_else(|| Error::label_not_found(label))
    }

    /// Maps a code back to its label, failing with `LabelIndexNotFound` when
    /// the code is out of bounds.
    pub fn decode(&self, code: usize) -> Result<&str> {
        self.label_at(code)
            .ok_or_else(|| Error::label_index_not_found(code, self.labels.len()))
    }

    /// Encodes the labels of all `ranges`, stopping at the first unknown label.
    pub fn encode_ranges<S: AsRef<str>>(
        &self,
        ranges: &[LabeledRange<S>],
    ) -> Result<Vec<LabeledRange<usize>>> {
        ranges
            .iter()
            .map(|r| self.encode(r.label.as_ref()).map(|code| r.with_label(code)))
            .collect()
    }

    /// Decodes the labels of all `ranges`, stopping at the first unknown code.
    pub fn decode_ranges(
        &self,
        ranges: &[LabeledRange<usize>],
    ) -> Result<Vec<LabeledRange<String>>> {
        ranges
            .iter()
            .map(|r| {
                self.decode(r.label)
                    .map(|label| r.with_label(label.to_string()))
            })
            .collect()
    }
}
