//! JSON range file format.
//!
//! A range file is a JSON array whose items are either `[label, start, stop]`
//! triples or `{"label": .., "start": .., "stop": ..}` objects. Labels are
//! integers or strings, and a single file must use one kind throughout.
//! Output is always written in the object form.

use anyhow::{Context, Result, bail};
use lrng_coalesce::LabeledRange;
use serde::Deserialize;

use crate::utils;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLabel {
    Integer(i64),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRange {
    Triple(RawLabel, i64, i64),
    Object {
        label: RawLabel,
        start: i64,
        stop: i64,
    },
}

impl RawRange {
    fn into_parts(self) -> (RawLabel, i64, i64) {
        match self {
            RawRange::Triple(label, start, stop) => (label, start, stop),
            RawRange::Object { label, start, stop } => (label, start, stop),
        }
    }
}

/// The parsed contents of a range file, split by label kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeFile {
    Integer(Vec<LabeledRange<i64>>),
    Text(Vec<LabeledRange<String>>),
}

impl RangeFile {
    pub fn len(&self) -> usize {
        match self {
            RangeFile::Integer(ranges) => ranges.len(),
            RangeFile::Text(ranges) => ranges.len(),
        }
    }

    /// Reads a range file from `path`, or from stdin when `path` is `-`.
    pub fn read(path: &str) -> Result<RangeFile> {
        let text = utils::read_input(path)?;
        RangeFile::parse(&text).with_context(|| format!("Invalid range file: {}", path))
    }

    /// Parses a JSON range array. An empty array yields `RangeFile::Integer`.
    pub fn parse(text: &str) -> Result<RangeFile> {
        let raw: Vec<RawRange> =
            serde_json::from_str(text).context("Expected a JSON array of ranges")?;

        let mut integer = Vec::new();
        let mut textual = Vec::new();
        for (position, item) in raw.into_iter().enumerate() {
            let (label, start, stop) = item.into_parts();
            match label {
                RawLabel::Integer(label) => integer.push(LabeledRange::new(label, start, stop)),
                RawLabel::Text(label) => textual.push(LabeledRange::new(label, start, stop)),
            }
            if !integer.is_empty() && !textual.is_empty() {
                bail!(
                    "Range file mixes integer and string labels (first conflict at position {})",
                    position
                );
            }
        }

        Ok(if textual.is_empty() {
            RangeFile::Integer(integer)
        } else {
            RangeFile::Text(textual)
        })
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = match (self, pretty) {
            (RangeFile::Integer(ranges), false) => serde_json::to_string(ranges),
            (RangeFile::Integer(ranges), true) => serde_json::to_string_pretty(ranges),
            (RangeFile::Text(ranges), false) => serde_json::to_string(ranges),
            (RangeFile::Text(ranges), true) => serde_json::to_string_pretty(ranges),
        };
        json.context("Failed to serialize ranges to JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_triples() {
        let file = RangeFile::parse("[[1, 0, 2], [1, 1, 3]]").unwrap();
        assert_eq!(
            file,
            RangeFile::Integer(vec![LabeledRange::new(1, 0, 2), LabeledRange::new(1, 1, 3)])
        );
    }

    #[test]
    fn test_parse_objects_and_triples() {
        let file = RangeFile::parse(
            r#"[{"label": "cat", "start": 0, "stop": 1}, ["dog", 2, 3]]"#,
        )
        .unwrap();
        assert_eq!(
            file,
            RangeFile::Text(vec![
                LabeledRange::new("cat".to_string(), 0, 1),
                LabeledRange::new("dog".to_string(), 2, 3),
            ])
        );
        assert_eq!(file.len(), 2);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(RangeFile::parse("[]").unwrap(), RangeFile::Integer(vec![]));
    }

    #[test]
    fn test_parse_rejects_mixed_labels() {
        let err = RangeFile::parse(r#"[[1, 0, 2], ["cat", 1, 3]]"#).unwrap_err();
        assert!(err.to_string().contains("position 1"));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(RangeFile::parse(r#"{"label": 1}"#).is_err());
        assert!(RangeFile::parse(r#"[[1, 0]]"#).is_err());
        assert!(RangeFile::parse(r#"[[1.5, 0, 2]]"#).is_err());
    }

    #[test]
    fn test_to_json() {
        let file = RangeFile::Text(vec![LabeledRange::new("cat".to_string(), 0, 2)]);
        assert_eq!(
            file.to_json(false).unwrap(),
            r#"[{"label":"cat","start":0,"stop":2}]"#
        );
    }
}
