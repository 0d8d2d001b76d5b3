//! Coalesce command implementation

use anyhow::{Context, Result, bail};
use lrng_coalesce::{CoalesceOptions, Coalescer, LabelTable};

use crate::{range_file::RangeFile, utils};

pub fn run(
    input: String,
    labels: Option<Vec<String>>,
    options: CoalesceOptions,
    output: Option<String>,
    pretty: bool,
) -> Result<()> {
    let file = RangeFile::read(&input)?;
    log::debug!("Read {} ranges from {}", file.len(), input);

    let coalescer = Coalescer::new(options);
    log::debug!("Coalescing with {:?}", coalescer.options());
    let table = labels.map(LabelTable::new);
    let result = coalesce_file(file, table.as_ref(), &coalescer)
        .with_context(|| format!("Failed to coalesce ranges from: {}", input))?;

    utils::write_output(&result.to_json(pretty)?, output.as_deref())
}

/// Coalesces the ranges of `file`.
///
/// With a label table, the file must carry string labels (or be empty) and the
/// output is ordered by table position. Without one, labels are compared as-is.
pub fn coalesce_file(
    file: RangeFile,
    table: Option<&LabelTable>,
    coalescer: &Coalescer,
) -> Result<RangeFile> {
    let input_len = file.len();
    let result = match (file, table) {
        (RangeFile::Text(ranges), Some(table)) => {
            RangeFile::Text(coalescer.coalesce_with_labels(&ranges, table)?)
        }
        (RangeFile::Integer(ranges), Some(_)) if ranges.is_empty() => RangeFile::Text(vec![]),
        (RangeFile::Integer(_), Some(_)) => {
            bail!("A label table requires string labels, but the input uses integer labels")
        }
        (RangeFile::Integer(ranges), None) => RangeFile::Integer(coalescer.coalesce(&ranges)?),
        (RangeFile::Text(ranges), None) => RangeFile::Text(coalescer.coalesce(&ranges)?),
    };
    log::info!("Coalesced {} ranges into {}", input_len, result.len());
    Ok(result)
}
