//! JSON Lines (JSONL) output writer.
//!
//! One enriched record per line, convenient for line-oriented tools and
//! incremental loading.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::EnrichedRecord;
use crate::core::models::{OutputConfig, OutputRow};
use crate::error::Result;

/// Writes enriched records in JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object with the same fields as
/// [`write_json`](super::write_json).
pub fn write_jsonl(
    records: &[EnrichedRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_jsonl_to(records, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts enriched records to a JSONL string.
pub fn to_jsonl(records: &[EnrichedRecord], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_jsonl_to(records, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_jsonl_to<W: Write>(records: &[EnrichedRecord], out: &mut W, config: &OutputConfig) -> Result<()> {
    for record in records {
        let line = serde_json::to_string(&OutputRow::new(record, config))?;
        writeln!(out, "{line}")?;
    }
    Ok(())
}
