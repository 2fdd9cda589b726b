//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::EnrichedRecord;
use crate::core::models::{OutputConfig, OutputRow};
use crate::error::Result;

/// Writes enriched records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: [`OutputConfig::columns`], header row first
/// - Missing calendar values are empty cells
/// - Encoding: UTF-8
pub fn write_csv(
    records: &[EnrichedRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    write_csv_to(records, file, config)
}

/// Converts enriched records to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing to file.
pub fn to_csv(records: &[EnrichedRecord], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv_to(records, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_csv_to<W: Write>(records: &[EnrichedRecord], out: W, config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(config.columns())?;
    for record in records {
        writer.write_record(OutputRow::new(record, config).fields())?;
    }

    writer.flush()?;
    Ok(())
}
