//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::EnrichedRecord;
use crate::core::models::{OutputConfig, OutputRow};
use crate::error::Result;

/// Writes enriched records to a JSON file as a pretty-printed array.
///
/// # Format
/// ```json
/// [
///   {"user": "Alice", "date": "2023-12-31", "hour": 23, "...": "..."},
///   {"user": "Bob", "date": "2024-01-01", "hour": 0, "...": "..."}
/// ]
/// ```
///
/// Missing calendar values are `null`.
pub fn write_json(
    records: &[EnrichedRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let json = to_json(records, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts enriched records to a JSON array string.
///
/// Same format as `write_json`, but returns a String instead of writing to file.
pub fn to_json(records: &[EnrichedRecord], config: &OutputConfig) -> Result<String> {
    let rows: Vec<OutputRow<'_>> = records
        .iter()
        .map(|r| OutputRow::new(r, config))
        .collect();

    Ok(serde_json::to_string_pretty(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MessageRecord;
    use crate::features::FeatureExtractor;
    use tempfile::NamedTempFile;

    fn records() -> Vec<EnrichedRecord> {
        let raw = vec![
            MessageRecord::new("12/31/23", "11:59 PM", "Alice", "Hello 🎉"),
            MessageRecord::new("someday", "10:00", "Bob", "<Media omitted>"),
        ];
        FeatureExtractor::with_defaults().unwrap().extract(&raw)
    }

    #[test]
    fn test_to_json_basic() {
        let json = to_json(&records(), &OutputConfig::new()).unwrap();

        assert!(json.contains(r#""user": "Alice""#));
        assert!(json.contains(r#""day_of_week": "Sunday""#));
        assert!(!json.contains("raw_date"));
        assert!(!json.contains("\"emojis\""));
    }

    #[test]
    fn test_missing_values_are_null() {
        let json = to_json(&records(), &OutputConfig::new()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed[1]["date"], "someday");
        assert!(parsed[1]["hour"].is_null());
        assert!(parsed[1]["datetime"].is_null());
        assert_eq!(parsed[1]["has_media"], true);
    }

    #[test]
    fn test_write_json_with_optional_columns() {
        let temp_file = NamedTempFile::new().unwrap();
        let config = OutputConfig::new().with_raw().with_emojis();
        write_json(&records(), temp_file.path(), &config).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(parsed[0]["raw_time"], "11:59 PM");
        assert_eq!(parsed[0]["emojis"], "🎉");
        assert_eq!(parsed[0]["hour"], 23);
    }
}
