//! Table format selection for enriched records.
//!
//! The CLI resolves the format from `--format`, then from the output file
//! extension. Library callers go through [`OutputFormat::from_path`] and
//! [`write_to_format`] the same way.
//!
//! ```rust
//! use chatlens::format::OutputFormat;
//!
//! assert_eq!(OutputFormat::from_path("chat.ndjson").unwrap(), OutputFormat::Jsonl);
//! assert!(OutputFormat::from_path("chat.txt").is_err());
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::EnrichedRecord;
use crate::core::models::OutputConfig;
use crate::error::ChatlensError;

/// Accepted names, aliases included.
const NAMES: &[(&str, OutputFormat)] = &[
    ("csv", OutputFormat::Csv),
    ("json", OutputFormat::Json),
    ("jsonl", OutputFormat::Jsonl),
    ("ndjson", OutputFormat::Jsonl),
];

/// Serialization of the enriched table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum OutputFormat {
    /// `;`-delimited, one row per record
    #[default]
    Csv,
    /// Pretty-printed array
    Json,
    /// One object per line
    Jsonl,
}

impl OutputFormat {
    fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|&(_, format)| format)
    }

    /// Canonical file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Cargo feature that provides the writer.
    fn feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }

    /// Picks the format from a file extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// [`ChatlensError::InvalidFormat`] when the extension is missing or
    /// unknown.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatlensError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        Self::from_name(ext).ok_or_else(|| {
            ChatlensError::invalid_format(
                "output",
                format!("cannot infer a table format from extension '.{ext}'"),
            )
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension().to_ascii_uppercase())
    }
}

impl FromStr for OutputFormat {
    type Err = ChatlensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            let known: Vec<&str> = NAMES.iter().map(|(name, _)| *name).collect();
            ChatlensError::invalid_format(
                "output",
                format!("unknown table format '{s}' (expected {})", known.join(", ")),
            )
        })
    }
}

/// Writes the enriched table to `path` with the writer for `format`.
///
/// # Errors
///
/// Writer errors, or [`ChatlensError::InvalidFormat`] when the crate was
/// built without the writer's feature.
#[allow(unused_variables)]
pub fn write_to_format(
    records: &[EnrichedRecord],
    path: impl AsRef<Path>,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), ChatlensError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(records, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(records, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(records, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(ChatlensError::invalid_format(
            "output",
            format!("{format} output needs the '{}' feature", format.feature()),
        )),
    }
}
