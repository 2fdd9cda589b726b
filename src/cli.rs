//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! The argument struct only describes the command line; the pipeline itself
//! lives in the library so it can be used without clap.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::core::filter::FilterConfig;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Analyze a WhatsApp chat export: per-message features plus chat-level
/// activity, word and emoji statistics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt -o messages.csv
    chatlens chat.txt -o messages.jsonl --user Alice --after 2024-01-01
    chatlens chat.txt --stop-words stop.txt --top 15 --report report.json")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Write the enriched message table to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Table format (default: from the output extension, else csv)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Keep only messages from this user (exact name)
    #[arg(long, value_name = "NAME")]
    pub user: Option<String>,

    /// Keep only messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep only messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Stop word file, one word per line (# comments allowed)
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,

    /// Number of users, words and emojis listed in the summary
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Write the full JSON report to this file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Add the raw date and time columns to the table
    #[arg(long)]
    pub raw: bool,

    /// Add the emoji column to the table
    #[arg(long)]
    pub emojis: bool,

    /// Enrich messages on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log filter directive for the chosen verbosity, if any.
    pub fn log_level(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }

    /// Builds the record scope from `--user`, `--after` and `--before`.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut config = FilterConfig::new();
        if let Some(ref after) = self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            config = config.with_date_to(before)?;
        }
        if let Some(ref user) = self.user {
            config = config.with_user(user.clone());
        }
        Ok(config)
    }

    pub fn output_config(&self) -> OutputConfig {
        let mut config = OutputConfig::new();
        if self.raw {
            config = config.with_raw();
        }
        if self.emojis {
            config = config.with_emojis();
        }
        config
    }

    /// Resolves the table format: `--format`, then the output extension, then CSV.
    pub fn table_format(&self) -> crate::format::OutputFormat {
        if let Some(format) = self.format {
            return format.into();
        }
        self.output
            .as_ref()
            .and_then(|path| crate::format::OutputFormat::from_path(path).ok())
            .unwrap_or_default()
    }
}

/// Output format options.
///
/// # Example
///
/// ```rust
/// use chatlens::cli::OutputFormat;
///
/// let format = OutputFormat::Jsonl;
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines - one JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        crate::format::OutputFormat::from(*self).extension()
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}
