//! # chatlens
//!
//! A Rust library for turning WhatsApp text exports into a typed message
//! table and chat-level analytics.
//!
//! ## Overview
//!
//! The pipeline has three stages:
//!
//! 1. **Parse** ([`parser`]) - split the export into [`MessageRecord`]s.
//!    Three header layouts are recognized (12-hour, 24-hour and bracketed);
//!    lines without a header are appended to the previous message.
//! 2. **Enrich** ([`features`]) - normalize dates and times, then derive
//!    per-message features (length, words, media, URLs, emojis) into
//!    [`EnrichedRecord`]s.
//! 3. **Aggregate** ([`analytics`]) - compute basic statistics, user
//!    rankings, time buckets, word and emoji frequencies, media counts,
//!    a weekday/hour heatmap and a daily trend.
//!
//! Parsing and enrichment never fail on content: malformed lines are
//! dropped or merged and unparseable dates become missing values.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let export = "\
//! 1/2/23, 10:00 - Alice: Hello world 🎉
//! 1/2/23, 10:05 - Bob: see https://example.com
//! and more";
//!
//!     let records = analyze_chat(export)?;
//!     assert_eq!(records.len(), 2);
//!     assert_eq!(records[1].message(), "see https://example.com\nand more");
//!     assert!(records[1].has_url());
//!
//!     let stop_words = StopWords::new();
//!     let analyzer = ChatAnalyzer::new(&records, &stop_words)?;
//!     let basic = analyzer.basic_stats();
//!     assert_eq!(basic.total_messages, 2);
//!     assert_eq!(basic.total_emojis, 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ChatParser`](parser::ChatParser), [`LineFormat`](parser::LineFormat)
//! - [`decode`] - reading exports that are not valid UTF-8
//! - [`features`] - [`FeatureExtractor`](features::FeatureExtractor), date layouts, URL and emoji detection
//! - [`analytics`] - [`ChatAnalyzer`](analytics::ChatAnalyzer), [`StopWords`](analytics::StopWords), report types
//! - [`config`] - [`ExtractorConfig`](config::ExtractorConfig), [`AnalyticsConfig`](config::AnalyticsConfig)
//! - [`core`] - filtering and table writers (CSV, JSON, JSONL)
//! - [`format`] - output format selection
//! - [`error`] - [`ChatlensError`], [`Result`]
//! - [`prelude`] - convenient re-exports

use std::path::Path;

use tracing::info;

pub mod analytics;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod decode;
pub mod error;
pub mod features;
pub mod format;
pub mod parser;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use record::{EnrichedRecord, MessageRecord};

use features::FeatureExtractor;
use parser::ChatParser;

/// Parses and enriches an export held in memory, with default settings.
///
/// # Errors
///
/// Returns [`ChatlensError::Pattern`] only if a built-in pattern fails to
/// compile; content problems never produce an error.
pub fn analyze_chat(content: &str) -> Result<Vec<EnrichedRecord>> {
    let messages = ChatParser::new()?.parse_str(content);
    let records = FeatureExtractor::with_defaults()?.extract(&messages);
    info!(records = records.len(), "chat analyzed");
    Ok(records)
}

/// Reads, decodes, parses and enriches an export file, with default settings.
///
/// ```rust,no_run
/// let records = chatlens::analyze_file("chat.txt")?;
/// println!("{} messages", records.len());
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn analyze_file(path: impl AsRef<Path>) -> Result<Vec<EnrichedRecord>> {
    let content = decode::read_export(path)?;
    analyze_chat(&content)
}

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{EnrichedRecord, MessageRecord, analyze_chat, analyze_file};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Pipeline stages
    pub use crate::analytics::{ChatAnalyzer, ChatReport, StopWords};
    pub use crate::features::FeatureExtractor;
    pub use crate::parser::{ChatParser, LineFormat};

    // Configuration
    pub use crate::config::{AnalyticsConfig, ExtractorConfig};

    // Filtering and output
    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::models::OutputConfig;
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
    pub use crate::format::{OutputFormat, write_to_format};
}
