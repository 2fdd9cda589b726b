//! Enriched-table writers.
//!
//! This module provides writers for different output formats:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - pretty JSON array - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one record per line - requires `json-output` feature
//!
//! All three write the same columns, listed by
//! [`OutputConfig::columns`](crate::core::models::OutputConfig::columns).
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::analyze_chat;
//! use chatlens::core::models::OutputConfig;
//! use chatlens::core::output::{to_csv, write_csv, write_json, write_jsonl};
//!
//! let records = analyze_chat("1/1/23, 10:00 - Alice: Hello!\n1/1/23, 10:01 - Bob: Hi!")?;
//! let config = OutputConfig::new().with_raw();
//!
//! write_csv(&records, "chat.csv", &config)?;
//! write_json(&records, "chat.json", &config)?;
//! write_jsonl(&records, "chat.jsonl", &config)?;
//!
//! let csv_string = to_csv(&records, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
