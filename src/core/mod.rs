//! Scoping and output of enriched records.
//!
//! This module contains:
//! - [`models`] - [`OutputConfig`] and the output column set
//! - [`filter`] - Record filtering by date range and sender
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use chatlens::core::{
//!     OutputConfig, FilterConfig, apply_filters,
//!     write_csv, write_json, write_jsonl,
//! };
//! # }
//! ```

pub mod filter;
pub mod models;
pub mod output;

// Re-export main types for convenience
pub use filter::{FilterConfig, apply_filters};
pub use models::OutputConfig;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
