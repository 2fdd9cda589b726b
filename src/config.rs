//! Configuration types for feature extraction and analytics.
//!
//! Plain builder-style structs with `serde` support, so they can be
//! embedded in a caller's own configuration file.
//!
//! - [`ExtractorConfig`] - date sampling, media markers, batching
//! - [`AnalyticsConfig`] - result sizes for the aggregate report
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::ExtractorConfig;
//! use chatlens::features::FeatureExtractor;
//!
//! let config = ExtractorConfig::new()
//!     .with_sample_size(50)
//!     .with_parallel(false);
//!
//! let extractor = FeatureExtractor::new(config)?;
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use serde::{Deserialize, Serialize};

/// Media-omission markers used by WhatsApp exports (matched lowercased).
pub const DEFAULT_MEDIA_MARKERS: &[&str] = &["omitted", "<media omitted>"];

/// Configuration for the feature extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Number of leading records inspected to infer the date layout (default: 100)
    pub sample_size: usize,

    /// Lowercase substrings marking a stripped attachment
    pub media_markers: Vec<String>,

    /// Enrich records on the rayon pool when the `parallel` feature is on (default: true)
    pub parallel: bool,

    /// Records per work unit when enriching in parallel (default: 5000)
    pub batch_size: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            sample_size: 100,
            media_markers: DEFAULT_MEDIA_MARKERS
                .iter()
                .map(|m| (*m).to_string())
                .collect(),
            parallel: true,
            batch_size: 5000,
        }
    }
}

impl ExtractorConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many leading dates are sampled for layout inference.
    #[must_use]
    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.sample_size = size;
        self
    }

    /// Replaces the media-omission markers.
    ///
    /// Markers are lowercased; matching is case-insensitive.
    #[must_use]
    pub fn with_media_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.media_markers = markers
            .into_iter()
            .map(|m| m.as_ref().to_lowercase())
            .collect();
        self
    }

    /// Enables or disables parallel enrichment.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the parallel work-unit size. Zero is treated as one.
    #[must_use]
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }
}

/// Result sizes for [`ChatAnalyzer::report`](crate::analytics::ChatAnalyzer::report).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Users listed in the activity ranking (default: 10)
    pub top_users: usize,

    /// Words listed in the frequency table (default: 20)
    pub top_words: usize,

    /// Shortest word counted, in characters (default: 3)
    pub min_word_length: usize,

    /// Emojis listed in the frequency table (default: 20)
    pub top_emojis: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_users: 10,
            top_words: 20,
            min_word_length: 3,
            top_emojis: 20,
        }
    }
}

impl AnalyticsConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    #[must_use]
    pub fn with_min_word_length(mut self, len: usize) -> Self {
        self.min_word_length = len;
        self
    }

    #[must_use]
    pub fn with_top_emojis(mut self, n: usize) -> Self {
        self.top_emojis = n;
        self
    }
}
