//! Feature extraction: turns parsed records into [`EnrichedRecord`]s.
//!
//! For every record the extractor computes:
//!
//! | Field | Source |
//! |-------|--------|
//! | `date`, `datetime`, `hour`, ... | raw date under the inferred [`DateLayout`] plus normalized time |
//! | `time` | [`normalize_time`](datetime::normalize_time) |
//! | `message_length` | characters in the body |
//! | `word_count` | whitespace-delimited tokens |
//! | `has_media` | body contains a media marker (case-insensitive) |
//! | `url_count` | [`UrlFinder`] |
//! | `emojis` | [`EmojiTable`] |
//!
//! The date layout is inferred once per call from the leading records and
//! then applied to all of them. Records are independent after that, so
//! with the `parallel` feature the work is split into batches on the rayon
//! pool. Output order always equals input order.
//!
//! # Example
//!
//! ```rust
//! use chatlens::MessageRecord;
//! use chatlens::features::FeatureExtractor;
//!
//! let extractor = FeatureExtractor::with_defaults()?;
//! let records = vec![MessageRecord::new("12/31/23", "11:59 PM", "Alice", "Hello 🎉")];
//! let enriched = extractor.extract(&records);
//!
//! assert_eq!(enriched[0].hour(), Some(23));
//! assert_eq!(enriched[0].emoji_count(), 1);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

pub mod datetime;
mod emoji;
mod url;

pub use datetime::DateLayout;
pub use emoji::EmojiTable;
pub use url::UrlFinder;

use tracing::{debug, warn};

use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::record::{EnrichedRecord, MessageFeatures, MessageRecord};

/// Computes derived fields for parsed records.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    config: ExtractorConfig,
    urls: UrlFinder,
    emojis: EmojiTable,
}

impl FeatureExtractor {
    /// Creates an extractor.
    ///
    /// Media markers are lowercased and empty markers are ignored.
    pub fn new(mut config: ExtractorConfig) -> Result<Self> {
        config.media_markers = config
            .media_markers
            .iter()
            .filter(|m| !m.is_empty())
            .map(|m| m.to_lowercase())
            .collect();

        Ok(Self {
            config,
            urls: UrlFinder::new()?,
            emojis: EmojiTable::new()?,
        })
    }

    /// Creates an extractor with [`ExtractorConfig::default`].
    pub fn with_defaults() -> Result<Self> {
        Self::new(ExtractorConfig::default())
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Infers the date layout from the first `sample_size` records.
    pub fn infer_layout(&self, records: &[MessageRecord]) -> DateLayout {
        DateLayout::infer(
            records
                .iter()
                .take(self.config.sample_size)
                .map(|r| r.date.as_str()),
        )
    }

    /// Enriches all records. Output has the same length and order as input.
    pub fn extract(&self, records: &[MessageRecord]) -> Vec<EnrichedRecord> {
        if records.is_empty() {
            return Vec::new();
        }

        let layout = self.infer_layout(records);
        debug!(?layout, records = records.len(), "inferred date layout");

        let enriched = self.enrich_all(records, layout);

        let undated = enriched.iter().filter(|r| r.datetime().is_none()).count();
        if undated > 0 {
            warn!(
                undated,
                total = enriched.len(),
                "records without a parseable date/time are excluded from time aggregates"
            );
        }

        enriched
    }

    /// Enriches one record under an already inferred layout.
    pub fn enrich(&self, record: &MessageRecord, layout: DateLayout) -> EnrichedRecord {
        let moment = datetime::normalize_moment(&record.date, &record.time, layout);
        let features = self.message_features(&record.message);
        EnrichedRecord::from_parts(record, moment, features)
    }

    fn enrich_all(&self, records: &[MessageRecord], layout: DateLayout) -> Vec<EnrichedRecord> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            if self.config.parallel {
                let batch_size = self.config.batch_size.max(1);
                return records
                    .par_chunks(batch_size)
                    .flat_map_iter(|batch| batch.iter().map(|r| self.enrich(r, layout)))
                    .collect();
            }
        }

        records.iter().map(|r| self.enrich(r, layout)).collect()
    }

    fn message_features(&self, message: &str) -> MessageFeatures {
        let lowered = message.to_lowercase();
        MessageFeatures {
            message_length: message.chars().count(),
            word_count: message.split_whitespace().count(),
            has_media: self
                .config
                .media_markers
                .iter()
                .any(|marker| lowered.contains(marker.as_str())),
            url_count: self.urls.count(message),
            emojis: self.emojis.extract(message),
        }
    }
}
