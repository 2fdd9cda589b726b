//! Output-side models for the enriched table.

use serde::{Deserialize, Serialize};

use crate::EnrichedRecord;

/// Columns always written, in order.
pub const BASE_COLUMNS: &[&str] = &[
    "user",
    "date",
    "time",
    "datetime",
    "hour",
    "day_of_week",
    "month",
    "year",
    "message_length",
    "word_count",
    "has_media",
    "has_url",
    "url_count",
    "emoji_count",
    "message",
];

/// Configuration for output format.
/// Controls which optional columns are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Add the date and time strings exactly as exported
    pub include_raw: bool,
    /// Add the emoji sequence of each message
    pub include_emojis: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_raw(mut self) -> Self {
        self.include_raw = true;
        self
    }

    #[must_use]
    pub fn with_emojis(mut self) -> Self {
        self.include_emojis = true;
        self
    }

    /// Column names for this configuration, in output order.
    pub fn columns(&self) -> Vec<&'static str> {
        let mut columns = BASE_COLUMNS.to_vec();
        if self.include_raw {
            columns.push("raw_date");
            columns.push("raw_time");
        }
        if self.include_emojis {
            columns.push("emojis");
        }
        columns
    }
}

/// One output row. Optional columns are skipped unless enabled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct OutputRow<'a> {
    user: &'a str,
    /// ISO date, or the raw string when unparsed
    date: String,
    time: &'a str,
    datetime: Option<String>,
    hour: Option<u32>,
    day_of_week: Option<&'static str>,
    month: Option<u32>,
    year: Option<i32>,
    message_length: usize,
    word_count: usize,
    has_media: bool,
    has_url: bool,
    url_count: usize,
    emoji_count: usize,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_time: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    emojis: Option<String>,
}

impl<'a> OutputRow<'a> {
    pub fn new(record: &'a EnrichedRecord, config: &OutputConfig) -> Self {
        Self {
            user: record.user(),
            date: record.date().map_or_else(
                || record.raw_date().to_string(),
                |d| d.format("%Y-%m-%d").to_string(),
            ),
            time: record.time(),
            datetime: record
                .datetime()
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string()),
            hour: record.hour(),
            day_of_week: record.day_of_week(),
            month: record.month(),
            year: record.year(),
            message_length: record.message_length(),
            word_count: record.word_count(),
            has_media: record.has_media(),
            has_url: record.has_url(),
            url_count: record.url_count(),
            emoji_count: record.emoji_count(),
            message: record.message(),
            raw_date: config.include_raw.then_some(record.raw_date()),
            raw_time: config.include_raw.then_some(record.raw_time()),
            emojis: config
                .include_emojis
                .then(|| record.emojis().iter().collect()),
        }
    }

    /// Field values as text, matching [`OutputConfig::columns`].
    pub fn fields(&self) -> Vec<String> {
        fn opt<T: ToString>(value: Option<T>) -> String {
            value.map(|v| v.to_string()).unwrap_or_default()
        }

        let mut fields = vec![
            self.user.to_string(),
            self.date.clone(),
            self.time.to_string(),
            opt(self.datetime.as_deref()),
            opt(self.hour),
            opt(self.day_of_week),
            opt(self.month),
            opt(self.year),
            self.message_length.to_string(),
            self.word_count.to_string(),
            self.has_media.to_string(),
            self.has_url.to_string(),
            self.url_count.to_string(),
            self.emoji_count.to_string(),
            self.message.to_string(),
        ];
        if let (Some(raw_date), Some(raw_time)) = (self.raw_date, self.raw_time) {
            fields.push(raw_date.to_string());
            fields.push(raw_time.to_string());
        }
        if let Some(emojis) = &self.emojis {
            fields.push(emojis.clone());
        }
        fields
    }
}
