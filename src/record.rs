//! Record types produced by the parser and the feature extractor.
//!
//! - [`MessageRecord`] is what the [`ChatParser`](crate::parser::ChatParser)
//!   emits: the four raw fields captured from a header line, with any
//!   continuation lines already folded into `message`.
//! - [`EnrichedRecord`] is what the
//!   [`FeatureExtractor`](crate::features::FeatureExtractor) emits: the raw
//!   fields plus every derived field, computed once and exposed read-only.
//!
//! # Example
//!
//! ```
//! use chatlens::MessageRecord;
//!
//! let record = MessageRecord::new("12/31/23", "11:59 PM", "Alice", "Hello");
//! assert_eq!(record.user, "Alice");
//! assert_eq!(record.message, "Hello");
//! ```

use chrono::{Datelike, Month, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// One message as captured from the export, before enrichment.
///
/// `date` and `time` are kept exactly as they appear in the header line;
/// their layout depends on the exporting device's locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Calendar date as written in the export (`12/31/23`, `01.02.2023`, ...).
    pub date: String,

    /// Wall-clock time as written in the export (`11:59 PM`, `14:05:30`, ...).
    pub time: String,

    /// Sender display name or phone number.
    pub user: String,

    /// Message body. Multi-line messages are joined with `\n`.
    pub message: String,
}

impl MessageRecord {
    /// Creates a record from its four raw fields.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        user: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            user: user.into(),
            message: message.into(),
        }
    }

    /// Appends a continuation line to the message body.
    pub fn push_line(&mut self, line: &str) {
        self.message.push('\n');
        self.message.push_str(line);
    }
}

/// A message record with all derived fields.
///
/// Instances are only built by the feature extractor and cannot be modified
/// afterwards; reprocess the export to reflect changed input.
///
/// Calendar accessors ([`hour`](Self::hour), [`day_of_week`](Self::day_of_week),
/// ...) return `None` when the record's date or time could not be parsed.
/// Aggregations treat such records as excludable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedRecord {
    user: String,
    message: String,
    raw_date: String,
    raw_time: String,
    date: Option<NaiveDate>,
    time: String,
    datetime: Option<NaiveDateTime>,
    message_length: usize,
    word_count: usize,
    has_media: bool,
    url_count: usize,
    emojis: Vec<char>,
}

/// Derived values computed from a message body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct MessageFeatures {
    pub message_length: usize,
    pub word_count: usize,
    pub has_media: bool,
    pub url_count: usize,
    pub emojis: Vec<char>,
}

/// Normalized calendar values for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct NormalizedMoment {
    pub date: Option<NaiveDate>,
    pub time: String,
    pub datetime: Option<NaiveDateTime>,
}

impl EnrichedRecord {
    pub(crate) fn from_parts(
        raw: &MessageRecord,
        moment: NormalizedMoment,
        features: MessageFeatures,
    ) -> Self {
        Self {
            user: raw.user.clone(),
            message: raw.message.clone(),
            raw_date: raw.date.clone(),
            raw_time: raw.time.clone(),
            date: moment.date,
            time: moment.time,
            datetime: moment.datetime,
            message_length: features.message_length,
            word_count: features.word_count,
            has_media: features.has_media,
            url_count: features.url_count,
            emojis: features.emojis,
        }
    }

    // =========================================================================
    // Raw fields
    // =========================================================================

    /// Returns the sender.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the date string exactly as exported.
    pub fn raw_date(&self) -> &str {
        &self.raw_date
    }

    /// Returns the time string exactly as exported.
    pub fn raw_time(&self) -> &str {
        &self.raw_time
    }

    // =========================================================================
    // Calendar fields
    // =========================================================================

    /// Returns the parsed calendar date.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Returns the time normalized to 24-hour `HH:MM`.
    ///
    /// Strings that could not be normalized are returned unchanged.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns the combined date and time.
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        self.datetime
    }

    /// Hour of day, `0..=23`.
    pub fn hour(&self) -> Option<u32> {
        self.datetime.map(|dt| dt.hour())
    }

    pub fn minute(&self) -> Option<u32> {
        self.datetime.map(|dt| dt.minute())
    }

    /// Day of month, `1..=31`.
    pub fn day(&self) -> Option<u32> {
        self.datetime.map(|dt| dt.day())
    }

    pub fn weekday(&self) -> Option<Weekday> {
        self.datetime.map(|dt| dt.weekday())
    }

    /// Full English weekday name, e.g. `"Sunday"`.
    pub fn day_of_week(&self) -> Option<&'static str> {
        self.weekday().map(weekday_name)
    }

    /// Month number, `1..=12`.
    pub fn month(&self) -> Option<u32> {
        self.datetime.map(|dt| dt.month())
    }

    /// Full English month name, e.g. `"December"`.
    pub fn month_name(&self) -> Option<&'static str> {
        self.month().and_then(month_name)
    }

    pub fn year(&self) -> Option<i32> {
        self.datetime.map(|dt| dt.year())
    }

    /// Year and month as `YYYY-MM`, the key used for monthly aggregates.
    pub fn year_month(&self) -> Option<String> {
        self.datetime.map(|dt| dt.format("%Y-%m").to_string())
    }

    // =========================================================================
    // Message features
    // =========================================================================

    /// Number of characters (Unicode scalar values) in the message.
    pub fn message_length(&self) -> usize {
        self.message_length
    }

    /// Number of whitespace-delimited tokens in the message.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Whether the message is a media-omission placeholder.
    pub fn has_media(&self) -> bool {
        self.has_media
    }

    pub fn has_url(&self) -> bool {
        self.url_count > 0
    }

    pub fn url_count(&self) -> usize {
        self.url_count
    }

    /// Emoji characters in order of appearance, duplicates included.
    pub fn emojis(&self) -> &[char] {
        &self.emojis
    }

    pub fn emoji_count(&self) -> usize {
        self.emojis.len()
    }
}

/// Full English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Full English name of a month number (`1..=12`).
pub fn month_name(month: u32) -> Option<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
}
