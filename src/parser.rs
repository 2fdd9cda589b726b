//! WhatsApp TXT export parser.
//!
//! Turns the raw text of one export into an ordered `Vec` of
//! [`MessageRecord`]s. Three header layouts are recognized, tried in this
//! priority order for every line:
//!
//! - 12-hour: `12/31/23, 11:59 PM - Alice: Hello`
//! - 24-hour: `1/1/23, 10:00 - Alice: Hello`
//! - Bracketed: `[01.02.2023, 14:05:30] Bob: Bonjour`
//!
//! A line that matches none of them continues the previous message. Lines
//! before the first header have nothing to attach to and are dropped.
//! Parsing never fails; an export with no header lines simply yields no
//! records.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::ChatParser;
//!
//! let parser = ChatParser::new()?;
//! let records = parser.parse_str("1/1/23, 10:00 - Alice: Line one\nLine two");
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].message, "Line one\nLine two");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::MessageRecord;
use crate::decode::read_export;
use crate::error::Result;

/// Header line layouts, in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineFormat {
    /// `D/M/YY(YY), H:MM AM/PM - User: Message`
    TwelveHour,
    /// `D/M/YY(YY), H:MM - User: Message`
    TwentyFourHour,
    /// `[D.M.YYYY, H:MM:SS] User: Message`
    Bracketed,
}

impl LineFormat {
    /// Returns the regex pattern for this layout.
    ///
    /// Captures: 1 = date, 2 = time, 3 = user, 4 = message tail. The user is
    /// the shortest prefix ending at the first `": "`.
    pub fn pattern(self) -> &'static str {
        match self {
            // 12/31/23, 11:59 PM - Alice: Hello
            LineFormat::TwelveHour => {
                r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2}\s[APap][Mm])\s-\s(.*?):\s(.*)"
            }
            // 1/1/23, 10:00 - Alice: Hello
            LineFormat::TwentyFourHour => {
                r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2})\s-\s(.*?):\s(.*)"
            }
            // [01.02.2023, 14:05:30] Bob: Bonjour
            LineFormat::Bracketed => {
                r"^\[(\d{1,2}\.\d{1,2}\.\d{4}),\s(\d{1,2}:\d{2}:\d{2})\]\s(.*?):\s(.*)"
            }
        }
    }

    /// Returns all layouts in priority order.
    pub fn all() -> &'static [LineFormat] {
        &[
            LineFormat::TwelveHour,
            LineFormat::TwentyFourHour,
            LineFormat::Bracketed,
        ]
    }

    fn index(self) -> usize {
        match self {
            LineFormat::TwelveHour => 0,
            LineFormat::TwentyFourHour => 1,
            LineFormat::Bracketed => 2,
        }
    }
}

impl std::fmt::Display for LineFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineFormat::TwelveHour => write!(f, "12-hour"),
            LineFormat::TwentyFourHour => write!(f, "24-hour"),
            LineFormat::Bracketed => write!(f, "bracketed"),
        }
    }
}

/// A compiled header pattern.
#[derive(Debug)]
struct HeaderMatcher {
    format: LineFormat,
    regex: Regex,
}

impl HeaderMatcher {
    fn new(format: LineFormat) -> Result<Self> {
        Ok(Self {
            format,
            regex: Regex::new(format.pattern())?,
        })
    }

    fn captures(&self, line: &str) -> Option<MessageRecord> {
        let caps = self.regex.captures(line)?;
        let field = |i: usize| caps.get(i).map_or("", |m| m.as_str());
        Some(MessageRecord::new(field(1), field(2), field(3), field(4)))
    }
}

/// Line counts gathered during one parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Lines that started a new record.
    pub header_lines: usize,
    /// Lines appended to the previous record.
    pub continuation_lines: usize,
    /// Lines seen before any header, discarded.
    pub dropped_lines: usize,
    /// Header lines per layout, indexed like [`LineFormat::all`].
    pub by_format: [usize; 3],
}

impl ParseSummary {
    /// Returns the number of header lines matched by `format`.
    pub fn count_for(&self, format: LineFormat) -> usize {
        self.by_format[format.index()]
    }
}

/// Parser for WhatsApp TXT exports.
///
/// Holds the compiled header patterns; build it once and reuse it. It has
/// no mutable state and can be shared across threads.
#[derive(Debug)]
pub struct ChatParser {
    matchers: Vec<HeaderMatcher>,
}

impl ChatParser {
    /// Compiles the header patterns.
    pub fn new() -> Result<Self> {
        let matchers = LineFormat::all()
            .iter()
            .map(|&format| HeaderMatcher::new(format))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { matchers })
    }

    /// Classifies one line.
    ///
    /// Returns the first layout (in priority order) whose pattern matches,
    /// together with the captured fields, or `None` for a continuation line.
    pub fn classify(&self, line: &str) -> Option<(LineFormat, MessageRecord)> {
        self.matchers
            .iter()
            .find_map(|m| m.captures(line).map(|record| (m.format, record)))
    }

    /// Parses export content into records.
    pub fn parse_str(&self, content: &str) -> Vec<MessageRecord> {
        self.parse_with_summary(content).0
    }

    /// Parses export content and reports how each line was handled.
    pub fn parse_with_summary(&self, content: &str) -> (Vec<MessageRecord>, ParseSummary) {
        let mut records: Vec<MessageRecord> = Vec::new();
        let mut summary = ParseSummary::default();

        // `lines()` strips `\r` and yields no empty segment after a final
        // newline, so the last message never ends in `\n`.
        for line in content.lines() {
            if let Some((format, record)) = self.classify(line) {
                summary.header_lines += 1;
                summary.by_format[format.index()] += 1;
                records.push(record);
            } else if let Some(last) = records.last_mut() {
                // Continuation of previous message (multiline)
                last.push_line(line);
                summary.continuation_lines += 1;
            } else {
                summary.dropped_lines += 1;
            }
        }

        debug!(
            records = records.len(),
            continuation_lines = summary.continuation_lines,
            dropped_lines = summary.dropped_lines,
            "parsed chat export"
        );

        (records, summary)
    }

    /// Reads and parses an export file.
    ///
    /// The file is decoded with [`read_export`], so non-UTF-8 exports are
    /// still accepted.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Vec<MessageRecord>> {
        let content = read_export(path)?;
        Ok(self.parse_str(&content))
    }
}
