//! Aggregate statistics over enriched records.
//!
//! [`ChatAnalyzer`] borrows a slice of [`EnrichedRecord`]s and computes
//! chat-level aggregates on demand. It never modifies the records.
//!
//! Records without a parsed `datetime` still count toward non-temporal
//! aggregates (totals, users, words, emojis, media) but are left out of
//! everything bucketed by time.
//!
//! # Example
//!
//! ```rust
//! use chatlens::analytics::{ChatAnalyzer, StopWords};
//! use chatlens::analyze_chat;
//!
//! let records = analyze_chat(
//!     "1/1/23, 10:00 - Alice: Rust rust rust\n1/1/23, 10:05 - Bob: 🎉 hello",
//! )?;
//! let stop = StopWords::new();
//! let analyzer = ChatAnalyzer::new(&records, &stop)?;
//!
//! assert_eq!(analyzer.basic_stats().total_messages, 2);
//! assert_eq!(analyzer.word_frequencies(1, 3)[0].word, "rust");
//! assert_eq!(analyzer.emoji_frequencies(5)[0].emoji, '🎉');
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

mod stats;
mod stop_words;
mod tally;

pub use stats::{
    ActivityHeatmap, BasicStats, DateCount, EmojiCount, HourCount, MediaAnalysis, MonthCount,
    TimeActivity, TrendPoint, UserActivity, UserMedia, WeekdayCount, WordCount,
};
pub use stop_words::StopWords;

use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use regex::Regex;
use serde::Serialize;
use tracing::info;

use crate::config::AnalyticsConfig;
use crate::error::Result;
use crate::record::{EnrichedRecord, weekday_name};
use stats::WEEK;
use tally::Tally;

/// Window of the trailing moving average in [`ChatAnalyzer::message_trend`].
const TREND_WINDOW: usize = 7;

/// Every aggregate bundled for serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReport {
    pub basic: BasicStats,
    pub active_users: Vec<UserActivity>,
    pub activity: TimeActivity,
    pub top_words: Vec<WordCount>,
    pub top_emojis: Vec<EmojiCount>,
    pub media: MediaAnalysis,
    pub heatmap: ActivityHeatmap,
    pub trend: Vec<TrendPoint>,
}

#[derive(Debug, Default)]
struct UserTotals {
    messages: usize,
    words: usize,
    characters: usize,
    media: usize,
    links: usize,
    emojis: usize,
}

/// Computes aggregates over enriched records.
#[derive(Debug)]
pub struct ChatAnalyzer<'a> {
    records: &'a [EnrichedRecord],
    stop_words: &'a StopWords,
    link_pattern: Regex,
    punctuation: Regex,
    digits: Regex,
}

impl<'a> ChatAnalyzer<'a> {
    /// Creates an analyzer over `records`.
    pub fn new(records: &'a [EnrichedRecord], stop_words: &'a StopWords) -> Result<Self> {
        Ok(Self {
            records,
            stop_words,
            link_pattern: Regex::new(r"http\S+")?,
            punctuation: Regex::new(r"[^\w\s]")?,
            digits: Regex::new(r"\d+")?,
        })
    }

    pub fn records(&self) -> &'a [EnrichedRecord] {
        self.records
    }

    /// Distinct senders in order of first message.
    pub fn users(&self) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(EnrichedRecord::user)
            .filter(|user| seen.insert(*user))
            .collect()
    }

    fn dated(&self) -> impl Iterator<Item = (NaiveDateTime, &'a EnrichedRecord)> {
        let records = self.records;
        records
            .iter()
            .filter_map(|r| r.datetime().map(|dt| (dt, r)))
    }

    /// Whole-chat totals and date range.
    pub fn basic_stats(&self) -> BasicStats {
        let mut stats = BasicStats {
            total_messages: self.records.len(),
            ..BasicStats::default()
        };

        for record in self.records {
            stats.total_words += record.word_count();
            stats.media_shared += usize::from(record.has_media());
            stats.links_shared += record.url_count();
            stats.total_emojis += record.emoji_count();
        }

        let mut first: Option<NaiveDate> = None;
        let mut last: Option<NaiveDate> = None;
        for (dt, _) in self.dated() {
            let day = dt.date();
            first = Some(first.map_or(day, |d| d.min(day)));
            last = Some(last.map_or(day, |d| d.max(day)));
        }

        if let (Some(first), Some(last)) = (first, last) {
            let days = last.signed_duration_since(first).num_days() + 1;
            stats.first_message_date = Some(first);
            stats.last_message_date = Some(last);
            stats.chat_duration_days = days;
            stats.avg_messages_per_day = self.records.len() as f64 / days as f64;
        }

        stats
    }

    /// Most active users by message count, ties broken by name.
    pub fn active_users(&self, top_n: usize) -> Vec<UserActivity> {
        let mut totals: BTreeMap<&str, UserTotals> = BTreeMap::new();
        for record in self.records {
            let t = totals.entry(record.user()).or_default();
            t.messages += 1;
            t.words += record.word_count();
            t.characters += record.message_length();
            t.media += usize::from(record.has_media());
            t.links += record.url_count();
            t.emojis += record.emoji_count();
        }

        let mut users: Vec<UserActivity> = totals
            .into_iter()
            .map(|(user, t)| UserActivity {
                user: user.to_string(),
                messages: t.messages,
                words: t.words,
                avg_message_length: t.characters as f64 / t.messages as f64,
                media_shared: t.media,
                links_shared: t.links,
                emojis_used: t.emojis,
            })
            .collect();

        // Stable: equal counts stay in name order
        users.sort_by(|a, b| b.messages.cmp(&a.messages));
        users.truncate(top_n);
        users
    }

    /// Message counts by hour, day, month and weekday.
    pub fn activity_by_time(&self) -> TimeActivity {
        let mut hourly: BTreeMap<u32, usize> = BTreeMap::new();
        let mut daily: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        let mut monthly: BTreeMap<String, usize> = BTreeMap::new();
        let mut weekdays = [0usize; 7];

        for (dt, _) in self.dated() {
            *hourly.entry(dt.hour()).or_default() += 1;
            *daily.entry(dt.date()).or_default() += 1;
            *monthly.entry(dt.format("%Y-%m").to_string()).or_default() += 1;
            weekdays[dt.weekday().num_days_from_monday() as usize] += 1;
        }

        TimeActivity {
            hourly: hourly
                .into_iter()
                .map(|(hour, message_count)| HourCount {
                    hour,
                    message_count,
                })
                .collect(),
            daily: daily
                .into_iter()
                .map(|(date, message_count)| DateCount {
                    date,
                    message_count,
                })
                .collect(),
            monthly: into_month_counts(monthly),
            day_of_week: WEEK
                .iter()
                .zip(weekdays)
                .filter(|(_, count)| *count > 0)
                .map(|(&day, message_count)| WeekdayCount {
                    day_of_week: weekday_name(day),
                    message_count,
                })
                .collect(),
        }
    }

    /// Lowercased words of one message with links, punctuation and digits removed.
    fn words(&self, message: &str) -> Vec<String> {
        let text = self.link_pattern.replace_all(message, "");
        let text = self.punctuation.replace_all(&text, "");
        let text = self.digits.replace_all(&text, "");
        text.to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    /// Most frequent words of at least `min_length` characters.
    ///
    /// Stop words are skipped. Equal frequencies keep first-occurrence order.
    pub fn word_frequencies(&self, top_n: usize, min_length: usize) -> Vec<WordCount> {
        let mut tally = Tally::new();
        for record in self.records {
            tally.extend(
                self.words(record.message())
                    .into_iter()
                    .filter(|w| w.chars().count() >= min_length && !self.stop_words.contains(w)),
            );
        }

        tally
            .most_common(top_n)
            .into_iter()
            .map(|(word, frequency)| WordCount { word, frequency })
            .collect()
    }

    /// Most frequent emojis. Equal frequencies keep first-occurrence order.
    pub fn emoji_frequencies(&self, top_n: usize) -> Vec<EmojiCount> {
        let mut tally = Tally::new();
        for record in self.records {
            tally.extend(record.emojis().iter().copied());
        }

        tally
            .most_common(top_n)
            .into_iter()
            .map(|(emoji, frequency)| EmojiCount { emoji, frequency })
            .collect()
    }

    /// Media totals per user and per month.
    pub fn media_analysis(&self) -> MediaAnalysis {
        let mut by_user: BTreeMap<&str, usize> = BTreeMap::new();
        for record in self.records {
            *by_user.entry(record.user()).or_default() += usize::from(record.has_media());
        }

        let mut by_month: BTreeMap<String, usize> = BTreeMap::new();
        for (dt, record) in self.dated() {
            *by_month.entry(dt.format("%Y-%m").to_string()).or_default() +=
                usize::from(record.has_media());
        }

        let mut by_user: Vec<UserMedia> = by_user
            .into_iter()
            .map(|(user, media_count)| UserMedia {
                user: user.to_string(),
                media_count,
            })
            .collect();
        by_user.sort_by(|a, b| b.media_count.cmp(&a.media_count));

        MediaAnalysis {
            total_media: self.records.iter().filter(|r| r.has_media()).count(),
            by_user,
            by_month: into_month_counts(by_month),
        }
    }

    /// Weekday × hour grid, optionally for one user.
    pub fn activity_heatmap(&self, user: Option<&str>) -> ActivityHeatmap {
        let mut heatmap = ActivityHeatmap {
            user: user.map(str::to_string),
            ..ActivityHeatmap::default()
        };

        for (dt, record) in self.dated() {
            if user.is_some_and(|u| u != record.user()) {
                continue;
            }
            heatmap.counts[dt.weekday().num_days_from_monday() as usize][dt.hour() as usize] += 1;
        }

        heatmap
    }

    /// Daily message counts from the first to the last dated message.
    ///
    /// Days without messages appear with a count of zero. Each point carries
    /// the mean of a trailing seven-day window once seven days are available.
    pub fn message_trend(&self) -> Vec<TrendPoint> {
        let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for (dt, _) in self.dated() {
            *per_day.entry(dt.date()).or_default() += 1;
        }

        let (Some(&first), Some(&last)) = (per_day.keys().next(), per_day.keys().next_back())
        else {
            return Vec::new();
        };

        let counts: Vec<(NaiveDate, usize)> = first
            .iter_days()
            .take_while(|day| *day <= last)
            .map(|day| (day, per_day.get(&day).copied().unwrap_or(0)))
            .collect();

        counts
            .iter()
            .enumerate()
            .map(|(i, &(date, message_count))| {
                let moving_avg_7d = (i + 1 >= TREND_WINDOW).then(|| {
                    let window = &counts[i + 1 - TREND_WINDOW..=i];
                    window.iter().map(|(_, c)| c).sum::<usize>() as f64 / TREND_WINDOW as f64
                });
                TrendPoint {
                    date,
                    message_count,
                    moving_avg_7d,
                }
            })
            .collect()
    }

    /// Records dated `date`, in input order.
    pub fn conversation_on(&self, date: NaiveDate) -> Vec<&'a EnrichedRecord> {
        let records = self.records;
        records.iter().filter(|r| r.date() == Some(date)).collect()
    }

    /// Computes every aggregate.
    pub fn report(&self, config: &AnalyticsConfig) -> ChatReport {
        let report = ChatReport {
            basic: self.basic_stats(),
            active_users: self.active_users(config.top_users),
            activity: self.activity_by_time(),
            top_words: self.word_frequencies(config.top_words, config.min_word_length),
            top_emojis: self.emoji_frequencies(config.top_emojis),
            media: self.media_analysis(),
            heatmap: self.activity_heatmap(None),
            trend: self.message_trend(),
        };

        info!(
            messages = report.basic.total_messages,
            users = report.active_users.len(),
            days = report.basic.chat_duration_days,
            "built chat report"
        );

        report
    }
}

fn into_month_counts(months: BTreeMap<String, usize>) -> Vec<MonthCount> {
    months
        .into_iter()
        .map(|(year_month, count)| MonthCount { year_month, count })
        .collect()
}
