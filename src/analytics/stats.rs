//! Result types returned by [`ChatAnalyzer`](super::ChatAnalyzer).

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::record::weekday_name;

/// Whole-chat totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BasicStats {
    pub total_messages: usize,
    pub total_words: usize,
    pub media_shared: usize,
    pub links_shared: usize,
    pub total_emojis: usize,
    pub first_message_date: Option<NaiveDate>,
    pub last_message_date: Option<NaiveDate>,
    /// Days from first to last message, both included. Zero without dates.
    pub chat_duration_days: i64,
    pub avg_messages_per_day: f64,
}

/// Per-user activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserActivity {
    pub user: String,
    pub messages: usize,
    pub words: usize,
    /// Mean message length in characters.
    pub avg_message_length: f64,
    pub media_shared: usize,
    pub links_shared: usize,
    pub emojis_used: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourCount {
    pub hour: u32,
    pub message_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateCount {
    pub date: NaiveDate,
    pub message_count: usize,
}

/// Count for one `YYYY-MM` month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    pub year_month: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekdayCount {
    pub day_of_week: &'static str,
    pub message_count: usize,
}

/// Message counts bucketed by time. Only buckets with messages appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimeActivity {
    /// Ascending by hour.
    pub hourly: Vec<HourCount>,
    /// Ascending by date.
    pub daily: Vec<DateCount>,
    /// Ascending by month.
    pub monthly: Vec<MonthCount>,
    /// Monday first.
    pub day_of_week: Vec<WeekdayCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub frequency: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub emoji: char,
    pub frequency: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserMedia {
    pub user: String,
    pub media_count: usize,
}

/// Media sharing patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MediaAnalysis {
    pub total_media: usize,
    /// Every user, most media first.
    pub by_user: Vec<UserMedia>,
    /// Media per month of dated messages, ascending.
    pub by_month: Vec<MonthCount>,
}

/// Day-of-week × hour message counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActivityHeatmap {
    /// User the grid is restricted to, `None` for everyone.
    pub user: Option<String>,
    /// `counts[day][hour]`, days Monday first.
    pub counts: [[usize; 24]; 7],
}

impl ActivityHeatmap {
    pub fn get(&self, weekday: Weekday, hour: u32) -> usize {
        self.counts[weekday.num_days_from_monday() as usize]
            .get(hour as usize)
            .copied()
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterates rows as `(weekday name, hourly counts)`.
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, &[usize; 24])> {
        WEEK.iter().map(|&d| weekday_name(d)).zip(self.counts.iter())
    }
}

/// One calendar day of the message trend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub message_count: usize,
    /// Mean of this and the six preceding days; `None` for the first six.
    pub moving_avg_7d: Option<f64>,
}

pub(crate) const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];
