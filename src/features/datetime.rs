//! Date layout inference and date/time normalization.
//!
//! Export dates carry no locale marker, so the layout is guessed once per
//! export from a sample of leading records:
//!
//! 1. any sampled date containing `.` → `%d.%m.%Y`
//! 2. otherwise the first sampled date containing `/` decides: a leading
//!    component above 12 → day first, else month first (`%y` or `%Y` from
//!    the width of the year component)
//! 3. otherwise no strict layout; dates are read by the flexible day-first
//!    parser
//!
//! Slash dates whose first component is 12 or less are read month first
//! even when the export is day-first. The sample cannot tell them apart.
//!
//! A date that fails under the inferred layout is missing. The flexible
//! parser only runs when no layout was detected.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::record::NormalizedMoment;

/// Date layout shared by all records of one export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DateLayout {
    /// `31.12.2023`
    DayMonthYearDotted,
    /// `31/12/23` or `31/12/2023`
    DayFirstSlash { four_digit_year: bool },
    /// `12/31/23` or `12/31/2023`
    MonthFirstSlash { four_digit_year: bool },
    /// No strict layout detected.
    Flexible,
}

impl DateLayout {
    /// Infers the layout from sampled raw dates.
    ///
    /// The caller decides how many dates to sample.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::features::DateLayout;
    ///
    /// assert_eq!(
    ///     DateLayout::infer(["12/31/23", "1/1/24"]),
    ///     DateLayout::MonthFirstSlash { four_digit_year: false }
    /// );
    /// assert_eq!(
    ///     DateLayout::infer(["31/12/2023"]),
    ///     DateLayout::DayFirstSlash { four_digit_year: true }
    /// );
    /// ```
    pub fn infer<'a, I>(dates: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let sample: Vec<&str> = dates.into_iter().collect();

        if sample.iter().any(|d| d.contains('.')) {
            return DateLayout::DayMonthYearDotted;
        }

        let Some(first) = sample.iter().find(|d| d.contains('/')) else {
            return DateLayout::Flexible;
        };

        let parts: Vec<&str> = first.split('/').collect();
        if parts.len() != 3 {
            return DateLayout::Flexible;
        }
        let Ok(lead) = parts[0].trim().parse::<u32>() else {
            return DateLayout::Flexible;
        };

        let four_digit_year = parts[2].chars().count() == 4;
        if lead > 12 {
            DateLayout::DayFirstSlash { four_digit_year }
        } else {
            DateLayout::MonthFirstSlash { four_digit_year }
        }
    }

    /// Returns the strict chrono format for this layout.
    pub fn chrono_format(self) -> Option<&'static str> {
        match self {
            DateLayout::DayMonthYearDotted => Some("%d.%m.%Y"),
            DateLayout::DayFirstSlash {
                four_digit_year: true,
            } => Some("%d/%m/%Y"),
            DateLayout::DayFirstSlash {
                four_digit_year: false,
            } => Some("%d/%m/%y"),
            DateLayout::MonthFirstSlash {
                four_digit_year: true,
            } => Some("%m/%d/%Y"),
            DateLayout::MonthFirstSlash {
                four_digit_year: false,
            } => Some("%m/%d/%y"),
            DateLayout::Flexible => None,
        }
    }

    /// Parses one raw date with this layout.
    ///
    /// Strict layouts never fall back: a date that does not fit is `None`.
    pub fn parse(self, raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        match self.chrono_format() {
            Some(fmt) => NaiveDate::parse_from_str(raw, fmt).ok(),
            None => parse_date_flexible(raw),
        }
    }
}

/// Parses a three-part numeric date, preferring day before month.
///
/// Accepts `/`, `.` or `-` separators. A four-digit first component is read
/// as year-month-day. Otherwise the date is day-month-year, unless the
/// month slot holds a value above 12 and the day slot does not, in which
/// case the two are swapped. Two-digit years `00..=68` map to 20xx and
/// `69..=99` to 19xx.
///
/// ```rust
/// use chatlens::features::datetime::parse_date_flexible;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_date_flexible("03/04/2023"), NaiveDate::from_ymd_opt(2023, 4, 3));
/// assert_eq!(parse_date_flexible("04/25/23"), NaiveDate::from_ymd_opt(2023, 4, 25));
/// assert_eq!(parse_date_flexible("2023-04-25"), NaiveDate::from_ymd_opt(2023, 4, 25));
/// assert_eq!(parse_date_flexible("yesterday"), None);
/// ```
pub fn parse_date_flexible(raw: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = raw.trim().split(['/', '.', '-']).collect();
    if parts.len() != 3
        || parts
            .iter()
            .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    let nums: Vec<u32> = parts
        .iter()
        .map(|p| p.parse().ok())
        .collect::<Option<_>>()?;

    if parts[0].len() == 4 {
        return NaiveDate::from_ymd_opt(i32::try_from(nums[0]).ok()?, nums[1], nums[2]);
    }

    let year = expand_year(nums[2], parts[2].len())?;
    let (day, month) = if nums[1] > 12 && nums[0] <= 12 {
        (nums[1], nums[0])
    } else {
        (nums[0], nums[1])
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

fn expand_year(value: u32, digits: usize) -> Option<i32> {
    let value = i32::try_from(value).ok()?;
    match digits {
        1 | 2 if value < 69 => Some(2000 + value),
        1 | 2 => Some(1900 + value),
        3 | 4 => Some(value),
        _ => None,
    }
}

/// Normalizes a raw time string to 24-hour `HH:MM`.
///
/// - strings with an AM/PM marker are read as 12-hour clock times
/// - strings with two colons (`HH:MM:SS`) are truncated to the minute
/// - anything else, and anything that fails to parse, is returned as is
///
/// ```rust
/// use chatlens::features::datetime::normalize_time;
///
/// assert_eq!(normalize_time("11:59 PM"), "23:59");
/// assert_eq!(normalize_time("14:05:30"), "14:05");
/// assert_eq!(normalize_time("9:05"), "9:05");
/// assert_eq!(normalize_time("25:99 PM"), "25:99 PM");
/// ```
pub fn normalize_time(raw: &str) -> String {
    let lowered = raw.to_ascii_lowercase();
    let parsed = if lowered.contains("am") || lowered.contains("pm") {
        parse_twelve_hour(raw)
    } else if raw.matches(':').count() == 2 {
        NaiveTime::parse_from_str(raw.trim(), "%H:%M:%S").ok()
    } else {
        None
    };

    parsed.map_or_else(|| raw.to_string(), |t| t.format("%H:%M").to_string())
}

/// Reads `H:MM AM` style times, tolerating any whitespace before the marker.
fn parse_twelve_hour(raw: &str) -> Option<NaiveTime> {
    let cleaned = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    NaiveTime::parse_from_str(&cleaned.to_ascii_uppercase(), "%I:%M %p").ok()
}

/// Reads a normalized (or passed-through) time string.
fn parse_clock(time: &str) -> Option<NaiveTime> {
    let time = time.trim();
    ["%H:%M", "%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(time, fmt).ok())
        .or_else(|| parse_twelve_hour(time))
}

/// Combines a parsed date with a time string.
pub fn combine(date: NaiveDate, time: &str) -> Option<NaiveDateTime> {
    parse_clock(time).map(|t| date.and_time(t))
}

/// Normalizes the raw date and time of one record.
pub(crate) fn normalize_moment(raw_date: &str, raw_time: &str, layout: DateLayout) -> NormalizedMoment {
    let date = layout.parse(raw_date);
    let time = normalize_time(raw_time);
    let datetime = date.and_then(|d| combine(d, &time));
    NormalizedMoment {
        date,
        time,
        datetime,
    }
}
