//! Scope enriched records by sender and date range.
//!
//! This module provides [`FilterConfig`] for defining the scope and
//! [`apply_filters`] for applying it.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Records on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Records on or before date |
//! | User | [`with_user`](FilterConfig::with_user) | Records from one sender |
//!
//! # Example
//!
//! ```
//! use chatlens::analyze_chat;
//! use chatlens::core::filter::{FilterConfig, apply_filters};
//!
//! # fn main() -> chatlens::Result<()> {
//! let records = analyze_chat(
//!     "1/5/23, 10:00 - Alice: Old\n6/15/23, 10:00 - Alice: New\n6/15/23, 10:01 - Bob: Hi",
//! )?;
//!
//! let config = FilterConfig::new()
//!     .with_user("Alice")
//!     .with_date_from("2023-06-01")?;
//!
//! let scoped = apply_filters(records, &config);
//! assert_eq!(scoped.len(), 1);
//! assert_eq!(scoped[0].message(), "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Records without a parsed date are **excluded** when a date bound is active
//! - User matching is exact
//! - Multiple filters are combined with AND logic

use chrono::NaiveDate;

use crate::EnrichedRecord;
use crate::error::{ChatlensError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Scope for enriched records.
///
/// Filters are combined with AND logic: a record must match all active
/// filters to be kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Keep only records dated on or after this day.
    pub after: Option<NaiveDate>,

    /// Keep only records dated on or before this day.
    pub before: Option<NaiveDate>,

    /// Keep only records from this sender.
    pub user: Option<String>,
}

impl FilterConfig {
    /// Creates an empty filter; all records pass.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first included day, `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        self.after = Some(parse_bound(date_str)?);
        Ok(self)
    }

    /// Sets the last included day, `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        self.before = Some(parse_bound(date_str)?);
        Ok(self)
    }

    /// Restricts to one sender (exact match).
    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Sets the first included day directly.
    #[must_use]
    pub fn with_after(mut self, date: NaiveDate) -> Self {
        self.after = Some(date);
        self
    }

    /// Sets the last included day directly.
    #[must_use]
    pub fn with_before(mut self, date: NaiveDate) -> Self {
        self.before = Some(date);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.user.is_some()
    }

    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if `record` is in scope.
    pub fn matches(&self, record: &EnrichedRecord) -> bool {
        if self.user.as_deref().is_some_and(|u| u != record.user()) {
            return false;
        }

        if self.has_date_filter() {
            let Some(date) = record.date() else {
                return false;
            };
            if self.after.is_some_and(|after| date < after) {
                return false;
            }
            if self.before.is_some_and(|before| date > before) {
                return false;
            }
        }

        true
    }
}

fn parse_bound(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
        .map_err(|_| ChatlensError::invalid_date(date_str))
}

/// Keeps the records matching every active filter, in input order.
///
/// If no filter is active the input is returned unchanged.
pub fn apply_filters(records: Vec<EnrichedRecord>, config: &FilterConfig) -> Vec<EnrichedRecord> {
    if !config.is_active() {
        return records;
    }

    records.into_iter().filter(|r| config.matches(r)).collect()
}
