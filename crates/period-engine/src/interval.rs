//! Closed date intervals.
//!
//! A [`DateInterval`] covers every calendar day from its start through its end,
//! both included. There is no time-of-day and no timezone: two intervals touch
//! as soon as one starts on or before the day the other ends.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// A calendar date without time component.
pub type CalendarDate = NaiveDate;

/// Textual date format used for input and for echoing periods back.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Separator between the two dates of a period line.
pub const PERIOD_SEPARATOR: &str = " a ";

/// A closed interval `[start, end]` of calendar days.
///
/// # Invariants
/// `start` is never after `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DateInterval {
    start: CalendarDate,
    end: CalendarDate,
}

impl DateInterval {
    /// Creates a new interval, or `None` if `start` is after `end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use period_engine::DateInterval;
    ///
    /// let jan1 = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    /// let jan10 = NaiveDate::from_ymd_opt(2020, 1, 10).unwrap();
    /// assert!(DateInterval::new(jan1, jan10).is_some());
    /// assert!(DateInterval::new(jan10, jan1).is_none());
    /// ```
    pub fn new(start: CalendarDate, end: CalendarDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// A single-day interval.
    pub fn day(date: CalendarDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    #[inline]
    pub fn start(&self) -> CalendarDate {
        self.start
    }

    #[inline]
    pub fn end(&self) -> CalendarDate {
        self.end
    }

    /// Number of calendar days covered, counting both ends.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether the two intervals share at least one day.
    pub fn overlaps(&self, other: &DateInterval) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Whether every day of `other` is also covered by `self`.
    pub fn contains(&self, other: &DateInterval) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for DateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.start.format(DATE_FORMAT),
            PERIOD_SEPARATOR,
            self.end.format(DATE_FORMAT)
        )
    }
}
