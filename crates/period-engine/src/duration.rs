//! Calendar-relative durations.
//!
//! A [`CalendarDelta`] is a number of years, months and days, not a fixed count
//! of days: one month after January 31st is the last day of February, and a
//! year is 365 or 366 days depending on where it starts.
//!
//! # Differences
//!
//! [`calendar_delta`] counts whole months first (clipping the day of month to
//! the end of shorter months), then the remaining days. A month is only counted
//! when stepping it does not overshoot the target date.
//!
//! # Accumulation
//!
//! Deltas are summed by [`accumulate`]: starting from [`ACCUMULATION_ANCHOR`],
//! each delta is added with real calendar addition, and the total is the
//! difference between the final date and the anchor. Calendar addition is not
//! commutative across month boundaries, so callers pass deltas in a fixed order
//! (ascending by interval start) to keep the total deterministic.

use std::fmt;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::error::{PeriodError, Result};
use crate::interval::{CalendarDate, DateInterval};

/// A calendar-relative difference between two dates.
///
/// After normalization `months < 12` and `days` is shorter than the month it
/// was counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct CalendarDelta {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl CalendarDelta {
    pub const ZERO: CalendarDelta = CalendarDelta {
        years: 0,
        months: 0,
        days: 0,
    };

    pub fn new(years: u32, months: u32, days: u32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Split a whole number of months into years and months.
    fn from_months_and_days(total_months: u32, days: u32) -> Self {
        Self {
            years: total_months / 12,
            months: total_months % 12,
            days,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Years and months folded into months.
    pub fn total_months(&self) -> Option<u32> {
        self.years.checked_mul(12)?.checked_add(self.months)
    }
}

impl fmt::Display for CalendarDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}y{}m{}d", self.years, self.months, self.days)
    }
}

/// The fixed date every accumulation starts from: 1 January 2000.
pub const ACCUMULATION_ANCHOR: CalendarDate = match NaiveDate::from_ymd_opt(2000, 1, 1) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

/// The calendar-correct difference from `from` to `to`.
///
/// Returns [`CalendarDelta::ZERO`] when `to` is not after `from`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use period_engine::{calendar_delta, CalendarDelta};
///
/// let jan31 = NaiveDate::from_ymd_opt(2020, 1, 31).unwrap();
/// let mar1 = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
/// // Jan 31 + 1 month = Feb 29 (clipped), then one more day
/// assert_eq!(calendar_delta(jan31, mar1), CalendarDelta::new(0, 1, 1));
/// ```
pub fn calendar_delta(from: CalendarDate, to: CalendarDate) -> CalendarDelta {
    if to <= from {
        return CalendarDelta::ZERO;
    }

    let month_span =
        (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32);
    let month_span = u32::try_from(month_span).unwrap_or(0);

    // At most two candidates are tried: the day-of-month may overshoot `to`.
    let (months, stepped) = (0..=month_span)
        .rev()
        .find_map(|m| {
            let date = from.checked_add_months(Months::new(m))?;
            (date <= to).then_some((m, date))
        })
        .unwrap_or((0, from));

    let days = u32::try_from((to - stepped).num_days()).unwrap_or(0);
    CalendarDelta::from_months_and_days(months, days)
}

/// The duration covered by a closed interval.
///
/// The end day is included, so a single-day interval lasts one day.
///
/// # Errors
///
/// Returns [`PeriodError::DateOutOfRange`] if the interval ends on the last
/// representable date.
pub fn interval_delta(interval: &DateInterval) -> Result<CalendarDelta> {
    let exclusive_end = interval
        .end()
        .checked_add_days(Days::new(1))
        .ok_or_else(|| PeriodError::DateOutOfRange(interval.end().to_string()))?;
    Ok(calendar_delta(interval.start(), exclusive_end))
}

/// Add a delta to a date: months first (clipping the day of month), then days.
///
/// # Errors
///
/// Returns [`PeriodError::DateOutOfRange`] if the result is not representable.
pub fn add_delta(date: CalendarDate, delta: &CalendarDelta) -> Result<CalendarDate> {
    let out_of_range = || PeriodError::DateOutOfRange(format!("{date} + {delta}"));

    let months = delta.total_months().ok_or_else(out_of_range)?;
    date.checked_add_months(Months::new(months))
        .and_then(|d| d.checked_add_days(Days::new(u64::from(delta.days))))
        .ok_or_else(out_of_range)
}

/// Sum deltas by anchor accumulation, in the order given.
///
/// # Errors
///
/// Returns [`PeriodError::DateOutOfRange`] if the running date leaves the
/// representable calendar.
///
/// # Examples
///
/// ```
/// use period_engine::{accumulate, CalendarDelta};
///
/// // 40 days from 1 January 2000 is 10 February: one month and nine days.
/// let total = accumulate(&[CalendarDelta::new(0, 0, 20), CalendarDelta::new(0, 0, 20)]).unwrap();
/// assert_eq!(total, CalendarDelta::new(0, 1, 9));
/// ```
pub fn accumulate<'a, I>(deltas: I) -> Result<CalendarDelta>
where
    I: IntoIterator<Item = &'a CalendarDelta>,
{
    let end = deltas
        .into_iter()
        .try_fold(ACCUMULATION_ANCHOR, |date, delta| add_delta(date, delta))?;
    Ok(calendar_delta(ACCUMULATION_ANCHOR, end))
}

/// Calendar-correct total covered by an already merged, start-sorted set.
pub fn total_duration(merged: &[DateInterval]) -> Result<CalendarDelta> {
    let deltas = merged
        .iter()
        .map(interval_delta)
        .collect::<Result<Vec<_>>>()?;
    let total = accumulate(&deltas)?;
    debug!(spans = merged.len(), %total, "accumulated total duration");
    Ok(total)
}
