//! Text → closed date intervals.
//!
//! Input is one period per line, `"dd/mm/yyyy a dd/mm/yyyy"`. Surrounding
//! whitespace is ignored and blank lines are skipped. A batch either parses
//! completely or fails on its first bad line; no partial result is returned.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{PeriodError, Result};
use crate::interval::{CalendarDate, DateInterval, DATE_FORMAT, PERIOD_SEPARATOR};

/// The periods of one input batch, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInput {
    /// The trimmed, non-blank source lines, unmodified otherwise.
    pub lines: Vec<String>,
    /// One interval per entry of `lines`.
    pub intervals: Vec<DateInterval>,
}

impl ParsedInput {
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }
}

/// Parse a newline-separated batch of periods.
///
/// # Errors
///
/// Returns [`PeriodError::MalformedLine`] when a line does not split into
/// exactly two dates around `" a "`, [`PeriodError::InvalidDate`] when a date
/// does not match `dd/mm/yyyy`, and [`PeriodError::ReversedPeriod`] when a
/// period ends before it starts.
///
/// # Examples
///
/// ```
/// use period_engine::parse_periods;
///
/// let parsed = parse_periods("01/01/2020 a 10/01/2020\n\n05/01/2020 a 15/01/2020\n").unwrap();
/// assert_eq!(parsed.len(), 2);
/// assert_eq!(parsed.lines[1], "05/01/2020 a 15/01/2020");
/// ```
pub fn parse_periods(text: &str) -> Result<ParsedInput> {
    let mut parsed = ParsedInput::default();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let interval = parse_period_line(index + 1, line)?;
        parsed.lines.push(line.to_string());
        parsed.intervals.push(interval);
    }

    debug!(periods = parsed.len(), "parsed period batch");
    Ok(parsed)
}

/// Parse a single `"dd/mm/yyyy a dd/mm/yyyy"` line.
///
/// `line_number` is 1-based and only used in error messages.
pub fn parse_period_line(line_number: usize, line: &str) -> Result<DateInterval> {
    let parts: Vec<&str> = line.split(PERIOD_SEPARATOR).collect();
    let [start, end] = parts.as_slice() else {
        return Err(PeriodError::MalformedLine {
            line: line_number,
            content: line.to_string(),
        });
    };

    let start = parse_date(start.trim())?;
    let end = parse_date(end.trim())?;

    DateInterval::new(start, end).ok_or_else(|| PeriodError::ReversedPeriod {
        line: line_number,
        period: line.to_string(),
    })
}

/// Parse a `dd/mm/yyyy` date.
///
/// Only digits and `/` are accepted; chrono alone would also take a signed
/// year such as `+2020`.
pub fn parse_date(s: &str) -> Result<CalendarDate> {
    if !s.bytes().all(|b| b.is_ascii_digit() || b == b'/') {
        return Err(PeriodError::InvalidDate(format!(
            "'{}': expected dd/mm/yyyy",
            s
        )));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| PeriodError::InvalidDate(format!("'{}': {}", s, e)))
}
