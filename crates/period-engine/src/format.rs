//! Human-readable durations.
//!
//! Renders a [`CalendarDelta`] as `"1 ano, 2 meses, 3 dias"`: zero years and
//! zero months are left out, and days are always shown when nothing else is,
//! so a zero delta reads `"0 dias"`.

use crate::duration::CalendarDelta;

const TERM_SEPARATOR: &str = ", ";

/// Format a calendar delta as a Portuguese phrase.
///
/// # Examples
///
/// ```
/// use period_engine::{format_duration, CalendarDelta};
///
/// assert_eq!(format_duration(&CalendarDelta::new(1, 0, 15)), "1 ano, 15 dias");
/// assert_eq!(format_duration(&CalendarDelta::new(0, 1, 1)), "1 mês, 1 dia");
/// assert_eq!(format_duration(&CalendarDelta::ZERO), "0 dias");
/// ```
pub fn format_duration(delta: &CalendarDelta) -> String {
    let mut parts = Vec::new();
    if delta.years > 0 {
        parts.push(term(delta.years, "ano", "anos"));
    }
    if delta.months > 0 {
        parts.push(term(delta.months, "mês", "meses"));
    }
    if delta.days > 0 || parts.is_empty() {
        parts.push(term(delta.days, "dia", "dias"));
    }
    parts.join(TERM_SEPARATOR)
}

fn term(value: u32, singular: &str, plural: &str) -> String {
    format!("{} {}", value, if value == 1 { singular } else { plural })
}
