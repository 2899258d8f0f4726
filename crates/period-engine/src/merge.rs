//! Interval merging: overlapping or touching periods → maximal disjoint spans.
//!
//! The merge runs in five passes over immutable sequences:
//!
//! 1. Sort by start.
//! 2. Sweep: fold each interval into the running span when it starts on or
//!    before the span's end, otherwise close the span and open a new one.
//! 3. Drop any span contained in a different span.
//! 4. Push a span's start past the previous span's end when they still share
//!    a day, dropping it if nothing strictly longer than a day is left.
//! 5. Sort by start again.
//!
//! Passes 3 and 4 never change the output of a correct sweep. They are kept as
//! guards so that the output contract (sorted, disjoint) holds independently
//! of pass 2.

use std::cmp::Reverse;

use chrono::Days;
use tracing::debug;

use crate::interval::{CalendarDate, DateInterval};

/// Merge intervals into the minimal sorted set of disjoint spans covering the
/// same calendar days.
///
/// Two intervals are merged when one starts on or before the day the other
/// ends. Intervals that are merely consecutive (one ends the day before the
/// other starts) stay separate.
///
/// # Examples
///
/// ```
/// use period_engine::{merge_intervals, parse_periods};
///
/// let parsed = parse_periods("05/01/2020 a 15/01/2020\n01/01/2020 a 10/01/2020").unwrap();
/// let merged = merge_intervals(&parsed.intervals);
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged[0].to_string(), "01/01/2020 a 15/01/2020");
/// ```
pub fn merge_intervals(intervals: &[DateInterval]) -> Vec<DateInterval> {
    let sorted = sorted_by_start(intervals.to_vec());
    let swept = sweep(&sorted);
    let uncontained = remove_contained(&swept);
    let separated = separate_adjacent(&uncontained);
    let merged = sorted_by_start(separated);

    debug!(
        input = intervals.len(),
        merged = merged.len(),
        "merged periods"
    );
    merged
}

/// Stable sort by start date.
fn sorted_by_start(mut intervals: Vec<DateInterval>) -> Vec<DateInterval> {
    intervals.sort_by_key(DateInterval::start);
    intervals
}

/// Sweep-merge a start-sorted sequence.
fn sweep(sorted: &[DateInterval]) -> Vec<DateInterval> {
    let Some((first, rest)) = sorted.split_first() else {
        return Vec::new();
    };

    let (mut closed, current) = rest.iter().fold(
        (Vec::with_capacity(sorted.len()), *first),
        |(mut closed, current), next| {
            if next.start() <= current.end() {
                (closed, span(&current, next))
            } else {
                closed.push(current);
                (closed, *next)
            }
        },
    );
    closed.push(current);
    closed
}

/// The smallest interval covering both `a` and `b`.
fn span(a: &DateInterval, b: &DateInterval) -> DateInterval {
    let start = a.start().min(b.start());
    let end = a.end().max(b.end());
    // start <= a.start() <= a.end() <= end
    DateInterval::new(start, end).unwrap_or(*a)
}

/// Keep only intervals not contained in some other, different interval.
///
/// Visits intervals by start ascending, end descending. Equal intervals are
/// then consecutive, and an interval is contained exactly when some earlier
/// run of different intervals reaches at least as far as its end.
fn remove_contained(intervals: &[DateInterval]) -> Vec<DateInterval> {
    let mut order: Vec<usize> = (0..intervals.len()).collect();
    order.sort_by_key(|&i| (intervals[i].start(), Reverse(intervals[i].end())));

    let mut contained = vec![false; intervals.len()];
    let mut reach: Option<CalendarDate> = None;
    for run in order.chunk_by(|&a, &b| intervals[a] == intervals[b]) {
        let value = intervals[run[0]];
        let covered = reach.is_some_and(|end| end >= value.end());
        for &i in run {
            contained[i] = covered;
        }
        reach = reach.max(Some(value.end()));
    }

    intervals
        .iter()
        .zip(&contained)
        .filter(|(_, covered)| !**covered)
        .map(|(interval, _)| *interval)
        .collect()
}

/// Trim each interval so it starts after the last kept one ends.
fn separate_adjacent(intervals: &[DateInterval]) -> Vec<DateInterval> {
    intervals
        .iter()
        .fold(Vec::with_capacity(intervals.len()), |mut kept, next| {
            match kept.last().copied() {
                Some(prev) if next.start() <= prev.end() => {
                    let shifted = prev
                        .end()
                        .checked_add_days(Days::new(1))
                        .filter(|start| *start < next.end())
                        .and_then(|start| DateInterval::new(start, next.end()));
                    if let Some(shifted) = shifted {
                        kept.push(shifted);
                    }
                }
                _ => kept.push(*next),
            }
            kept
        })
}
