//! Which input periods survived the merge untouched.
//!
//! A period is kept (`is_excluded == false`) only when a merged span has
//! exactly its start and end. A period that was widened into a larger span,
//! or absorbed by one, is reported as excluded even though its days still
//! count towards the total.

use crate::interval::DateInterval;

/// Whether `original` is missing, boundary for boundary, from `merged`.
///
/// `merged` must be sorted by start with no two spans sharing a start, as
/// returned by [`merge_intervals`](crate::merge::merge_intervals).
pub fn is_excluded(original: &DateInterval, merged: &[DateInterval]) -> bool {
    merged
        .binary_search_by_key(&original.start(), DateInterval::start)
        .map_or(true, |i| merged[i] != *original)
}

/// One flag per original period, in the order given.
///
/// # Examples
///
/// ```
/// use period_engine::{classify, merge_intervals, parse_periods};
///
/// let parsed = parse_periods("01/01/2020 a 10/01/2020\n05/01/2020 a 15/01/2020").unwrap();
/// let merged = merge_intervals(&parsed.intervals);
/// assert_eq!(classify(&parsed.intervals, &merged), vec![true, true]);
/// ```
pub fn classify(originals: &[DateInterval], merged: &[DateInterval]) -> Vec<bool> {
    originals
        .iter()
        .map(|original| is_excluded(original, merged))
        .collect()
}
