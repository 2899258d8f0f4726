//! # period-engine
//!
//! Calendar-correct coverage of overlapping date periods.
//!
//! Given periods such as `"01/01/2020 a 10/01/2020"`, the engine merges them
//! into disjoint spans, totals the covered time in years, months and days with
//! real calendar arithmetic (no 30-day months, no 365-day years), and reports
//! for each input period whether it survived the merge unchanged.
//!
//! ## Modules
//!
//! - [`parser`] — text lines → closed date intervals
//! - [`merge`] — intervals → sorted, disjoint, maximal spans
//! - [`duration`] — calendar deltas and anchor accumulation
//! - [`exclusion`] — which input periods appear verbatim in the merged set
//! - [`format`] — `(years, months, days)` → `"1 ano, 2 meses, 3 dias"`
//! - [`analysis`] — whole-batch analysis and the response shape
//! - [`interval`] — the closed [`DateInterval`] type
//! - [`error`] — Error types

pub mod analysis;
pub mod duration;
pub mod error;
pub mod exclusion;
pub mod format;
pub mod interval;
pub mod merge;
pub mod parser;

pub use analysis::{
    analyze, analyze_parsed, calculate_periods, AnalysisResponse, AnalyzedPeriod, PeriodAnalysis,
    PeriodReport, PeriodSummary,
};
pub use duration::{
    accumulate, add_delta, calendar_delta, interval_delta, total_duration,
    CalendarDelta, ACCUMULATION_ANCHOR,
};
pub use error::{ErrorKind, PeriodError};
pub use exclusion::{classify, is_excluded};
pub use format::format_duration;
pub use interval::{CalendarDate, DateInterval};
pub use merge::merge_intervals;
pub use parser::{parse_date, parse_period_line, parse_periods, ParsedInput};
