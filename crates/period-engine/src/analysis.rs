//! Whole-batch analysis: text in, coverage report out.
//!
//! [`analyze`] returns the structured result (intervals, merged spans, deltas).
//! [`calculate_periods`] is the boundary used by front ends: it renders the
//! report shape and turns any failure into a single `{"error": message}`
//! value, so no partial report is ever produced.
//!
//! All functions here are pure and hold no shared state; they can be called
//! from any number of threads at once.

use serde::Serialize;
use tracing::{debug, warn};

use crate::duration::{interval_delta, total_duration, CalendarDelta};
use crate::error::{PeriodError, Result};
use crate::exclusion::is_excluded;
use crate::format::format_duration;
use crate::interval::DateInterval;
use crate::merge::merge_intervals;
use crate::parser::{parse_periods, ParsedInput};

// ── Structured result ───────────────────────────────────────────────────────

/// One input period with its own duration and merge outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalyzedPeriod {
    pub original: DateInterval,
    /// Duration of this period alone, regardless of overlaps.
    pub duration: CalendarDelta,
    /// `true` unless the merged set contains this exact period.
    pub is_excluded: bool,
}

/// Everything derived from one batch of periods.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodAnalysis {
    /// Trimmed, non-blank input lines in input order.
    pub input_periods: Vec<String>,
    /// Disjoint spans covering the same days as the input, sorted by start.
    pub merged: Vec<DateInterval>,
    /// One entry per input line, in input order.
    pub analyzed: Vec<AnalyzedPeriod>,
    /// Calendar-correct total of the merged coverage.
    pub total_duration: CalendarDelta,
}

impl PeriodAnalysis {
    /// The serializable report for this analysis.
    pub fn report(&self) -> PeriodReport {
        PeriodReport {
            total_duration: self.total_duration,
            input_periods: self.input_periods.clone(),
            analyzed_periods: self
                .analyzed
                .iter()
                .map(|p| PeriodSummary {
                    period: p.original.to_string(),
                    duration: format_duration(&p.duration),
                    is_excluded: p.is_excluded,
                })
                .collect(),
        }
    }
}

// ── Wire shape ──────────────────────────────────────────────────────────────

/// The report returned for a successfully parsed batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodReport {
    pub total_duration: CalendarDelta,
    pub input_periods: Vec<String>,
    pub analyzed_periods: Vec<PeriodSummary>,
}

/// Display form of an [`AnalyzedPeriod`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodSummary {
    /// `"dd/mm/yyyy a dd/mm/yyyy"`.
    pub period: String,
    /// e.g. `"1 mês, 3 dias"`.
    pub duration: String,
    pub is_excluded: bool,
}

/// Either a full report or an error message, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResponse {
    Report(PeriodReport),
    Failure { error: String },
}

impl AnalysisResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        AnalysisResponse::Failure {
            error: message.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, AnalysisResponse::Failure { .. })
    }

    /// Serialize as JSON, indented when `pretty` is set.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl From<&PeriodError> for AnalysisResponse {
    fn from(err: &PeriodError) -> Self {
        AnalysisResponse::failure(err.to_string())
    }
}

// ── Operations ──────────────────────────────────────────────────────────────

/// Parse and analyze a newline-separated batch of periods.
///
/// Empty or blank input is not an error: it yields an empty analysis with a
/// zero total.
///
/// # Errors
///
/// Any [`PeriodError`] raised while parsing the batch, or
/// [`PeriodError::DateOutOfRange`] if a duration cannot be represented.
pub fn analyze(text: &str) -> Result<PeriodAnalysis> {
    analyze_parsed(parse_periods(text)?)
}

/// Analyze an already parsed batch.
pub fn analyze_parsed(parsed: ParsedInput) -> Result<PeriodAnalysis> {
    let ParsedInput { lines, intervals } = parsed;

    let merged = merge_intervals(&intervals);
    let total_duration = total_duration(&merged)?;

    let analyzed = intervals
        .iter()
        .map(|original| -> Result<AnalyzedPeriod> {
            Ok(AnalyzedPeriod {
                original: *original,
                duration: interval_delta(original)?,
                is_excluded: is_excluded(original, &merged),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        periods = analyzed.len(),
        excluded = analyzed.iter().filter(|p| p.is_excluded).count(),
        %total_duration,
        "analyzed period batch"
    );

    Ok(PeriodAnalysis {
        input_periods: lines,
        merged,
        analyzed,
        total_duration,
    })
}

/// Analyze a batch and render the response front ends send back.
///
/// # Examples
///
/// ```
/// use period_engine::calculate_periods;
///
/// let response = calculate_periods("01/01/2020 a 10/01/2020\n05/01/2020 a 15/01/2020");
/// let json = response.to_json(false).unwrap();
/// assert!(json.starts_with(r#"{"total_duration":{"years":0,"months":0,"days":15}"#));
///
/// let failure = calculate_periods("not-a-date");
/// assert!(failure.is_failure());
/// ```
pub fn calculate_periods(text: &str) -> AnalysisResponse {
    match analyze(text) {
        Ok(analysis) => AnalysisResponse::Report(analysis.report()),
        Err(err) => {
            warn!(kind = ?err.kind(), error = %err, "rejected period batch");
            AnalysisResponse::from(&err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn to_value(response: &AnalysisResponse) -> Value {
        serde_json::to_value(response).unwrap()
    }

    #[test]
    fn test_overlapping_periods_merge_and_are_excluded() {
        let analysis = analyze("01/01/2020 a 10/01/2020\n05/01/2020 a 15/01/2020").unwrap();

        assert_eq!(analysis.merged.len(), 1);
        assert_eq!(analysis.merged[0].to_string(), "01/01/2020 a 15/01/2020");
        assert_eq!(analysis.total_duration, CalendarDelta::new(0, 0, 15));
        assert!(analysis.analyzed.iter().all(|p| p.is_excluded));
    }

    #[test]
    fn test_disjoint_periods_add_up() {
        let analysis = analyze("01/01/2020 a 05/01/2020\n10/01/2020 a 12/01/2020").unwrap();

        assert_eq!(analysis.merged.len(), 2);
        assert_eq!(analysis.total_duration, CalendarDelta::new(0, 0, 8));
        assert!(analysis.analyzed.iter().all(|p| !p.is_excluded));
        assert_eq!(analysis.analyzed[0].duration, CalendarDelta::new(0, 0, 5));
        assert_eq!(analysis.analyzed[1].duration, CalendarDelta::new(0, 0, 3));
    }

    #[test]
    fn test_unparseable_input_has_only_error_key() {
        let value = to_value(&calculate_periods("not-a-date"));
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object["error"].as_str().unwrap().contains("not-a-date"));
        assert!(!object.contains_key("analyzed_periods"));
    }

    #[test]
    fn test_blank_input_is_empty_report() {
        let value = to_value(&calculate_periods("  \n\n"));
        assert_eq!(
            value,
            json!({
                "total_duration": {"years": 0, "months": 0, "days": 0},
                "input_periods": [],
                "analyzed_periods": [],
            })
        );
    }

    #[test]
    fn test_report_keeps_input_order_and_text() {
        let text = "  10/01/2020 a 12/01/2020 \n01/01/2020 a 05/01/2020";
        let value = to_value(&calculate_periods(text));
        assert_eq!(
            value,
            json!({
                "total_duration": {"years": 0, "months": 0, "days": 8},
                "input_periods": ["10/01/2020 a 12/01/2020", "01/01/2020 a 05/01/2020"],
                "analyzed_periods": [
                    {"period": "10/01/2020 a 12/01/2020", "duration": "3 dias", "is_excluded": false},
                    {"period": "01/01/2020 a 05/01/2020", "duration": "5 dias", "is_excluded": false},
                ],
            })
        );
    }

    #[test]
    fn test_own_duration_ignores_merging() {
        let analysis = analyze("01/01/2020 a 31/12/2020\n01/03/2020 a 31/03/2020").unwrap();
        let report = analysis.report();

        assert_eq!(analysis.total_duration, CalendarDelta::new(1, 0, 0));
        assert_eq!(report.analyzed_periods[0].duration, "1 ano");
        assert!(!report.analyzed_periods[0].is_excluded);
        assert_eq!(report.analyzed_periods[1].duration, "1 mês");
        assert!(report.analyzed_periods[1].is_excluded);
    }

    #[test]
    fn test_total_spans_month_boundaries() {
        // 15/01..14/02 is one month; 01/03..10/03 is ten days.
        let analysis = analyze("15/01/2021 a 14/02/2021\n01/03/2021 a 10/03/2021").unwrap();
        assert_eq!(analysis.total_duration, CalendarDelta::new(0, 1, 10));
    }

    #[test]
    fn test_reversed_period_is_an_error() {
        let response = calculate_periods("10/01/2020 a 01/01/2020");
        assert!(response.is_failure());
        let value = to_value(&response);
        assert!(value["error"].as_str().unwrap().starts_with("Invalid date"));
    }

    #[test]
    fn test_no_partial_report_after_late_failure() {
        let response = calculate_periods("01/01/2020 a 05/01/2020\n32/01/2020 a 01/02/2020");
        assert!(response.is_failure());
    }

    #[test]
    fn test_single_day_period_lasts_one_day() {
        let report = analyze("29/02/2020 a 29/02/2020").unwrap().report();
        assert_eq!(report.total_duration, CalendarDelta::new(0, 0, 1));
        assert_eq!(report.analyzed_periods[0].duration, "1 dia");
    }

    #[test]
    fn test_large_batch_of_separate_days() {
        use crate::duration::{calendar_delta, ACCUMULATION_ANCHOR};
        use chrono::Days;

        let count = 40_000u64;
        let text = (0..count)
            .map(|i| {
                let day = ACCUMULATION_ANCHOR.checked_add_days(Days::new(2 * i)).unwrap();
                DateInterval::day(day).to_string()
            })
            .collect::<Vec<_>>()
            .join("\n");

        let analysis = analyze(&text).unwrap();
        assert_eq!(analysis.merged.len(), count as usize);
        assert!(analysis.analyzed.iter().all(|p| !p.is_excluded));

        let target = ACCUMULATION_ANCHOR.checked_add_days(Days::new(count)).unwrap();
        assert_eq!(
            analysis.total_duration,
            calendar_delta(ACCUMULATION_ANCHOR, target)
        );
    }

    #[test]
    fn test_to_json_pretty_is_indented() {
        let json = calculate_periods("").to_json(true).unwrap();
        assert!(json.contains("\n  \"total_duration\""));
    }
}
