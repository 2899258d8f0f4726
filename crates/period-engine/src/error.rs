//! Error types for period-engine operations.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    #[error("Malformed line {line}: expected 'dd/mm/yyyy a dd/mm/yyyy', got '{content}'")]
    MalformedLine { line: usize, content: String },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid date: period on line {line} ends before it starts: '{period}'")]
    ReversedPeriod { line: usize, period: String },

    #[error("Invalid date: {0} is outside the supported calendar range")]
    DateOutOfRange(String),

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),
}

/// Coarse classification of a [`PeriodError`], for callers that need to branch
/// on the failure without matching on the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MalformedLine,
    InvalidDate,
    MissingInput,
    InvalidEncoding,
}

impl PeriodError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PeriodError::MalformedLine { .. } => ErrorKind::MalformedLine,
            PeriodError::InvalidDate(_)
            | PeriodError::ReversedPeriod { .. }
            | PeriodError::DateOutOfRange(_) => ErrorKind::InvalidDate,
            PeriodError::MissingInput(_) => ErrorKind::MissingInput,
            PeriodError::InvalidEncoding(_) => ErrorKind::InvalidEncoding,
        }
    }
}

pub type Result<T> = std::result::Result<T, PeriodError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_period_is_an_invalid_date() {
        let err = PeriodError::ReversedPeriod {
            line: 2,
            period: "10/01/2020 a 01/01/2020".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::InvalidDate);
        assert!(err.to_string().starts_with("Invalid date"), "got: {err}");
    }

    #[test]
    fn test_malformed_line_message_names_line() {
        let err = PeriodError::MalformedLine {
            line: 3,
            content: "not-a-date".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::MalformedLine);
        assert!(err.to_string().contains("line 3"), "got: {err}");
        assert!(err.to_string().contains("not-a-date"), "got: {err}");
    }
}
