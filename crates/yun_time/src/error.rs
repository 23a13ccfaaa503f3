//! Error types for date parsing and birth-data validation.

use thiserror::Error;

/// Errors from date/time parsing or birth-data range checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string did not match `YYYY-MM-DD`, `YYYY/MM/DD` or `YYYYMMDD`.
    #[error("invalid date '{0}': expected YYYY-MM-DD, YYYY/MM/DD or YYYYMMDD")]
    InvalidDate(String),
    /// Time string did not match `HH`, `HH:MM` or `HHMM`.
    #[error("invalid time '{0}': expected HH, HH:MM or HHMM")]
    InvalidTime(String),
    /// A birth-data field is outside its calendar range.
    #[error("invalid birth data: {0}")]
    InvalidBirthData(String),
}
