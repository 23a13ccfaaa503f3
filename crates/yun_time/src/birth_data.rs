//! Birth-data record: the single input to every chart calculation.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::days_in_month;

/// Timezone label attached to birth data when the caller supplies none.
pub const DEFAULT_TIMEZONE: &str = "Asia/Hong_Kong";

/// Gregorian birth date and hour.
///
/// The timezone is carried as an opaque label; no conversion is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthData {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Hour of day, 0-23.
    pub hour: u32,
    pub timezone: String,
}

impl BirthData {
    pub fn new(year: i32, month: u32, day: u32, hour: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }

    /// Replace the timezone label.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Check that month, day and hour lie inside their calendar ranges.
    pub fn validate(&self) -> Result<(), TimeError> {
        let Some(max_day) = days_in_month(self.year, self.month) else {
            return Err(TimeError::InvalidBirthData(format!(
                "month {} outside 1-12",
                self.month
            )));
        };
        if self.day == 0 || self.day > max_day {
            return Err(TimeError::InvalidBirthData(format!(
                "day {} outside 1-{max_day} for {:04}-{:02}",
                self.day, self.year, self.month
            )));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidBirthData(format!(
                "hour {} outside 0-23",
                self.hour
            )));
        }
        Ok(())
    }
}

impl Display for BirthData {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:00 ({})",
            self.year, self.month, self.day, self.hour, self.timezone
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_timezone() {
        let b = BirthData::new(1990, 8, 15, 14);
        assert_eq!(b.timezone, DEFAULT_TIMEZONE);
    }

    #[test]
    fn display_format() {
        let b = BirthData::new(1990, 8, 5, 4).with_timezone("UTC");
        assert_eq!(b.to_string(), "1990-08-05 04:00 (UTC)");
    }

    #[test]
    fn valid_dates_pass() {
        assert!(BirthData::new(1990, 8, 15, 14).validate().is_ok());
        assert!(BirthData::new(2024, 2, 29, 0).validate().is_ok());
        assert!(BirthData::new(1999, 12, 31, 23).validate().is_ok());
    }

    #[test]
    fn month_out_of_range() {
        let err = BirthData::new(1990, 13, 1, 0).validate().unwrap_err();
        assert!(matches!(err, TimeError::InvalidBirthData(_)));
        assert!(BirthData::new(1990, 0, 1, 0).validate().is_err());
    }

    #[test]
    fn day_out_of_range() {
        assert!(BirthData::new(2023, 2, 29, 0).validate().is_err());
        assert!(BirthData::new(2023, 4, 31, 0).validate().is_err());
        assert!(BirthData::new(2023, 4, 0, 0).validate().is_err());
    }

    #[test]
    fn hour_out_of_range() {
        assert!(BirthData::new(2023, 4, 1, 24).validate().is_err());
    }
}
