//! Free-text date and hour parsing.
//!
//! Accepted date forms: `YYYY-MM-DD`, `YYYY/MM/DD` (1-2 digit month/day)
//! and `YYYYMMDD`. Accepted hour forms: `H`, `HH`, `HH:MM`, `HHMM`.
//! Minutes are parsed for shape only and then discarded. Parsing checks
//! syntax, not calendar ranges; see [`BirthData::validate`](crate::BirthData::validate).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::birth_data::BirthData;
use crate::error::TimeError;

/// A Gregorian calendar date without time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Attach an hour, producing birth data with the default timezone.
    pub fn at_hour(self, hour: u32) -> BirthData {
        BirthData::new(self.year, self.month, self.day, hour)
    }

    /// Convert to a `chrono` date, `None` if the date does not exist.
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn split_date(s: &str, sep: char) -> Option<(&str, &str, &str)> {
    let mut parts = s.split(sep);
    let y = parts.next()?;
    let m = parts.next()?;
    let d = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    let ok = y.len() == 4
        && (1..=2).contains(&m.len())
        && (1..=2).contains(&d.len())
        && all_digits(y)
        && all_digits(m)
        && all_digits(d);
    ok.then_some((y, m, d))
}

impl FromStr for CivilDate {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let fields = if s.contains('-') {
            split_date(s, '-')
        } else if s.contains('/') {
            split_date(s, '/')
        } else if s.len() == 8 && all_digits(s) {
            Some((&s[0..4], &s[4..6], &s[6..8]))
        } else {
            None
        };

        let (y, m, d) = fields.ok_or_else(|| TimeError::InvalidDate(s.to_string()))?;
        let invalid = |_| TimeError::InvalidDate(s.to_string());
        Ok(Self {
            year: y.parse().map_err(invalid)?,
            month: m.parse().map_err(invalid)?,
            day: d.parse().map_err(invalid)?,
        })
    }
}

/// Parse an hour of day from `H`, `HH`, `HH:MM` or `HHMM`.
///
/// Only the hour is returned; the value is not range-checked.
pub fn parse_hour(s: &str) -> Result<u32, TimeError> {
    let s = s.trim();
    let invalid = || TimeError::InvalidTime(s.to_string());

    let hour = match s.split_once(':') {
        Some((h, m)) => {
            if !(1..=2).contains(&h.len()) || m.len() != 2 || !all_digits(h) || !all_digits(m) {
                return Err(invalid());
            }
            h
        }
        None if all_digits(s) && s.len() <= 2 => s,
        None if all_digits(s) && s.len() == 4 => &s[0..2],
        None => return Err(invalid()),
    };
    hour.parse().map_err(|_| invalid())
}
