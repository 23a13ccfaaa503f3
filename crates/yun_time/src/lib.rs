//! Civil-calendar arithmetic and birth-data records.
//!
//! This crate provides:
//! - Gregorian → Julian Day Number conversion (integer, civil-day based)
//! - The `BirthData` record fed into the chart calculators
//! - Free-text date/hour parsing used by the CLI and profile store

pub mod birth_data;
pub mod error;
pub mod julian;
pub mod parse;

pub use birth_data::{BirthData, DEFAULT_TIMEZONE};
pub use error::TimeError;
pub use julian::{days_in_month, is_leap_year, julian_day_number};
pub use parse::{CivilDate, parse_hour};
