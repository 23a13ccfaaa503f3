//! Julian Day Number sweeps against `chrono`'s proleptic Gregorian calendar.

use chrono::{Datelike, Duration, NaiveDate};
use yun_time::{CivilDate, julian_day_number};

/// JDN of 0001-01-01 minus chrono's day number for the same date (1).
const CE_TO_JDN: i64 = 1_721_425;

fn chrono_jdn(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) + CE_TO_JDN
}

#[test]
fn matches_chrono_over_three_centuries() {
    let mut date = NaiveDate::from_ymd_opt(1850, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2150, 12, 31).unwrap();
    while date <= end {
        let jdn = julian_day_number(date.year(), date.month() as i32, date.day() as i32);
        assert_eq!(jdn, chrono_jdn(date), "mismatch at {date}");
        date += Duration::days(7);
    }
}

#[test]
fn golden_birth_date() {
    // 1990-08-15 00:00 UT is JD 2448118.5
    assert_eq!(julian_day_number(1990, 8, 15), 2_448_119);
}

#[test]
fn parsed_dates_feed_jdn() {
    let d: CivilDate = "20000101".parse().unwrap();
    assert_eq!(
        julian_day_number(d.year, d.month as i32, d.day as i32),
        2_451_545
    );
}
