//! Julian Day Number for proleptic Gregorian civil dates.
//!
//! Integer form of the Fliegel–Van Flandern algorithm: the result is the
//! JDN of the civil day (noon-based), so 2000-01-01 → 2_451_545.

/// Julian Day Number of a Gregorian calendar date.
///
/// All divisions are floor divisions. Out-of-range months or days are not
/// rejected; they shift the result arithmetically (month 13 behaves like
/// January of the following year, day 32 like the 1st of the next month).
pub fn julian_day_number(year: i32, month: i32, day: i32) -> i64 {
    let year = i64::from(year);
    let month = i64::from(month);
    let day = i64::from(day);

    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045
}

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month, or `None` for a month outside 1-12.
pub const fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            if is_leap_year(year) {
                Some(29)
            } else {
                Some(28)
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_day() {
        assert_eq!(julian_day_number(2000, 1, 1), 2_451_545);
    }

    #[test]
    fn unix_epoch_day() {
        assert_eq!(julian_day_number(1970, 1, 1), 2_440_588);
    }

    #[test]
    fn consecutive_days_differ_by_one() {
        let a = julian_day_number(1999, 12, 31);
        let b = julian_day_number(2000, 1, 1);
        assert_eq!(b - a, 1);
    }

    #[test]
    fn leap_day_exists_in_2000() {
        let feb28 = julian_day_number(2000, 2, 28);
        let mar1 = julian_day_number(2000, 3, 1);
        assert_eq!(mar1 - feb28, 2);
    }

    #[test]
    fn no_leap_day_in_1900() {
        let feb28 = julian_day_number(1900, 2, 28);
        let mar1 = julian_day_number(1900, 3, 1);
        assert_eq!(mar1 - feb28, 1);
    }

    #[test]
    fn month_13_wraps_into_next_year() {
        assert_eq!(
            julian_day_number(2023, 13, 1),
            julian_day_number(2024, 1, 1)
        );
    }

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2023, 4), Some(30));
        assert_eq!(days_in_month(2023, 12), Some(31));
        assert_eq!(days_in_month(2023, 0), None);
        assert_eq!(days_in_month(2023, 13), None);
    }
}
