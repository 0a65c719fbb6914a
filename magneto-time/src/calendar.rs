//! Gregorian calendar arithmetic.

use crate::CalendarDateTime;
use magneto_core::constants::{HOURS_PER_DAY, MINUTES_PER_DAY, SECONDS_PER_DAY_F64};
use magneto_core::Real;

/// Days per month, index 1-12; index 0 is a placeholder for out-of-range months.
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days before the first of each month in a common year, index 1-12.
const DAYS_BEFORE_MONTH: [u16; 13] = [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Proleptic Gregorian leap-year rule.
#[inline]
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[inline]
pub fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Length of `month` in `year`. Months outside 1-12 have zero days.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_PER_MONTH[month as usize],
        _ => 0,
    }
}

/// Fractional day of year, 1.0 at midnight on 1 January.
///
/// The time of day is added linearly. A month outside 1-12 contributes no preceding days
/// rather than panicking; the result is meaningless but finite.
///
/// ```
/// use magneto_time::{day_of_year, CalendarDateTime};
///
/// let t = CalendarDateTime::new(2024, 10, 15, 12, 0, 0);
/// assert_eq!(day_of_year::<f64>(&t), 289.5);
/// ```
pub fn day_of_year<T: Real>(t: &CalendarDateTime) -> T {
    let month = t.month as usize;
    let mut preceding = DAYS_BEFORE_MONTH.get(month).copied().unwrap_or(0);
    if month > 2 && month <= 12 && is_leap_year(t.year) {
        preceding += 1;
    }

    let whole = T::from_usize(preceding as usize + t.day as usize);
    let fraction = T::from_f64(t.hour as f64 / HOURS_PER_DAY)
        + T::from_f64(t.minute as f64 / MINUTES_PER_DAY)
        + T::from_f64(t.second as f64 / SECONDS_PER_DAY_F64);

    whole + fraction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2019));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(2001), 365);
        assert_eq!(days_in_year(2000), 366);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(1999, 2), 28);
        assert_eq!(days_in_month(1998, 8), 31);
        assert_eq!(days_in_month(2008, 2), 29);
        assert_eq!(days_in_month(2012, 4), 30);
        assert_eq!(days_in_month(2018, 0), 0);
        assert_eq!(days_in_month(2020, 13), 0);
    }

    #[test]
    fn test_tables_are_consistent() {
        let mut days = 0u16;
        for month in 1..=12usize {
            assert_eq!(DAYS_BEFORE_MONTH[month], days, "month {}", month);
            days += DAYS_PER_MONTH[month] as u16;
        }
        assert_eq!(days, 365);
    }

    #[test]
    fn test_day_of_year() {
        let mut t = CalendarDateTime::new(2001, 1, 1, 0, 0, 0);
        assert_eq!(day_of_year::<f64>(&t), 1.0);

        t.month = 9;
        t.day = 14;
        assert_eq!(day_of_year::<f64>(&t), 257.0);
        t.day += 1;
        assert_eq!(day_of_year::<f64>(&t), 258.0);
        t.month += 1;
        assert_eq!(day_of_year::<f64>(&t), 288.0);
        t.year = 2024;
        assert_eq!(day_of_year::<f64>(&t), 289.0);

        t.hour = 12;
        assert_eq!(day_of_year::<f64>(&t), 289.5);
        t.minute = 16;
        assert!((day_of_year::<f64>(&t) - 289.511_111_111_1).abs() < 1e-9);
        t.minute = 0;
        t.second = 32;
        assert!((day_of_year::<f64>(&t) - 289.500_370_370_4).abs() < 1e-9);
    }

    #[test]
    fn test_day_of_year_out_of_range_month() {
        let mut t = CalendarDateTime::new(2024, 0, 15, 0, 0, 0);
        assert_eq!(day_of_year::<f64>(&t), 15.0);
        t.month = 13;
        assert_eq!(day_of_year::<f64>(&t), 15.0);
        t.month = 255;
        assert!(day_of_year::<f32>(&t).is_finite());
    }

    #[test]
    fn test_day_of_year_single_precision() {
        let t = CalendarDateTime::new(2024, 12, 31, 23, 59, 59);
        let doy = day_of_year::<f32>(&t);
        assert!((doy - 366.999_99).abs() < 1e-3);
    }
}
