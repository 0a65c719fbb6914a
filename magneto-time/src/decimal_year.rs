use std::fmt;

use magneto_core::Real;

use crate::calendar::{day_of_year, days_in_year};
use crate::CalendarDateTime;

/// Continuous time in years, e.g. `2020.5`.
///
/// The all-zero value is the "invalid" sentinel returned by
/// [`from_date_time`](Self::from_date_time) for bad input.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecimalYear<T> {
    pub year: T,
}

impl<T: Real> DecimalYear<T> {
    pub const MIN_YEAR: f64 = 1583.0;
    pub const MAX_YEAR: f64 = 9999.0;

    #[inline]
    pub fn new(year: T) -> Self {
        Self { year }
    }

    /// Converts a calendar timestamp: `year + (day_of_year - 1) / days_in_year`.
    ///
    /// Returns the zero sentinel if `t` fails [`CalendarDateTime::is_valid`].
    ///
    /// ```
    /// use magneto_time::{CalendarDateTime, DecimalYear};
    ///
    /// let t = CalendarDateTime::new(2020, 3, 1, 7, 6, 5);
    /// let dy = DecimalYear::<f64>::from_date_time(&t);
    /// assert_eq!(dy.year as u16, 2020);
    ///
    /// let bad = CalendarDateTime::new(1582, 1, 1, 0, 0, 0);
    /// assert!(!DecimalYear::<f64>::from_date_time(&bad).is_valid());
    /// ```
    pub fn from_date_time(t: &CalendarDateTime) -> Self {
        if !t.is_valid() {
            return Self::default();
        }

        let elapsed: T = day_of_year::<T>(t) - T::ONE;
        let length = T::from_usize(days_in_year(t.year) as usize);

        Self::new(T::from_usize(t.year as usize) + elapsed / length)
    }

    /// `year` within [1583, 9999]. The zero sentinel is invalid.
    pub fn is_valid(&self) -> bool {
        self.year >= T::from_f64(Self::MIN_YEAR) && self.year <= T::from_f64(Self::MAX_YEAR)
    }

    /// Years elapsed since `epoch` (negative before it).
    #[inline]
    pub fn years_since(&self, epoch: T) -> T {
        self.year - epoch
    }
}

impl<T: Real> From<&CalendarDateTime> for DecimalYear<T> {
    fn from(t: &CalendarDateTime) -> Self {
        Self::from_date_time(t)
    }
}

impl<T: Real> fmt::Display for DecimalYear<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.year)
    }
}
