//! Calendar time to decimal year.
//!
//! Geomagnetic models interpolate their coefficients in decimal years. This crate turns a civil
//! timestamp into that continuous coordinate using the proleptic Gregorian calendar.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`calendar`] | Leap-year rule, month lengths, day of year |
//! | [`datetime`] | [`CalendarDateTime`] and its validity predicate |
//! | [`decimal_year`] | [`DecimalYear`] and the calendar conversion |
//! | [`parsing`] | ISO-8601 input |
//!
//! ```
//! use magneto_time::{CalendarDateTime, DecimalYear};
//!
//! let t = CalendarDateTime::parse_iso8601("2022-07-02T12:00:00Z")?;
//! let dy = DecimalYear::<f64>::from_date_time(&t);
//!
//! assert!(dy.is_valid());
//! assert!((dy.year - 2022.5).abs() < 1e-9);
//! # Ok::<(), magneto_time::TimeError>(())
//! ```
//!
//! Invalid timestamps never panic: [`DecimalYear::from_date_time`] returns the zero sentinel,
//! which fails [`DecimalYear::is_valid`].

pub mod calendar;
pub mod datetime;
pub mod decimal_year;
pub mod parsing;

pub use calendar::{day_of_year, days_in_month, days_in_year, is_leap_year};
pub use datetime::CalendarDateTime;
pub use decimal_year::DecimalYear;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeError {
    InvalidDate,
    ParseError(String),
}

impl std::fmt::Display for TimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeError::InvalidDate => write!(f, "Invalid date"),
            TimeError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for TimeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(TimeError::InvalidDate.to_string(), "Invalid date");
        assert_eq!(
            TimeError::ParseError("bad".into()).to_string(),
            "Parse error: bad"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&TimeError::InvalidDate);
    }
}
