use std::fmt;

use crate::calendar::days_in_month;
use crate::{TimeError, TimeResult};

/// Civil timestamp with whole-second resolution.
///
/// Fields are public and unchecked; use [`is_valid`](Self::is_valid) or
/// [`try_new`](Self::try_new) before trusting a value. `hour` may be 24 (end of day) and
/// `second` may be 60 (leap second).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl CalendarDateTime {
    pub const MIN_YEAR: u16 = 1583;
    pub const MAX_YEAR: u16 = 9999;

    pub fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Like [`new`](Self::new) but returns [`TimeError::InvalidDate`] for out-of-range fields.
    pub fn try_new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> TimeResult<Self> {
        let t = Self::new(year, month, day, hour, minute, second);
        if t.is_valid() {
            Ok(t)
        } else {
            Err(TimeError::InvalidDate)
        }
    }

    /// Midnight at the start of the given day.
    pub fn from_date(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parses `YYYY-MM-DDTHH:MM:SS[Z]`, the same with a space separator, or `YYYY-MM-DD`.
    ///
    /// See [`parsing::parse_iso8601`](crate::parsing::parse_iso8601).
    pub fn parse_iso8601(s: &str) -> TimeResult<Self> {
        crate::parsing::parse_iso8601(s)
    }

    /// Year in [1583, 9999], month in [1, 12], day within the month, hour in [0, 24],
    /// minute in [0, 59] and second in [0, 60].
    pub fn is_valid(&self) -> bool {
        (Self::MIN_YEAR..=Self::MAX_YEAR).contains(&self.year)
            && (1..=12).contains(&self.month)
            && (1..=days_in_month(self.year, self.month)).contains(&self.day)
            && self.hour <= 24
            && self.minute <= 59
            && self.second <= 60
    }
}

impl fmt::Display for CalendarDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
