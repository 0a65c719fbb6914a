use crate::{CalendarDateTime, TimeError, TimeResult};

const MAX_ISO8601_LENGTH: usize = 32;

/// Parses an ISO-8601 timestamp into a [`CalendarDateTime`].
///
/// Accepted forms:
///
/// - `YYYY-MM-DDTHH:MM:SS`, optionally with a trailing `Z`
/// - `YYYY-MM-DD HH:MM:SS`
/// - `YYYY-MM-DD` (midnight)
///
/// Month, day, hour, minute and second may have one or two digits. Seconds are whole; a
/// fractional part is rejected rather than silently truncated.
///
/// Malformed text yields [`TimeError::ParseError`]. Well-formed text naming an impossible date
/// (30 February, hour 25) yields [`TimeError::InvalidDate`].
pub fn parse_iso8601(s: &str) -> TimeResult<CalendarDateTime> {
    let s = s.trim();

    if s.len() > MAX_ISO8601_LENGTH {
        return Err(TimeError::ParseError("Input too long".to_string()));
    }

    let s = s.strip_suffix('Z').unwrap_or(s);

    let (date_part, time_part) = match s.find('T').or_else(|| s.find(' ')) {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    };

    let date_components: Vec<&str> = date_part.split('-').collect();
    if date_components.len() != 3 {
        return Err(TimeError::ParseError(format!(
            "Invalid date format: '{}'. Expected YYYY-MM-DD",
            date_part
        )));
    }

    let year = parse_field(date_components[0], "year", 4, 4)?;
    let month = parse_field(date_components[1], "month", 1, 2)? as u8;
    let day = parse_field(date_components[2], "day", 1, 2)? as u8;

    let (hour, minute, second) = match time_part {
        None => (0, 0, 0),
        Some(time_part) => {
            let time_components: Vec<&str> = time_part.split(':').collect();
            if time_components.len() != 3 {
                return Err(TimeError::ParseError(format!(
                    "Invalid time format: '{}'. Expected HH:MM:SS",
                    time_part
                )));
            }
            (
                parse_field(time_components[0], "hour", 1, 2)? as u8,
                parse_field(time_components[1], "minute", 1, 2)? as u8,
                parse_field(time_components[2], "second", 1, 2)? as u8,
            )
        }
    };

    CalendarDateTime::try_new(year, month, day, hour, minute, second)
}

fn parse_field(text: &str, name: &str, min_len: usize, max_len: usize) -> TimeResult<u16> {
    if text.len() < min_len || text.len() > max_len {
        return Err(TimeError::ParseError(format!(
            "Invalid {} format: '{}'",
            name, text
        )));
    }

    let bytes = text.as_bytes();
    if !bytes.iter().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::ParseError(format!("Invalid {}: '{}'", name, text)));
    }

    Ok(bytes
        .iter()
        .fold(0u16, |acc, &b| acc * 10 + (b - b'0') as u16))
}
