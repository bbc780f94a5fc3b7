//! Tap timestamp handling.
//!
//! Tap logs record times as "MM-DD HH:MM" strings with no year. This module
//! parses them into a calendar-aware timestamp so rules can read the local
//! time of day.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;

/// Year assumed for tap timestamps, which carry none of their own.
///
/// 1900 is not a leap year, so "02-29" is rejected.
const BASE_YEAR: i32 = 1900;

/// Error returned when a tap timestamp does not match `MM-DD HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid tap timestamp {input:?}: {reason}")]
pub struct ParseError {
    input: String,
    reason: &'static str,
}

impl ParseError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }

    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Why it was rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// The moment a card was tapped, to minute precision.
///
/// # Examples
///
/// ```
/// use farebox::domain::TapTime;
///
/// let t = TapTime::parse("07-01 08:01").unwrap();
/// assert_eq!(t.month(), 7);
/// assert_eq!(t.hour(), 8);
/// assert_eq!(t.to_string(), "07-01 08:01");
///
/// assert!(TapTime::parse("13-40 25:99").is_err());
/// assert!(TapTime::parse("07/01 08:01").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TapTime(NaiveDateTime);

impl TapTime {
    /// Parse a timestamp in exactly the `MM-DD HH:MM` format (24-hour clock).
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        // Must be exactly 11 characters: MM-DD HH:MM
        if s.len() != 11 {
            return Err(ParseError::new(s, "expected MM-DD HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b'-' {
            return Err(ParseError::new(s, "expected '-' between month and day"));
        }
        if bytes[5] != b' ' {
            return Err(ParseError::new(s, "expected a space between date and time"));
        }
        if bytes[8] != b':' {
            return Err(ParseError::new(s, "expected ':' between hour and minute"));
        }

        let month =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| ParseError::new(s, "invalid month digits"))?;
        let day =
            parse_two_digits(&bytes[3..5]).ok_or_else(|| ParseError::new(s, "invalid day digits"))?;
        let hour =
            parse_two_digits(&bytes[6..8]).ok_or_else(|| ParseError::new(s, "invalid hour digits"))?;
        let minute = parse_two_digits(&bytes[9..11])
            .ok_or_else(|| ParseError::new(s, "invalid minute digits"))?;

        if !(1..=12).contains(&month) {
            return Err(ParseError::new(s, "month must be 01-12"));
        }
        let date = NaiveDate::from_ymd_opt(BASE_YEAR, month, day)
            .ok_or_else(|| ParseError::new(s, "day out of range for month"))?;

        if hour > 23 {
            return Err(ParseError::new(s, "hour must be 00-23"));
        }
        if minute > 59 {
            return Err(ParseError::new(s, "minute must be 00-59"));
        }
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| ParseError::new(s, "invalid time"))?;

        Ok(Self(date.and_time(time)))
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the hour of day (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the underlying datetime, pinned to the base year.
    pub fn as_datetime(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Debug for TapTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TapTime({self})")
    }
}

impl fmt::Display for TapTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}-{:02} {:02}:{:02}",
            self.month(),
            self.day(),
            self.hour(),
            self.minute()
        )
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_timestamps() {
        let t = TapTime::parse("07-01 07:20").unwrap();
        assert_eq!((t.month(), t.day(), t.hour(), t.minute()), (7, 1, 7, 20));

        let t = TapTime::parse("01-01 00:00").unwrap();
        assert_eq!((t.hour(), t.minute()), (0, 0));

        let t = TapTime::parse("12-31 23:59").unwrap();
        assert_eq!((t.month(), t.day(), t.hour(), t.minute()), (12, 31, 23, 59));
    }

    #[test]
    fn reject_out_of_range_fields() {
        assert!(TapTime::parse("13-40 25:99").is_err());
        assert!(TapTime::parse("00-10 10:00").is_err());
        assert!(TapTime::parse("07-00 10:00").is_err());
        assert!(TapTime::parse("04-31 10:00").is_err());
        assert!(TapTime::parse("07-01 24:00").is_err());
        assert!(TapTime::parse("07-01 10:60").is_err());
    }

    #[test]
    fn reject_leap_day() {
        let err = TapTime::parse("02-29 10:00").unwrap_err();
        assert_eq!(err.reason(), "day out of range for month");
        assert!(TapTime::parse("02-28 10:00").is_ok());
    }

    #[test]
    fn reject_wrong_separators() {
        assert!(TapTime::parse("07/01 07:20").is_err());
        assert!(TapTime::parse("07-01T07:20").is_err());
        assert!(TapTime::parse("07-01 07.20").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(TapTime::parse("").is_err());
        assert!(TapTime::parse("7-01 07:20").is_err());
        assert!(TapTime::parse("07-01 07:20:00").is_err());
        assert!(TapTime::parse("2024-07-01 07:20").is_err());
    }

    #[test]
    fn reject_non_digits() {
        assert!(TapTime::parse("0a-01 07:20").is_err());
        assert!(TapTime::parse("07-01 +7:20").is_err());
        assert!(TapTime::parse("07-01 07: 2").is_err());
    }

    #[test]
    fn error_names_input() {
        let err = TapTime::parse("13-40 25:99").unwrap_err();
        assert_eq!(err.input(), "13-40 25:99");
        assert_eq!(
            err.to_string(),
            "invalid tap timestamp \"13-40 25:99\": month must be 01-12"
        );
    }

    #[test]
    fn display_and_debug() {
        let t = TapTime::parse("07-03 00:20").unwrap();
        assert_eq!(t.to_string(), "07-03 00:20");
        assert_eq!(format!("{t:?}"), "TapTime(07-03 00:20)");
    }

    #[test]
    fn ordering_is_chronological() {
        let a = TapTime::parse("07-01 22:15").unwrap();
        let b = TapTime::parse("07-03 00:20").unwrap();
        assert!(a < b);
        assert_eq!(b.as_datetime().date().year(), BASE_YEAR);
    }
}
