//! Tap log records.

use std::fmt;

use super::timestamp::{ParseError, TapTime};

/// One card tap from the tap log.
///
/// The timestamp is validated at construction, so a `TapRecord` that exists
/// always has a usable time of day. Line and station are opaque identifiers.
///
/// # Examples
///
/// ```
/// use farebox::domain::TapRecord;
///
/// let tap = TapRecord::new("07-01 08:01", "G", "NC", 37.5).unwrap();
/// assert_eq!(tap.timestamp().hour(), 8);
/// assert_eq!(tap.to_string(), "07-01 08:01 | Line: G | Station: NC | Charged: 37.5");
///
/// assert!(TapRecord::new("07-01 8:01", "G", "NC", 37.5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TapRecord {
    datetime_str: String,
    timestamp: TapTime,
    line: String,
    station: String,
    charged_amount: f64,
}

impl TapRecord {
    /// Build a record, parsing `datetime_str` as `MM-DD HH:MM`.
    pub fn new(
        datetime_str: &str,
        line: impl Into<String>,
        station: impl Into<String>,
        charged_amount: f64,
    ) -> Result<Self, ParseError> {
        let timestamp = TapTime::parse(datetime_str)?;
        Ok(Self {
            datetime_str: datetime_str.to_string(),
            timestamp,
            line: line.into(),
            station: station.into(),
            charged_amount,
        })
    }

    /// The timestamp as it appeared in the log.
    pub fn datetime_str(&self) -> &str {
        &self.datetime_str
    }

    pub fn timestamp(&self) -> TapTime {
        self.timestamp
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn station(&self) -> &str {
        &self.station
    }

    /// The amount historically charged for this tap.
    ///
    /// Reference data only; rules never read it.
    pub fn charged_amount(&self) -> f64 {
        self.charged_amount
    }
}

impl fmt::Display for TapRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Line: {} | Station: {} | Charged: {}",
            self.datetime_str, self.line, self.station, self.charged_amount
        )
    }
}
