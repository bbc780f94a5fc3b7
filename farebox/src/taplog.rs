//! Tap log input.
//!
//! Tap logs are JSON arrays of raw entries. Entries are converted into
//! validated [`TapRecord`]s here, so the engine only ever sees well-formed
//! records.

use std::path::Path;

use serde::Deserialize;

use crate::domain::{ParseError, TapRecord};

/// Errors loading a tap log.
#[derive(Debug, thiserror::Error)]
pub enum TapLogError {
    /// Reading the file failed
    #[error("failed to read tap log: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not a valid tap log
    #[error("tap log JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An entry's timestamp is malformed
    #[error("tap log entry {index}: {source}")]
    Timestamp {
        index: usize,
        #[source]
        source: ParseError,
    },
}

/// One raw tap log entry, as it appears on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct TapEntry {
    /// "MM-DD HH:MM"
    pub timestamp: String,
    pub line: String,
    pub station: String,
    /// Historically charged amount.
    pub charged: f64,
}

impl TapEntry {
    /// Validate and convert into a [`TapRecord`].
    pub fn into_record(self) -> Result<TapRecord, ParseError> {
        TapRecord::new(&self.timestamp, self.line, self.station, self.charged)
    }
}

/// Parse a tap log from a JSON string.
///
/// Stops at the first entry with a malformed timestamp.
pub fn parse_tap_log(json: &str) -> Result<Vec<TapRecord>, TapLogError> {
    let entries: Vec<TapEntry> = serde_json::from_str(json)?;
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .into_record()
                .map_err(|source| TapLogError::Timestamp { index, source })
        })
        .collect()
}

/// Load a tap log from a JSON file.
pub fn load_tap_log(path: impl AsRef<Path>) -> Result<Vec<TapRecord>, TapLogError> {
    let contents = std::fs::read_to_string(path)?;
    parse_tap_log(&contents)
}

/// The reference tap log used when no file is given.
pub fn sample_taps() -> Vec<TapRecord> {
    const SAMPLE: [(&str, &str, &str, f64); 7] = [
        ("07-01 07:20", "G", "BD", 25.0),
        ("07-01 08:01", "G", "NC", 37.5),
        ("07-01 08:30", "R", "YH", 0.0),
        ("07-01 10:01", "R", "KL", 25.0),
        ("07-01 14:36", "G", "NC", 25.0),
        ("07-01 22:15", "Y", "BD", 20.0),
        ("07-03 00:20", "R", "NC", 16.25),
    ];

    SAMPLE
        .iter()
        .filter_map(|(when, line, station, charged)| {
            TapRecord::new(when, *line, *station, *charged).ok()
        })
        .collect()
}
