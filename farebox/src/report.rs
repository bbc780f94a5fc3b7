//! Fare reports.
//!
//! Compares computed fares with the amounts historically charged, which is
//! how a candidate rule set is checked against a tap log.

use std::fmt;

use serde::Serialize;

use crate::domain::{Fare, TapRecord};
use crate::engine::TariffEngine;

/// Computed and charged amounts closer than this are treated as equal.
const MATCH_TOLERANCE: f64 = 1e-9;

/// One tap with its computed fare.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub timestamp: String,
    pub line: String,
    pub station: String,
    pub charged: f64,
    pub computed: Fare,
    /// Whether the computed fare equals the charged amount.
    pub matches: bool,
}

impl ReportEntry {
    fn new(tap: &TapRecord, computed: Fare) -> Self {
        Self {
            timestamp: tap.datetime_str().to_string(),
            line: tap.line().to_string(),
            station: tap.station().to_string(),
            charged: tap.charged_amount(),
            computed,
            matches: (computed.amount() - tap.charged_amount()).abs() < MATCH_TOLERANCE,
        }
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Record: {} | Line: {} | Station: {} | Charged: {} => Computed Fare: {}",
            self.timestamp, self.line, self.station, self.charged, self.computed
        )
    }
}

/// Computed fares for a whole tap log.
#[derive(Debug, Clone, Serialize)]
pub struct FareReport {
    pub rules: Vec<&'static str>,
    pub entries: Vec<ReportEntry>,
}

impl FareReport {
    /// Run every tap through `engine`.
    pub fn build(engine: &TariffEngine<'_>, taps: &[TapRecord]) -> Self {
        let entries = taps
            .iter()
            .map(|tap| ReportEntry::new(tap, engine.compute_fare(tap)))
            .collect();
        Self {
            rules: engine.rule_names(),
            entries,
        }
    }

    /// Number of taps whose computed fare equals the charged amount.
    pub fn match_count(&self) -> usize {
        self.entries.iter().filter(|e| e.matches).count()
    }

    /// Entries whose computed fare differs from the charged amount.
    pub fn mismatches(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| !e.matches)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleChain;
    use crate::taplog::sample_taps;

    #[test]
    fn sample_report() {
        let chain = RuleChain::default();
        let report = FareReport::build(&chain.engine(), &sample_taps());

        assert_eq!(report.len(), 7);
        let computed: Vec<f64> = report.entries.iter().map(|e| e.computed.amount()).collect();
        assert_eq!(computed, vec![25.0, 35.0, 35.0, 20.0, 20.0, 20.0, 16.25]);

        // 08:01 was charged 37.5, 08:30 was a free transfer, 10:01 and 14:36
        // were charged the undiscounted 25
        let mismatched: Vec<&str> = report.mismatches().map(|e| e.timestamp.as_str()).collect();
        assert_eq!(
            mismatched,
            vec!["07-01 08:01", "07-01 08:30", "07-01 10:01", "07-01 14:36"]
        );
        assert_eq!(report.match_count(), 3);
    }

    #[test]
    fn empty_report() {
        let chain = RuleChain::default();
        let report = FareReport::build(&chain.engine(), &[]);
        assert!(report.is_empty());
        assert_eq!(report.match_count(), 0);
    }

    #[test]
    fn entry_display() {
        let tap = TapRecord::new("07-03 00:20", "R", "NC", 16.25).unwrap();
        let entry = ReportEntry::new(&tap, Fare::new(16.25));
        assert_eq!(
            entry.to_string(),
            "Record: 07-03 00:20 | Line: R | Station: NC | Charged: 16.25 => Computed Fare: 16.25"
        );
        assert!(entry.matches);
    }

    #[test]
    fn json_shape() {
        let chain = RuleChain::default();
        let taps = vec![TapRecord::new("07-01 22:15", "Y", "BD", 20.0).unwrap()];
        let report = FareReport::build(&chain.engine(), &taps);

        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["rules"][0], "base_fare");
        assert_eq!(value["entries"][0]["timestamp"], "07-01 22:15");
        assert_eq!(value["entries"][0]["computed"], 20.0);
        assert_eq!(value["entries"][0]["matches"], true);
    }
}
