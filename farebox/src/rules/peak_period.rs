//! Peak period surcharge.

use super::{FareRule, Toggle, hour_in};
use crate::domain::{Fare, TapRecord};

/// Adds a flat surcharge during the morning (08:00-10:00) and evening
/// (18:00-20:00) peaks.
#[derive(Debug, Default)]
pub struct PeakPeriod {
    active: Toggle,
}

impl PeakPeriod {
    pub const SURCHARGE: f64 = 10.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active(active: bool) -> Self {
        Self {
            active: Toggle::new(active),
        }
    }

    /// Whether the tap falls in either peak window.
    pub fn is_peak(tap: &TapRecord) -> bool {
        let hour = tap.timestamp().hour();
        hour_in(hour, 8, 10) || hour_in(hour, 18, 20)
    }
}

impl FareRule for PeakPeriod {
    fn apply(&self, tap: &TapRecord, current: Fare) -> Fare {
        if !self.active.get() {
            return current;
        }
        if Self::is_peak(tap) {
            return current.plus(Self::SURCHARGE);
        }
        current
    }

    fn name(&self) -> &'static str {
        "peak_period"
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn set_active(&self, active: bool) {
        self.active.set(active);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::rules::testutil::tap_at;
    use proptest::prelude::*;

    proptest! {
        /// Surcharge exactly in hours 8, 9, 18 and 19
        #[test]
        fn surcharge_iff_peak_hour(hour in 0u32..24, minute in 0u32..60, f in 0f64..1000.0) {
            let rule = PeakPeriod::new();
            let out = rule.apply(&tap_at(hour, minute), Fare::new(f));
            if [8, 9, 18, 19].contains(&hour) {
                prop_assert_eq!(out, Fare::new(f + 10.0));
            } else {
                prop_assert_eq!(out, Fare::new(f));
            }
        }

        /// Identity when inactive
        #[test]
        fn inactive_identity(hour in 0u32..24, f in -1e6f64..1e6) {
            let rule = PeakPeriod::with_active(false);
            prop_assert_eq!(rule.apply(&tap_at(hour, 0), Fare::new(f)), Fare::new(f));
        }
    }
}
