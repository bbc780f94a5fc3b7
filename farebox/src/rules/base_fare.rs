//! Flat base fare.

use super::{FareRule, Toggle};
use crate::domain::{Fare, TapRecord};

/// Sets the fare to a flat amount, discarding whatever came before.
///
/// This replaces rather than adds, so anything earlier in the chain is lost.
/// Put it first.
#[derive(Debug, Default)]
pub struct BaseFare {
    active: Toggle,
}

impl BaseFare {
    pub const AMOUNT: f64 = 25.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active(active: bool) -> Self {
        Self {
            active: Toggle::new(active),
        }
    }
}

impl FareRule for BaseFare {
    fn apply(&self, _tap: &TapRecord, current: Fare) -> Fare {
        if !self.active.get() {
            return current;
        }
        Fare::new(Self::AMOUNT)
    }

    fn name(&self) -> &'static str {
        "base_fare"
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
        /// Ignores its input fare entirely when active
        #[test]
        fn idempotent(hour in 0u32..24, x in -1e6f64..1e6, y in -1e6f64..1e6) {
            let rule = BaseFare::new();
            let tap = tap_at(hour, 0);
            prop_assert_eq!(rule.apply(&tap, Fare::new(x)), rule.apply(&tap, Fare::new(y)));
        }

        /// Identity when inactive
        #[test]
        fn inactive_identity(hour in 0u32..24, x in -1e6f64..1e6) {
            let rule = BaseFare::with_active(false);
            prop_assert_eq!(rule.apply(&tap_at(hour, 0), Fare::new(x)), Fare::new(x));
        }
    }
}
