//! Post-midnight discount.

use super::{FareRule, Toggle, hour_in};
use crate::domain::{Fare, TapRecord};

/// 35% off the running fare for taps from midnight until 04:00.
#[derive(Debug, Default)]
pub struct PostMidnight {
    active: Toggle,
}

impl PostMidnight {
    pub const MULTIPLIER: f64 = 0.65;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active(active: bool) -> Self {
        Self {
            active: Toggle::new(active),
        }
    }
}

impl FareRule for PostMidnight {
    fn apply(&self, tap: &TapRecord, current: Fare) -> Fare {
        if !self.active.get() {
            return current;
        }
        if hour_in(tap.timestamp().hour(), 0, 4) {
            return current.scaled(Self::MULTIPLIER);
        }
        current
    }

    fn name(&self) -> &'static str {
        "post_midnight"
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn set_active(&self, active: bool) {
        self.active.set(active);
    }
}
