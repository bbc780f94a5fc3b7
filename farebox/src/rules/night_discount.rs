//! Night discount.

use super::{FareRule, Toggle, hour_in};
use crate::domain::{Fare, TapRecord};

/// 20% off the running fare for taps from 10:00 until midnight.
///
/// Overlaps the evening peak, so an 18:00-20:00 tap gets the surcharge
/// first and then the discount on the surcharged total.
#[derive(Debug, Default)]
pub struct NightDiscount {
    active: Toggle,
}

impl NightDiscount {
    pub const MULTIPLIER: f64 = 0.8;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active(active: bool) -> Self {
        Self {
            active: Toggle::new(active),
        }
    }
}

impl FareRule for NightDiscount {
    fn apply(&self, tap: &TapRecord, current: Fare) -> Fare {
        if !self.active.get() {
            return current;
        }
        if hour_in(tap.timestamp().hour(), 10, 24) {
            return current.scaled(Self::MULTIPLIER);
        }
        current
    }

    fn name(&self) -> &'static str {
        "night_discount"
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn set_active(&self, active: bool) {
        self.active.set(active);
    }
}
