//! Transfer window.

use chrono::Duration;

use super::{FareRule, Toggle};
use crate::domain::{Fare, TapRecord};

/// Free transfer for a tap within 30 minutes of the rider's previous tap.
///
/// Not implemented: detecting a transfer needs the previous tap, and rules
/// only ever see one record. The rule never changes the fare.
#[derive(Debug, Default)]
pub struct TransferWindow {
    active: Toggle,
}

impl TransferWindow {
    /// Minutes after a tap during which a further tap would count as a transfer.
    pub const WINDOW_MINUTES: i64 = 30;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active(active: bool) -> Self {
        Self {
            active: Toggle::new(active),
        }
    }

    pub fn window() -> Duration {
        Duration::minutes(Self::WINDOW_MINUTES)
    }
}

impl FareRule for TransferWindow {
    fn apply(&self, _tap: &TapRecord, current: Fare) -> Fare {
        if !self.active.get() {
            return current;
        }
        current
    }

    fn name(&self) -> &'static str {
        "transfer_window"
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn set_active(&self, active: bool) {
        self.active.set(active);
    }
}
