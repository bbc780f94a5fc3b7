//! Fare rules.
//!
//! Each rule is an independent strategy that transforms a running fare for
//! one tap. Rules carry a single piece of state, their active flag; an
//! inactive rule passes the incoming fare through untouched.

mod base_fare;
mod night_discount;
mod peak_period;
mod post_midnight;
mod transfer_window;

use std::sync::atomic::{AtomicBool, Ordering};

pub use base_fare::BaseFare;
pub use night_discount::NightDiscount;
pub use peak_period::PeakPeriod;
pub use post_midnight::PostMidnight;
pub use transfer_window::TransferWindow;

use crate::domain::{Fare, TapRecord};

/// A unit of pricing logic in the rule chain.
///
/// `apply` must be total for every `TapRecord` and must return `current`
/// unchanged whenever the rule is inactive.
pub trait FareRule: Send + Sync {
    /// Transform the running fare for `tap`.
    fn apply(&self, tap: &TapRecord, current: Fare) -> Fare;

    /// Short name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    fn is_active(&self) -> bool;

    /// Enable or disable the rule.
    ///
    /// Takes `&self` so a rule can be toggled while an engine borrows it.
    fn set_active(&self, active: bool);
}

/// The on/off switch every rule carries.
#[derive(Debug)]
pub(crate) struct Toggle(AtomicBool);

impl Toggle {
    pub(crate) fn new(active: bool) -> Self {
        Self(AtomicBool::new(active))
    }

    pub(crate) fn get(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub(crate) fn set(&self, active: bool) {
        self.0.store(active, Ordering::Relaxed);
    }
}

impl Default for Toggle {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Whether `hour` falls in the half-open range `[start, end)`.
fn hour_in(hour: u32, start: u32, end: u32) -> bool {
    (start..end).contains(&hour)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_defaults_to_active() {
        assert!(Toggle::default().get());
    }

    #[test]
    fn toggle_set() {
        let t = Toggle::new(true);
        t.set(false);
        assert!(!t.get());
        t.set(true);
        assert!(t.get());
    }

    #[test]
    fn hour_ranges_are_half_open() {
        assert!(hour_in(8, 8, 10));
        assert!(hour_in(9, 8, 10));
        assert!(!hour_in(10, 8, 10));
        assert!(!hour_in(7, 8, 10));
        assert!(hour_in(23, 10, 24));
    }

    #[test]
    fn rules_are_usable_as_trait_objects() {
        let rules: Vec<Box<dyn FareRule>> = vec![
            Box::new(BaseFare::new()),
            Box::new(PeakPeriod::new()),
            Box::new(TransferWindow::new()),
            Box::new(NightDiscount::new()),
            Box::new(PostMidnight::new()),
        ];
        let names: Vec<_> = rules.iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            [
                "base_fare",
                "peak_period",
                "transfer_window",
                "night_discount",
                "post_midnight"
            ]
        );
        assert!(rules.iter().all(|r| r.is_active()));
    }
}
