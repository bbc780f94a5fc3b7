//! Tariff engine.
//!
//! Folds a tap through an ordered rule chain, starting from a zero fare and
//! feeding each rule's output to the next.

use tracing::{debug, trace};

use crate::domain::{Fare, TapRecord};
use crate::rules::FareRule;

/// Computes fares by running every rule in caller-supplied order.
///
/// The engine borrows its rules. Order is significant and is never changed:
/// `[PeakPeriod, BaseFare]` and `[BaseFare, PeakPeriod]` price the same tap
/// differently. Inactive rules are still called; they decide for themselves
/// to pass the fare through.
///
/// # Examples
///
/// ```
/// use farebox::domain::{Fare, TapRecord};
/// use farebox::engine::TariffEngine;
/// use farebox::rules::{BaseFare, PeakPeriod};
///
/// let base = BaseFare::new();
/// let peak = PeakPeriod::new();
/// let engine = TariffEngine::new(vec![&base, &peak]);
///
/// let tap = TapRecord::new("07-01 08:01", "G", "NC", 37.5).unwrap();
/// assert_eq!(engine.compute_fare(&tap), Fare::new(35.0));
/// ```
pub struct TariffEngine<'a> {
    rules: Vec<&'a dyn FareRule>,
}

impl<'a> TariffEngine<'a> {
    /// Create an engine over `rules`, applied in the given order.
    pub fn new(rules: Vec<&'a dyn FareRule>) -> Self {
        Self { rules }
    }

    /// Create an engine borrowing a chain of boxed rules.
    pub fn from_boxed(rules: &'a [Box<dyn FareRule>]) -> Self {
        Self {
            rules: rules.iter().map(|r| &**r).collect(),
        }
    }

    /// Compute the fare for one tap.
    ///
    /// An empty chain always yields zero.
    pub fn compute_fare(&self, tap: &TapRecord) -> Fare {
        let fare = self.rules.iter().fold(Fare::ZERO, |fare, rule| {
            let next = rule.apply(tap, fare);
            trace!(rule = rule.name(), from = %fare, to = %next, "applied fare rule");
            next
        });
        debug!(tap = %tap.timestamp(), fare = %fare, "computed fare");
        fare
    }

    /// Compute fares for a sequence of taps, one per record, in order.
    pub fn compute_all(&self, taps: &[TapRecord]) -> Vec<Fare> {
        taps.iter().map(|tap| self.compute_fare(tap)).collect()
    }

    /// Names of the rules in chain order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for TariffEngine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TariffEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
