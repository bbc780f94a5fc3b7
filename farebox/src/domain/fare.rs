//! Fare amounts.

use std::fmt;

use serde::Serialize;

/// A fare amount flowing through the rule chain.
///
/// Plain double-precision arithmetic: a 35% discount on 25 is exactly 16.25,
/// and discounts stack multiplicatively on whatever the chain has built so far.
#[derive(Clone, Copy, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Fare(f64);

impl Fare {
    /// The starting point of every fold.
    pub const ZERO: Fare = Fare(0.0);

    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Returns this fare with a flat amount added.
    pub fn plus(self, amount: f64) -> Self {
        Self(self.0 + amount)
    }

    /// Returns this fare multiplied by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self(self.0 * factor)
    }
}

impl From<f64> for Fare {
    fn from(amount: f64) -> Self {
        Self(amount)
    }
}

impl fmt::Debug for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fare({})", self.0)
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_default() {
        assert_eq!(Fare::default(), Fare::ZERO);
        assert_eq!(Fare::ZERO.amount(), 0.0);
    }

    #[test]
    fn arithmetic_matches_reference_values() {
        assert_eq!(Fare::new(25.0).plus(10.0).amount(), 35.0);
        assert_eq!(Fare::new(25.0).scaled(0.8).amount(), 20.0);
        assert_eq!(Fare::new(25.0).scaled(0.65).amount(), 16.25);
    }

    #[test]
    fn display() {
        assert_eq!(Fare::new(25.0).to_string(), "25");
        assert_eq!(Fare::new(16.25).to_string(), "16.25");
        assert_eq!(format!("{:?}", Fare::new(20.0)), "Fare(20)");
    }

    #[test]
    fn serializes_as_number() {
        let json = serde_json::to_string(&Fare::new(16.25)).unwrap();
        assert_eq!(json, "16.25");
    }
}
