//! Rule chain configuration.
//!
//! Which rules are switched on, and the standard chain built from that.

use crate::engine::TariffEngine;
use crate::rules::{BaseFare, FareRule, NightDiscount, PeakPeriod, PostMidnight, TransferWindow};

/// Environment variable controlling [`BaseFare`].
pub const BASE_FARE_VAR: &str = "FAREBOX_BASE_FARE";
/// Environment variable controlling [`PeakPeriod`].
pub const PEAK_PERIOD_VAR: &str = "FAREBOX_PEAK_PERIOD";
/// Environment variable controlling [`TransferWindow`].
pub const TRANSFER_WINDOW_VAR: &str = "FAREBOX_TRANSFER_WINDOW";
/// Environment variable controlling [`NightDiscount`].
pub const NIGHT_DISCOUNT_VAR: &str = "FAREBOX_NIGHT_DISCOUNT";
/// Environment variable controlling [`PostMidnight`].
pub const POST_MIDNIGHT_VAR: &str = "FAREBOX_POST_MIDNIGHT";

/// Errors reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A toggle variable held something other than an on/off value
    #[error("invalid value {value:?} for {key}: expected on/off, true/false, yes/no or 1/0")]
    InvalidToggle { key: &'static str, value: String },
}

/// On/off switches for the five fare rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleToggles {
    pub base_fare: bool,
    pub peak_period: bool,
    pub transfer_window: bool,
    pub night_discount: bool,
    pub post_midnight: bool,
}

impl RuleToggles {
    /// Create toggles with the given switches.
    pub fn new(
        base_fare: bool,
        peak_period: bool,
        transfer_window: bool,
        night_discount: bool,
        post_midnight: bool,
    ) -> Self {
        Self {
            base_fare,
            peak_period,
            transfer_window,
            night_discount,
            post_midnight,
        }
    }

    /// Read toggles from `FAREBOX_*` environment variables.
    ///
    /// Unset variables keep their default (on).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read toggles through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &'static str, default: bool| match lookup(key) {
            Some(value) => parse_toggle(key, &value),
            None => Ok(default),
        };

        let defaults = Self::default();
        Ok(Self {
            base_fare: read(BASE_FARE_VAR, defaults.base_fare)?,
            peak_period: read(PEAK_PERIOD_VAR, defaults.peak_period)?,
            transfer_window: read(TRANSFER_WINDOW_VAR, defaults.transfer_window)?,
            night_discount: read(NIGHT_DISCOUNT_VAR, defaults.night_discount)?,
            post_midnight: read(POST_MIDNIGHT_VAR, defaults.post_midnight)?,
        })
    }
}

impl Default for RuleToggles {
    fn default() -> Self {
        Self::new(true, true, true, true, true)
    }
}

fn parse_toggle(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidToggle {
            key,
            value: value.to_string(),
        }),
    }
}

/// The five fare rules in the standard order, owned.
///
/// Order: base fare, peak surcharge, transfer window, night discount,
/// post-midnight discount. The base fare has to come first because it
/// replaces the running fare.
pub struct RuleChain {
    rules: Vec<Box<dyn FareRule>>,
}

impl RuleChain {
    /// Build the standard chain with each rule switched per `toggles`.
    pub fn standard(toggles: &RuleToggles) -> Self {
        Self {
            rules: vec![
                Box::new(BaseFare::with_active(toggles.base_fare)),
                Box::new(PeakPeriod::with_active(toggles.peak_period)),
                Box::new(TransferWindow::with_active(toggles.transfer_window)),
                Box::new(NightDiscount::with_active(toggles.night_discount)),
                Box::new(PostMidnight::with_active(toggles.post_midnight)),
            ],
        }
    }

    /// An engine borrowing this chain.
    pub fn engine(&self) -> TariffEngine<'_> {
        TariffEngine::from_boxed(&self.rules)
    }

    /// Look up a rule by name, e.g. to toggle it later.
    pub fn rule(&self, name: &str) -> Option<&dyn FareRule> {
        self.rules.iter().find(|r| r.name() == name).map(|r| &**r)
    }

    pub fn rules(&self) -> &[Box<dyn FareRule>] {
        &self.rules
    }
}

impl Default for RuleChain {
    fn default() -> Self {
        Self::standard(&RuleToggles::default())
    }
}
