//! Settlement configuration.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::{Result, XpenceError, constants};

/// How emitted amounts are rounded to the currency scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Midpoint away from zero: `10.005 → 10.01`.
    #[default]
    HalfUp,
    /// Midpoint to nearest even digit: `10.005 → 10.00`.
    HalfEven,
}

impl RoundingMode {
    #[must_use]
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HalfUp => write!(f, "HALF_UP"),
            Self::HalfEven => write!(f, "HALF_EVEN"),
        }
    }
}

/// Tolerance and precision used by every settlement operation.
///
/// The same `epsilon` drives creditor/debtor partitioning, cursor
/// advancement, and the settled check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettlementConfig {
    /// Balances with `|balance| < epsilon` count as zero.
    pub epsilon: Decimal,
    /// Decimal places of emitted amounts.
    pub scale: u32,
    pub rounding: RoundingMode,
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            epsilon: constants::SETTLEMENT_EPSILON,
            scale: constants::CURRENCY_SCALE,
            rounding: RoundingMode::HalfUp,
        }
    }
}

impl SettlementConfig {
    /// Default config with a different rounding mode.
    #[must_use]
    pub fn with_rounding(rounding: RoundingMode) -> Self {
        Self {
            rounding,
            ..Self::default()
        }
    }

    /// Smallest representable amount at `scale` (0.01 for cents).
    #[must_use]
    pub fn minor_unit(&self) -> Decimal {
        Decimal::new(1, self.scale)
    }

    /// Round an amount to `scale` with the configured mode. The result
    /// always carries exactly `scale` decimal places (`50` becomes `50.00`).
    #[must_use]
    pub fn round(&self, amount: Decimal) -> Decimal {
        let mut rounded = amount.round_dp_with_strategy(self.scale, self.rounding.strategy());
        rounded.rescale(self.scale);
        rounded
    }

    /// Reject configurations the engine can't honour.
    ///
    /// # Errors
    /// [`XpenceError::Configuration`] for a non-positive epsilon or a scale
    /// beyond decimal precision.
    pub fn validate(&self) -> Result<()> {
        if self.epsilon <= Decimal::ZERO {
            return Err(XpenceError::Configuration(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        if self.scale > constants::MAX_CURRENCY_SCALE {
            return Err(XpenceError::Configuration(format!(
                "scale {} exceeds maximum {}",
                self.scale,
                constants::MAX_CURRENCY_SCALE
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = SettlementConfig::default();
        assert_eq!(cfg.epsilon, Decimal::new(1, 2));
        assert_eq!(cfg.scale, 2);
        assert_eq!(cfg.rounding, RoundingMode::HalfUp);
        assert_eq!(cfg.minor_unit(), Decimal::new(1, 2));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rounding_modes_differ_on_midpoint() {
        let midpoint = Decimal::new(10_005, 3);
        let up = SettlementConfig::default();
        let even = SettlementConfig::with_rounding(RoundingMode::HalfEven);
        assert_eq!(up.round(midpoint), Decimal::new(1001, 2));
        assert_eq!(even.round(midpoint), Decimal::new(1000, 2));
    }

    #[test]
    fn round_pads_to_scale() {
        let cfg = SettlementConfig::default();
        let whole = cfg.round(Decimal::new(50, 0));
        assert_eq!(whole.scale(), 2);
        assert_eq!(whole.to_string(), "50.00");
        assert_eq!(cfg.round(Decimal::new(105, 1)).to_string(), "10.50");
        assert_eq!(cfg.round(Decimal::new(10_005, 3)).to_string(), "10.01");
    }

    #[test]
    fn rejects_non_positive_epsilon() {
        let cfg = SettlementConfig {
            epsilon: Decimal::ZERO,
            ..SettlementConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, XpenceError::Configuration(_)));
    }

    #[test]
    fn rejects_huge_scale() {
        let cfg = SettlementConfig {
            scale: 40,
            ..SettlementConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn json_partial_config_uses_defaults() {
        let cfg = SettlementConfig::from_json_str(r#"{"rounding":"half_even"}"#).unwrap();
        assert_eq!(cfg.rounding, RoundingMode::HalfEven);
        assert_eq!(cfg.epsilon, Decimal::new(1, 2));
        assert_eq!(cfg.scale, 2);
    }

    #[test]
    fn json_invalid_epsilon_rejected() {
        let err = SettlementConfig::from_json_str(r#"{"epsilon":"-1"}"#).unwrap_err();
        assert!(matches!(err, XpenceError::Configuration(_)));
    }

    #[test]
    fn json_garbage_is_serialization_error() {
        let err = SettlementConfig::from_json_str("{").unwrap_err();
        assert!(matches!(err, XpenceError::Serialization(_)));
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = SettlementConfig::with_rounding(RoundingMode::HalfEven);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SettlementConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
