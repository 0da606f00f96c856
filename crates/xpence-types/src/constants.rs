//! System-wide constants for Xpence Tracker.

use rust_decimal::Decimal;

/// Decimal places of the group currency's minor unit (cents).
pub const CURRENCY_SCALE: u32 = 2;

/// Largest scale `rust_decimal` can represent.
pub const MAX_CURRENCY_SCALE: u32 = 28;

/// Balances with an absolute value below this are treated as settled (0.01).
pub const SETTLEMENT_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Domain separator for settlement plan digests.
pub const PLAN_DIGEST_DOMAIN: &[u8] = b"xpence:settlement_plan:v1:";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epsilon_is_one_cent() {
        assert_eq!(SETTLEMENT_EPSILON, Decimal::new(1, 2));
        assert_eq!(SETTLEMENT_EPSILON.to_string(), "0.01");
    }
}
