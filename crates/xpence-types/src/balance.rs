//! Member balance snapshot, the input to settlement.
//!
//! A positive balance means the group owes the member (creditor), a
//! negative one means the member owes the group (debtor).

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::MemberId;

/// One participant's net position within a group at settlement time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberBalance {
    pub member_id: MemberId,
    /// Label for reporting only; never used for matching.
    pub display_name: String,
    /// Signed net amount in the group's currency.
    pub balance: Decimal,
}

impl MemberBalance {
    #[must_use]
    pub fn new(member_id: MemberId, display_name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            member_id,
            display_name: display_name.into(),
            balance,
        }
    }

    /// Build a balance from a floating-point amount as handed over by the
    /// web layer.
    ///
    /// `NaN`, infinities, and values outside the decimal range become zero
    /// so they drop out of both the creditor and the debtor side.
    #[must_use]
    pub fn from_f64(member_id: MemberId, display_name: impl Into<String>, balance: f64) -> Self {
        let display_name = display_name.into();
        let balance = if balance.is_finite() {
            Decimal::from_f64(balance).unwrap_or_else(|| {
                tracing::warn!(
                    member = %member_id,
                    name = %display_name,
                    raw = balance,
                    "Balance outside decimal range, treated as zero"
                );
                Decimal::ZERO
            })
        } else {
            tracing::warn!(
                member = %member_id,
                name = %display_name,
                raw = %balance,
                "Non-finite balance treated as zero"
            );
            Decimal::ZERO
        };
        Self {
            member_id,
            display_name,
            balance,
        }
    }

    /// Owed money by the group (beyond `epsilon`).
    #[must_use]
    pub fn is_creditor(&self, epsilon: Decimal) -> bool {
        self.balance >= epsilon
    }

    /// Owes money to the group (beyond `epsilon`).
    #[must_use]
    pub fn is_debtor(&self, epsilon: Decimal) -> bool {
        self.balance <= -epsilon
    }

    /// Whether `|balance| < epsilon`.
    #[must_use]
    pub fn is_effectively_zero(&self, epsilon: Decimal) -> bool {
        self.balance.abs() < epsilon
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl MemberBalance {
    /// Balance for a fresh member, `balance` given in cents.
    pub fn named(display_name: &str, cents: i64) -> Self {
        Self::new(MemberId::new(), display_name, Decimal::new(cents, 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SETTLEMENT_EPSILON;

    #[test]
    fn classification_respects_epsilon() {
        let creditor = MemberBalance::named("A", 3000);
        let debtor = MemberBalance::named("B", -1000);
        let dust = MemberBalance::new(MemberId::new(), "C", Decimal::new(4, 3));

        assert!(creditor.is_creditor(SETTLEMENT_EPSILON));
        assert!(!creditor.is_debtor(SETTLEMENT_EPSILON));
        assert!(debtor.is_debtor(SETTLEMENT_EPSILON));
        assert!(dust.is_effectively_zero(SETTLEMENT_EPSILON));
        assert!(!dust.is_creditor(SETTLEMENT_EPSILON));
    }

    #[test]
    fn exactly_one_cent_is_not_zero() {
        let cent = MemberBalance::named("A", 1);
        assert!(!cent.is_effectively_zero(SETTLEMENT_EPSILON));
        assert!(cent.is_creditor(SETTLEMENT_EPSILON));
    }

    #[test]
    fn from_f64_finite() {
        let b = MemberBalance::from_f64(MemberId::new(), "A", 12.5);
        assert_eq!(b.balance, Decimal::new(125, 1));
        let b = MemberBalance::from_f64(MemberId::new(), "B", -40.0);
        assert_eq!(b.balance, Decimal::new(-40, 0));
    }

    #[test]
    fn from_f64_non_finite_is_zero() {
        for raw in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let b = MemberBalance::from_f64(MemberId::new(), "X", raw);
            assert_eq!(b.balance, Decimal::ZERO, "raw={raw}");
        }
    }

    #[test]
    fn serde_roundtrip_keeps_scale() {
        let b = MemberBalance::named("Alice", 1050);
        let json = serde_json::to_string(&b).unwrap();
        assert!(json.contains("\"10.50\""), "Got: {json}");
        let back: MemberBalance = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }
}
