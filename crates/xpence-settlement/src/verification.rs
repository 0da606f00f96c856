//! Plan replay and residual detection.
//!
//! Replaying a plan moves each instruction's amount from the payer's debt
//! to the payee's credit:
//! ```text
//! from.balance += amount      (debtor owes less)
//! to.balance   -= amount      (creditor is owed less)
//! ```
//! For zero-sum input every member ends within ε of zero. With drift `r`,
//! exactly one member keeps a balance of roughly `r`.

use std::collections::HashMap;

use rust_decimal::Decimal;
use xpence_types::{MemberBalance, MemberId, Result, SettlementInstruction, XpenceError};

/// Apply `instructions` to a copy of `balances`, returning post-settlement
/// balances in input order.
///
/// # Errors
/// Returns [`XpenceError::UnknownMember`] if an instruction names a member
/// that isn't in `balances`.
pub fn apply_instructions(
    balances: &[MemberBalance],
    instructions: &[SettlementInstruction],
) -> Result<Vec<MemberBalance>> {
    let index: HashMap<MemberId, usize> = balances
        .iter()
        .enumerate()
        .map(|(idx, b)| (b.member_id, idx))
        .collect();

    let mut after = balances.to_vec();
    for ins in instructions {
        let from = *index
            .get(&ins.from_member_id)
            .ok_or(XpenceError::UnknownMember(ins.from_member_id))?;
        let to = *index
            .get(&ins.to_member_id)
            .ok_or(XpenceError::UnknownMember(ins.to_member_id))?;
        after[from].balance += ins.amount;
        after[to].balance -= ins.amount;
    }
    Ok(after)
}

/// Members whose balance is still at or beyond `epsilon`.
#[must_use]
pub fn residual_members(balances: &[MemberBalance], epsilon: Decimal) -> Vec<MemberBalance> {
    balances
        .iter()
        .filter(|b| !b.is_effectively_zero(epsilon))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_settlement;
    use xpence_types::constants::SETTLEMENT_EPSILON;

    #[test]
    fn replay_zeroes_balanced_group() {
        let balances = vec![
            MemberBalance::named("A", 10_000),
            MemberBalance::named("B", -4000),
            MemberBalance::named("C", -4000),
            MemberBalance::named("D", -2000),
        ];
        let plan = compute_settlement(&balances);
        let after = apply_instructions(&balances, &plan).unwrap();

        assert!(after.iter().all(|b| b.balance.is_zero()));
        assert!(residual_members(&after, SETTLEMENT_EPSILON).is_empty());
    }

    #[test]
    fn replay_preserves_order_and_names() {
        let balances = vec![MemberBalance::named("A", 500), MemberBalance::named("B", -500)];
        let plan = compute_settlement(&balances);
        let after = apply_instructions(&balances, &plan).unwrap();
        assert_eq!(after[0].member_id, balances[0].member_id);
        assert_eq!(after[1].display_name, "B");
    }

    #[test]
    fn drift_leaves_exactly_one_residual() {
        let balances = vec![
            MemberBalance::named("A", 3000),
            MemberBalance::named("B", -1000),
            MemberBalance::named("C", -1999),
        ];
        let plan = compute_settlement(&balances);
        let after = apply_instructions(&balances, &plan).unwrap();
        let residual = residual_members(&after, SETTLEMENT_EPSILON);

        assert_eq!(residual.len(), 1);
        assert_eq!(residual[0].member_id, balances[0].member_id);
        assert_eq!(residual[0].balance, Decimal::new(1, 2));
    }

    #[test]
    fn unknown_member_rejected() {
        let balances = vec![MemberBalance::named("A", 500)];
        let stranger = MemberId::new();
        let plan = vec![SettlementInstruction {
            from_member_id: stranger,
            to_member_id: balances[0].member_id,
            amount: Decimal::new(500, 2),
            from_display_name: "?".into(),
            to_display_name: "A".into(),
        }];
        let err = apply_instructions(&balances, &plan).unwrap_err();
        assert!(matches!(err, XpenceError::UnknownMember(id) if id == stranger));
    }

    #[test]
    fn empty_plan_is_identity() {
        let balances = vec![MemberBalance::named("A", 123), MemberBalance::named("B", -123)];
        let after = apply_instructions(&balances, &[]).unwrap();
        assert_eq!(after, balances);
        assert_eq!(residual_members(&after, SETTLEMENT_EPSILON).len(), 2);
    }
}
