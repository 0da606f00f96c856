//! Greedy settlement computation.
//!
//! ```text
//! compute_settlement(&[MemberBalance]) -> Vec<SettlementInstruction>
//! ```
//!
//! ## Algorithm
//!
//! 1. Partition into creditors (`balance ≥ ε`) and debtors (`balance ≤ -ε`);
//!    everything else is already settled and takes no part
//! 2. Debtors carry the absolute amount owed
//! 3. Stable-sort both sides descending, so ties keep input order
//! 4. Walk both lists with one cursor each: pay `min(creditor, debtor)`
//!    from the debtor to the creditor, then advance every cursor whose
//!    remaining amount dropped below ε
//! 5. Stop as soon as either side is exhausted
//!
//! Each step drains at least one party, so a plan never exceeds
//! `creditors + debtors - 1` instructions. Greedy matching is not always
//! the true minimum (that is a partition problem), but it is deterministic
//! and exact for the common case.
//!
//! If the input doesn't sum to zero, the unexhausted side keeps its
//! remainder and no instruction is emitted for it. That is not an error.

use rust_decimal::Decimal;
use xpence_types::{MemberBalance, SettlementConfig, SettlementInstruction};

/// Working copy of one party: input stays untouched.
struct Party<'a> {
    member: &'a MemberBalance,
    remaining: Decimal,
}

impl Party<'_> {
    fn is_drained(&self, epsilon: Decimal) -> bool {
        self.remaining <= Decimal::ZERO || self.remaining < epsilon
    }
}

/// Compute settlement instructions with the default configuration
/// (ε = 0.01, two decimal places, round half up).
#[must_use]
pub fn compute_settlement(balances: &[MemberBalance]) -> Vec<SettlementInstruction> {
    compute_settlement_with(&SettlementConfig::default(), balances)
}

/// Compute settlement instructions under an explicit configuration.
///
/// Instructions come out in processing order: largest creditor first,
/// draining it across debtors from the largest down.
#[must_use]
pub fn compute_settlement_with(
    config: &SettlementConfig,
    balances: &[MemberBalance],
) -> Vec<SettlementInstruction> {
    let epsilon = config.epsilon;

    let mut creditors: Vec<Party<'_>> = balances
        .iter()
        .filter(|b| b.is_creditor(epsilon))
        .map(|member| Party {
            member,
            remaining: member.balance,
        })
        .collect();
    let mut debtors: Vec<Party<'_>> = balances
        .iter()
        .filter(|b| b.is_debtor(epsilon))
        .map(|member| Party {
            member,
            remaining: member.balance.abs(),
        })
        .collect();

    // `sort_by` is stable: equal amounts keep their input order.
    creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

    let mut instructions = Vec::with_capacity(creditors.len() + debtors.len());
    let mut creditor_idx = 0;
    let mut debtor_idx = 0;

    while creditor_idx < creditors.len() && debtor_idx < debtors.len() {
        let creditor = &mut creditors[creditor_idx];
        let debtor = &mut debtors[debtor_idx];

        let amount = creditor.remaining.min(debtor.remaining);
        let rounded = config.round(amount);

        if rounded > Decimal::ZERO {
            tracing::debug!(
                from = %debtor.member.member_id,
                to = %creditor.member.member_id,
                amount = %rounded,
                "Settlement instruction"
            );
            instructions.push(SettlementInstruction {
                from_member_id: debtor.member.member_id,
                to_member_id: creditor.member.member_id,
                amount: rounded,
                from_display_name: debtor.member.display_name.clone(),
                to_display_name: creditor.member.display_name.clone(),
            });
        }

        creditor.remaining -= amount;
        debtor.remaining -= amount;

        if creditor.is_drained(epsilon) {
            creditor_idx += 1;
        }
        if debtor.is_drained(epsilon) {
            debtor_idx += 1;
        }
    }

    let leftover: Decimal = creditors[creditor_idx..]
        .iter()
        .map(|p| p.remaining)
        .sum::<Decimal>()
        - debtors[debtor_idx..]
            .iter()
            .map(|p| p.remaining)
            .sum::<Decimal>();

    tracing::info!(
        members = balances.len(),
        creditors = creditors.len(),
        debtors = debtors.len(),
        instructions = instructions.len(),
        leftover = %leftover,
        "Settlement computed"
    );

    instructions
}

/// Whether every balance is within ε (0.01) of zero. Empty input is settled.
#[must_use]
pub fn is_settled(balances: &[MemberBalance]) -> bool {
    is_settled_with(&SettlementConfig::default(), balances)
}

/// [`is_settled`] with an explicit ε, taken from `config`.
#[must_use]
pub fn is_settled_with(config: &SettlementConfig, balances: &[MemberBalance]) -> bool {
    balances
        .iter()
        .all(|b| b.is_effectively_zero(config.epsilon))
}

/// Arithmetic sum of all balances. Should be ~0 for consistent bookkeeping;
/// anything else is upstream drift.
#[must_use]
pub fn sum_balances(balances: &[MemberBalance]) -> Decimal {
    balances.iter().map(|b| b.balance).sum()
}
