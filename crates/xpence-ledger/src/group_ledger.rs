//! Running balances for a single group.
//!
//! Every mutation is all-or-nothing: an expense is validated in full
//! before any balance moves, so a rejected expense leaves the ledger
//! unchanged. Because each expense credits exactly what it debits, the
//! balances of a group always sum to zero.

use std::collections::HashMap;

use rust_decimal::Decimal;
use xpence_types::{
    Expense, ExpenseId, GroupId, MemberBalance, MemberId, Result, XpenceError, constants,
};

use crate::split::resolve_shares;

/// A recorded expense together with the shares it was booked with, so
/// deletion reverses exactly what recording applied.
struct Booking {
    expense: Expense,
    shares: Vec<(MemberId, Decimal)>,
}

/// Member balances and expense history for one group.
pub struct GroupLedger {
    group_id: GroupId,
    name: String,
    /// Members in the order they joined.
    members: Vec<MemberBalance>,
    index: HashMap<MemberId, usize>,
    bookings: HashMap<ExpenseId, Booking>,
    scale: u32,
}

impl GroupLedger {
    /// Create an empty ledger at cent precision.
    #[must_use]
    pub fn new(group_id: GroupId, name: impl Into<String>) -> Self {
        Self {
            group_id,
            name: name.into(),
            members: Vec::new(),
            index: HashMap::new(),
            bookings: HashMap::new(),
            scale: constants::CURRENCY_SCALE,
        }
    }

    #[must_use]
    pub fn group_id(&self) -> GroupId {
        self.group_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a member with a zero balance.
    ///
    /// # Errors
    /// Returns `DuplicateMember` if `member_id` already belongs to the group.
    pub fn add_member(&mut self, member_id: MemberId, display_name: impl Into<String>) -> Result<()> {
        if self.index.contains_key(&member_id) {
            return Err(XpenceError::DuplicateMember(member_id));
        }
        self.index.insert(member_id, self.members.len());
        self.members
            .push(MemberBalance::new(member_id, display_name, Decimal::ZERO));
        Ok(())
    }

    #[must_use]
    pub fn is_member(&self, member_id: &MemberId) -> bool {
        self.index.contains_key(member_id)
    }

    /// Record an expense: credit the payer, debit every participant.
    ///
    /// # Errors
    /// - `DuplicateExpense` if the expense ID is already booked
    /// - `InvalidAmount` if the amount is not positive or finer than cents
    /// - `MemberNotFound` if the payer or a participant isn't in the group
    /// - `EmptySplit` / `SplitMismatch` from share resolution
    pub fn record_expense(&mut self, expense: Expense) -> Result<ExpenseId> {
        if self.bookings.contains_key(&expense.id) {
            return Err(XpenceError::DuplicateExpense(expense.id));
        }
        self.check_amount(expense.amount)?;
        let payer = self.position(expense.paid_by)?;
        let shares = resolve_shares(expense.amount, &expense.split, self.scale)?;
        let positions = shares
            .iter()
            .map(|(member, _)| self.position(*member))
            .collect::<Result<Vec<usize>>>()?;

        self.members[payer].balance += expense.amount;
        for (pos, (_, share)) in positions.iter().zip(&shares) {
            self.members[*pos].balance -= *share;
        }

        let id = expense.id;
        tracing::debug!(
            group = %self.group_id,
            expense = %id,
            payer = %expense.paid_by,
            amount = %expense.amount,
            participants = shares.len(),
            "Expense recorded"
        );
        self.bookings.insert(id, Booking { expense, shares });
        Ok(id)
    }

    /// Remove an expense and reverse its effect on balances.
    ///
    /// # Errors
    /// Returns `ExpenseNotFound` if `id` was never recorded or is already gone.
    pub fn delete_expense(&mut self, id: ExpenseId) -> Result<Expense> {
        let booking = self
            .bookings
            .remove(&id)
            .ok_or(XpenceError::ExpenseNotFound(id))?;

        // Positions were validated on record and members are never removed.
        let payer = self.position(booking.expense.paid_by)?;
        self.members[payer].balance -= booking.expense.amount;
        for (member, share) in &booking.shares {
            let pos = self.position(*member)?;
            self.members[pos].balance += *share;
        }

        tracing::debug!(group = %self.group_id, expense = %id, "Expense deleted");
        Ok(booking.expense)
    }

    /// Current balance of one member.
    ///
    /// # Errors
    /// Returns `MemberNotFound` for a non-member.
    pub fn balance_of(&self, member_id: MemberId) -> Result<Decimal> {
        Ok(self.members[self.position(member_id)?].balance)
    }

    /// Snapshot of every member's balance, in join order.
    #[must_use]
    pub fn balances(&self) -> Vec<MemberBalance> {
        self.members.clone()
    }

    /// Sum of all balances. Zero unless something bypassed the ledger.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.members.iter().map(|m| m.balance).sum()
    }

    /// Zero every balance. Expense history is kept.
    pub fn reset_balances(&mut self) {
        for member in &mut self.members {
            member.balance = Decimal::ZERO;
        }
        tracing::info!(group = %self.group_id, members = self.members.len(), "Balances reset");
    }

    #[must_use]
    pub fn expense(&self, id: &ExpenseId) -> Option<&Expense> {
        self.bookings.get(id).map(|b| &b.expense)
    }

    #[must_use]
    pub fn expense_count(&self) -> usize {
        self.bookings.len()
    }

    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    fn position(&self, member_id: MemberId) -> Result<usize> {
        self.index
            .get(&member_id)
            .copied()
            .ok_or(XpenceError::MemberNotFound(member_id))
    }

    fn check_amount(&self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(XpenceError::InvalidAmount {
                amount,
                reason: "must be positive".into(),
            });
        }
        if amount.round_dp(self.scale) != amount {
            return Err(XpenceError::InvalidAmount {
                amount,
                reason: format!("more than {} decimal places", self.scale),
            });
        }
        Ok(())
    }
}
