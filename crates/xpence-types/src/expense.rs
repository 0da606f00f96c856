//! Expense model for Friends groups.
//!
//! An expense credits its payer with the full amount and debits each
//! participant with their share, so every recorded expense nets to zero.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ExpenseId, MemberId};

/// How an expense is divided between participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Split {
    /// Even shares; leftover minor units go to the first participants.
    Equal(Vec<MemberId>),
    /// Explicit per-member shares that must add up to the amount.
    Exact(Vec<(MemberId, Decimal)>),
}

impl Split {
    /// Members taking a share, in split order.
    #[must_use]
    pub fn participants(&self) -> Vec<MemberId> {
        match self {
            Self::Equal(members) => members.clone(),
            Self::Exact(shares) => shares.iter().map(|(id, _)| *id).collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Equal(members) => members.is_empty(),
            Self::Exact(shares) => shares.is_empty(),
        }
    }
}

/// A single shared expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    /// Total paid, positive, at currency precision.
    pub amount: Decimal,
    pub paid_by: MemberId,
    pub split: Split,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        amount: Decimal,
        paid_by: MemberId,
        split: Split,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            paid_by,
            split,
            created_at: Utc::now(),
        }
    }

    /// Shorthand for an evenly split expense.
    #[must_use]
    pub fn equal(
        description: impl Into<String>,
        amount: Decimal,
        paid_by: MemberId,
        participants: Vec<MemberId>,
    ) -> Self {
        Self::new(description, amount, paid_by, Split::Equal(participants))
    }
}

impl std::fmt::Display for Expense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Expense[{}] {} {} paid by {}",
            self.id, self.description, self.amount, self.paid_by
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participants_in_split_order() {
        let a = MemberId::from_bytes([1; 16]);
        let b = MemberId::from_bytes([2; 16]);
        let exact = Split::Exact(vec![(b, Decimal::ONE), (a, Decimal::TWO)]);
        assert_eq!(exact.participants(), vec![b, a]);
        assert!(!exact.is_empty());
        assert!(Split::Equal(vec![]).is_empty());
    }

    #[test]
    fn expense_display() {
        let payer = MemberId::new();
        let e = Expense::equal("Dinner", Decimal::new(9000, 2), payer, vec![payer]);
        let s = format!("{e}");
        assert!(s.contains("Dinner"));
        assert!(s.contains("90.00"));
    }

    #[test]
    fn expense_serde_roundtrip() {
        let payer = MemberId::new();
        let e = Expense::equal("Taxi", Decimal::new(2550, 2), payer, vec![payer]);
        let json = serde_json::to_string(&e).unwrap();
        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(e.id, back.id);
        assert_eq!(e.amount, back.amount);
        assert_eq!(e.split, back.split);
    }
}
