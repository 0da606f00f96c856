//! Error types for Xpence Tracker.
//!
//! All errors use the `XP_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Group / member errors
//! - 2xx: Expense errors
//! - 6xx: Settlement errors
//! - 9xx: General / internal errors
//!
//! The settlement computation itself never fails; these errors come from
//! the ledger, plan replay, and configuration layers around it.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{ExpenseId, GroupId, MemberId};

/// Central error enum for all Xpence operations.
#[derive(Debug, Error)]
pub enum XpenceError {
    // =================================================================
    // Group / Member Errors (1xx)
    // =================================================================
    /// No ledger exists for this group.
    #[error("XP_ERR_100: Group not found: {0}")]
    GroupNotFound(GroupId),

    /// The member is not part of the group.
    #[error("XP_ERR_101: Member not found: {0}")]
    MemberNotFound(MemberId),

    /// A member with this ID was already added to the group.
    #[error("XP_ERR_102: Member already exists: {0}")]
    DuplicateMember(MemberId),

    /// A settlement instruction references a member absent from the snapshot.
    #[error("XP_ERR_103: Instruction references unknown member: {0}")]
    UnknownMember(MemberId),

    // =================================================================
    // Expense Errors (2xx)
    // =================================================================
    /// Expense amount is zero, negative, or finer than the currency scale.
    #[error("XP_ERR_200: Invalid amount: {amount} ({reason})")]
    InvalidAmount { amount: Decimal, reason: String },

    /// The expense has no participants to split between.
    #[error("XP_ERR_201: Expense split has no participants")]
    EmptySplit,

    /// Exact shares don't add up to the expense amount.
    #[error("XP_ERR_202: Split shares sum to {shares}, expense amount is {amount}")]
    SplitMismatch { shares: Decimal, amount: Decimal },

    /// The requested expense was never recorded (or was already deleted).
    #[error("XP_ERR_203: Expense not found: {0}")]
    ExpenseNotFound(ExpenseId),

    /// An expense with this ID is already booked in the group.
    #[error("XP_ERR_204: Expense already recorded: {0}")]
    DuplicateExpense(ExpenseId),

    // =================================================================
    // Settlement Errors (6xx)
    // =================================================================
    /// The settle-group workflow could not complete.
    #[error("XP_ERR_600: Settlement failed: {reason}")]
    SettlementFailed { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("XP_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Serialization / deserialization error.
    #[error("XP_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (bad epsilon, unsupported scale, etc.).
    #[error("XP_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, XpenceError>;

impl From<serde_json::Error> for XpenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = XpenceError::MemberNotFound(MemberId::new());
        let msg = format!("{err}");
        assert!(msg.starts_with("XP_ERR_101"), "Got: {msg}");
    }

    #[test]
    fn split_mismatch_display() {
        let err = XpenceError::SplitMismatch {
            shares: Decimal::new(9000, 2),
            amount: Decimal::new(10000, 2),
        };
        let msg = format!("{err}");
        assert!(msg.contains("XP_ERR_202"));
        assert!(msg.contains("90.00"));
        assert!(msg.contains("100.00"));
    }

    #[test]
    fn serde_json_error_converts() {
        let raw = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: XpenceError = raw.into();
        assert!(matches!(err, XpenceError::Serialization(_)));
    }

    #[test]
    fn all_errors_have_xp_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(XpenceError::GroupNotFound(GroupId::new())),
            Box::new(XpenceError::EmptySplit),
            Box::new(XpenceError::ExpenseNotFound(ExpenseId::new())),
            Box::new(XpenceError::DuplicateExpense(ExpenseId::new())),
            Box::new(XpenceError::Internal("test".into())),
            Box::new(XpenceError::SettlementFailed {
                reason: "provider offline".into(),
            }),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("XP_ERR_"),
                "Error missing XP_ERR_ prefix: {msg}"
            );
        }
    }
}
