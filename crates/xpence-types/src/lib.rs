//! # xpence-types
//!
//! Shared types, errors, and configuration for **Xpence Tracker**.
//!
//! This crate is the leaf dependency of the workspace; every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`MemberId`], [`GroupId`], [`ExpenseId`]
//! - **Settlement input**: [`MemberBalance`]
//! - **Settlement output**: [`SettlementInstruction`]
//! - **Expense model**: [`Expense`], [`Split`]
//! - **Configuration**: [`SettlementConfig`], [`RoundingMode`]
//! - **Ports**: [`BalanceSnapshotProvider`]
//! - **Errors**: [`XpenceError`] with `XP_ERR_` prefix codes
//! - **Constants**: epsilon, currency scale, limits

pub mod balance;
pub mod config;
pub mod constants;
pub mod error;
pub mod expense;
pub mod ids;
pub mod instruction;
pub mod provider;

pub use balance::*;
pub use config::*;
pub use error::*;
pub use expense::*;
pub use ids::*;
pub use instruction::*;
pub use provider::*;

// Constants are accessed via `xpence_types::constants::FOO`
// (not re-exported to avoid name collisions).
