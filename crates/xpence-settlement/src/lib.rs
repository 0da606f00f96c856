//! # xpence-settlement
//!
//! **Settlement engine** for Xpence Tracker groups.
//!
//! ## Architecture
//!
//! The engine is a set of pure functions over a balance snapshot:
//! 1. [`compute_settlement`]: greedy largest-creditor / largest-debtor matching
//! 2. [`is_settled`]: whether every balance is already within epsilon of zero
//! 3. [`sum_balances`]: drift diagnostic, ~0 for consistent bookkeeping
//!
//! Around it:
//! - [`verification`]: replay a plan against its input balances
//! - [`digest`]: SHA-256 fingerprint of an ordered plan
//! - [`GroupSettler`]: the admin "settle group" workflow over a
//!   [`BalanceSnapshotProvider`](xpence_types::BalanceSnapshotProvider)
//!
//! ```text
//! provider.load_balances() → is_settled? → compute_settlement()
//!     → digest + drift check → provider.reset_balances() → SettlementOutcome
//! ```

pub mod digest;
pub mod engine;
pub mod settler;
pub mod verification;

pub use digest::{compute_plan_digest, verify_plan_digest};
pub use engine::{
    compute_settlement, compute_settlement_with, is_settled, is_settled_with, sum_balances,
};
pub use settler::{GroupSettler, SettlementOutcome};
pub use verification::{apply_instructions, residual_members};
