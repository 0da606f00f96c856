//! # xpence-ledger
//!
//! **Balance bookkeeping** upstream of the settlement engine.
//!
//! ## Architecture
//!
//! 1. **split**: turns an expense's [`Split`](xpence_types::Split) into per-member shares
//! 2. **GroupLedger**: running balances for one group. The payer is credited and
//!    participants debited, so the group always sums to exactly zero
//! 3. **LedgerBook**: all groups; implements
//!    [`BalanceSnapshotProvider`](xpence_types::BalanceSnapshotProvider)
//!    so the settlement workflow can read and reset balances
//!
//! ```text
//! record_expense() → resolve_shares() → credit payer / debit participants
//!     → LedgerBook.load_balances() → settlement → LedgerBook.reset_balances()
//! ```

pub mod book;
pub mod group_ledger;
pub mod split;

pub use book::LedgerBook;
pub use group_ledger::GroupLedger;
pub use split::resolve_shares;
