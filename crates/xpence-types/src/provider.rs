//! Port between the settlement workflow and whatever keeps balances.

use crate::{GroupId, MemberBalance, Result};

/// Source of per-group balance snapshots.
///
/// Implementors must return a consistent snapshot (balances summing to
/// roughly zero) and own any locking needed around read-then-reset.
pub trait BalanceSnapshotProvider {
    /// Current balances of every member of `group`.
    fn load_balances(&self, group: GroupId) -> Result<Vec<MemberBalance>>;

    /// Zero every member balance of `group` once a settlement is issued.
    fn reset_balances(&mut self, group: GroupId) -> Result<()>;
}
