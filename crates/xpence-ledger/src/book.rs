//! All group ledgers, exposed to settlement as a snapshot provider.

use std::collections::HashMap;

use xpence_types::{BalanceSnapshotProvider, GroupId, MemberBalance, Result, XpenceError};

use crate::GroupLedger;

/// In-memory store of every group's ledger.
#[derive(Default)]
pub struct LedgerBook {
    groups: HashMap<GroupId, GroupLedger>,
}

impl LedgerBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new, empty group and return its ID.
    pub fn create_group(&mut self, name: impl Into<String>) -> GroupId {
        let id = GroupId::new();
        self.groups.insert(id, GroupLedger::new(id, name));
        id
    }

    /// Look up a group's ledger.
    ///
    /// # Errors
    /// Returns `GroupNotFound` for an unknown group.
    pub fn group(&self, id: GroupId) -> Result<&GroupLedger> {
        self.groups.get(&id).ok_or(XpenceError::GroupNotFound(id))
    }

    /// Mutable access to a group's ledger.
    ///
    /// # Errors
    /// Returns `GroupNotFound` for an unknown group.
    pub fn group_mut(&mut self, id: GroupId) -> Result<&mut GroupLedger> {
        self.groups
            .get_mut(&id)
            .ok_or(XpenceError::GroupNotFound(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl BalanceSnapshotProvider for LedgerBook {
    fn load_balances(&self, group: GroupId) -> Result<Vec<MemberBalance>> {
        Ok(self.group(group)?.balances())
    }

    fn reset_balances(&mut self, group: GroupId) -> Result<()> {
        self.group_mut(group)?.reset_balances();
        Ok(())
    }
}
