//! Identifiers used throughout Xpence Tracker.
//!
//! All entity IDs use UUIDv7 for time-ordered lexicographic sorting.
//! The settlement engine treats them as opaque: it only compares them.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// MemberId
// ---------------------------------------------------------------------------

/// Identifier of a group member, unique within its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct MemberId(pub Uuid);

impl MemberId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }
}

impl Default for MemberId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// GroupId
// ---------------------------------------------------------------------------

/// Identifier of a Friends or Organization group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct GroupId(pub Uuid);

impl GroupId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }
}

impl Default for GroupId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// ExpenseId
// ---------------------------------------------------------------------------

/// Identifier of a recorded expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ExpenseId(pub Uuid);

impl ExpenseId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expense:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_id_uniqueness() {
        let a = MemberId::new();
        let b = MemberId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn member_id_ordering() {
        let a = MemberId::new();
        let b = MemberId::new();
        assert!(a < b);
    }

    #[test]
    fn from_bytes_is_stable() {
        assert_eq!(MemberId::from_bytes([7; 16]), MemberId::from_bytes([7; 16]));
        assert_ne!(GroupId::from_bytes([1; 16]), GroupId::from_bytes([2; 16]));
    }

    #[test]
    fn display_prefixes() {
        let group = GroupId::from_bytes([0; 16]);
        assert!(format!("{group}").starts_with("group:"));
        let expense = ExpenseId::new();
        assert!(format!("{expense}").starts_with("expense:"));
    }

    #[test]
    fn serde_roundtrips() {
        let id = MemberId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: MemberId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
