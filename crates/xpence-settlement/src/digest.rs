//! Settlement plan fingerprint.
//!
//! The same balances always produce the same plan, so a digest over the
//! ordered instructions lets a caller check that a stored or displayed plan
//! matches a fresh recomputation without comparing full payloads.

use sha2::{Digest, Sha256};
use xpence_types::{SettlementInstruction, constants};

/// SHA-256 over the ordered plan.
///
/// Covers payer and payee IDs and the normalized amount of every
/// instruction. Display names are labels only and are left out.
#[must_use]
pub fn compute_plan_digest(instructions: &[SettlementInstruction]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(constants::PLAN_DIGEST_DOMAIN);
    hasher.update((instructions.len() as u64).to_le_bytes());

    for ins in instructions {
        hasher.update(ins.from_member_id.0.as_bytes());
        hasher.update(ins.to_member_id.0.as_bytes());
        hasher.update(ins.amount.normalize().to_string().as_bytes());
        hasher.update(b";");
    }

    let result = hasher.finalize();
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&result);
    digest
}

/// Recompute the digest and compare with `expected`.
#[must_use]
pub fn verify_plan_digest(instructions: &[SettlementInstruction], expected: &[u8; 32]) -> bool {
    compute_plan_digest(instructions) == *expected
}
