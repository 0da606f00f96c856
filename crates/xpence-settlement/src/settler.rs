//! The "settle group" workflow.
//!
//! An admin triggers settlement for a group:
//! 1. Load the current balance snapshot from the provider
//! 2. If already settled, short-circuit with an empty plan (balances untouched)
//! 3. Compute the plan, its digest, and the snapshot's drift
//! 4. Warn when drift reaches ε: some member will keep a residual
//! 5. Reset the group's balances through the provider
//! 6. Hand back a [`SettlementOutcome`] for display and notification

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use xpence_types::{
    BalanceSnapshotProvider, GroupId, MemberBalance, Result, SettlementConfig,
    SettlementInstruction,
};

use crate::{
    compute_plan_digest, compute_settlement_with, is_settled_with, sum_balances,
    verification::{apply_instructions, residual_members},
};

/// Result of one settle-group run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementOutcome {
    pub group_id: GroupId,
    /// Payments to make, in processing order.
    pub instructions: Vec<SettlementInstruction>,
    /// Sum of the snapshot's balances. Zero for consistent bookkeeping.
    pub drift: Decimal,
    /// Members left with a balance ≥ ε after applying the plan.
    pub residual: Vec<MemberBalance>,
    /// Fingerprint of `instructions`.
    pub digest: [u8; 32],
    /// The group needed no settlement and balances were left as-is.
    pub already_settled: bool,
    pub settled_at: DateTime<Utc>,
}

impl SettlementOutcome {
    /// Total amount moved by the plan.
    #[must_use]
    pub fn total_transferred(&self) -> Decimal {
        self.instructions.iter().map(|ins| ins.amount).sum()
    }

    /// Whether the plan leaves somebody unsettled.
    #[must_use]
    pub fn has_residual(&self) -> bool {
        !self.residual.is_empty()
    }

    #[must_use]
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }

    /// One human-readable line per payment, e.g. `"Bob pays Alice 10.00"`.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        self.instructions.iter().map(ToString::to_string).collect()
    }
}

/// Runs settlement for groups whose balances live behind a
/// [`BalanceSnapshotProvider`].
///
/// Owning the provider means the snapshot read and the reset happen under
/// the same `&mut self` borrow.
pub struct GroupSettler<P> {
    provider: P,
    config: SettlementConfig,
}

impl<P: BalanceSnapshotProvider> GroupSettler<P> {
    /// Settler with the default configuration.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            config: SettlementConfig::default(),
        }
    }

    /// Settler with a validated custom configuration.
    ///
    /// # Errors
    /// [`XpenceError::Configuration`](xpence_types::XpenceError::Configuration)
    /// if `config` fails validation.
    pub fn with_config(provider: P, config: SettlementConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { provider, config })
    }

    #[must_use]
    pub fn config(&self) -> &SettlementConfig {
        &self.config
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    #[must_use]
    pub fn into_provider(self) -> P {
        self.provider
    }

    /// Settle `group`.
    ///
    /// Drift in the snapshot is reported through the outcome and logged; it
    /// doesn't fail the run, and balances are still reset afterwards.
    ///
    /// # Errors
    /// Propagates provider errors from loading or resetting balances.
    pub fn settle_group(&mut self, group: GroupId) -> Result<SettlementOutcome> {
        let balances = self.provider.load_balances(group)?;

        if is_settled_with(&self.config, &balances) {
            tracing::info!(group = %group, members = balances.len(), "Group already settled");
            return Ok(SettlementOutcome {
                group_id: group,
                instructions: Vec::new(),
                drift: sum_balances(&balances),
                residual: Vec::new(),
                digest: compute_plan_digest(&[]),
                already_settled: true,
                settled_at: Utc::now(),
            });
        }

        let instructions = compute_settlement_with(&self.config, &balances);
        let drift = sum_balances(&balances);
        let after = apply_instructions(&balances, &instructions)?;
        let residual = residual_members(&after, self.config.epsilon);
        let digest = compute_plan_digest(&instructions);

        if drift.abs() >= self.config.epsilon || !residual.is_empty() {
            tracing::warn!(
                group = %group,
                drift = %drift,
                residual_members = residual.len(),
                "Balances do not net to zero; settlement leaves a residual"
            );
        }

        self.provider.reset_balances(group)?;

        tracing::info!(
            group = %group,
            members = balances.len(),
            instructions = instructions.len(),
            digest = hex::encode(digest),
            "Group settled"
        );

        Ok(SettlementOutcome {
            group_id: group,
            instructions,
            drift,
            residual,
            digest,
            already_settled: false,
            settled_at: Utc::now(),
        })
    }
}
