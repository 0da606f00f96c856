//! Settlement instructions produced by the settlement engine.
//!
//! A [`SettlementInstruction`] is one directed payment: the debtor pays the
//! creditor `amount`, already rounded to the currency's minor unit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::MemberId;

/// One directed payment that moves the group toward zero balances.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettlementInstruction {
    /// The paying member (a debtor).
    pub from_member_id: MemberId,
    /// The receiving member (a creditor).
    pub to_member_id: MemberId,
    /// Positive amount at currency precision.
    pub amount: Decimal,
    pub from_display_name: String,
    pub to_display_name: String,
}

impl SettlementInstruction {
    /// Whether payer and payee are the same member.
    #[must_use]
    pub fn is_self_payment(&self) -> bool {
        self.from_member_id == self.to_member_id
    }
}

impl std::fmt::Display for SettlementInstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} pays {} {}",
            self.from_display_name, self.to_display_name, self.amount
        )
    }
}
