//! Expense share resolution.
//!
//! Shares always add up to the expense amount exactly. Equal splits work in
//! minor units: every participant gets the truncated even share, then the
//! leftover units go one each to the first participants in split order.

use rust_decimal::{Decimal, RoundingStrategy};
use xpence_types::{MemberId, Result, Split, XpenceError};

/// Per-member shares of `amount` under `split`, at `scale` decimal places.
///
/// # Errors
/// - `EmptySplit` if there are no participants
/// - `InvalidAmount` for a negative exact share or one finer than `scale`
/// - `SplitMismatch` if exact shares don't sum to `amount`
pub fn resolve_shares(
    amount: Decimal,
    split: &Split,
    scale: u32,
) -> Result<Vec<(MemberId, Decimal)>> {
    if split.is_empty() {
        return Err(XpenceError::EmptySplit);
    }
    match split {
        Split::Equal(members) => Ok(equal_shares(amount, members, scale)),
        Split::Exact(shares) => {
            if let Some((_, negative)) = shares.iter().find(|(_, s)| s.is_sign_negative()) {
                return Err(XpenceError::InvalidAmount {
                    amount: *negative,
                    reason: "share must not be negative".into(),
                });
            }
            if let Some((_, fine)) = shares.iter().find(|(_, s)| s.round_dp(scale) != *s) {
                return Err(XpenceError::InvalidAmount {
                    amount: *fine,
                    reason: format!("share has more than {scale} decimal places"),
                });
            }
            let total: Decimal = shares.iter().map(|(_, s)| *s).sum();
            if total != amount {
                return Err(XpenceError::SplitMismatch {
                    shares: total,
                    amount,
                });
            }
            Ok(shares.clone())
        }
    }
}

fn equal_shares(amount: Decimal, members: &[MemberId], scale: u32) -> Vec<(MemberId, Decimal)> {
    let count = Decimal::from(members.len());
    let base = (amount / count).round_dp_with_strategy(scale, RoundingStrategy::ToZero);
    let minor = Decimal::new(1, scale);

    let mut leftover = amount - base * count;
    let mut shares: Vec<(MemberId, Decimal)> = members.iter().map(|m| (*m, base)).collect();
    for (_, share) in &mut shares {
        if leftover < minor {
            break;
        }
        *share += minor;
        leftover -= minor;
    }
    shares
}
