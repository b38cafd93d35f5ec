//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::datetime::Cooldown;
use crate::tracker::{PurchaseOutcome, RejectReason};

/// Breakdown of the available balance for display.
///
/// Every field is recomputed from canonical state by the caller; this
/// wrapper only formats.
pub struct BalanceSheet {
    pub earned: i64,
    pub factor: i64,
    pub adjustment: i64,
    pub spend: i64,
    pub available: i64,
}

impl fmt::Display for BalanceSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Balance")?;
        writeln!(f)?;
        if self.factor > 1 {
            writeln!(
                f,
                "- Earned this cycle: {} BP (x{} multiplier -> {} BP)",
                self.earned,
                self.factor,
                self.earned * self.factor
            )?;
        } else {
            writeln!(f, "- Earned this cycle: {} BP", self.earned)?;
        }
        writeln!(f, "- Initial adjustment: {} BP", self.adjustment)?;
        writeln!(f, "- Spent in the shop: {} BP", self.spend)?;
        writeln!(f)?;
        writeln!(f, "**Available: {} BP**", self.available)
    }
}

/// Wrapper for displaying the outcome of a purchase attempt.
///
/// Accepted purchases print a receipt; typed rejections print the
/// reason the caller can act on (top up, or wait out the cooldown).
pub struct PurchaseResult(pub PurchaseOutcome);

impl fmt::Display for PurchaseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            PurchaseOutcome::Accepted(receipt) => {
                writeln!(
                    f,
                    "Purchased **{}** for {} BP.",
                    receipt.item.name, receipt.item.price
                )?;
                writeln!(f)?;
                writeln!(f, "Available balance: {} BP", receipt.balance_after)
            }
            PurchaseOutcome::Rejected(RejectReason::InsufficientFunds { price, balance }) => {
                writeln!(
                    f,
                    "Not enough BP: the item costs {price} BP but only {balance} BP is available."
                )
            }
            PurchaseOutcome::Rejected(RejectReason::OnCooldown { remaining_ms }) => {
                writeln!(
                    f,
                    "On cooldown: available again in {}.",
                    Cooldown(*remaining_ms)
                )
            }
        }
    }
}
