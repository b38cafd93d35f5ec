//! Reward state and multiplier flags.

use serde::{Deserialize, Serialize};

/// Persistent reward bookkeeping, kept alongside the mission ledger.
///
/// The available balance is never stored; it is recomputed on demand
/// from this state plus the ledger (see [`crate::balance`]).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RewardState {
    /// User-settable base balance offset, entered as non-negative
    pub manual_adjustment: i64,

    /// Monotonically increasing sum of all completed purchases
    pub cumulative_spend: i64,
}

/// Independent multiplier toggles, each contributing a x2 factor.
///
/// Session state only: never persisted, the caller supplies them per
/// interaction.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Multipliers {
    /// "Double BP" toggle
    pub double: bool,

    /// "VIP bonus tier" toggle
    pub vip: bool,
}

impl Multipliers {
    /// Effective multiplier: the product of active factors.
    /// Both flags active compose to x4.
    pub fn factor(&self) -> i64 {
        let mut factor = 1;
        if self.double {
            factor *= 2;
        }
        if self.vip {
            factor *= 2;
        }
        factor
    }
}
