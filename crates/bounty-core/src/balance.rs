//! Reward aggregation.
//!
//! The available balance is a pure function of the mission ledger and
//! the reward state. It is recomputed on demand from canonical state,
//! never cached, so it cannot go stale relative to the ledger.

use crate::models::{Mission, Multipliers, RewardState};

/// Sum of base rewards across missions whose reward has been granted
/// this cycle.
pub fn earned_bp(missions: &[Mission]) -> i64 {
    missions
        .iter()
        .filter(|m| m.reward_granted)
        .map(|m| i64::from(m.base_reward))
        .sum()
}

/// Earned BP with the effective multiplier applied.
///
/// The factor is applied once to the aggregate, not per mission. The
/// factors are integral powers of two, so the product is exact and no
/// rounding drift can accumulate.
pub fn displayed_bp(earned: i64, multipliers: Multipliers) -> i64 {
    earned * multipliers.factor()
}

/// The single authoritative available balance:
/// manual adjustment plus multiplied earnings, net of all spend.
///
/// May be negative at display time if spend exceeds adjusted earnings;
/// the shop refuses any purchase the current value cannot cover.
pub fn available_balance(
    missions: &[Mission],
    reward: RewardState,
    multipliers: Multipliers,
) -> i64 {
    let displayed = displayed_bp(earned_bp(missions), multipliers);
    reward.manual_adjustment + displayed - reward.cumulative_spend
}
