//! Mission model definition and the reward threshold rule.

use serde::{Deserialize, Serialize};

/// Progress count at which a mission's reward is granted, capped at 5.
///
/// Missions with `target_count < 5` earn at `target_count`; missions
/// with `target_count >= 5` earn at the 5th repetition and repeating
/// further within the same cycle yields nothing extra. The constant is
/// deliberate game balance and must not be generalized.
pub const REWARD_THRESHOLD_CAP: u32 = 5;

fn default_visible() -> bool {
    true
}

/// A recurring or one-off mission tracked by the ledger.
///
/// Progress, completion and the reward-granted flag are scoped to one
/// earning cycle; the daily reset zeroes all three.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Mission {
    /// Opaque stable identifier, unique within the ledger
    pub id: String,

    /// Display title
    pub title: String,

    /// Optional display description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Reward granted per completed cycle, before multipliers
    pub base_reward: u32,

    /// Number of increments that constitute one full cycle (>= 1)
    pub target_count: u32,

    /// Current cycle's tally, always in `[0, target_count]`
    #[serde(default)]
    pub progress_count: u32,

    /// Whether the mission is done for the current cycle
    #[serde(default)]
    pub completed: bool,

    /// True exactly when this cycle's reward has been counted.
    /// Defaults to false on load so snapshots written before the flag
    /// existed migrate cleanly.
    #[serde(default)]
    pub reward_granted: bool,

    /// Presentation filter only; no reward interaction. Defaults to
    /// true on load for the same migration reason.
    #[serde(default = "default_visible")]
    pub visible: bool,
}

impl Mission {
    /// The progress count at which this mission's reward is granted.
    pub fn reward_threshold(&self) -> u32 {
        self.target_count.min(REWARD_THRESHOLD_CAP)
    }

    /// Whether the current progress has reached the full target.
    pub fn at_target(&self) -> bool {
        self.progress_count >= self.target_count
    }

    /// Whether this is a single-toggle mission (no counter in the UI).
    pub fn is_one_shot(&self) -> bool {
        self.target_count == 1
    }
}
