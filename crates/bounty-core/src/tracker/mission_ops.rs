//! Mission ledger operations and the daily reset.
//!
//! The award policy lives here: each mutation is followed, within the
//! same call, by a re-check of the mission's reward threshold
//! (`min(target_count, 5)`), granting the reward the first time the
//! threshold is met in a cycle and revoking it the moment progress
//! falls back below it. A user can never earn, decrement and keep the
//! reward.

use jiff::Timestamp;

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    models::Mission,
    params::{MissionId, SetVisible},
};

impl Tracker {
    fn mission_mut(&mut self, id: &str) -> Result<&mut Mission> {
        self.missions
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| TrackerError::MissionNotFound { id: id.to_string() })
    }

    /// Toggles a mission's completion flag.
    ///
    /// At the progress cap the mission is forced complete and cannot
    /// be un-toggled by clicking; only a decrement can reduce it. For
    /// one-shot missions the reward follows the flag: toggling on
    /// grants it once, toggling off revokes it, and a later re-toggle
    /// grants it again without double counting.
    pub fn toggle_complete(&mut self, params: &MissionId) -> Result<&Mission> {
        let mission = self.mission_mut(&params.id)?;

        if mission.at_target() {
            mission.completed = true;
            if mission.is_one_shot() && !mission.reward_granted {
                mission.reward_granted = true;
            }
        } else {
            mission.completed = !mission.completed;
            if mission.is_one_shot() {
                // For one-shot missions the completion flag is the
                // award threshold.
                mission.reward_granted = mission.completed;
            }
        }

        self.persist();
        self.mission(&params.id)
    }

    /// Increments a mission's progress, clamped to the target.
    ///
    /// Reaching the target forces completion; reaching the reward
    /// threshold grants the reward exactly once per cycle.
    pub fn increment(&mut self, params: &MissionId) -> Result<&Mission> {
        let mission = self.mission_mut(&params.id)?;

        mission.progress_count = (mission.progress_count + 1).min(mission.target_count);
        if mission.at_target() {
            mission.completed = true;
        }
        if mission.progress_count >= mission.reward_threshold() && !mission.reward_granted {
            mission.reward_granted = true;
        }

        self.persist();
        self.mission(&params.id)
    }

    /// Decrements a mission's progress, clamped to zero.
    ///
    /// Dropping below the target un-completes the mission; dropping
    /// below the reward threshold withdraws an already-granted reward.
    pub fn decrement(&mut self, params: &MissionId) -> Result<&Mission> {
        let mission = self.mission_mut(&params.id)?;

        mission.progress_count = mission.progress_count.saturating_sub(1);
        if !mission.at_target() {
            mission.completed = false;
        }
        if mission.progress_count < mission.reward_threshold() && mission.reward_granted {
            mission.reward_granted = false;
        }

        self.persist();
        self.mission(&params.id)
    }

    /// Sets a mission's visibility flag. Pure presentation filter; no
    /// reward interaction.
    pub fn set_visible(&mut self, params: &SetVisible) -> Result<&Mission> {
        let mission = self.mission_mut(&params.id)?;
        mission.visible = params.visible;

        self.persist();
        self.mission(&params.id)
    }

    /// Sets the manual balance adjustment.
    ///
    /// Negative amounts are rejected at the boundary without mutating
    /// any state.
    pub fn set_initial_balance(&mut self, amount: i64) -> Result<i64> {
        if amount < 0 {
            return Err(TrackerError::invalid_input("initial_bp")
                .with_reason(format!("must be non-negative, got {amount}")));
        }
        self.reward.manual_adjustment = amount;
        self.persist();
        Ok(amount)
    }

    /// Zeroes every mission's cycle state. Idempotent: running it on
    /// already-zeroed state changes nothing.
    pub fn reset_cycle(&mut self) {
        for mission in &mut self.missions {
            mission.progress_count = 0;
            mission.completed = false;
            mission.reward_granted = false;
        }
    }

    /// Runs the daily reset if the oracle says a new reward day has
    /// started. Returns whether a reset fired.
    ///
    /// The marker is rewritten immediately after the reset, so a
    /// second check within the same day sees a matching marker and
    /// does nothing. Called at the start of every interaction and
    /// periodically by watchers.
    pub fn maybe_reset(&mut self, now: Timestamp) -> bool {
        if !self
            .clock
            .should_reset(now, self.last_reset_date.as_deref())
        {
            return false;
        }
        self.reset_cycle();
        self.last_reset_date = Some(self.clock.date_marker(now));
        self.persist();
        true
    }
}
