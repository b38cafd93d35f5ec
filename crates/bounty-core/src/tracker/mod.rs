//! High-level tracker API: the Progress & Rewards Engine context.
//!
//! [`Tracker`] is the single owner of all mutable state: the mission
//! ledger, the reward bookkeeping, the purchase log and the reset
//! marker. Every mutation goes through a `&mut self` method, which
//! gives the ordering guarantee for free: a reward-threshold check
//! always runs strictly after the mutation that could have crossed it,
//! and two missions' mutations can never interleave.
//!
//! ```text
//! user intent ──▶ mission/shop op ──▶ threshold re-check ──▶ persist
//!                                          │
//!                            available balance (pure recompute)
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: factory for [`Tracker`] instances (database path,
//!   session multipliers)
//! - [`mission_ops`]: toggle/increment/decrement/visibility and the
//!   daily reset
//! - [`shop_ops`]: the purchase gate and its typed outcomes
//! - [`queries`]: read accessors for the presentation layer
//!
//! Persistence is a fire-and-forget snapshot after each mutation: a
//! failed write is logged and swallowed, and the next mutation writes
//! a fresh snapshot anyway.

use log::warn;

use crate::{
    models::{Mission, Multipliers, PurchaseLog, RewardState, ShopItem},
    reset::ResetClock,
    store::{Snapshot, Store},
};

pub mod builder;
pub mod mission_ops;
pub mod queries;
pub mod shop_ops;

#[cfg(test)]
mod tests;

// Re-export the main types
pub use builder::TrackerBuilder;
pub use queries::ShopItemView;
pub use shop_ops::{PurchaseOutcome, PurchaseReceipt, RejectReason};

/// Main tracker interface owning the engine state.
pub struct Tracker {
    pub(crate) store: Store,
    pub(crate) clock: ResetClock,
    pub(crate) missions: Vec<Mission>,
    pub(crate) reward: RewardState,
    pub(crate) purchases: PurchaseLog,
    pub(crate) shop_items: Vec<ShopItem>,
    pub(crate) multipliers: Multipliers,
    pub(crate) last_reset_date: Option<String>,
}

impl Tracker {
    /// Creates a tracker from a loaded snapshot.
    pub(crate) fn from_snapshot(
        store: Store,
        snapshot: Snapshot,
        shop_items: Vec<ShopItem>,
        multipliers: Multipliers,
    ) -> Self {
        Self {
            store,
            clock: ResetClock::new(),
            missions: snapshot.missions,
            reward: snapshot.reward,
            purchases: PurchaseLog::from_parts(snapshot.purchased_items, snapshot.purchase_times),
            shop_items,
            multipliers,
            last_reset_date: snapshot.last_reset_date,
        }
    }

    /// Best-effort snapshot write after a mutation.
    ///
    /// A failure is logged and swallowed; the state stays usable and
    /// the next mutation writes a fresh snapshot.
    pub(crate) fn persist(&mut self) {
        let snapshot = Snapshot {
            missions: self.missions.clone(),
            reward: self.reward,
            purchased_items: self.purchases.purchased_ids().clone(),
            purchase_times: self.purchases.purchase_times().clone(),
            last_reset_date: self.last_reset_date.clone(),
        };
        if let Err(e) = self.store.save_snapshot(&snapshot) {
            warn!("Failed to persist tracker snapshot: {e}");
        }
    }
}
