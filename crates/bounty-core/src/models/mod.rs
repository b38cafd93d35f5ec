//! Data models for missions, rewards and the shop.
//!
//! This module contains the core domain models of the Bounty rewards
//! engine. Display implementations live in [`crate::display`] to keep
//! data structures separate from presentation concerns.
//!
//! The models carry the two rules that everything else leans on:
//!
//! - [`Mission::reward_threshold`] — the `min(target_count, 5)` award
//!   policy (see [`mission::REWARD_THRESHOLD_CAP`])
//! - [`PurchaseLog::cooldown_remaining_ms`] — the fixed 5-minute
//!   per-item purchase cooldown (see [`shop::PURCHASE_COOLDOWN_MS`])

pub mod catalog;
pub mod mission;
pub mod reward;
pub mod shop;


// Re-export all public types at the models level
pub use catalog::{default_missions, default_shop_items};
pub use mission::{Mission, REWARD_THRESHOLD_CAP};
pub use reward::{Multipliers, RewardState};
pub use shop::{PurchaseLog, ShopItem, PURCHASE_COOLDOWN_MS};
