//! Read accessors exposed to the presentation layer.

use jiff::Timestamp;

use super::Tracker;
use crate::{
    balance,
    error::{Result, TrackerError},
    models::{Mission, Multipliers, ShopItem},
};

/// A shop item with its live affordability and cooldown flags,
/// recomputed on demand for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopItemView {
    pub item: ShopItem,
    pub affordable: bool,
    pub purchased: bool,
    pub cooldown_remaining_ms: i64,
}

impl Tracker {
    /// The full mission list, hidden missions included.
    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    /// Missions passing the visibility filter.
    pub fn visible_missions(&self) -> Vec<&Mission> {
        self.missions.iter().filter(|m| m.visible).collect()
    }

    /// Looks up a single mission by id.
    pub fn mission(&self, id: &str) -> Result<&Mission> {
        self.missions
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| TrackerError::MissionNotFound { id: id.to_string() })
    }

    /// Sum of granted base rewards, before multipliers.
    pub fn earned_bp(&self) -> i64 {
        balance::earned_bp(&self.missions)
    }

    /// The single authoritative available balance, recomputed from
    /// canonical state on every call.
    pub fn available_balance(&self) -> i64 {
        balance::available_balance(&self.missions, self.reward, self.multipliers)
    }

    /// The session multiplier toggles.
    pub fn multipliers(&self) -> Multipliers {
        self.multipliers
    }

    /// Manual adjustment currently in effect.
    pub fn manual_adjustment(&self) -> i64 {
        self.reward.manual_adjustment
    }

    /// Total BP ever spent in the shop.
    pub fn cumulative_spend(&self) -> i64 {
        self.reward.cumulative_spend
    }

    /// The shop catalog with live affordability/cooldown flags at the
    /// given instant.
    pub fn shop_view(&self, now: Timestamp) -> Vec<ShopItemView> {
        let available = self.available_balance();
        let now_ms = now.as_millisecond();
        self.shop_items
            .iter()
            .map(|item| ShopItemView {
                item: item.clone(),
                affordable: available >= i64::from(item.price),
                purchased: self.purchases.is_purchased(&item.id),
                cooldown_remaining_ms: self.purchases.cooldown_remaining_ms(&item.id, now_ms),
            })
            .collect()
    }

    /// The stored reset marker, if a reset has ever run.
    pub fn last_reset_date(&self) -> Option<&str> {
        self.last_reset_date.as_deref()
    }
}
