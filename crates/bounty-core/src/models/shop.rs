//! Shop item model and the purchase log with its cooldown rule.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Fixed cooldown after a purchase before the same item can be bought
/// again (5 minutes), shared by all items.
pub const PURCHASE_COOLDOWN_MS: i64 = 5 * 60 * 1000;

/// A purchasable cosmetic item from the static catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShopItem {
    /// Opaque stable identifier, unique within the catalog
    pub id: String,

    /// Display name
    pub name: String,

    /// Optional display description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Price in BP
    pub price: u32,
}

/// Record of past purchases; created on first purchase, never deleted.
///
/// The cooldown gate reads only the timestamp map. The id set is kept
/// as its own persisted value so "ever purchased" survives even if a
/// timestamp is lost, and for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurchaseLog {
    purchased: BTreeSet<String>,
    times: BTreeMap<String, i64>,
}

impl PurchaseLog {
    /// Rebuild a log from persisted parts.
    pub fn from_parts(purchased: BTreeSet<String>, times: BTreeMap<String, i64>) -> Self {
        Self { purchased, times }
    }

    /// Whether the item has ever been purchased.
    pub fn is_purchased(&self, item_id: &str) -> bool {
        self.purchased.contains(item_id)
    }

    /// Last purchase time in epoch milliseconds, if any.
    pub fn last_purchase_ms(&self, item_id: &str) -> Option<i64> {
        self.times.get(item_id).copied()
    }

    /// Record a successful purchase, re-arming the cooldown.
    pub fn record(&mut self, item_id: &str, now_ms: i64) {
        self.purchased.insert(item_id.to_string());
        self.times.insert(item_id.to_string(), now_ms);
    }

    /// Milliseconds until the item becomes purchasable again.
    ///
    /// Zero when never purchased or the cooldown has elapsed.
    /// Recomputed on demand, so a passive display tick is enough.
    pub fn cooldown_remaining_ms(&self, item_id: &str, now_ms: i64) -> i64 {
        match self.last_purchase_ms(item_id) {
            Some(at) => (PURCHASE_COOLDOWN_MS - (now_ms - at)).max(0),
            None => 0,
        }
    }

    /// Persisted view of the purchased-item id set.
    pub fn purchased_ids(&self) -> &BTreeSet<String> {
        &self.purchased
    }

    /// Persisted view of the item id -> last purchase time map.
    pub fn purchase_times(&self) -> &BTreeMap<String, i64> {
        &self.times
    }
}
