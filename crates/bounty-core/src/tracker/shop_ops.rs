//! Shop purchase gate.
//!
//! A purchase is check-then-debit with no intervening mutation: the
//! whole gate runs inside one `&mut self` call. Failing affordability
//! or cooldown is not an error but a typed rejection the caller
//! renders; only an unknown item id is an error.

use jiff::Timestamp;

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    models::ShopItem,
    params::ItemId,
};

/// Why a purchase was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// The current available balance cannot cover the price.
    InsufficientFunds { price: u32, balance: i64 },
    /// The item was bought less than the cooldown ago.
    OnCooldown { remaining_ms: i64 },
}

/// Confirmation of an accepted purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseReceipt {
    /// The purchased item
    pub item: ShopItem,
    /// Available balance after the debit
    pub balance_after: i64,
}

/// Outcome of a purchase attempt against an existing item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Accepted(PurchaseReceipt),
    Rejected(RejectReason),
}

impl Tracker {
    /// Attempts to purchase an item at the given instant.
    ///
    /// Preconditions, in order: the item exists (unknown ids are a
    /// [`TrackerError::ItemNotFound`]), the current available balance
    /// covers the price, and the per-item cooldown has elapsed. On
    /// acceptance the spend counter is debited and the cooldown
    /// re-armed, so the same item is purchasable again after another
    /// full cooldown.
    pub fn purchase(&mut self, params: &ItemId, now: Timestamp) -> Result<PurchaseOutcome> {
        let item = self
            .shop_items
            .iter()
            .find(|i| i.id == params.id)
            .cloned()
            .ok_or_else(|| TrackerError::ItemNotFound {
                id: params.id.clone(),
            })?;

        let balance = self.available_balance();
        if balance < i64::from(item.price) {
            return Ok(PurchaseOutcome::Rejected(RejectReason::InsufficientFunds {
                price: item.price,
                balance,
            }));
        }

        let now_ms = now.as_millisecond();
        let remaining_ms = self.purchases.cooldown_remaining_ms(&item.id, now_ms);
        if remaining_ms > 0 {
            return Ok(PurchaseOutcome::Rejected(RejectReason::OnCooldown {
                remaining_ms,
            }));
        }

        self.reward.cumulative_spend += i64::from(item.price);
        self.purchases.record(&item.id, now_ms);
        self.persist();

        let balance_after = self.available_balance();
        Ok(PurchaseOutcome::Accepted(PurchaseReceipt {
            item,
            balance_after,
        }))
    }
}
