//! Core library for the Bounty mission tracker.
//!
//! This crate implements the Progress & Rewards Engine: the rules that
//! turn user actions (toggle, increment, decrement, visibility change,
//! purchase, set-initial-balance) plus a wall-clock daily reset into a
//! consistent mission state and a single derived available-balance
//! number. A mission's reward is counted at most once per earning
//! cycle, and shop purchases are gated behind affordability plus a
//! per-item cooldown.
//!
//! # Architecture
//!
//! - [`models`]: domain models (missions, reward state, shop items)
//! - [`tracker`]: the [`Tracker`] context object owning all mutable
//!   state, with the mission and shop operations
//! - [`balance`]: pure balance aggregation over the ledger
//! - [`reset`]: the daily reset oracle (Kyiv calendar day, 07:00)
//! - [`store`]: key/value snapshot persistence over SQLite
//! - [`display`]: markdown Display wrappers for presentation callers
//!
//! # Quick Start
//!
//! ```rust
//! use bounty_core::{params::MissionId, TrackerBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a tracker instance
//! let mut tracker = TrackerBuilder::new()
//!     .with_database_path(Some("bounty.db"))
//!     .build()?;
//!
//! // Run the daily reset check, then record progress
//! tracker.maybe_reset(jiff::Timestamp::now());
//! let mission = tracker.increment(&MissionId {
//!     id: "street-races".to_string(),
//! })?;
//! println!("{mission}");
//!
//! // The available balance is recomputed on demand
//! println!("Available: {} BP", tracker.available_balance());
//! # Ok(())
//! # }
//! ```

pub mod balance;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod reset;
pub mod store;
pub mod tracker;

// Re-export commonly used types
pub use display::{BalanceSheet, Cooldown, MissionBoard, OperationStatus, PurchaseResult, ShopCatalog};
pub use error::{Result, TrackerError};
pub use models::{
    Mission, Multipliers, PurchaseLog, RewardState, ShopItem, PURCHASE_COOLDOWN_MS,
    REWARD_THRESHOLD_CAP,
};
pub use params::{ItemId, ListMissions, MissionId, SetInitialBalance, SetVisible};
pub use reset::ResetClock;
pub use store::{Snapshot, Store};
pub use tracker::{
    PurchaseOutcome, PurchaseReceipt, RejectReason, ShopItemView, Tracker, TrackerBuilder,
};
