//! Typed snapshot load/save over the key/value table.
//!
//! Loading never fails: any missing, empty or malformed value falls
//! back to its default with a warning, matching the error taxonomy
//! (storage failure and malformed data are both recovered locally,
//! never surfaced to the user).

use std::collections::{BTreeMap, BTreeSet};

use log::warn;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::models::{default_missions, Mission, RewardState};

/// Persisted key for the mission ledger (full JSON array snapshot).
pub const KEY_TASKS: &str = "tasks";
/// Persisted key for the manual balance adjustment.
pub const KEY_INITIAL_BP: &str = "initialBP";
/// Persisted key for the cumulative spend counter.
pub const KEY_SPENT_BP: &str = "spentBP";
/// Persisted key for the set of item ids ever purchased.
pub const KEY_PURCHASED_ITEMS: &str = "purchasedItems";
/// Persisted key for the item id -> last purchase time (epoch ms) map.
pub const KEY_PURCHASE_TIMES: &str = "purchaseTimes";
/// Persisted key for the last reset marker (local ISO date), if any.
pub const KEY_LAST_RESET_DATE: &str = "lastResetDate";

/// A full persisted snapshot of tracker state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub missions: Vec<Mission>,
    pub reward: RewardState,
    pub purchased_items: BTreeSet<String>,
    pub purchase_times: BTreeMap<String, i64>,
    pub last_reset_date: Option<String>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            missions: default_missions(),
            reward: RewardState::default(),
            purchased_items: BTreeSet::new(),
            purchase_times: BTreeMap::new(),
            last_reset_date: None,
        }
    }
}

impl super::Store {
    /// Loads the full snapshot, substituting defaults for anything
    /// absent or unreadable.
    pub fn load_snapshot(&self) -> Snapshot {
        let missions = match self.load_json::<Vec<Mission>>(KEY_TASKS) {
            Some(missions) if !missions.is_empty() => missions,
            Some(_) => {
                warn!("Stored mission list is empty, using the default catalog");
                default_missions()
            }
            None => default_missions(),
        };

        Snapshot {
            missions,
            reward: RewardState {
                manual_adjustment: self.load_json(KEY_INITIAL_BP).unwrap_or(0),
                cumulative_spend: self.load_json(KEY_SPENT_BP).unwrap_or(0),
            },
            purchased_items: self.load_json(KEY_PURCHASED_ITEMS).unwrap_or_default(),
            purchase_times: self.load_json(KEY_PURCHASE_TIMES).unwrap_or_default(),
            last_reset_date: self.load_string(KEY_LAST_RESET_DATE),
        }
    }

    /// Writes the full snapshot in one transaction.
    pub fn save_snapshot(&mut self, snapshot: &Snapshot) -> Result<()> {
        let mut entries = vec![
            (KEY_TASKS, serde_json::to_string(&snapshot.missions)?),
            (
                KEY_INITIAL_BP,
                snapshot.reward.manual_adjustment.to_string(),
            ),
            (KEY_SPENT_BP, snapshot.reward.cumulative_spend.to_string()),
            (
                KEY_PURCHASED_ITEMS,
                serde_json::to_string(&snapshot.purchased_items)?,
            ),
            (
                KEY_PURCHASE_TIMES,
                serde_json::to_string(&snapshot.purchase_times)?,
            ),
        ];
        if let Some(marker) = &snapshot.last_reset_date {
            entries.push((KEY_LAST_RESET_DATE, marker.clone()));
        }
        self.put_many(&entries)
    }

    /// Reads and parses one JSON value, degrading to `None` with a
    /// warning on read or parse failure.
    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.load_string(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Malformed value for key '{key}', falling back to default: {e}");
                None
            }
        }
    }

    fn load_string(&self, key: &str) -> Option<String> {
        match self.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read key '{key}', falling back to default: {e}");
                None
            }
        }
    }
}
