//! Collection wrapper types for displaying boards and catalogs.

use std::fmt;

use super::{datetime::Cooldown, models::completion_icon};
use crate::{models::Mission, tracker::ShopItemView};

/// Newtype wrapper for displaying a list of missions as a board.
///
/// Each line shows the completion icon, title, progress tally and the
/// multiplier-adjusted BP for that mission. Handles empty collections
/// gracefully.
pub struct MissionBoard {
    missions: Vec<Mission>,
    factor: i64,
}

impl MissionBoard {
    /// Create a board over the given missions with the session
    /// multiplier factor applied to each displayed reward.
    pub fn new(missions: Vec<Mission>, factor: i64) -> Self {
        Self { missions, factor }
    }

    /// Check if the board is empty.
    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    /// Get the number of missions on the board.
    pub fn len(&self) -> usize {
        self.missions.len()
    }

    /// Get an iterator over the missions.
    pub fn iter(&self) -> std::slice::Iter<'_, Mission> {
        self.missions.iter()
    }
}

impl fmt::Display for MissionBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.missions.is_empty() {
            return writeln!(f, "No missions to show.");
        }
        for mission in &self.missions {
            let bp = i64::from(mission.base_reward) * self.factor;
            write!(
                f,
                "{} `{}` **{}**",
                completion_icon(mission.completed),
                mission.id,
                mission.title
            )?;
            if mission.target_count > 1 {
                write!(f, " ({}/{})", mission.progress_count, mission.target_count)?;
            }
            writeln!(f, " · {bp} BP")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the shop catalog with live
/// affordability and cooldown flags.
pub struct ShopCatalog(pub Vec<ShopItemView>);

impl ShopCatalog {
    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of items in the catalog.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ShopCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "The shop is empty.");
        }
        for view in &self.0 {
            write!(f, "`{}` **{}** · {} BP", view.item.id, view.item.name, view.item.price)?;
            if view.cooldown_remaining_ms > 0 {
                write!(f, " — on cooldown, {} left", Cooldown(view.cooldown_remaining_ms))?;
            } else if !view.affordable {
                write!(f, " — not affordable")?;
            } else if view.purchased {
                write!(f, " — purchased before, available again")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
