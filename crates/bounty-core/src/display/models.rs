//! Display implementations for domain models.

use std::fmt;

use crate::models::Mission;

/// Status icon for a mission's completion state.
pub fn completion_icon(completed: bool) -> &'static str {
    if completed {
        "✓"
    } else {
        "○"
    }
}

impl fmt::Display for Mission {
    /// Full mission detail as markdown: header with id, optional
    /// description, then progress/reward/visibility metadata.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} **{}** (`{}`)",
            completion_icon(self.completed),
            self.title,
            self.id
        )?;
        if let Some(description) = &self.description {
            writeln!(f)?;
            writeln!(f, "{description}")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "- Progress: {}/{}",
            self.progress_count, self.target_count
        )?;
        writeln!(f, "- Reward: {} BP", self.base_reward)?;
        writeln!(
            f,
            "- Reward granted this cycle: {}",
            if self.reward_granted { "yes" } else { "no" }
        )?;
        if !self.visible {
            writeln!(f, "- Hidden from the board")?;
        }
        Ok(())
    }
}
