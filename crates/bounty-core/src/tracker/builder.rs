//! Builder for creating and configuring Tracker instances.

use std::path::{Path, PathBuf};

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    models::{default_shop_items, Multipliers},
    store::Store,
};

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone, Default)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
    multipliers: Multipliers,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/bounty/bounty.db` or `~/.local/share/bounty/bounty.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the session multiplier toggles.
    pub fn with_multipliers(mut self, multipliers: Multipliers) -> Self {
        self.multipliers = multipliers;
        self
    }

    /// Builds the configured tracker, loading the persisted snapshot.
    ///
    /// A missing or unreadable snapshot falls back to the built-in
    /// default catalog; only opening the store itself can fail.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::FileSystem` if the database directory
    /// cannot be created, `TrackerError::Database` if the store cannot
    /// be opened.
    pub fn build(self) -> Result<Tracker> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TrackerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let store = Store::new(&db_path)?;
        let snapshot = store.load_snapshot();
        Ok(Tracker::from_snapshot(
            store,
            snapshot,
            default_shop_items(),
            self.multipliers,
        ))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("bounty")
            .place_data_file("bounty.db")
            .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
    }
}
