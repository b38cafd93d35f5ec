use std::path::PathBuf;

use bounty_core::{Tracker, TrackerBuilder};
use tempfile::TempDir;

/// Helper to create a temporary directory and database path.
pub fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test_bounty.db");
    (temp_dir, db_path)
}

/// Helper to create a test tracker on a temporary database.
pub fn create_test_tracker() -> (TempDir, Tracker) {
    let (temp_dir, db_path) = create_test_environment();
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}
