//! Key/value blob store backed by SQLite.
//!
//! Persistence for the tracker is a simple one-table key/value store:
//! each key holds one JSON-encoded value, and a full snapshot is
//! written in a single transaction so the keys stay versioned
//! together. Reads fall back to defaults on any failure; the tracker
//! treats snapshot writes as fire-and-forget.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod kv;
pub mod snapshot;

pub use snapshot::Snapshot;

/// Store connection and operations handler.
pub struct Store {
    connection: Connection,
}

impl Store {
    /// Opens the store at the given path and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open store connection")?;

        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initializes the schema using the embedded SQL file.
    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize store schema")?;
        Ok(())
    }
}
