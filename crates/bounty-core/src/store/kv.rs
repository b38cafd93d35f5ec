//! Raw key/value operations on the state table.

use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_VALUE_SQL: &str = "SELECT value FROM state WHERE key = ?1";
const UPSERT_VALUE_SQL: &str =
    "INSERT INTO state (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = excluded.value";

impl super::Store {
    /// Reads the raw value stored under a key, if any.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read state value")
    }

    /// Writes a batch of key/value pairs in one transaction.
    ///
    /// All-or-nothing: a snapshot either lands completely or not at
    /// all, keeping the persisted keys versioned together.
    pub fn put_many(&mut self, entries: &[(&str, String)]) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        for (key, value) in entries {
            tx.execute(UPSERT_VALUE_SQL, params![key, value])
                .db_context("Failed to write state value")?;
        }

        tx.commit().db_context("Failed to commit transaction")
    }
}
