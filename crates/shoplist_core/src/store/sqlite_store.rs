//! SQLite-backed item store.
//!
//! # Responsibility
//! - Persist the item list under the `kv` table, key `"items"`.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `save` fully overwrites the prior value in one statement.
//! - Read paths recover malformed payloads as empty instead of failing.

use super::{decode_items, encode_items, ItemStore, StoreResult, ITEMS_KEY};
use crate::db::{open_db, open_db_in_memory, DbResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Item store backed by a migrated SQLite connection.
pub struct SqliteItemStore {
    conn: Connection,
}

impl SqliteItemStore {
    /// Opens (or creates) the database file at `path` and applies migrations.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens a fresh in-memory database, mainly for tests.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Wraps an already-bootstrapped connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }
}

impl ItemStore for SqliteItemStore {
    fn load(&self) -> StoreResult<Vec<String>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1;",
                [ITEMS_KEY],
                |row| row.get(0),
            )
            .optional()?;

        Ok(raw.as_deref().map(decode_items).unwrap_or_default())
    }

    fn save(&self, items: &[String]) -> StoreResult<()> {
        let payload = encode_items(items)?;
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![ITEMS_KEY, payload],
        )?;
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1;", [ITEMS_KEY])?;
        Ok(())
    }
}
