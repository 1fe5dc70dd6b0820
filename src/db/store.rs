//! Key/value persistence.
//!
//! Month documents and settings are stored as JSON values under string keys.
//! [`KvStore`] is the contract the repositories are written against;
//! [`SqliteStore`] is the on-disk implementation and [`MemoryStore`] keeps
//! everything in a map.
//!
//! Every `set` writes one complete value, so a reader never observes a
//! half-written document.

use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use std::collections::BTreeMap;

const SELECT_VALUE: &str = "SELECT value FROM kv_store WHERE key = ?1";
const UPSERT_VALUE: &str = "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP";
const DELETE_VALUE: &str = "DELETE FROM kv_store WHERE key = ?1";
const SELECT_KEYS: &str = "SELECT key FROM kv_store ORDER BY key";

pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<Value>>;
    fn set(&mut self, key: &str, value: &Value) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
    fn list_keys(&self) -> Result<Vec<String>>;
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Store backed by the application database.
    pub fn new() -> Result<Self> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn from_db(db: Db) -> Self {
        Self { conn: db.conn }
    }
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        msg_debug!(Message::StoreRead(key.to_string()));
        let raw: Option<String> = self.conn.query_row(SELECT_VALUE, [key], |row| row.get(0)).optional()?;
        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &Value) -> Result<()> {
        msg_debug!(Message::StoreWrite(key.to_string()));
        self.conn.execute(UPSERT_VALUE, params![key, serde_json::to_string(value)?])?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        msg_debug!(Message::StoreRemove(key.to_string()));
        self.conn.execute(DELETE_VALUE, [key])?;
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(SELECT_KEYS)?;
        let keys = stmt.query_map([], |row| row.get::<_, String>(0))?.collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &Value) -> Result<()> {
        self.entries.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn exercise(store: &mut impl KvStore) {
        assert_eq!(store.get("month:2025-01").unwrap(), None);

        store.set("month:2025-01", &json!({"year": 2025})).unwrap();
        store.set("exportColumnNames", &json!(["A"])).unwrap();
        assert_eq!(store.get("month:2025-01").unwrap(), Some(json!({"year": 2025})));

        store.set("month:2025-01", &json!({"year": 2026})).unwrap();
        assert_eq!(store.get("month:2025-01").unwrap(), Some(json!({"year": 2026})));
        assert_eq!(store.list_keys().unwrap(), vec!["exportColumnNames", "month:2025-01"]);

        store.remove("month:2025-01").unwrap();
        store.remove("month:2025-01").unwrap();
        assert_eq!(store.get("month:2025-01").unwrap(), None);
        assert_eq!(store.list_keys().unwrap(), vec!["exportColumnNames"]);
    }

    #[test]
    fn test_memory_store() {
        exercise(&mut MemoryStore::new());
    }

    #[test]
    fn test_sqlite_store() {
        exercise(&mut SqliteStore::from_db(Db::open_in_memory().unwrap()));
    }
}
