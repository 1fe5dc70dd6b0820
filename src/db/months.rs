//! Month document repository and JSON backups.
//!
//! Each month lives under its own `month:YYYY-MM` key as one complete JSON
//! document. A backup is a single JSON object holding every such key.

use crate::db::store::KvStore;
use crate::libs::month::{month_key, MonthDocument};
use anyhow::Result;
use serde_json::{Map, Value};
use thiserror::Error;

pub const MONTH_KEY_PREFIX: &str = "month:";

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("backup is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

pub fn storage_key(year: i32, month: u32) -> String {
    format!("{}{}", MONTH_KEY_PREFIX, month_key(year, month))
}

pub struct Months<S: KvStore> {
    store: S,
}

impl<S: KvStore> Months<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persisted document for the month, or `None` when nothing was saved.
    pub fn get(&self, year: i32, month: u32) -> Result<Option<MonthDocument>> {
        match self.store.get(&storage_key(year, month))? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Persisted document for the month, or a fresh empty one.
    pub fn load(&self, year: i32, month: u32) -> Result<MonthDocument> {
        Ok(self.get(year, month)?.unwrap_or_else(|| MonthDocument::new(year, month)))
    }

    pub fn save(&mut self, doc: &MonthDocument) -> Result<()> {
        let value = serde_json::to_value(doc)?;
        self.store.set(&storage_key(doc.year, doc.month), &value)
    }

    pub fn delete(&mut self, year: i32, month: u32) -> Result<()> {
        self.store.remove(&storage_key(year, month))
    }

    /// Pretty-printed object of every stored month, keyed by storage key.
    pub fn export_json(&self) -> Result<String> {
        let mut backup = Map::new();
        for key in self.store.list_keys()? {
            if !key.starts_with(MONTH_KEY_PREFIX) {
                continue;
            }
            if let Some(value) = self.store.get(&key)? {
                backup.insert(key, value);
            }
        }
        Ok(serde_json::to_string_pretty(&Value::Object(backup))?)
    }

    /// Restores months from a backup and returns how many were accepted.
    ///
    /// Keys outside the `month:` namespace, values that are not complete
    /// month documents, and documents whose year and month disagree with
    /// their key are skipped. Only a payload that is not JSON at all is an
    /// error.
    pub fn import_json(&mut self, payload: &str) -> Result<usize, BackupError> {
        let backup: Value = serde_json::from_str(payload)?;
        let Value::Object(entries) = backup else {
            return Ok(0);
        };

        let mut imported = 0;
        for (key, value) in entries {
            if !key.starts_with(MONTH_KEY_PREFIX) || !is_month_document(&value) {
                continue;
            }
            let Ok(doc) = serde_json::from_value::<MonthDocument>(value) else {
                continue;
            };
            if key != storage_key(doc.year, doc.month) {
                continue;
            }
            self.store.set(&key, &serde_json::to_value(&doc)?)?;
            imported += 1;
        }
        Ok(imported)
    }
}

fn is_month_document(value: &Value) -> bool {
    ["year", "month", "days"].iter().all(|field| !value.get(field).unwrap_or(&Value::Null).is_null())
}
