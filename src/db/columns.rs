use crate::db::store::KvStore;
use anyhow::Result;
use serde_json::Value;

pub const COLUMNS_KEY: &str = "exportColumnNames";

/// Column labels used until the user picks their own.
pub const DEFAULT_COLUMNS: [&str; 4] = ["Bi", "Phú Quý", "Khôi", "Bo"];

pub fn default_columns() -> Vec<String> {
    DEFAULT_COLUMNS.iter().map(|s| s.to_string()).collect()
}

/// Ordered export column labels, stored independently of any month.
pub struct ExportColumns<S: KvStore> {
    store: S,
}

impl<S: KvStore> ExportColumns<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored labels; the default set when nothing usable is stored.
    pub fn get(&self) -> Result<Vec<String>> {
        let stored = self.store.get(COLUMNS_KEY)?;
        Ok(stored.and_then(parse_columns).unwrap_or_else(default_columns))
    }

    /// Trims the labels, drops blank ones and saves the result. Returns what
    /// was saved, which is the default set when nothing was left.
    pub fn set(&mut self, names: &[String]) -> Result<Vec<String>> {
        let mut columns: Vec<String> = names
            .iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        if columns.is_empty() {
            columns = default_columns();
        }
        self.store.set(COLUMNS_KEY, &Value::from(columns.clone()))?;
        Ok(columns)
    }
}

fn parse_columns(value: Value) -> Option<Vec<String>> {
    let columns: Vec<String> = serde_json::from_value(value).ok()?;
    (!columns.is_empty()).then_some(columns)
}
