//! The most recent shift removal, kept until it is undone.

use crate::db::store::KvStore;
use crate::libs::book::DaySnapshot;
use crate::libs::month::date_key;
use crate::libs::shift::Shift;
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const UNDO_KEY: &str = "undo:lastRemoval";

#[derive(Serialize, Deserialize)]
struct StoredSnapshot {
    date: String,
    shifts: Vec<Shift>,
}

pub struct UndoLog<S: KvStore> {
    store: S,
}

impl<S: KvStore> UndoLog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Remembers a day as it was before a removal. Replaces any earlier entry.
    pub fn record(&mut self, snapshot: &DaySnapshot) -> Result<()> {
        let stored = StoredSnapshot {
            date: date_key(snapshot.date),
            shifts: snapshot.shifts.clone(),
        };
        self.store.set(UNDO_KEY, &serde_json::to_value(stored)?)
    }

    /// The recorded snapshot. An unreadable entry counts as none.
    pub fn last(&self) -> Result<Option<DaySnapshot>> {
        Ok(self.store.get(UNDO_KEY)?.and_then(parse_snapshot))
    }

    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(UNDO_KEY)
    }
}

fn parse_snapshot(value: Value) -> Option<DaySnapshot> {
    let stored: StoredSnapshot = serde_json::from_value(value).ok()?;
    let date = NaiveDate::parse_from_str(&stored.date, "%Y-%m-%d").ok()?;
    Some(DaySnapshot {
        date,
        shifts: stored.shifts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::store::MemoryStore;
    use crate::libs::shift::ShiftType;
    use serde_json::json;

    fn snapshot(day: u32) -> DaySnapshot {
        DaySnapshot {
            date: NaiveDate::from_ymd_opt(2025, 4, day).unwrap(),
            shifts: vec![Shift::new("08:00", "12:00", 0, ShiftType::Work)],
        }
    }

    #[test]
    fn test_empty_log_has_nothing() {
        let log = UndoLog::new(MemoryStore::new());
        assert_eq!(log.last().unwrap(), None);
    }

    #[test]
    fn test_latest_record_wins() {
        let mut log = UndoLog::new(MemoryStore::new());
        let latest = snapshot(7);
        log.record(&snapshot(3)).unwrap();
        log.record(&latest).unwrap();
        assert_eq!(log.last().unwrap(), Some(latest));

        log.clear().unwrap();
        assert_eq!(log.last().unwrap(), None);
    }

    #[test]
    fn test_corrupt_entry_is_ignored() {
        let mut store = MemoryStore::new();
        store.set(UNDO_KEY, &json!({"date": "not a date", "shifts": []})).unwrap();
        assert_eq!(UndoLog::new(store).last().unwrap(), None);
    }
}
