//! Shift records.
//!
//! A [`Shift`] is one work interval inside a single calendar day. Times are
//! naive wall-clock `HH:mm` strings; an `end` earlier than `start` means the
//! shift runs past midnight. Field names serialize in camelCase so stored
//! documents and JSON backups keep the `breakMinutes` / `columnIndex` layout.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Suffix appended to the note of a duplicated shift.
pub const COPY_SUFFIX: &str = " (copy)";

/// Note given to a duplicated shift whose original had none.
pub const COPY_NOTE: &str = "Copy";

/// Classification of a shift. Only [`ShiftType::Ot`] counts towards overtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum ShiftType {
    #[default]
    Work,
    #[serde(rename = "OT")]
    Ot,
    Leave,
    Other,
}

impl ShiftType {
    /// Human-readable label used in tables and spreadsheets.
    pub fn label(&self) -> &'static str {
        match self {
            ShiftType::Work => "Work",
            ShiftType::Ot => "OT",
            ShiftType::Leave => "Leave",
            ShiftType::Other => "Other",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// Opaque identifier, unique for the lifetime of the shift.
    pub id: String,
    /// Start time, `HH:mm`.
    pub start: String,
    /// End time, `HH:mm`. May be earlier than `start` for overnight shifts.
    pub end: String,
    /// Unpaid break in minutes.
    #[serde(default)]
    pub break_minutes: u32,
    #[serde(rename = "type", default)]
    pub shift_type: ShiftType,
    #[serde(default)]
    pub note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Export column this shift is attributed to. Read through [`Shift::column`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_index: Option<i64>,
}

impl Shift {
    /// Creates a shift with a freshly generated id.
    pub fn new(start: &str, end: &str, break_minutes: u32, shift_type: ShiftType) -> Self {
        Self {
            id: new_id(),
            start: start.to_string(),
            end: end.to_string(),
            break_minutes,
            shift_type,
            note: String::new(),
            location: None,
            column_index: None,
        }
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = note.trim().to_string();
        self
    }

    pub fn with_location(mut self, location: Option<&str>) -> Self {
        self.location = location.map(str::trim).filter(|l| !l.is_empty()).map(str::to_string);
        self
    }

    pub fn with_column(mut self, column_index: Option<i64>) -> Self {
        self.column_index = column_index;
        self
    }

    /// Export column for a set of `num_columns` columns.
    ///
    /// The stored index is clamped into `[0, num_columns - 1]`, so shifts
    /// created while more columns existed land in the last column instead of
    /// disappearing.
    pub fn column(&self, num_columns: usize) -> usize {
        let last = num_columns.saturating_sub(1) as i64;
        self.column_index.unwrap_or(0).clamp(0, last) as usize
    }

    /// Copy of this shift with a new id and the note marked as a copy.
    pub fn duplicate(&self) -> Self {
        let note = if self.note.is_empty() {
            COPY_NOTE.to_string()
        } else {
            format!("{}{}", self.note, COPY_SUFFIX)
        };
        Self {
            id: new_id(),
            note,
            ..self.clone()
        }
    }

    /// Copy used when carrying a whole day over: empty notes stay empty.
    pub fn carry_over(&self) -> Self {
        let note = if self.note.is_empty() {
            String::new()
        } else {
            format!("{}{}", self.note, COPY_SUFFIX)
        };
        Self {
            id: new_id(),
            note,
            ..self.clone()
        }
    }
}

/// The "two half-day shifts" template: 08:00-12:00 and 13:00-17:00.
pub fn template_shifts() -> Vec<Shift> {
    vec![
        Shift::new("08:00", "12:00", 0, ShiftType::Work),
        Shift::new("13:00", "17:00", 0, ShiftType::Work),
    ]
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_shifts_get_distinct_ids() {
        let a = Shift::new("08:00", "17:00", 60, ShiftType::Work);
        let b = Shift::new("08:00", "17:00", 60, ShiftType::Work);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_column_is_clamped() {
        let shift = Shift::new("08:00", "12:00", 0, ShiftType::Work);
        assert_eq!(shift.column(4), 0);
        assert_eq!(shift.clone().with_column(Some(5)).column(4), 3);
        assert_eq!(shift.clone().with_column(Some(-2)).column(4), 0);
        assert_eq!(shift.clone().with_column(Some(2)).column(4), 2);
        assert_eq!(shift.with_column(Some(7)).column(1), 0);
    }

    #[test]
    fn test_duplicate_marks_note() {
        let shift = Shift::new("08:00", "12:00", 0, ShiftType::Ot).with_note("night");
        let copy = shift.duplicate();
        assert_ne!(copy.id, shift.id);
        assert_eq!(copy.note, "night (copy)");
        assert_eq!(copy.shift_type, ShiftType::Ot);

        let blank = Shift::new("08:00", "12:00", 0, ShiftType::Work);
        assert_eq!(blank.duplicate().note, "Copy");
        assert_eq!(blank.carry_over().note, "");
    }

    #[test]
    fn test_json_layout() {
        let shift = Shift::new("22:00", "06:00", 30, ShiftType::Ot).with_column(Some(1));
        let value = serde_json::to_value(&shift).unwrap();
        assert_eq!(value["type"], "OT");
        assert_eq!(value["breakMinutes"], 30);
        assert_eq!(value["columnIndex"], 1);
        assert!(value.get("location").is_none());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let shift: Shift = serde_json::from_str(r#"{"id":"x","start":"08:00","end":"12:00","type":"Leave"}"#).unwrap();
        assert_eq!(shift.break_minutes, 0);
        assert_eq!(shift.note, "");
        assert_eq!(shift.shift_type, ShiftType::Leave);
        assert_eq!(shift.column_index, None);
    }

    #[test]
    fn test_location_is_trimmed() {
        let shift = Shift::new("08:00", "12:00", 0, ShiftType::Work).with_location(Some("  "));
        assert_eq!(shift.location, None);
        let shift = shift.with_location(Some(" Office "));
        assert_eq!(shift.location.as_deref(), Some("Office"));
    }
}
