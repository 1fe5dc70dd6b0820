//! Month documents.
//!
//! A [`MonthDocument`] is the unit of persistence: every shift recorded in
//! one calendar month, grouped by canonical `YYYY-MM-DD` date key. Within a
//! day, shifts keep insertion order, which is also display order.
//!
//! A date key that is absent and a date key mapped to an empty list both mean
//! "no shifts". Only [`MonthDocument::remove_shift`] prunes keys.
//!
//! Every mutation here is pure: it borrows the current document and returns
//! the next one. Persisting the result is the job of
//! [`MonthBook`](crate::libs::book::MonthBook).

use super::shift::Shift;
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthDocument {
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    pub days: BTreeMap<String, Vec<Shift>>,
}

/// Canonical `YYYY-MM-DD` key of a date.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `YYYY-MM` identifier of a month.
pub fn month_key(year: i32, month: u32) -> String {
    format!("{}-{:02}", year, month)
}

/// Number of days in a month; 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    match first.checked_add_months(Months::new(1)).and_then(|next| next.pred_opt()) {
        Some(last) => last.day(),
        None => 0,
    }
}

/// Every date of a month from day 1 to the last day.
pub fn month_dates(year: i32, month: u32) -> Vec<NaiveDate> {
    (1..=days_in_month(year, month))
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .collect()
}

/// Parses `YYYY-MM` into `(year, month)`.
pub fn parse_month(value: &str) -> Option<(i32, u32)> {
    let (year, month) = value.trim().split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

impl MonthDocument {
    /// Empty document for a month.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            days: BTreeMap::new(),
        }
    }

    pub fn key(&self) -> String {
        month_key(self.year, self.month)
    }

    /// Whether `date` falls inside this document's month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// "January 2025" style label.
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => first.format("%B %Y").to_string(),
            None => self.key(),
        }
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        month_dates(self.year, self.month)
    }

    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }

    /// Every shift of the month, in date order then insertion order.
    pub fn all_shifts(&self) -> impl Iterator<Item = &Shift> {
        self.days.values().flatten()
    }

    pub fn shifts_for_date(&self, date: NaiveDate) -> &[Shift] {
        self.days.get(&date_key(date)).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn find_shift(&self, date: NaiveDate, shift_id: &str) -> Option<&Shift> {
        self.shifts_for_date(date).iter().find(|s| s.id == shift_id)
    }

    /// Overwrites the whole shift list of a day. Ids are not de-duplicated.
    pub fn replace_shifts_for_date(&self, date: NaiveDate, shifts: Vec<Shift>) -> Self {
        let mut next = self.clone();
        next.days.insert(date_key(date), shifts);
        next
    }

    pub fn add_shift(&self, date: NaiveDate, shift: Shift) -> Self {
        let mut shifts = self.shifts_for_date(date).to_vec();
        shifts.push(shift);
        self.replace_shifts_for_date(date, shifts)
    }

    /// Replaces the first shift carrying `shift.id`; unchanged when none does.
    pub fn update_shift(&self, date: NaiveDate, shift: Shift) -> Self {
        let mut shifts = self.shifts_for_date(date).to_vec();
        match shifts.iter().position(|s| s.id == shift.id) {
            Some(index) => {
                shifts[index] = shift;
                self.replace_shifts_for_date(date, shifts)
            }
            None => self.clone(),
        }
    }

    /// Drops the shift with `shift_id`; the day's key goes away with its last shift.
    pub fn remove_shift(&self, date: NaiveDate, shift_id: &str) -> Self {
        let key = date_key(date);
        let mut next = self.clone();
        if let Some(shifts) = next.days.get_mut(&key) {
            shifts.retain(|s| s.id != shift_id);
            if shifts.is_empty() {
                next.days.remove(&key);
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::shift::ShiftType;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    fn work(start: &str, end: &str) -> Shift {
        Shift::new(start, end, 0, ShiftType::Work)
    }

    #[test]
    fn test_keys() {
        assert_eq!(date_key(date(5)), "2025-03-05");
        assert_eq!(month_key(2025, 3), "2025-03");
        assert_eq!(MonthDocument::new(2024, 11).key(), "2024-11");
    }

    #[test]
    fn test_calendar_helpers() {
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 12), 31);
        assert_eq!(days_in_month(2025, 13), 0);
        assert_eq!(month_dates(2025, 4).len(), 30);
        assert_eq!(parse_month("2025-07"), Some((2025, 7)));
        assert_eq!(parse_month("2025-13"), None);
        assert_eq!(parse_month("July"), None);
    }

    #[test]
    fn test_absent_day_is_empty() {
        let doc = MonthDocument::new(2025, 3);
        assert!(doc.shifts_for_date(date(1)).is_empty());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let late = work("13:00", "17:00");
        let early = work("08:00", "12:00");
        let doc = MonthDocument::new(2025, 3)
            .add_shift(date(2), late.clone())
            .add_shift(date(2), early.clone());
        assert_eq!(doc.shifts_for_date(date(2)), &[late, early]);
    }

    #[test]
    fn test_mutations_leave_previous_snapshot_untouched() {
        let doc = MonthDocument::new(2025, 3);
        let next = doc.add_shift(date(2), work("08:00", "12:00"));
        assert!(doc.days.is_empty());
        assert_eq!(next.days.len(), 1);
    }

    #[test]
    fn test_update_replaces_matching_id_only() {
        let a = work("08:00", "12:00");
        let b = work("13:00", "17:00");
        let doc = MonthDocument::new(2025, 3)
            .add_shift(date(3), a.clone())
            .add_shift(date(3), b.clone());

        let mut edited = a.clone();
        edited.end = "11:00".to_string();
        let doc = doc.update_shift(date(3), edited.clone());
        assert_eq!(doc.shifts_for_date(date(3)), &[edited, b]);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let doc = MonthDocument::new(2025, 3).add_shift(date(3), work("08:00", "12:00"));
        let stranger = work("09:00", "10:00");
        assert_eq!(doc.update_shift(date(3), stranger.clone()), doc);
        assert!(doc.update_shift(date(4), stranger).shifts_for_date(date(4)).is_empty());
    }

    #[test]
    fn test_remove_prunes_empty_day() {
        let shift = work("08:00", "12:00");
        let doc = MonthDocument::new(2025, 3).add_shift(date(7), shift.clone());
        let doc = doc.remove_shift(date(7), &shift.id);
        assert!(!doc.days.contains_key("2025-03-07"));
        assert!(doc.shifts_for_date(date(7)).is_empty());
    }

    #[test]
    fn test_remove_keeps_other_shifts() {
        let a = work("08:00", "12:00");
        let b = work("13:00", "17:00");
        let doc = MonthDocument::new(2025, 3)
            .add_shift(date(7), a.clone())
            .add_shift(date(7), b.clone())
            .remove_shift(date(7), &a.id);
        assert_eq!(doc.shifts_for_date(date(7)), &[b]);
        assert_eq!(doc.remove_shift(date(7), "missing"), doc);
    }

    #[test]
    fn test_replace_does_not_prune() {
        let doc = MonthDocument::new(2025, 3).replace_shifts_for_date(date(9), Vec::new());
        assert!(doc.days.contains_key("2025-03-09"));
        assert!(doc.shifts_for_date(date(9)).is_empty());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_contains_and_label() {
        let doc = MonthDocument::new(2025, 3);
        assert!(doc.contains(date(31)));
        assert!(!doc.contains(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()));
        assert_eq!(doc.label(), "March 2025");
    }

    #[test]
    fn test_document_json_layout() {
        let doc = MonthDocument::new(2025, 3).add_shift(date(1), work("08:00", "12:00"));
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["year"], 2025);
        assert_eq!(value["month"], 3);
        assert!(value["days"]["2025-03-01"].is_array());
    }
}
