//! Persisting handle for one month.
//!
//! [`MonthBook`] keeps the latest snapshot of a month. Each mutation derives
//! the next document from that snapshot, saves it, and only then adopts it,
//! so a failed write leaves the book unchanged.

use super::messages::Message;
use super::month::{date_key, MonthDocument};
use super::shift::{template_shifts, Shift};
use crate::db::months::Months;
use crate::db::store::KvStore;
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::NaiveDate;

/// Shifts of one day as they were before a removal, used to undo it.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySnapshot {
    pub date: NaiveDate,
    pub shifts: Vec<Shift>,
}

pub struct MonthBook<S: KvStore> {
    months: Months<S>,
    doc: MonthDocument,
}

impl<S: KvStore> MonthBook<S> {
    /// Loads the month, starting from an empty document when none is stored.
    pub fn open(months: Months<S>, year: i32, month: u32) -> Result<Self> {
        let doc = months.load(year, month)?;
        Ok(Self { months, doc })
    }

    pub fn doc(&self) -> &MonthDocument {
        &self.doc
    }

    pub fn months(&self) -> &Months<S> {
        &self.months
    }

    pub fn shifts(&self, date: NaiveDate) -> &[Shift] {
        self.doc.shifts_for_date(date)
    }

    pub fn add_shift(&mut self, date: NaiveDate, shift: Shift) -> Result<()> {
        self.ensure_in_month(date)?;
        let next = self.doc.add_shift(date, shift);
        self.commit(next)
    }

    /// Replaces the shift with the same id. Unknown ids leave the month as is.
    pub fn update_shift(&mut self, date: NaiveDate, shift: Shift) -> Result<()> {
        self.ensure_in_month(date)?;
        let next = self.doc.update_shift(date, shift);
        self.commit(next)
    }

    /// Removes a shift and returns the day as it was before.
    pub fn remove_shift(&mut self, date: NaiveDate, shift_id: &str) -> Result<DaySnapshot> {
        self.ensure_in_month(date)?;
        let snapshot = DaySnapshot {
            date,
            shifts: self.shifts(date).to_vec(),
        };
        let next = self.doc.remove_shift(date, shift_id);
        self.commit(next)?;
        Ok(snapshot)
    }

    pub fn replace_shifts_for_date(&mut self, date: NaiveDate, shifts: Vec<Shift>) -> Result<()> {
        self.ensure_in_month(date)?;
        let next = self.doc.replace_shifts_for_date(date, shifts);
        self.commit(next)
    }

    /// Puts a day back the way a [`DaySnapshot`] recorded it.
    pub fn restore(&mut self, snapshot: DaySnapshot) -> Result<()> {
        self.replace_shifts_for_date(snapshot.date, snapshot.shifts)
    }

    /// Appends a copy of a shift to the same day. `None` when the id is unknown.
    pub fn duplicate_shift(&mut self, date: NaiveDate, shift_id: &str) -> Result<Option<Shift>> {
        self.ensure_in_month(date)?;
        let Some(copy) = self.doc.find_shift(date, shift_id).map(Shift::duplicate) else {
            return Ok(None);
        };
        let next = self.doc.add_shift(date, copy.clone());
        self.commit(next)?;
        Ok(Some(copy))
    }

    pub fn add_template_shifts(&mut self, date: NaiveDate) -> Result<()> {
        self.ensure_in_month(date)?;
        let mut shifts = self.shifts(date).to_vec();
        shifts.extend(template_shifts());
        let next = self.doc.replace_shifts_for_date(date, shifts);
        self.commit(next)
    }

    /// Removes the stored month and starts over from an empty document.
    pub fn delete(&mut self) -> Result<()> {
        self.months.delete(self.doc.year, self.doc.month)?;
        self.doc = MonthDocument::new(self.doc.year, self.doc.month);
        Ok(())
    }

    pub fn reload(&mut self) -> Result<()> {
        self.doc = self.months.load(self.doc.year, self.doc.month)?;
        Ok(())
    }

    fn commit(&mut self, next: MonthDocument) -> Result<()> {
        self.months.save(&next)?;
        self.doc = next;
        Ok(())
    }

    fn ensure_in_month(&self, date: NaiveDate) -> Result<()> {
        if !self.doc.contains(date) {
            msg_bail_anyhow!(Message::DateOutsideMonth {
                date: date_key(date),
                month: self.doc.key(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::store::MemoryStore;
    use crate::libs::shift::{ShiftType, COPY_NOTE};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn book() -> MonthBook<MemoryStore> {
        MonthBook::open(Months::new(MemoryStore::new()), 2025, 1).unwrap()
    }

    #[test]
    fn test_mutations_are_persisted() {
        let mut book = book();
        let shift = Shift::new("08:00", "17:00", 60, ShiftType::Work);
        book.add_shift(date(15), shift.clone()).unwrap();

        let stored = book.months().load(2025, 1).unwrap();
        assert_eq!(stored.shifts_for_date(date(15)), &[shift.clone()]);
        assert_eq!(book.doc(), &stored);

        let mut edited = shift.clone();
        edited.end = "18:00".to_string();
        book.update_shift(date(15), edited.clone()).unwrap();
        assert_eq!(book.months().load(2025, 1).unwrap().shifts_for_date(date(15)), &[edited]);
    }

    #[test]
    fn test_remove_then_restore() {
        let mut book = book();
        let shift = Shift::new("08:00", "12:00", 0, ShiftType::Work);
        book.add_shift(date(3), shift.clone()).unwrap();

        let snapshot = book.remove_shift(date(3), &shift.id).unwrap();
        assert!(book.shifts(date(3)).is_empty());
        assert!(!book.doc().days.contains_key("2025-01-03"));

        book.restore(snapshot).unwrap();
        assert_eq!(book.shifts(date(3)), &[shift]);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut book = book();
        book.add_shift(date(1), Shift::new("08:00", "12:00", 0, ShiftType::Work)).unwrap();
        let before = book.doc().clone();

        book.update_shift(date(1), Shift::new("09:00", "10:00", 0, ShiftType::Ot)).unwrap();
        book.remove_shift(date(1), "missing").unwrap();
        assert_eq!(book.duplicate_shift(date(1), "missing").unwrap(), None);
        assert_eq!(book.doc(), &before);
    }

    #[test]
    fn test_duplicate_and_template() {
        let mut book = book();
        let shift = Shift::new("08:00", "12:00", 0, ShiftType::Work);
        book.add_shift(date(2), shift.clone()).unwrap();

        let copy = book.duplicate_shift(date(2), &shift.id).unwrap().unwrap();
        assert_ne!(copy.id, shift.id);
        assert_eq!(copy.note, COPY_NOTE);

        book.add_template_shifts(date(2)).unwrap();
        let times: Vec<(&str, &str)> = book.shifts(date(2)).iter().map(|s| (s.start.as_str(), s.end.as_str())).collect();
        assert_eq!(times, vec![("08:00", "12:00"), ("08:00", "12:00"), ("08:00", "12:00"), ("13:00", "17:00")]);
    }

    #[test]
    fn test_date_outside_month_is_rejected() {
        let mut book = book();
        let february = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        assert!(book.add_shift(february, Shift::new("08:00", "12:00", 0, ShiftType::Work)).is_err());
        assert!(book.doc().is_empty());
    }

    #[test]
    fn test_delete_and_reload() {
        let mut book = book();
        book.add_shift(date(5), Shift::new("08:00", "12:00", 0, ShiftType::Work)).unwrap();
        book.delete().unwrap();
        assert!(book.doc().is_empty());
        book.reload().unwrap();
        assert!(book.doc().is_empty());
        assert_eq!(book.months().get(2025, 1).unwrap(), None);
    }
}
