//! Timesheet projection of a month.
//!
//! [`MonthTable::project`] turns a [`MonthDocument`] and the ordered list of
//! export column labels into the table that the spreadsheet renderer writes
//! out. The projection performs no I/O.
//!
//! ## Layout
//!
//! ```text
//! week | day | weekday | col 1 .. col N (hours) | notes     <- one row per calendar day
//! column totals (hours)
//! column shift counts
//! grand total (hours)
//! ```
//!
//! Every calendar day gets a row, whether it has shifts or not. Weeks are
//! plain runs of 7 days starting at day 1 (days 1-7 are week 1 whatever
//! weekday the month starts on).
//!
//! A shift's hours go to the column given by its clamped `columnIndex`, so a
//! shift is never dropped when the column set shrinks.

use super::month::MonthDocument;
use super::shift::Shift;
use super::time::{minutes_to_hours, shift_duration};
use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;

/// Separator between the notes of one day.
pub const NOTES_SEPARATOR: &str = "; ";

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct DayRow {
    pub date: NaiveDate,
    /// 1-based week number, `floor((day - 1) / 7) + 1`.
    pub week: u32,
    /// Short weekday label, `Mon`..`Sun`.
    pub weekday: String,
    /// Hours per export column, same order as the column labels.
    pub hours: Vec<f64>,
    pub notes: String,
    pub shift_count: usize,
}

impl DayRow {
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn total_hours(&self) -> f64 {
        self.hours.iter().sum()
    }

    pub fn has_shifts(&self) -> bool {
        self.shift_count > 0
    }
}

/// One line of the per-shift details sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub date: NaiveDate,
    pub start: String,
    pub end: String,
    pub break_minutes: u32,
    pub hours: f64,
    pub shift_type: String,
    pub note: String,
    pub column: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthTable {
    pub year: i32,
    pub month: u32,
    pub columns: Vec<String>,
    pub rows: Vec<DayRow>,
    /// Hours per column across the whole month.
    pub column_hours: Vec<f64>,
    /// Shifts attributed to each column across the whole month.
    pub column_counts: Vec<usize>,
    /// Sum of every per-day, per-column hour value.
    pub total_hours: f64,
    pub details: Vec<DetailRow>,
}

impl MonthTable {
    /// Projects `doc` onto `columns`. An empty column list is treated as a
    /// single unnamed column so no shift is lost.
    pub fn project(doc: &MonthDocument, columns: &[String]) -> Self {
        let columns: Vec<String> = if columns.is_empty() {
            vec![String::new()]
        } else {
            columns.to_vec()
        };
        let n = columns.len();

        let mut rows = Vec::new();
        let mut details = Vec::new();
        let mut column_hours = vec![0.0; n];
        let mut column_counts = vec![0usize; n];

        for (index, date) in doc.dates().into_iter().enumerate() {
            let shifts = doc.shifts_for_date(date);
            let mut hours = vec![0.0; n];

            for shift in shifts {
                let column = shift.column(n);
                let shift_hours = minutes_to_hours(shift_duration(shift));
                hours[column] += shift_hours;
                column_counts[column] += 1;
                details.push(detail_row(date, shift, shift_hours, &columns[column]));
            }

            for (sum, value) in column_hours.iter_mut().zip(&hours) {
                *sum += value;
            }

            rows.push(DayRow {
                date,
                week: (index / DAYS_PER_WEEK) as u32 + 1,
                weekday: date.format("%a").to_string(),
                hours,
                notes: join_notes(shifts),
                shift_count: shifts.len(),
            });
        }

        let total_hours = rows.iter().map(DayRow::total_hours).sum();

        Self {
            year: doc.year,
            month: doc.month,
            columns,
            rows,
            column_hours,
            column_counts,
            total_hours,
            details,
        }
    }

    /// Row index ranges of each 7-day week, the last one possibly shorter.
    pub fn weeks(&self) -> Vec<RangeInclusive<usize>> {
        (0..self.rows.len())
            .step_by(DAYS_PER_WEEK)
            .map(|start| start..=(start + DAYS_PER_WEEK).min(self.rows.len()) - 1)
            .collect()
    }

    pub fn shift_count(&self) -> usize {
        self.column_counts.iter().sum()
    }

    /// One row per shift, in date then insertion order.
    pub fn detail_rows(&self) -> &[DetailRow] {
        &self.details
    }
}

fn join_notes(shifts: &[Shift]) -> String {
    shifts
        .iter()
        .map(|s| s.note.as_str())
        .filter(|note| !note.is_empty())
        .collect::<Vec<_>>()
        .join(NOTES_SEPARATOR)
}

fn detail_row(date: NaiveDate, shift: &Shift, hours: f64, column: &str) -> DetailRow {
    DetailRow {
        date,
        start: shift.start.clone(),
        end: shift.end.clone(),
        break_minutes: shift.break_minutes,
        hours,
        shift_type: shift.shift_type.label().to_string(),
        note: shift.note.clone(),
        column: column.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::shift::ShiftType;
    use crate::libs::summary::total_minutes;

    fn columns() -> Vec<String> {
        ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn test_one_row_per_calendar_day() {
        let table = MonthTable::project(&MonthDocument::new(2025, 2), &columns());
        assert_eq!(table.rows.len(), 28);
        assert_eq!(table.rows[0].day(), 1);
        assert_eq!(table.rows[27].day(), 28);
        assert_eq!(table.total_hours, 0.0);
        assert!(table.rows.iter().all(|r| r.hours == vec![0.0; 4]));
    }

    #[test]
    fn test_single_shift_scenario() {
        let doc = MonthDocument::new(2025, 1).add_shift(date(1), Shift::new("08:00", "17:00", 60, ShiftType::Work));
        let table = MonthTable::project(&doc, &columns());
        assert_eq!(table.rows[0].hours, vec![8.0, 0.0, 0.0, 0.0]);
        assert_eq!(table.column_hours, vec![8.0, 0.0, 0.0, 0.0]);
        assert_eq!(table.column_counts, vec![1, 0, 0, 0]);
        assert_eq!(table.total_hours, 8.0);
    }

    #[test]
    fn test_out_of_range_column_is_clamped() {
        let shift = Shift::new("08:00", "12:00", 0, ShiftType::Work).with_column(Some(5));
        let doc = MonthDocument::new(2025, 1).add_shift(date(3), shift);
        let table = MonthTable::project(&doc, &columns());
        assert_eq!(table.rows[2].hours, vec![0.0, 0.0, 0.0, 4.0]);
        assert_eq!(table.column_counts, vec![0, 0, 0, 1]);
        assert_eq!(table.detail_rows()[0].column, "D");
    }

    #[test]
    fn test_columns_split_hours() {
        let doc = MonthDocument::new(2025, 1)
            .add_shift(date(2), Shift::new("08:00", "12:00", 0, ShiftType::Work).with_note("morning"))
            .add_shift(date(2), Shift::new("13:00", "15:30", 0, ShiftType::Work).with_column(Some(1)))
            .add_shift(date(2), Shift::new("16:00", "17:00", 0, ShiftType::Ot).with_column(Some(1)).with_note("extra"));
        let table = MonthTable::project(&doc, &columns());
        let row = &table.rows[1];
        assert_eq!(row.hours, vec![4.0, 3.5, 0.0, 0.0]);
        assert_eq!(row.notes, "morning; extra");
        assert_eq!(row.shift_count, 3);
        assert_eq!(table.column_counts, vec![1, 2, 0, 0]);
        assert_eq!(table.shift_count(), 3);
    }

    #[test]
    fn test_grand_total_matches_month_total() {
        let mut doc = MonthDocument::new(2025, 1);
        for day in 1..=31 {
            doc = doc
                .add_shift(date(day), Shift::new("08:07", "12:00", 0, ShiftType::Work).with_column(Some((day % 5) as i64)))
                .add_shift(date(day), Shift::new("22:13", "01:01", 13, ShiftType::Ot));
        }
        let table = MonthTable::project(&doc, &columns());
        let expected = minutes_to_hours(total_minutes(doc.all_shifts()));
        assert!((table.total_hours - expected).abs() <= 0.01 * 62.0);
        let column_sum: f64 = table.column_hours.iter().sum();
        assert!((column_sum - table.total_hours).abs() < 1e-9);
    }

    #[test]
    fn test_grand_total_within_rounding_for_whole_hours() {
        let doc = MonthDocument::new(2025, 1)
            .add_shift(date(10), Shift::new("22:00", "06:00", 0, ShiftType::Work))
            .add_shift(date(11), Shift::new("08:30", "17:00", 30, ShiftType::Work).with_column(Some(2)));
        let table = MonthTable::project(&doc, &columns());
        let expected = minutes_to_hours(total_minutes(doc.all_shifts()));
        assert!((table.total_hours - expected).abs() <= 0.01);
    }

    #[test]
    fn test_weeks_are_runs_of_seven_days() {
        let table = MonthTable::project(&MonthDocument::new(2025, 1), &columns());
        assert_eq!(table.rows[0].week, 1);
        assert_eq!(table.rows[6].week, 1);
        assert_eq!(table.rows[7].week, 2);
        assert_eq!(table.rows[30].week, 5);
        assert_eq!(table.weeks(), vec![0..=6, 7..=13, 14..=20, 21..=27, 28..=30]);
    }

    #[test]
    fn test_weekday_labels() {
        let table = MonthTable::project(&MonthDocument::new(2025, 1), &columns());
        // 2025-01-01 was a Wednesday
        assert_eq!(table.rows[0].weekday, "Wed");
        assert_eq!(table.rows[4].weekday, "Sun");
    }

    #[test]
    fn test_empty_columns_fall_back_to_single_column() {
        let doc = MonthDocument::new(2025, 1).add_shift(date(1), Shift::new("08:00", "10:00", 0, ShiftType::Work).with_column(Some(3)));
        let table = MonthTable::project(&doc, &[]);
        assert_eq!(table.columns.len(), 1);
        assert_eq!(table.total_hours, 2.0);
    }
}
