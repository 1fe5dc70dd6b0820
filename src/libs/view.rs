use super::formatter::{format_decimal, format_hours};
use super::shift::Shift;
use super::summary::MonthSummary;
use super::time::{minutes_to_hours, shift_duration};
use anyhow::Result;
use prettytable::{row, Table};

/// Length of the id prefix shown in tables; enough to address a shift.
pub const SHORT_ID_LEN: usize = 8;

pub struct View {}

impl View {
    pub fn day(shifts: &[Shift], columns: &[String]) -> Result<()> {
        Self::day_table(shifts, columns).printstd();
        Ok(())
    }

    pub fn month(summary: &MonthSummary) -> Result<()> {
        Self::month_table(summary).printstd();
        Ok(())
    }

    pub fn columns(columns: &[String]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["#", "COLUMN"]);
        for (index, name) in columns.iter().enumerate() {
            table.add_row(row![index, name]);
        }
        table.printstd();
        Ok(())
    }

    pub fn day_table(shifts: &[Shift], columns: &[String]) -> Table {
        let mut table = Table::new();
        table.add_row(row!["#", "ID", "START", "END", "BREAK", "HOURS", "TYPE", "COLUMN", "LOCATION", "NOTE"]);
        for (index, shift) in shifts.iter().enumerate() {
            let column = columns.get(shift.column(columns.len())).map(String::as_str).unwrap_or("");
            table.add_row(row![
                index + 1,
                short_id(&shift.id),
                shift.start,
                shift.end,
                shift.break_minutes,
                format_decimal(minutes_to_hours(shift_duration(shift))),
                shift.shift_type,
                column,
                shift.location.as_deref().unwrap_or(""),
                shift.note
            ]);
        }
        table
    }

    pub fn month_table(summary: &MonthSummary) -> Table {
        let mut table = Table::new();
        table.add_row(row!["DATE", "SHIFTS", "HOURS", "OT"]);
        for day in &summary.days {
            table.add_row(row![
                day.date.format("%Y-%m-%d %a"),
                day.shifts,
                format_hours(day.minutes),
                format_hours(day.ot_minutes)
            ]);
        }
        table.add_row(row![
            "TOTAL",
            summary.days.iter().map(|d| d.shifts).sum::<usize>(),
            format_hours(summary.total_minutes),
            format_hours(summary.ot_minutes)
        ]);
        table
    }
}

pub fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}
