//! Argument parsing shared by the shift and month commands.

use crate::{
    db::{months::Months, store::SqliteStore},
    libs::{
        book::MonthBook,
        messages::Message,
        month::parse_month,
        shift::Shift,
        time::{is_long_shift, parse_time, WARN_SHIFT_HOURS},
    },
    msg_bail_anyhow, msg_error_anyhow, msg_warning,
};
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};

/// `today` or `YYYY-MM-DD`.
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.trim().eq_ignore_ascii_case("today") {
        Ok(Local::now().date_naive())
    } else {
        NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDate(date_str.to_string())))
    }
}

/// `current` or `YYYY-MM`.
pub fn parse_month_arg(month_str: &str) -> Result<(i32, u32)> {
    if month_str.trim().eq_ignore_ascii_case("current") {
        let today = Local::now().date_naive();
        return Ok((today.year(), today.month()));
    }
    parse_month(month_str).ok_or_else(|| msg_error_anyhow!(Message::InvalidMonth(month_str.to_string())))
}

/// Validates an `HH:mm` argument and returns it trimmed.
pub fn parse_time_arg(time_str: &str) -> Result<String> {
    parse_time(time_str).map_err(|e| msg_error_anyhow!(Message::InvalidTime(e.to_string())))?;
    Ok(time_str.trim().to_string())
}

pub fn open_month(year: i32, month: u32) -> Result<MonthBook<SqliteStore>> {
    MonthBook::open(Months::new(SqliteStore::new()?), year, month)
}

/// Book of the month `date` falls in.
pub fn open_book(date: NaiveDate) -> Result<MonthBook<SqliteStore>> {
    open_month(date.year(), date.month())
}

/// Full id of the shift matching `id` exactly or by unique prefix.
pub fn resolve_shift_id(shifts: &[Shift], id: &str) -> Result<Option<String>> {
    let id = id.trim();
    if let Some(shift) = shifts.iter().find(|s| s.id == id) {
        return Ok(Some(shift.id.clone()));
    }
    let matches: Vec<&Shift> = shifts.iter().filter(|s| !id.is_empty() && s.id.starts_with(id)).collect();
    match matches.as_slice() {
        [] => Ok(None),
        [shift] => Ok(Some(shift.id.clone())),
        _ => msg_bail_anyhow!(Message::AmbiguousShiftId(id.to_string())),
    }
}

pub fn warn_if_long(shift: &Shift) {
    if is_long_shift(shift) {
        msg_warning!(Message::LongShiftWarning(WARN_SHIFT_HOURS));
    }
}
