//! Shift time arithmetic.
//!
//! Turns `HH:mm` wall-clock strings into minute offsets and computes the
//! effective length of a shift. All functions here are pure.
//!
//! ## Parsing
//!
//! [`time_to_minutes`] is permissive: a missing or unparseable hour or minute
//! component counts as 0 and the function never fails, so `"8"` reads as
//! 08:00 and `"xx:30"` as 00:30. Stored documents may contain whatever was
//! typed, and totals must still render. [`parse_time`] is the strict variant
//! used to validate new input.
//!
//! ## Overnight shifts
//!
//! An end time earlier than the start time means the shift crosses midnight
//! once: `22:00 → 06:00` is 480 minutes. Shifts spanning two midnights cannot
//! be represented.
//!
//! Arithmetic saturates, so absurd stored values such as `99999999:00` yield
//! a capped duration instead of overflowing.

use super::shift::Shift;
use thiserror::Error;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Shifts longer than this many hours trigger a data-entry warning.
pub const WARN_SHIFT_HOURS: u32 = 16;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("'{0}' is not in HH:mm format")]
    Format(String),
    #[error("hour {0} is out of range 0-23")]
    Hour(u32),
    #[error("minute {0} is out of range 0-59")]
    Minute(u32),
}

/// Minutes since midnight for an `HH:mm` string, permissively parsed.
pub fn time_to_minutes(time: &str) -> i64 {
    let mut parts = time.split(':');
    let hours = parse_component(parts.next());
    let minutes = parse_component(parts.next());
    hours.saturating_mul(60).saturating_add(minutes)
}

fn parse_component(part: Option<&str>) -> i64 {
    part.and_then(|p| p.trim().parse::<i64>().ok()).unwrap_or(0)
}

/// Strictly parses `H:mm` / `HH:mm` into minutes since midnight.
pub fn parse_time(time: &str) -> Result<u32, TimeParseError> {
    let format_error = || TimeParseError::Format(time.to_string());
    let (hours, minutes) = time.trim().split_once(':').ok_or_else(format_error)?;

    let is_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    if !is_digits(hours) || hours.len() > 2 || !is_digits(minutes) || minutes.len() != 2 {
        return Err(format_error());
    }

    let hours: u32 = hours.parse().map_err(|_| format_error())?;
    let minutes: u32 = minutes.parse().map_err(|_| format_error())?;
    if hours > 23 {
        return Err(TimeParseError::Hour(hours));
    }
    if minutes > 59 {
        return Err(TimeParseError::Minute(minutes));
    }
    Ok(hours * 60 + minutes)
}

/// Paid length of a shift in minutes, never negative.
pub fn shift_duration(shift: &Shift) -> u32 {
    let start = time_to_minutes(&shift.start);
    let mut end = time_to_minutes(&shift.end);
    if end < start {
        end = end.saturating_add(MINUTES_PER_DAY);
    }
    let duration = end.saturating_sub(start).saturating_sub(i64::from(shift.break_minutes));
    u32::try_from(duration.max(0)).unwrap_or(u32::MAX)
}

/// Minutes to decimal hours, rounded to two places.
pub fn minutes_to_hours(minutes: u32) -> f64 {
    (minutes as f64 / 60.0 * 100.0).round() / 100.0
}

pub fn is_long_shift(shift: &Shift) -> bool {
    shift_duration(shift) > WARN_SHIFT_HOURS * 60
}
