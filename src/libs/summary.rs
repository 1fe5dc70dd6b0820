//! Shift aggregation.
//!
//! Sums shift durations for a day or a month. Totals are order-independent
//! and an empty input sums to 0. Overtime is the subset of the total coming
//! from [`ShiftType::Ot`] shifts, so `ot_minutes <= total_minutes` always holds.

use super::month::MonthDocument;
use super::shift::{Shift, ShiftType};
use super::time::shift_duration;
use chrono::NaiveDate;

/// Total paid minutes across `shifts`.
pub fn total_minutes<'a, I>(shifts: I) -> u32
where
    I: IntoIterator<Item = &'a Shift>,
{
    saturating_sum(shifts.into_iter().map(shift_duration))
}

/// Paid minutes of the overtime shifts in `shifts`.
pub fn ot_minutes<'a, I>(shifts: I) -> u32
where
    I: IntoIterator<Item = &'a Shift>,
{
    let durations = shifts
        .into_iter()
        .filter(|s| s.shift_type == ShiftType::Ot)
        .map(shift_duration);
    saturating_sum(durations)
}

fn saturating_sum(minutes: impl Iterator<Item = u32>) -> u32 {
    minutes.fold(0u32, u32::saturating_add)
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub shifts: usize,
    pub minutes: u32,
    pub ot_minutes: u32,
}

/// Per-day and whole-month totals of a month document.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    /// Days that have at least one shift, in date order.
    pub days: Vec<DailySummary>,
    pub total_minutes: u32,
    pub ot_minutes: u32,
}

impl MonthSummary {
    pub fn from_document(doc: &MonthDocument) -> Self {
        let days: Vec<DailySummary> = doc
            .dates()
            .into_iter()
            .filter_map(|date| {
                let shifts = doc.shifts_for_date(date);
                (!shifts.is_empty()).then(|| DailySummary {
                    date,
                    shifts: shifts.len(),
                    minutes: total_minutes(shifts),
                    ot_minutes: ot_minutes(shifts),
                })
            })
            .collect();

        Self {
            total_minutes: saturating_sum(days.iter().map(|d| d.minutes)),
            ot_minutes: saturating_sum(days.iter().map(|d| d.ot_minutes)),
            days,
        }
    }

    pub fn days_worked(&self) -> usize {
        self.days.len()
    }
}
