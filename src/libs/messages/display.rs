//! Display implementation for shiftbook messages.
//!
//! All user-facing text lives here, so commands only ever pick a `Message`
//! variant and let the macros in [`super::macros`] decide where it goes.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === SHIFT MESSAGES ===
            Message::ShiftAdded(date) => format!("Shift added for {}", date),
            Message::ShiftUpdated(date) => format!("Shift updated for {}", date),
            Message::ShiftRemoved(date) => format!("Shift removed from {} (run `shiftbook undo` to restore it)", date),
            Message::RemovalUndone(date) => format!("Shifts of {} restored", date),
            Message::NothingToUndo => "Nothing to undo".to_string(),
            Message::ShiftDuplicated(date) => format!("Shift duplicated on {}", date),
            Message::ShiftNotFound(id) => format!("Shift with id '{}' not found", id),
            Message::AmbiguousShiftId(id) => format!("Id '{}' matches more than one shift, use more characters", id),
            Message::ShiftsNotFoundForDate(date) => format!("No shifts recorded for {}", date),
            Message::TemplateShiftsAdded(date) => format!("Added 2 template shifts (08:00-12:00, 13:00-17:00) for {}", date),
            Message::PreviousDayEmpty(date) => format!("The day before {} has no shifts", date),
            Message::PreviousDayCopied(count, date) => format!("Copied {} shift(s) from the previous day to {}", count, date),
            Message::LongShiftWarning(hours) => format!("Shift is longer than {} hours, check the times", hours),
            Message::InvalidTime(error) => format!("Invalid time: {}", error),
            Message::NoFieldsToUpdate => "Nothing to update, pass at least one field".to_string(),

            // === MONTH MESSAGES ===
            Message::MonthHeader(month) => format!("Shifts for {}", month),
            Message::DayHeader(date) => format!("Shifts on {}", date),
            Message::MonthTotals { total, ot, days } => format!("Total: {} | OT: {} | Days worked: {}", total, ot, days),
            Message::DayTotals { total, ot } => format!("Day total: {} | OT: {}", total, ot),
            Message::MonthEmpty(month) => format!("No shifts recorded for {}", month),
            Message::MonthDeleted(month) => format!("All data for {} has been deleted", month),
            Message::ConfirmDeleteMonth(month) => format!("Delete all data for {}?", month),
            Message::DateOutsideMonth { date, month } => format!("Date {} does not belong to month {}", date, month),
            Message::InvalidMonth(raw) => format!("Invalid month '{}', expected YYYY-MM or 'current'", raw),
            Message::InvalidDate(raw) => format!("Invalid date '{}', expected YYYY-MM-DD or 'today'", raw),

            // === EXPORT MESSAGES ===
            Message::ExportingMonth { month, format } => format!("Exporting {} as {}...", month, format),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ExportColumnsHeader => "Export columns:".to_string(),
            Message::ExportColumnsSaved(count) => format!("Saved {} export column(s)", count),

            // === BACKUP MESSAGES ===
            Message::BackupCreated(path) => format!("Backup written to {}", path),
            Message::BackupImported(count) => format!("Imported {} month(s)", count),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file to remove".to_string(),
            Message::ConfigModuleShift => "Shift defaults".to_string(),
            Message::ConfigModuleExport => "Export settings".to_string(),

            // === STORAGE MESSAGES ===
            Message::StoreRead(key) => format!("store get {}", key),
            Message::StoreWrite(key) => format!("store set {}", key),
            Message::StoreRemove(key) => format!("store remove {}", key),
            Message::MigrationApplied(version, name) => format!("Applied migration v{}: {}", version, name),

            // === PROMPTS ===
            Message::PromptShiftStart => "Default shift start (HH:mm)".to_string(),
            Message::PromptShiftEnd => "Default shift end (HH:mm)".to_string(),
            Message::PromptBreakMinutes => "Default break (minutes)".to_string(),
            Message::PromptShiftType => "Default shift type".to_string(),
            Message::PromptExportTitle => "Timesheet title".to_string(),
            Message::PromptExportFormat => "Default export format".to_string(),
            Message::PromptSelectModules => "Select settings to configure".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", s)
    }
}
