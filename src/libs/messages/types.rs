#[derive(Debug, Clone)]
pub enum Message {
    // === SHIFT MESSAGES ===
    ShiftAdded(String),           // date
    ShiftUpdated(String),         // date
    ShiftRemoved(String),         // date
    RemovalUndone(String),        // date
    NothingToUndo,
    ShiftDuplicated(String),      // date
    ShiftNotFound(String),        // id
    AmbiguousShiftId(String),     // id prefix
    ShiftsNotFoundForDate(String), // date
    TemplateShiftsAdded(String),  // date
    PreviousDayEmpty(String),     // date
    PreviousDayCopied(usize, String), // count, date
    LongShiftWarning(u32),        // hours threshold
    InvalidTime(String),          // error
    NoFieldsToUpdate,

    // === MONTH MESSAGES ===
    MonthHeader(String),                  // "January 2025"
    DayHeader(String),                    // date
    MonthTotals { total: String, ot: String, days: usize },
    DayTotals { total: String, ot: String },
    MonthEmpty(String),                   // "January 2025"
    MonthDeleted(String),                 // "01/2025"
    ConfirmDeleteMonth(String),           // "01/2025"
    DateOutsideMonth { date: String, month: String },
    InvalidMonth(String),                 // raw input
    InvalidDate(String),                  // raw input

    // === EXPORT MESSAGES ===
    ExportingMonth { month: String, format: String },
    ExportCompleted(String), // path
    ExportColumnsHeader,
    ExportColumnsSaved(usize), // count

    // === BACKUP MESSAGES ===
    BackupCreated(String), // path
    BackupImported(usize), // accepted months

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleShift,
    ConfigModuleExport,

    // === STORAGE MESSAGES ===
    StoreRead(String),     // key
    StoreWrite(String),    // key
    StoreRemove(String),   // key
    MigrationApplied(u32, String), // version, name

    // === PROMPTS ===
    PromptShiftStart,
    PromptShiftEnd,
    PromptBreakMinutes,
    PromptShiftType,
    PromptExportTitle,
    PromptExportFormat,
    PromptSelectModules,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
