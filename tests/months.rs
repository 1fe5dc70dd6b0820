#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use shiftbook::db::db::Db;
    use shiftbook::db::months::{BackupError, Months};
    use shiftbook::db::store::{KvStore, SqliteStore};
    use shiftbook::db::undo::UndoLog;
    use shiftbook::libs::book::MonthBook;
    use shiftbook::libs::month::MonthDocument;
    use shiftbook::libs::shift::{Shift, ShiftType};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Gives each test its own database file.
    struct StoreTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("shiftbook.db");
            StoreTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    impl StoreTestContext {
        fn store(&self) -> SqliteStore {
            SqliteStore::from_db(Db::open(&self.db_path).unwrap())
        }

        fn months(&self) -> Months<SqliteStore> {
            Months::new(self.store())
        }
    }

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, day).unwrap()
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_documents_survive_reopening(ctx: &mut StoreTestContext) {
        let shift = Shift::new("22:00", "06:00", 30, ShiftType::Ot).with_note("night").with_column(Some(2));
        {
            let mut book = MonthBook::open(ctx.months(), 2025, 1).unwrap();
            book.add_shift(date(1, 10), shift.clone()).unwrap();
        }

        let book = MonthBook::open(ctx.months(), 2025, 1).unwrap();
        assert_eq!(book.shifts(date(1, 10)), &[shift]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_never_saved_month_loads_empty(ctx: &mut StoreTestContext) {
        let months = ctx.months();
        assert_eq!(months.get(2030, 6).unwrap(), None);
        assert_eq!(months.load(2030, 6).unwrap(), MonthDocument::new(2030, 6));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_remove_after_add_leaves_day_absent(ctx: &mut StoreTestContext) {
        let mut book = MonthBook::open(ctx.months(), 2025, 3).unwrap();
        let shift = Shift::new("08:00", "17:00", 60, ShiftType::Work);
        book.add_shift(date(3, 4), shift.clone()).unwrap();
        book.remove_shift(date(3, 4), &shift.id).unwrap();

        let stored = ctx.months().load(2025, 3).unwrap();
        assert!(stored.shifts_for_date(date(3, 4)).is_empty());
        assert!(!stored.days.contains_key("2025-03-04"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_undo_restores_removed_shift(ctx: &mut StoreTestContext) {
        let morning = Shift::new("08:00", "12:00", 0, ShiftType::Work);
        let evening = Shift::new("18:00", "21:00", 0, ShiftType::Ot).with_note("release");
        {
            let mut book = MonthBook::open(ctx.months(), 2025, 4).unwrap();
            book.add_shift(date(4, 9), morning.clone()).unwrap();
            book.add_shift(date(4, 9), evening.clone()).unwrap();

            let snapshot = book.remove_shift(date(4, 9), &evening.id).unwrap();
            UndoLog::new(ctx.store()).record(&snapshot).unwrap();
        }
        assert_eq!(ctx.months().load(2025, 4).unwrap().shifts_for_date(date(4, 9)), &[morning.clone()]);

        let mut log = UndoLog::new(ctx.store());
        let snapshot = log.last().unwrap().unwrap();
        assert_eq!(snapshot.date, date(4, 9));
        MonthBook::open(ctx.months(), 2025, 4).unwrap().restore(snapshot).unwrap();
        log.clear().unwrap();

        let stored = ctx.months().load(2025, 4).unwrap();
        assert_eq!(stored.shifts_for_date(date(4, 9)), &[morning, evening]);
        assert_eq!(UndoLog::new(ctx.store()).last().unwrap(), None);
        assert!(!ctx.months().export_json().unwrap().contains("undo:"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_month(ctx: &mut StoreTestContext) {
        let mut book = MonthBook::open(ctx.months(), 2025, 2).unwrap();
        book.add_shift(date(2, 1), Shift::new("08:00", "12:00", 0, ShiftType::Work)).unwrap();
        book.delete().unwrap();

        assert_eq!(ctx.months().get(2025, 2).unwrap(), None);
        assert!(ctx.months().store().list_keys().unwrap().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_backup_round_trip(ctx: &mut StoreTestContext) {
        let mut book = MonthBook::open(ctx.months(), 2025, 1).unwrap();
        book.add_shift(date(1, 2), Shift::new("08:00", "12:00", 0, ShiftType::Work)).unwrap();
        book.add_template_shifts(date(1, 3)).unwrap();
        let january = book.doc().clone();

        let mut book = MonthBook::open(ctx.months(), 2025, 2).unwrap();
        book.add_shift(date(2, 14), Shift::new("18:00", "23:00", 0, ShiftType::Ot)).unwrap();
        let february = book.doc().clone();

        let backup = ctx.months().export_json().unwrap();

        let target_dir = tempfile::tempdir().unwrap();
        let mut target = Months::new(SqliteStore::from_db(Db::open(&target_dir.path().join("restore.db")).unwrap()));
        assert_eq!(target.import_json(&backup).unwrap(), 2);
        assert_eq!(target.load(2025, 1).unwrap(), january);
        assert_eq!(target.load(2025, 2).unwrap(), february);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_import_counts_only_complete_months(ctx: &mut StoreTestContext) {
        let payload = r#"{
            "month:2025-01": {"year": 2025, "month": 1, "days": {"2025-01-05": [
                {"id": "a1", "start": "08:00", "end": "12:00", "breakMinutes": 0, "type": "Work", "note": ""}
            ]}},
            "month:2025-02": {"year": 2025, "month": 2}
        }"#;
        let mut months = ctx.months();
        assert_eq!(months.import_json(payload).unwrap(), 1);

        let january = months.load(2025, 1).unwrap();
        assert_eq!(january.shifts_for_date(date(1, 5))[0].id, "a1");
        assert_eq!(months.get(2025, 2).unwrap(), None);

        assert!(matches!(months.import_json("{ not json"), Err(BackupError::InvalidJson(_))));
    }
}
