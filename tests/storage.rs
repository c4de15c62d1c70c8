#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rusqlite::params;
    use taxilog::db::db::{Db, DB_FILE_NAME};
    use taxilog::db::records::{Records, RECORDS_KEY};
    use taxilog::libs::data_storage::DataStorage;
    use taxilog::libs::record::{DailyRecord, RecordInput};
    use taxilog::libs::shift::Shift;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StorageTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::with_base_path(temp_dir.path().join("taxilog"));
            StorageTestContext { _temp_dir: temp_dir, storage }
        }
    }

    fn record(day: &str) -> DailyRecord {
        DailyRecord::create(
            RecordInput {
                date: NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap(),
                gross_revenue: Some(120.0),
                kilometers: Some(90.0),
                fuel_cost: Some(12.5),
                shifts: vec![Shift::new("07:00", "12:30")],
                number_of_rides: Some(7),
                ..Default::default()
            },
            None,
        )
        .unwrap()
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_empty_storage_loads_nothing(ctx: &mut StorageTestContext) {
        let records = Records::open(&ctx.storage).unwrap();
        assert!(records.load().unwrap().is_empty());
        assert!(ctx.storage.base_path().join(DB_FILE_NAME).exists());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_and_load_round_trip(ctx: &mut StorageTestContext) {
        let saved = vec![record("2025-03-02"), record("2025-03-01")];

        let mut store = Records::open(&ctx.storage).unwrap();
        store.save(&saved).unwrap();

        let loaded = Records::open(&ctx.storage).unwrap().load().unwrap();
        assert_eq!(loaded, saved);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_replaces_whole_collection(ctx: &mut StorageTestContext) {
        let mut store = Records::open(&ctx.storage).unwrap();
        store.save(&[record("2025-03-01"), record("2025-03-02")]).unwrap();
        store.save(&[record("2025-03-05")]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].date, NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_browser_data_is_readable(ctx: &mut StorageTestContext) {
        let json = r#"[{"id":"1718000000000-k3j9x2a","date":"2024-06-10","grossRevenue":95.5,"kilometers":70,"fuelLiters":5.2,"fuelCost":9.1,"otherExpenses":0,"shifts":[{"id":"a1","startTime":"09:00","endTime":"13:00"}],"workHours":4,"numberOfRides":6,"netEarnings":86.4}]"#;
        let db = Db::open(&ctx.storage).unwrap();
        db.conn
            .execute("INSERT INTO storage (key, value) VALUES (?1, ?2)", params![RECORDS_KEY, json])
            .unwrap();

        let loaded = Records::open(&ctx.storage).unwrap().load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "1718000000000-k3j9x2a");
        assert_eq!(loaded[0].work_hours, 4.0);
        assert_eq!(loaded[0].number_of_rides, 6);
        assert_eq!(loaded[0].shifts[0].id.as_deref(), Some("a1"));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_corrupted_value_is_an_error(ctx: &mut StorageTestContext) {
        let db = Db::open(&ctx.storage).unwrap();
        db.conn
            .execute("INSERT INTO storage (key, value) VALUES (?1, ?2)", params![RECORDS_KEY, "not json"])
            .unwrap();

        let store = Records::open(&ctx.storage).unwrap();
        assert!(store.load().is_err());

        let raw: String = db
            .conn
            .query_row("SELECT value FROM storage WHERE key = ?1", params![RECORDS_KEY], |row| row.get(0))
            .unwrap();
        assert_eq!(raw, "not json");
    }
}
