#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taplog::db::store::Store;
    use taplog::libs::config::{BackendPreference, Config, StorageConfig};
    use taplog::libs::record::WorkRecord;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct RecordTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for RecordTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            RecordTestContext { temp_dir }
        }
    }

    fn sqlite_store(ctx: &RecordTestContext) -> Store {
        let config = Config {
            storage: Some(StorageConfig {
                backend: BackendPreference::Sqlite,
                data_dir: Some(ctx.temp_dir.path().to_path_buf()),
            }),
        };
        Store::open(&config).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_context(RecordTestContext)]
    #[test]
    fn test_save_and_fetch_record(ctx: &mut RecordTestContext) {
        let mut store = sqlite_store(ctx);
        let record = WorkRecord::new(date(2025, 7, 1), "worker-a", "Worker A", true, 42);

        store.save_record(&record).unwrap();

        let records = store.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], record);
        assert_eq!(records[0].salary, 1100);
    }

    #[test_context(RecordTestContext)]
    #[test]
    fn test_saving_same_day_twice_replaces(ctx: &mut RecordTestContext) {
        let mut store = sqlite_store(ctx);
        let day = date(2025, 7, 1);

        store.save_record(&WorkRecord::new(day, "worker-a", "Worker A", true, 42)).unwrap();
        store.save_record(&WorkRecord::new(day, "worker-a", "Worker A", false, 0)).unwrap();

        let records = store.records().unwrap();
        assert_eq!(records.len(), 1);
        assert!(!records[0].worked);
        assert_eq!(records[0].sheets_tapped, 0);
        assert_eq!(records[0].salary, 0);
    }

    #[test_context(RecordTestContext)]
    #[test]
    fn test_same_day_different_workers_coexist(ctx: &mut RecordTestContext) {
        let mut store = sqlite_store(ctx);
        let day = date(2025, 7, 1);

        store.save_record(&WorkRecord::new(day, "worker-a", "Worker A", true, 40)).unwrap();
        store.save_record(&WorkRecord::new(day, "worker-b", "Worker B", true, 35)).unwrap();

        assert_eq!(store.records().unwrap().len(), 2);
    }

    #[test_context(RecordTestContext)]
    #[test]
    fn test_range_query_includes_both_endpoints(ctx: &mut RecordTestContext) {
        let mut store = sqlite_store(ctx);
        for day in 1..=5 {
            store.save_record(&WorkRecord::new(date(2025, 7, day), "worker-a", "Worker A", true, 30)).unwrap();
        }

        let records = store.records_in_range(date(2025, 7, 2), date(2025, 7, 4)).unwrap();
        let mut days: Vec<u32> = records.iter().map(|r| r.date.format("%d").to_string().parse().unwrap()).collect();
        days.sort();
        assert_eq!(days, vec![2, 3, 4]);

        let single = store.records_in_range(date(2025, 7, 3), date(2025, 7, 3)).unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].date, date(2025, 7, 3));
    }

    #[test_context(RecordTestContext)]
    #[test]
    fn test_range_query_outside_data_is_empty(ctx: &mut RecordTestContext) {
        let mut store = sqlite_store(ctx);
        store.save_record(&WorkRecord::new(date(2025, 7, 1), "worker-a", "Worker A", true, 30)).unwrap();

        let records = store.records_in_range(date(2025, 8, 1), date(2025, 8, 31)).unwrap();
        assert!(records.is_empty());
    }

    #[test_context(RecordTestContext)]
    #[test]
    fn test_delete_all_reports_count(ctx: &mut RecordTestContext) {
        let mut store = sqlite_store(ctx);
        for day in 1..=3 {
            store.save_record(&WorkRecord::new(date(2025, 7, day), "worker-a", "Worker A", true, 30)).unwrap();
        }

        assert_eq!(store.delete_all_records().unwrap(), 3);
        assert!(store.records().unwrap().is_empty());
        assert_eq!(store.delete_all_records().unwrap(), 0);
    }

    #[test_context(RecordTestContext)]
    #[test]
    fn test_delete_range_keeps_outside_records(ctx: &mut RecordTestContext) {
        let mut store = sqlite_store(ctx);
        for day in [1, 5, 10] {
            store.save_record(&WorkRecord::new(date(2025, 7, day), "worker-a", "Worker A", true, 30)).unwrap();
        }

        let deleted = store.delete_records_in_range(date(2025, 7, 4), date(2025, 7, 6)).unwrap();
        assert_eq!(deleted, 1);

        let mut remaining: Vec<NaiveDate> = store.records().unwrap().iter().map(|r| r.date).collect();
        remaining.sort();
        assert_eq!(remaining, vec![date(2025, 7, 1), date(2025, 7, 10)]);
    }
}
