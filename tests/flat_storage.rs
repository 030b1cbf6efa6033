#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taplog::db::flat::{RECORDS_FILE_NAME, WORKERS_FILE_NAME};
    use taplog::db::store::Store;
    use taplog::libs::config::{BackendPreference, Config, StorageConfig};
    use taplog::libs::record::WorkRecord;
    use taplog::libs::worker::WorkerProfile;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct FlatTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for FlatTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            FlatTestContext { temp_dir }
        }
    }

    fn flat_store(ctx: &FlatTestContext) -> Store {
        let config = Config {
            storage: Some(StorageConfig {
                backend: BackendPreference::Flat,
                data_dir: Some(ctx.temp_dir.path().to_path_buf()),
            }),
        };
        Store::open(&config).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_context(FlatTestContext)]
    #[test]
    fn test_empty_store_reads_no_records(ctx: &mut FlatTestContext) {
        let mut store = flat_store(ctx);

        assert!(store.records().unwrap().is_empty());
        // Reading never creates the file
        assert!(!ctx.temp_dir.path().join(RECORDS_FILE_NAME).exists());
        assert_eq!(store.delete_all_records().unwrap(), 0);
    }

    #[test_context(FlatTestContext)]
    #[test]
    fn test_save_creates_json_file(ctx: &mut FlatTestContext) {
        let mut store = flat_store(ctx);
        let record = WorkRecord::new(date(2025, 7, 1), "worker-a", "Worker A", true, 42);

        store.save_record(&record).unwrap();

        let path = ctx.temp_dir.path().join(RECORDS_FILE_NAME);
        assert!(path.exists());

        let text = std::fs::read_to_string(path).unwrap();
        let parsed: Vec<WorkRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, vec![record]);
    }

    #[test_context(FlatTestContext)]
    #[test]
    fn test_saving_same_day_twice_replaces(ctx: &mut FlatTestContext) {
        let mut store = flat_store(ctx);
        let day = date(2025, 7, 1);

        store.save_record(&WorkRecord::new(day, "worker-a", "Worker A", true, 42)).unwrap();
        store.save_record(&WorkRecord::new(day, "worker-a", "Worker A", false, 0)).unwrap();

        let records = store.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].salary, 0);
    }

    #[test_context(FlatTestContext)]
    #[test]
    fn test_range_query_includes_both_endpoints(ctx: &mut FlatTestContext) {
        let mut store = flat_store(ctx);
        for day in 1..=5 {
            store.save_record(&WorkRecord::new(date(2025, 7, day), "worker-a", "Worker A", true, 30)).unwrap();
        }

        let records = store.records_in_range(date(2025, 7, 2), date(2025, 7, 4)).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.date >= date(2025, 7, 2) && r.date <= date(2025, 7, 4)));
    }

    #[test_context(FlatTestContext)]
    #[test]
    fn test_delete_range_reports_count(ctx: &mut FlatTestContext) {
        let mut store = flat_store(ctx);
        for day in [1, 5, 10] {
            store.save_record(&WorkRecord::new(date(2025, 7, day), "worker-a", "Worker A", true, 30)).unwrap();
        }

        assert_eq!(store.delete_records_in_range(date(2025, 7, 1), date(2025, 7, 5)).unwrap(), 2);
        assert_eq!(store.records().unwrap().len(), 1);
    }

    #[test_context(FlatTestContext)]
    #[test]
    fn test_workers_file_round_trip(ctx: &mut FlatTestContext) {
        let mut store = flat_store(ctx);
        let roster = vec![WorkerProfile::new("worker-x", "Xavier")];

        store.save_workers(&roster).unwrap();

        let path = ctx.temp_dir.path().join(WORKERS_FILE_NAME);
        assert!(path.exists());
        assert_eq!(store.workers().unwrap(), roster);
    }
}
