#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rusqlite::Connection;
    use taplog::db::sqlite::DB_FILE_NAME;
    use taplog::db::store::Store;
    use taplog::libs::config::{BackendPreference, Config, StorageConfig};
    use taplog::libs::record::WorkRecord;
    use taplog::libs::worker::{default_roster, WorkerProfile};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct WorkerTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for WorkerTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            WorkerTestContext { temp_dir }
        }
    }

    fn store(ctx: &WorkerTestContext, backend: BackendPreference) -> Store {
        let config = Config {
            storage: Some(StorageConfig {
                backend,
                data_dir: Some(ctx.temp_dir.path().to_path_buf()),
            }),
        };
        Store::open(&config).unwrap()
    }

    #[test_context(WorkerTestContext)]
    #[test]
    fn test_default_roster_synthesized_when_empty(ctx: &mut WorkerTestContext) {
        let mut store = store(ctx, BackendPreference::Flat);

        let roster = store.workers().unwrap();
        assert_eq!(roster, default_roster());
        assert_eq!(roster.len(), 3);
        assert_eq!(roster[0].id, "worker-a");
        assert_eq!(roster[0].name, "Worker A");

        // Synthesized, not written out
        assert!(!ctx.temp_dir.path().join("workers.json").exists());
    }

    #[test_context(WorkerTestContext)]
    #[test]
    fn test_default_roster_is_not_persisted(ctx: &mut WorkerTestContext) {
        let mut store = store(ctx, BackendPreference::Sqlite);
        store.workers().unwrap();

        let conn = Connection::open(ctx.temp_dir.path().join(DB_FILE_NAME)).unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM workers", [], |row| row.get(0)).unwrap();
        assert_eq!(count, 0);
    }

    #[test_context(WorkerTestContext)]
    #[test]
    fn test_save_workers_overwrites_whole_roster(ctx: &mut WorkerTestContext) {
        let mut store = store(ctx, BackendPreference::Sqlite);

        store
            .save_workers(&[WorkerProfile::new("worker-x", "Xavier"), WorkerProfile::new("worker-y", "Yusuf")])
            .unwrap();
        assert_eq!(store.workers().unwrap().len(), 2);

        store.save_workers(&[WorkerProfile::new("worker-z", "Zara")]).unwrap();

        let roster = store.workers().unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].id, "worker-z");
    }

    #[test_context(WorkerTestContext)]
    #[test]
    fn test_saved_single_worker_wins_over_default(ctx: &mut WorkerTestContext) {
        let mut store = store(ctx, BackendPreference::Flat);

        store.save_workers(&[WorkerProfile::new("worker-solo", "Solo")]).unwrap();

        let roster = store.workers().unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].id, "worker-solo");
    }

    #[test_context(WorkerTestContext)]
    #[test]
    fn test_rename_does_not_rewrite_history(ctx: &mut WorkerTestContext) {
        let mut store = store(ctx, BackendPreference::Sqlite);
        let day = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();

        store.save_record(&WorkRecord::new(day, "worker-a", "Worker A", true, 30)).unwrap();
        store.save_workers(&[WorkerProfile::new("worker-a", "Arun")]).unwrap();

        let records = store.records().unwrap();
        assert_eq!(records[0].worker_name, "Worker A");
    }

    #[test_context(WorkerTestContext)]
    #[test]
    fn test_removed_worker_records_survive(ctx: &mut WorkerTestContext) {
        let mut store = store(ctx, BackendPreference::Sqlite);
        let day = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();

        store.save_record(&WorkRecord::new(day, "worker-b", "Worker B", true, 30)).unwrap();
        store.save_workers(&[WorkerProfile::new("worker-a", "Worker A")]).unwrap();

        let records = store.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].worker_id, "worker-b");
    }
}
