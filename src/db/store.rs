//! Backend selection and the storage façade used by every command.
//!
//! [`Store::open`] decides once which engine services all calls: with the
//! default `auto` preference it probes the SQLite database and degrades to
//! the flat-file backend when that fails, without surfacing an error. The
//! decision holds for the lifetime of the store; there is no re-probing and
//! no automatic retry. A failure to open the fallback as well propagates.
//!
//! Commands receive a constructed `Store` rather than reaching for a global,
//! so tests can open stores against their own directories and a future
//! remote backend can be injected at the same point.

use crate::db::backend::{BackendKind, StorageBackend};
use crate::db::flat::FlatBackend;
use crate::db::sqlite::SqliteBackend;
use crate::libs::config::{BackendPreference, Config};
use crate::libs::data_storage::DataStorage;
use crate::libs::record::WorkRecord;
use crate::libs::worker::{default_roster, WorkerProfile};
use crate::msg_debug;
use anyhow::Result;
use chrono::NaiveDate;

pub struct Store {
    backend: Box<dyn StorageBackend>,
    kind: BackendKind,
}

impl Store {
    /// Opens the store, selecting the backend according to the configuration.
    pub fn open(config: &Config) -> Result<Self> {
        let storage_config = config.storage.clone().unwrap_or_default();
        let storage = match storage_config.data_dir {
            Some(dir) => DataStorage::with_base_path(dir),
            None => DataStorage::new(),
        };

        let (backend, kind): (Box<dyn StorageBackend>, BackendKind) = match storage_config.backend {
            BackendPreference::Sqlite => (Box::new(SqliteBackend::new(&storage)?), BackendKind::Sqlite),
            BackendPreference::Flat => (Box::new(FlatBackend::new(&storage)?), BackendKind::Flat),
            BackendPreference::Auto => match SqliteBackend::new(&storage) {
                Ok(db) => (Box::new(db), BackendKind::Sqlite),
                Err(e) => {
                    msg_debug!(format!("Structured storage unavailable, falling back to flat files: {}", e));
                    (Box::new(FlatBackend::new(&storage)?), BackendKind::Flat)
                }
            },
        };

        msg_debug!(format!("Storage opened with {} backend", kind));
        Ok(Store { backend, kind })
    }

    /// The engine the store selected when it was opened.
    pub fn kind(&self) -> BackendKind {
        self.kind
    }

    pub fn save_record(&mut self, record: &WorkRecord) -> Result<()> {
        self.backend.save_record(record)
    }

    pub fn records(&mut self) -> Result<Vec<WorkRecord>> {
        self.backend.records()
    }

    pub fn records_in_range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<Vec<WorkRecord>> {
        self.backend.records_in_range(start, end)
    }

    pub fn delete_all_records(&mut self) -> Result<usize> {
        self.backend.delete_all_records()
    }

    pub fn delete_records_in_range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<usize> {
        self.backend.delete_records_in_range(start, end)
    }

    /// The roster, or the default placeholder workers when none is stored.
    ///
    /// The default roster is synthesized on read and never written back;
    /// it only becomes persistent when a caller saves it explicitly.
    pub fn workers(&mut self) -> Result<Vec<WorkerProfile>> {
        let workers = self.backend.workers()?;
        if workers.is_empty() {
            return Ok(default_roster());
        }
        Ok(workers)
    }

    pub fn save_workers(&mut self, workers: &[WorkerProfile]) -> Result<()> {
        self.backend.save_workers(workers)
    }
}
