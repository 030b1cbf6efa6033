//! Storage backend abstraction.
//!
//! Both persistence engines implement [`StorageBackend`]; the store picks one
//! when it opens and routes every operation through the trait object from
//! then on. A remote backend would plug in at this same seam.

use crate::libs::record::WorkRecord;
use crate::libs::worker::WorkerProfile;
use anyhow::Result;
use chrono::NaiveDate;
use std::fmt;

/// Identifies which engine a store ended up with after backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Sqlite,
    Flat,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendKind::Sqlite => "sqlite",
            BackendKind::Flat => "flat",
        };
        write!(f, "{}", name)
    }
}

/// Operations every persistence engine must provide.
///
/// The two implementations are behaviorally equivalent: saving is an upsert
/// keyed by record id, range queries are inclusive on both ends, and the
/// roster save is a full replacement. All mutations are durable on return.
pub trait StorageBackend: Send {
    /// Inserts the record, or replaces the stored row with the same id.
    fn save_record(&mut self, record: &WorkRecord) -> Result<()>;

    /// Every stored record, in no guaranteed order.
    fn records(&mut self) -> Result<Vec<WorkRecord>>;

    /// Records with `start <= date <= end`.
    fn records_in_range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<Vec<WorkRecord>>;

    /// Empties the record collection, returning how many rows were removed.
    fn delete_all_records(&mut self) -> Result<usize>;

    /// Removes records with `start <= date <= end`, returning the count.
    fn delete_records_in_range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<usize>;

    /// The stored roster; empty when none was ever saved.
    fn workers(&mut self) -> Result<Vec<WorkerProfile>>;

    /// Replaces the entire roster with the given list.
    fn save_workers(&mut self, workers: &[WorkerProfile]) -> Result<()>;
}
