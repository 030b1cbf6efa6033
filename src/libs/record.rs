//! Daily work record type shared by the storage layer and the commands.
//!
//! A [`WorkRecord`] captures one worker's outcome for one calendar day. The
//! record id is composed from the date and the worker id, which is what makes
//! saving idempotent: writing the same day for the same worker twice replaces
//! the earlier row instead of duplicating it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed pay in whole rupees for a worked day.
pub const DAILY_RATE: i64 = 1100;

/// One worker's attendance and production for one calendar day.
///
/// `worker_name` is a snapshot taken when the record is saved. Renaming a
/// worker later does not rewrite history; old records keep the name that was
/// current at the time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkRecord {
    /// Composite key, `"<date>-<worker_id>"`.
    pub id: String,
    pub date: NaiveDate,
    pub worker_id: String,
    pub worker_name: String,
    pub worked: bool,
    pub sheets_tapped: u32,
    /// Pay in whole rupees, stored rather than recomputed on read.
    pub salary: i64,
}

impl WorkRecord {
    /// Builds a record for one day, deriving the salary from the worked flag.
    ///
    /// Salary derivation happens here, on the calling side, never inside the
    /// storage layer. Records decoded from CSV bypass this constructor so an
    /// imported salary is preserved as written.
    pub fn new(date: NaiveDate, worker_id: &str, worker_name: &str, worked: bool, sheets_tapped: u32) -> Self {
        Self {
            id: Self::compose_id(date, worker_id),
            date,
            worker_id: worker_id.to_string(),
            worker_name: worker_name.to_string(),
            worked,
            sheets_tapped,
            salary: if worked { DAILY_RATE } else { 0 },
        }
    }

    /// Deterministic record key for a (date, worker) pair.
    pub fn compose_id(date: NaiveDate, worker_id: &str) -> String {
        format!("{}-{}", date.format("%Y-%m-%d"), worker_id)
    }
}
