//! SQLite-backed persistence engine.
//!
//! The structured backend keeps records and the worker roster in a single
//! database file. Upserts go through `ON CONFLICT(id) DO UPDATE`, and the
//! date range operations compare the ISO date column directly, which orders
//! correctly because the dates are stored as fixed-width `YYYY-MM-DD` text.

use crate::db::backend::StorageBackend;
use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use crate::libs::record::WorkRecord;
use crate::libs::worker::WorkerProfile;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};

pub const DB_FILE_NAME: &str = "taplog.db";

const UPSERT_RECORD: &str = "INSERT INTO records (id, date, worker_id, worker_name, worked, sheets_tapped, salary)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
    ON CONFLICT(id) DO UPDATE SET
        date = excluded.date,
        worker_id = excluded.worker_id,
        worker_name = excluded.worker_name,
        worked = excluded.worked,
        sheets_tapped = excluded.sheets_tapped,
        salary = excluded.salary";
const SELECT_ALL_RECORDS: &str = "SELECT id, date, worker_id, worker_name, worked, sheets_tapped, salary FROM records";
const SELECT_RECORDS_BY_RANGE: &str =
    "SELECT id, date, worker_id, worker_name, worked, sheets_tapped, salary FROM records WHERE date >= ?1 AND date <= ?2";
const DELETE_ALL_RECORDS: &str = "DELETE FROM records";
const DELETE_RECORDS_BY_RANGE: &str = "DELETE FROM records WHERE date >= ?1 AND date <= ?2";
const SELECT_WORKERS: &str = "SELECT id, name FROM workers";
const DELETE_WORKERS: &str = "DELETE FROM workers";
const INSERT_WORKER: &str = "INSERT INTO workers (id, name) VALUES (?1, ?2)";

pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Opens the database file under the given data directory and brings the
    /// schema up to date.
    pub fn new(storage: &DataStorage) -> Result<Self> {
        let db_file_path = storage.get_path(DB_FILE_NAME)?;
        let mut conn = Connection::open(db_file_path)?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(SqliteBackend { conn })
    }

    fn row_to_record(row: &Row) -> rusqlite::Result<WorkRecord> {
        Ok(WorkRecord {
            id: row.get(0)?,
            date: row.get(1)?,
            worker_id: row.get(2)?,
            worker_name: row.get(3)?,
            worked: row.get(4)?,
            sheets_tapped: row.get(5)?,
            salary: row.get(6)?,
        })
    }
}

impl StorageBackend for SqliteBackend {
    fn save_record(&mut self, record: &WorkRecord) -> Result<()> {
        self.conn.execute(
            UPSERT_RECORD,
            params![
                record.id,
                record.date,
                record.worker_id,
                record.worker_name,
                record.worked,
                record.sheets_tapped,
                record.salary
            ],
        )?;
        Ok(())
    }

    fn records(&mut self) -> Result<Vec<WorkRecord>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_RECORDS)?;
        let records = stmt.query_map([], |row| Self::row_to_record(row))?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    fn records_in_range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<Vec<WorkRecord>> {
        let mut stmt = self.conn.prepare(SELECT_RECORDS_BY_RANGE)?;
        let records = stmt
            .query_map(params![start, end], |row| Self::row_to_record(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    fn delete_all_records(&mut self) -> Result<usize> {
        let deleted = self.conn.execute(DELETE_ALL_RECORDS, [])?;
        Ok(deleted)
    }

    fn delete_records_in_range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<usize> {
        let deleted = self.conn.execute(DELETE_RECORDS_BY_RANGE, params![start, end])?;
        Ok(deleted)
    }

    fn workers(&mut self) -> Result<Vec<WorkerProfile>> {
        let mut stmt = self.conn.prepare(SELECT_WORKERS)?;
        let workers = stmt
            .query_map([], |row| {
                Ok(WorkerProfile {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(workers)
    }

    fn save_workers(&mut self, workers: &[WorkerProfile]) -> Result<()> {
        // Full replacement: a worker missing from the list is removed, even
        // though records referencing the id stay behind.
        let tx = self.conn.transaction()?;
        tx.execute(DELETE_WORKERS, [])?;
        for worker in workers {
            tx.execute(INSERT_WORKER, params![worker.id, worker.name])?;
        }
        tx.commit()?;
        Ok(())
    }
}
