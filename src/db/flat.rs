//! Flat-file persistence engine.
//!
//! The fallback backend keeps each collection as a JSON array in its own file
//! under the data directory. Every mutation is a read-modify-write of the
//! whole array; there is no atomicity below the full rewrite. A missing file
//! reads as an empty collection.

use crate::db::backend::StorageBackend;
use crate::libs::data_storage::DataStorage;
use crate::libs::record::WorkRecord;
use crate::libs::worker::WorkerProfile;
use anyhow::Result;
use chrono::NaiveDate;
use std::fs::{self, File};
use std::path::PathBuf;

pub const RECORDS_FILE_NAME: &str = "records.json";
pub const WORKERS_FILE_NAME: &str = "workers.json";

pub struct FlatBackend {
    records_path: PathBuf,
    workers_path: PathBuf,
}

impl FlatBackend {
    pub fn new(storage: &DataStorage) -> Result<Self> {
        Ok(FlatBackend {
            records_path: storage.get_path(RECORDS_FILE_NAME)?,
            workers_path: storage.get_path(WORKERS_FILE_NAME)?,
        })
    }

    fn read_records(&self) -> Result<Vec<WorkRecord>> {
        if !self.records_path.exists() {
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(&self.records_path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn write_records(&self, records: &[WorkRecord]) -> Result<()> {
        let file = File::create(&self.records_path)?;
        serde_json::to_writer_pretty(&file, records)?;
        Ok(())
    }

    fn read_workers(&self) -> Result<Vec<WorkerProfile>> {
        if !self.workers_path.exists() {
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(&self.workers_path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl StorageBackend for FlatBackend {
    fn save_record(&mut self, record: &WorkRecord) -> Result<()> {
        let mut records = self.read_records()?;
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
        self.write_records(&records)
    }

    fn records(&mut self) -> Result<Vec<WorkRecord>> {
        self.read_records()
    }

    fn records_in_range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<Vec<WorkRecord>> {
        let records = self.read_records()?;
        Ok(records.into_iter().filter(|r| r.date >= start && r.date <= end).collect())
    }

    fn delete_all_records(&mut self) -> Result<usize> {
        let deleted = self.read_records()?.len();
        self.write_records(&[])?;
        Ok(deleted)
    }

    fn delete_records_in_range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<usize> {
        let records = self.read_records()?;
        let before = records.len();
        let kept: Vec<WorkRecord> = records.into_iter().filter(|r| r.date < start || r.date > end).collect();
        self.write_records(&kept)?;
        Ok(before - kept.len())
    }

    fn workers(&mut self) -> Result<Vec<WorkerProfile>> {
        self.read_workers()
    }

    fn save_workers(&mut self, workers: &[WorkerProfile]) -> Result<()> {
        let file = File::create(&self.workers_path)?;
        serde_json::to_writer_pretty(&file, workers)?;
        Ok(())
    }
}
