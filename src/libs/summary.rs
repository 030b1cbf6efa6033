use crate::libs::record::WorkRecord;
use std::collections::BTreeMap;

/// Aggregated outcome for one worker over a set of records.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerTotals {
    pub worker_id: String,
    pub worker_name: String,
    /// Count of records with the worked flag set; off days do not count.
    pub days_worked: u32,
    pub total_sheets: u64,
    pub total_salary: i64,
}

/// Grand totals across all aggregated workers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryTotals {
    pub days_worked: u32,
    pub total_sheets: u64,
    pub total_salary: i64,
}

/// Folds records into per-worker totals plus a grand total.
///
/// Workers come back ordered by id. The displayed name is the snapshot from
/// the last record seen for that worker, so callers that sort records by
/// date first get the most recent name.
pub fn summarize(records: &[WorkRecord]) -> (Vec<WorkerTotals>, SummaryTotals) {
    let mut by_worker: BTreeMap<String, WorkerTotals> = BTreeMap::new();

    for record in records {
        let entry = by_worker.entry(record.worker_id.clone()).or_insert_with(|| WorkerTotals {
            worker_id: record.worker_id.clone(),
            worker_name: record.worker_name.clone(),
            days_worked: 0,
            total_sheets: 0,
            total_salary: 0,
        });
        entry.worker_name = record.worker_name.clone();
        if record.worked {
            entry.days_worked += 1;
        }
        entry.total_sheets += record.sheets_tapped as u64;
        entry.total_salary += record.salary;
    }

    let workers: Vec<WorkerTotals> = by_worker.into_values().collect();

    let mut totals = SummaryTotals::default();
    for worker in &workers {
        totals.days_worked += worker.days_worked;
        totals.total_sheets += worker.total_sheets;
        totals.total_salary += worker.total_salary;
    }

    (workers, totals)
}
