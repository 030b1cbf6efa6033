use crate::libs::formatter::format_inr;
use crate::libs::record::WorkRecord;
use crate::libs::summary::{SummaryTotals, WorkerTotals};
use crate::libs::worker::WorkerProfile;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn records(records: &[WorkRecord]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "WORKER ID", "NAME", "WORKED", "SHEETS", "SALARY"]);
        for record in records {
            table.add_row(row![
                record.date.format("%Y-%m-%d"),
                record.worker_id,
                record.worker_name,
                if record.worked { "Yes" } else { "No" },
                record.sheets_tapped,
                format_inr(record.salary)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn summary(workers: &[WorkerTotals], totals: &SummaryTotals) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["WORKER", "DAYS WORKED", "SHEETS", "SALARY"]);
        for worker in workers {
            table.add_row(row![
                worker.worker_name,
                worker.days_worked,
                worker.total_sheets,
                format_inr(worker.total_salary)
            ]);
        }
        table.add_row(row!["TOTAL", totals.days_worked, totals.total_sheets, format_inr(totals.total_salary)]);
        table.printstd();

        Ok(())
    }

    pub fn workers(workers: &[WorkerProfile]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME"]);
        for worker in workers {
            table.add_row(row![worker.id, worker.name]);
        }
        table.printstd();

        Ok(())
    }
}
