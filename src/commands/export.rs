use crate::db::store::Store;
use crate::libs::csv;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Exports records to a CSV file, defaulting to the last 30 days.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Start of the period, defaults to 30 days before the end
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// End of the period, defaults to today
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Limit the export to one worker id
    #[arg(long)]
    pub worker: Option<String>,

    /// Output file path, defaults to taplog-<date>.csv in the current directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs, store: &mut Store) -> Result<()> {
    let end = args.to.unwrap_or_else(|| Local::now().date_naive());
    let start = args.from.unwrap_or(end - Duration::days(30));

    let mut records = store.records_in_range(start, end)?;
    if let Some(worker_id) = &args.worker {
        records.retain(|r| &r.worker_id == worker_id);
    }
    if records.is_empty() {
        msg_info!(Message::NoRecordsToExport);
        return Ok(());
    }

    records.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.worker_id.cmp(&b.worker_id)));

    let path = args.output.unwrap_or_else(|| PathBuf::from(csv::export_file_name()));
    fs::write(&path, csv::encode(&records)?)?;

    msg_success!(Message::ExportCompleted(records.len(), path.display().to_string()));
    Ok(())
}
