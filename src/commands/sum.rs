use crate::db::store::Store;
use crate::libs::messages::Message;
use crate::libs::summary::summarize;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use clap::Args;

/// Per-worker totals for a period, defaulting to the last 30 days.
#[derive(Debug, Args)]
pub struct SumArgs {
    /// Start of the period, defaults to 30 days before the end
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// End of the period, defaults to today
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Limit the summary to one worker id
    #[arg(long)]
    pub worker: Option<String>,
}

pub fn cmd(args: SumArgs, store: &mut Store) -> Result<()> {
    let end = args.to.unwrap_or_else(|| Local::now().date_naive());
    let start = args.from.unwrap_or(end - Duration::days(30));

    let mut records = store.records_in_range(start, end)?;
    if let Some(worker_id) = &args.worker {
        records.retain(|r| &r.worker_id == worker_id);
    }
    if records.is_empty() {
        msg_info!(Message::NoRecordsFound);
        return Ok(());
    }

    let (workers, totals) = summarize(&records);

    msg_print!(Message::SummaryHeader(start.to_string(), end.to_string()), true);
    View::summary(&workers, &totals)
}
