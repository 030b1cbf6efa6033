use crate::db::store::Store;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use clap::Args;

/// Raw work records for a period, newest day first.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Start of the period, defaults to 30 days before the end
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// End of the period, defaults to today
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Limit the listing to one worker id
    #[arg(long)]
    pub worker: Option<String>,
}

pub fn cmd(args: ListArgs, store: &mut Store) -> Result<()> {
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

    records.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.worker_id.cmp(&b.worker_id)));

    msg_print!(Message::RecordsHeader(start.to_string(), end.to_string()), true);
    View::records(&records)
}
