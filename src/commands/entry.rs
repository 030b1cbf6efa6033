use crate::db::store::Store;
use crate::libs::formatter::format_inr;
use crate::libs::messages::Message;
use crate::libs::record::WorkRecord;
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

/// Records a day of tapping.
///
/// Without flags the command walks the whole roster interactively and asks
/// for each worker whether they worked and how many sheets they tapped.
/// With `--worker` a single record is written non-interactively, which is
/// what scripts and tests use.
#[derive(Debug, Args)]
pub struct EntryArgs {
    /// Date to record, defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Record a single worker by roster id instead of walking the roster
    #[arg(long)]
    pub worker: Option<String>,

    /// Mark the worker as having worked
    #[arg(long, requires = "worker", conflicts_with = "off")]
    pub worked: bool,

    /// Mark the worker as off for the day
    #[arg(long, requires = "worker")]
    pub off: bool,

    /// Sheets tapped for the worker
    #[arg(long, requires = "worker", default_value_t = 0)]
    pub sheets: u32,
}

pub fn cmd(args: EntryArgs, store: &mut Store) -> Result<()> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let roster = store.workers()?;

    if let Some(worker_id) = &args.worker {
        let worker = roster
            .iter()
            .find(|w| &w.id == worker_id)
            .ok_or_else(|| msg_error_anyhow!(Message::WorkerNotFound(worker_id.clone())))?;
        if !args.worked && !args.off {
            msg_bail_anyhow!(Message::EntryStatusRequired);
        }
        if args.off && args.sheets > 0 {
            msg_warning!(Message::SheetsWithoutWork(worker.name.clone(), args.sheets));
        }

        let record = WorkRecord::new(date, &worker.id, &worker.name, args.worked, args.sheets);
        store.save_record(&record)?;
    } else {
        msg_print!(Message::EntryHeader(date.to_string()), true);
        let existing = store.records_in_range(date, date)?;

        for worker in &roster {
            let previous = existing.iter().find(|r| r.worker_id == worker.id);
            let worked = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptWorkerWorked(worker.name.clone()).to_string())
                .default(previous.map(|r| r.worked).unwrap_or(true))
                .interact()?;

            let sheets: u32 = if worked {
                Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptSheetsTapped(worker.name.clone()).to_string())
                    .default(previous.map(|r| r.sheets_tapped).unwrap_or(0))
                    .interact_text()?
            } else {
                0
            };

            let record = WorkRecord::new(date, &worker.id, &worker.name, worked, sheets);
            store.save_record(&record)?;
        }
    }

    let day_total: i64 = store.records_in_range(date, date)?.iter().map(|r| r.salary).sum();
    msg_success!(Message::EntrySaved(date.to_string()));
    msg_info!(Message::EntryDayTotal(format_inr(day_total)));
    Ok(())
}
