use crate::db::store::Store;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::{Duration, Local, Months, NaiveDate};
use clap::{ArgGroup, Args};
use dialoguer::{theme::ColorfulTheme, Confirm};

/// Bulk deletion of work records.
///
/// Exactly one scope must be chosen. The presets all end today; `--month`
/// and `--year` go back one calendar month and one calendar year rather
/// than a fixed number of days.
#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("scope")
        .required(true)
        .args(["all", "day", "week", "month", "year", "from"])
))]
pub struct DeleteArgs {
    /// Delete every stored record
    #[arg(long)]
    pub all: bool,

    /// Delete today's records
    #[arg(long)]
    pub day: bool,

    /// Delete the last 7 days of records
    #[arg(long)]
    pub week: bool,

    /// Delete the last calendar month of records
    #[arg(long)]
    pub month: bool,

    /// Delete the last calendar year of records
    #[arg(long)]
    pub year: bool,

    /// Start of an explicit date range
    #[arg(long, requires = "to")]
    pub from: Option<NaiveDate>,

    /// End of an explicit date range
    #[arg(long, requires = "from")]
    pub to: Option<NaiveDate>,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub force: bool,
}

pub fn cmd(args: DeleteArgs, store: &mut Store) -> Result<()> {
    let today = Local::now().date_naive();

    // None means the --all scope; the argument group guarantees that one
    // scope is always present.
    let range = match (args.from, args.to) {
        (Some(from), Some(to)) => Some((from, to)),
        _ if args.day => Some((today, today)),
        _ if args.week => Some((today - Duration::days(7), today)),
        _ if args.month => Some((today.checked_sub_months(Months::new(1)).unwrap_or(today), today)),
        _ if args.year => Some((today.checked_sub_months(Months::new(12)).unwrap_or(today), today)),
        _ => None,
    };

    if !args.force {
        let prompt = match &range {
            Some((start, end)) => Message::ConfirmDeleteRange(start.to_string(), end.to_string()),
            None => Message::ConfirmDeleteAllRecords,
        };
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt.to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::DeleteCancelled);
            return Ok(());
        }
    }

    let deleted = match range {
        Some((start, end)) => store.delete_records_in_range(start, end)?,
        None => store.delete_all_records()?,
    };

    msg_success!(Message::RecordsDeleted(deleted));
    Ok(())
}
