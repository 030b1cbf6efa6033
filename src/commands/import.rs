use crate::db::store::Store;
use crate::libs::csv;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Imports records from a CSV file previously produced by `export`.
///
/// Rows are saved in file order, so when the file contains the same
/// date and worker twice the later row wins. Salaries are taken from
/// the file as-is, not recomputed.
#[derive(Debug, Args)]
pub struct ImportArgs {
    /// CSV file to import
    pub file: PathBuf,
}

pub fn cmd(args: ImportArgs, store: &mut Store) -> Result<()> {
    let text = fs::read_to_string(&args.file)?;
    let records = csv::decode(&text)?;

    for record in &records {
        store.save_record(record)?;
    }

    msg_success!(Message::ImportCompleted(records.len(), args.file.display().to_string()));
    Ok(())
}
