//! Command-line interface definition and dispatch.
//!
//! Each subcommand lives in its own module and exposes a `cmd` function.
//! The dispatcher reads the configuration once and hands every data
//! command an opened [`Store`], so the backend decision is made in a
//! single place per invocation.

pub mod delete;
pub mod entry;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod seed;
pub mod sum;
pub mod workers;

use crate::db::store::Store;
use crate::libs::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Record a day of tapping for the roster")]
    Entry(entry::EntryArgs),
    #[command(about = "Show per-worker totals for a period")]
    Sum(sum::SumArgs),
    #[command(about = "List raw work records for a period")]
    List(list::ListArgs),
    #[command(about = "Manage the worker roster")]
    Workers(workers::WorkersArgs),
    #[command(about = "Delete records in bulk")]
    Delete(delete::DeleteArgs),
    #[command(about = "Export records to a CSV file")]
    Export(export::ExportArgs),
    #[command(about = "Import records from a CSV file")]
    Import(import::ImportArgs),
    #[command(about = "Fill an empty store with a week of sample data")]
    Seed,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parses the command line and runs the selected subcommand.
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let config = Config::read()?;

        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Entry(args) => entry::cmd(args, &mut Store::open(&config)?),
            Commands::Sum(args) => sum::cmd(args, &mut Store::open(&config)?),
            Commands::List(args) => list::cmd(args, &mut Store::open(&config)?),
            Commands::Workers(args) => workers::cmd(args, &mut Store::open(&config)?),
            Commands::Delete(args) => delete::cmd(args, &mut Store::open(&config)?),
            Commands::Export(args) => export::cmd(args, &mut Store::open(&config)?),
            Commands::Import(args) => import::cmd(args, &mut Store::open(&config)?),
            Commands::Seed => seed::cmd(&mut Store::open(&config)?),
        }
    }
}
