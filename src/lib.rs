//! # Taplog - Rubber Tapping Payroll Tracker
//!
//! A command-line utility for recording daily work on a small rubber farm:
//! who worked, how many sheets they tapped, and what they are owed.
//!
//! ## Features
//!
//! - **Daily Entries**: Record worked/off status and sheet counts per worker
//! - **Fixed Day Rate**: ₹1,100 per worked day, stored with each record
//! - **Roster Management**: Add, rename and remove workers without touching history
//! - **Summaries**: Per-worker totals over any date range
//! - **CSV Exchange**: Export and import records as CSV files
//! - **Dual Storage**: SQLite database with a flat-file JSON fallback
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taplog::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
