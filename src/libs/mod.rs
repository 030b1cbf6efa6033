//! Core library modules for the taplog application.
//!
//! Provides everything the commands build on: the record and roster types,
//! the CSV interchange codec, configuration and data paths, aggregation,
//! sample data generation, and terminal presentation.

pub mod config;
pub mod csv;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod record;
pub mod seed;
pub mod summary;
pub mod view;
pub mod worker;
