//! Persistence layer for the taplog application.
//!
//! Two interchangeable engines sit behind one trait: an embedded SQLite
//! database with a versioned schema, and a flat JSON-file fallback. The
//! [`store::Store`] selects one of them once at startup and exposes the
//! record and roster operations the commands work with.

/// Storage backend trait and backend identification.
pub mod backend;

/// Flat JSON-file persistence engine.
pub mod flat;

/// Database schema migration system.
///
/// Handles versioned schema changes and tracks migration history for the
/// SQLite engine.
pub mod migrations;

/// SQLite persistence engine.
pub mod sqlite;

/// Backend selection and the storage façade used by commands.
pub mod store;
