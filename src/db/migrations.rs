//! Database schema migration management and versioning system.
//!
//! A small migration framework for evolving the SQLite schema over time.
//! Applied migrations are recorded in a `migrations` table so each version
//! runs exactly once, and pending migrations are applied inside a single
//! transaction during database initialization.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taplog::db::migrations::{init_with_migrations, get_db_version};
//! use rusqlite::Connection;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut conn = Connection::open("taplog.db")?;
//! init_with_migrations(&mut conn)?;
//! let version = get_db_version(&conn)?;
//! # Ok(())
//! # }
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema migration with its execution logic.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Record and roster tables plus their lookup indices.
fn migrate_v1(tx: &Transaction) -> Result<()> {
    // Records are keyed by the composite "<date>-<worker_id>" id, which is
    // what turns a second save of the same day into an update instead of a
    // duplicate row.
    tx.execute(
        "CREATE TABLE IF NOT EXISTS records (
        id TEXT NOT NULL PRIMARY KEY,
        date DATE NOT NULL,
        worker_id TEXT NOT NULL,
        worker_name TEXT NOT NULL,
        worked BOOLEAN NOT NULL,
        sheets_tapped INTEGER NOT NULL ON CONFLICT REPLACE DEFAULT 0,
        salary INTEGER NOT NULL ON CONFLICT REPLACE DEFAULT 0
    )",
        [],
    )?;

    tx.execute(
        "CREATE TABLE IF NOT EXISTS workers (
        id TEXT NOT NULL PRIMARY KEY,
        name TEXT NOT NULL
    )",
        [],
    )?;

    // Range queries and deletions scan by date; history lookups by worker
    tx.execute("CREATE INDEX IF NOT EXISTS idx_records_date ON records(date)", [])?;
    tx.execute("CREATE INDEX IF NOT EXISTS idx_records_worker ON records(worker_id)", [])?;

    Ok(())
}

/// Registry of all known migrations, applied in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    /// Creates a manager with every known migration registered.
    pub fn new() -> Self {
        Self {
            migrations: vec![Migration {
                version: 1,
                name: "create_records_and_workers",
                up: migrate_v1,
            }],
        }
    }

    /// Executes all pending migrations in version order.
    ///
    /// Creates the tracking table if needed, determines the current version,
    /// and applies anything newer inside one transaction. A failing migration
    /// rolls the whole batch back and propagates the error.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current = self.current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current).collect();

        if pending.is_empty() {
            msg_debug!("Schema is up to date");
            return Ok(());
        }

        msg_info!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;
        for migration in pending {
            msg_info!(Message::RunningMigration(migration.version, migration.name.to_string()));

            if let Err(e) = (migration.up)(&tx) {
                msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                return Err(e);
            }

            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
            msg_success!(Message::MigrationCompleted(migration.version));
        }
        tx.commit()?;

        msg_success!(Message::AllMigrationsCompleted);
        Ok(())
    }

    /// Highest applied version, or 0 for a fresh database.
    fn current_version(&self, conn: &Connection) -> Result<u32> {
        match conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get::<_, Option<u32>>(0)) {
            Ok(version) => Ok(version.unwrap_or(0)),
            // The migrations table does not exist yet
            Err(_) => Ok(0),
        }
    }

    /// Complete migration history as (version, name, applied_at) tuples.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?;

        let mut history = Vec::new();
        for row in rows {
            history.push(row?);
        }
        Ok(history)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies all pending migrations to the given connection.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

/// Retrieves the current database schema version.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().current_version(conn)
}

/// Checks whether the database is behind the latest known migration.
pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    let latest = manager.migrations.last().map(|m| m.version).unwrap_or(0);
    Ok(manager.current_version(conn)? < latest)
}
