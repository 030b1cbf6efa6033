//! Display implementation for taplog application messages.
//!
//! Converts structured `Message` values into the human-readable text shown in
//! the terminal. All user-facing wording lives here, in one place, so the
//! commands and storage layers never carry string literals of their own.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            // === CONFIG MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleStorage => "Storage settings".to_string(),
            Message::PromptStorageBackend => "Storage backend".to_string(),
            Message::PromptDataDir => "Data directory (leave empty for the default)".to_string(),

            // === ENTRY MESSAGES ===
            Message::EntryHeader(date) => format!("Recording entries for {}", date),
            Message::PromptWorkerWorked(name) => format!("Did {} work?", name),
            Message::PromptSheetsTapped(name) => format!("Sheets tapped by {}", name),
            Message::SheetsWithoutWork(name, sheets) => {
                format!("{} is marked as not worked but has {} sheets recorded", name, sheets)
            }
            Message::EntrySaved(date) => format!("Entries saved for {}", date),
            Message::EntryDayTotal(total) => format!("Total pay for the day: {}", total),
            Message::EntryStatusRequired => "Pass --worked or --off when recording a single worker".to_string(),

            // === RECORD MESSAGES ===
            Message::NoRecordsFound => "No records found for the selected period".to_string(),
            Message::SummaryHeader(start, end) => format!("Summary from {} to {}", start, end),
            Message::RecordsHeader(start, end) => format!("Records from {} to {}", start, end),

            // === WORKER MESSAGES ===
            Message::WorkerAdded(name) => format!("Worker '{}' added to the roster", name),
            Message::WorkerRenamed(id, name) => format!("Worker '{}' renamed to '{}'", id, name),
            Message::WorkerRemoved(id) => format!("Worker '{}' removed from the roster", id),
            Message::WorkerNotFound(id) => format!("Worker '{}' not found in the roster", id),
            Message::CannotRemoveLastWorker => "The roster must keep at least one worker".to_string(),
            Message::RosterReset => "Roster reset to the default workers".to_string(),

            // === DELETE MESSAGES ===
            Message::ConfirmDeleteAllRecords => "Delete ALL records? This cannot be undone".to_string(),
            Message::ConfirmDeleteRange(start, end) => format!("Delete all records from {} to {}?", start, end),
            Message::RecordsDeleted(count) => format!("Deleted {} records", count),
            Message::DeleteCancelled => "Deletion cancelled".to_string(),

            // === EXPORT / IMPORT MESSAGES ===
            Message::ExportCompleted(count, path) => format!("Exported {} records to {}", count, path),
            Message::NoRecordsToExport => "No records to export for the selected period".to_string(),
            Message::ImportCompleted(count, path) => format!("Imported {} records from {}", count, path),

            // === SEED MESSAGES ===
            Message::SeedCompleted(count) => format!("Seeded {} sample records", count),
            Message::SeedSkippedNotEmpty => "Records already exist, sample data was not generated".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed".to_string(),

            // === ERROR MESSAGES ===
            Message::ErrorOccurred(error) => format!("Error: {}", error),
        };
        write!(f, "{}", message)
    }
}
