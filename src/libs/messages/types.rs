#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIG MESSAGES ===
    ConfigSaved,
    ConfigModuleStorage,
    PromptStorageBackend,
    PromptDataDir,

    // === ENTRY MESSAGES ===
    EntryHeader(String),
    PromptWorkerWorked(String),
    PromptSheetsTapped(String),
    SheetsWithoutWork(String, u32),
    EntrySaved(String),
    EntryDayTotal(String),
    EntryStatusRequired,

    // === RECORD MESSAGES ===
    NoRecordsFound,
    SummaryHeader(String, String),
    RecordsHeader(String, String),

    // === WORKER MESSAGES ===
    WorkerAdded(String),
    WorkerRenamed(String, String),
    WorkerRemoved(String),
    WorkerNotFound(String),
    CannotRemoveLastWorker,
    RosterReset,

    // === DELETE MESSAGES ===
    ConfirmDeleteAllRecords,
    ConfirmDeleteRange(String, String),
    RecordsDeleted(usize),
    DeleteCancelled,

    // === EXPORT / IMPORT MESSAGES ===
    ExportCompleted(usize, String),
    NoRecordsToExport,
    ImportCompleted(usize, String),

    // === SEED MESSAGES ===
    SeedCompleted(usize),
    SeedSkippedNotEmpty,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,

    // === ERROR MESSAGES ===
    ErrorOccurred(String),
}
