use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A roster entry. The id stays stable for the lifetime of the worker; only
/// the display name may change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerProfile {
    pub id: String,
    pub name: String,
}

impl WorkerProfile {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    /// Creates a profile with a fresh time-based id for a newly added worker.
    pub fn with_generated_id(name: &str) -> Self {
        Self {
            id: format!("worker-{}", Utc::now().timestamp_millis()),
            name: name.to_string(),
        }
    }
}

/// The placeholder roster synthesized when none has ever been saved.
pub fn default_roster() -> Vec<WorkerProfile> {
    vec![
        WorkerProfile::new("worker-a", "Worker A"),
        WorkerProfile::new("worker-b", "Worker B"),
        WorkerProfile::new("worker-c", "Worker C"),
    ]
}
