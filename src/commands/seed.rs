use crate::db::store::Store;
use crate::libs::messages::Message;
use crate::libs::seed;
use crate::{msg_info, msg_success};
use anyhow::Result;

/// Fills an empty store with a week of sample records for the roster.
pub fn cmd(store: &mut Store) -> Result<()> {
    let seeded = seed::seed_if_empty(store)?;
    if seeded == 0 {
        msg_info!(Message::SeedSkippedNotEmpty);
        return Ok(());
    }

    msg_success!(Message::SeedCompleted(seeded));
    Ok(())
}
