use crate::db::store::Store;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::libs::worker::{default_roster, WorkerProfile};
use crate::{msg_bail_anyhow, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

/// Roster management.
///
/// Records keep their own copy of the worker name, so renames and removals
/// only affect future entries; history stays exactly as it was written.
#[derive(Debug, Args)]
pub struct WorkersArgs {
    /// Add a worker with the given display name
    #[arg(long, value_name = "NAME")]
    pub add: Option<String>,

    /// Rename a worker
    #[arg(long, num_args = 2, value_names = ["ID", "NAME"])]
    pub rename: Option<Vec<String>>,

    /// Remove a worker by id
    #[arg(long, value_name = "ID")]
    pub remove: Option<String>,

    /// Replace the roster with the default placeholder workers
    #[arg(long)]
    pub reset: bool,
}

pub fn cmd(args: WorkersArgs, store: &mut Store) -> Result<()> {
    if let Some(name) = args.add {
        let mut roster = store.workers()?;
        roster.push(WorkerProfile::with_generated_id(&name));
        store.save_workers(&roster)?;
        msg_success!(Message::WorkerAdded(name));
        return Ok(());
    }

    if let Some(rename) = args.rename {
        let (id, name) = (rename[0].clone(), rename[1].clone());
        let mut roster = store.workers()?;
        match roster.iter_mut().find(|w| w.id == id) {
            Some(worker) => worker.name = name.clone(),
            None => msg_bail_anyhow!(Message::WorkerNotFound(id)),
        }
        store.save_workers(&roster)?;
        msg_success!(Message::WorkerRenamed(id, name));
        return Ok(());
    }

    if let Some(id) = args.remove {
        let mut roster = store.workers()?;
        if roster.len() == 1 {
            msg_warning!(Message::CannotRemoveLastWorker);
            return Ok(());
        }
        let before = roster.len();
        roster.retain(|w| w.id != id);
        if roster.len() == before {
            msg_bail_anyhow!(Message::WorkerNotFound(id));
        }
        store.save_workers(&roster)?;
        msg_success!(Message::WorkerRemoved(id));
        return Ok(());
    }

    if args.reset {
        store.save_workers(&default_roster())?;
        msg_success!(Message::RosterReset);
        return Ok(());
    }

    View::workers(&store.workers()?)
}
