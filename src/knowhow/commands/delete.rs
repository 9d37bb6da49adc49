use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use uuid::Uuid;

pub fn run<S: DataStore>(store: &mut S, id: Uuid) -> Result<CmdResult> {
    let mut notes = store.load_notes()?;

    let pos = match notes.iter().position(|n| n.id == id) {
        Some(pos) => pos,
        // Stale reference, nothing to do
        None => return Ok(CmdResult::default()),
    };

    let removed = notes.remove(pos);
    store.save_notes(&notes)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note deleted: {}",
        removed.content
    )));
    result.affected_notes.push(removed);
    Ok(result)
}
