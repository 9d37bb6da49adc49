use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CONFIRM_THRESHOLD;
use crate::store::DataStore;
use uuid::Uuid;

pub fn run<S: DataStore>(store: &mut S, id: Uuid) -> Result<CmdResult> {
    let mut notes = store.load_notes()?;

    let pos = match notes.iter().position(|n| n.id == id) {
        Some(pos) => pos,
        None => return Ok(CmdResult::default()),
    };

    notes[pos].count += 1;
    let note = notes[pos].clone();
    store.save_notes(&notes)?;

    let mut result = CmdResult::default();
    let message = if note.count == CONFIRM_THRESHOLD {
        CmdMessage::success(format!(
            "Used {} times — now confirmed: {}",
            note.count, note.content
        ))
    } else {
        CmdMessage::success(format!("Used {} times: {}", note.count, note.content))
    };
    result.add_message(message);
    result.affected_notes.push(note);
    Ok(result)
}
