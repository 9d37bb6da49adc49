use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use uuid::Uuid;

pub fn run<S: DataStore>(store: &mut S, id: Uuid, new_content: &str) -> Result<CmdResult> {
    let new_content = new_content.trim();
    let mut result = CmdResult::default();

    if new_content.is_empty() {
        result.add_message(CmdMessage::warning("Note content cannot be empty"));
        return Ok(result);
    }

    let mut notes = store.load_notes()?;
    let pos = match notes.iter().position(|n| n.id == id) {
        Some(pos) => pos,
        None => return Ok(result),
    };

    notes[pos].content = new_content.to_string();
    let note = notes[pos].clone();
    store.save_notes(&notes)?;

    result.add_message(CmdMessage::success(format!("Note updated: {}", note.content)));
    result.affected_notes.push(note);
    Ok(result)
}
