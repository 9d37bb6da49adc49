use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Comment;
use crate::store::DataStore;
use uuid::Uuid;

pub fn add<S: DataStore>(store: &mut S, id: Uuid, text: &str) -> Result<CmdResult> {
    let text = text.trim();
    let mut result = CmdResult::default();

    if text.is_empty() {
        result.add_message(CmdMessage::warning("Comment text cannot be empty"));
        return Ok(result);
    }

    let mut notes = store.load_notes()?;
    let pos = match notes.iter().position(|n| n.id == id) {
        Some(pos) => pos,
        None => return Ok(result),
    };

    // Comments keep append order
    notes[pos].comments.push(Comment::new(text.to_string()));
    let note = notes[pos].clone();
    store.save_notes(&notes)?;

    result.add_message(CmdMessage::success(format!(
        "Comment added to: {}",
        note.content
    )));
    result.affected_notes.push(note);
    Ok(result)
}

pub fn remove<S: DataStore>(store: &mut S, note_id: Uuid, comment_id: Uuid) -> Result<CmdResult> {
    let mut notes = store.load_notes()?;
    let mut result = CmdResult::default();

    let pos = match notes.iter().position(|n| n.id == note_id) {
        Some(pos) => pos,
        None => return Ok(result),
    };

    let before = notes[pos].comments.len();
    notes[pos].comments.retain(|c| c.id != comment_id);
    if notes[pos].comments.len() == before {
        // Stale comment reference, nothing to do
        return Ok(result);
    }

    let note = notes[pos].clone();
    store.save_notes(&notes)?;

    result.add_message(CmdMessage::success(format!(
        "Comment removed from: {}",
        note.content
    )));
    result.affected_notes.push(note);
    Ok(result)
}
