use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::UsageNote;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, content: &str) -> Result<CmdResult> {
    let content = content.trim();
    let mut result = CmdResult::default();

    if content.is_empty() {
        result.add_message(CmdMessage::warning("Note content cannot be empty"));
        return Ok(result);
    }

    let mut notes = store.load_notes()?;
    let note = UsageNote::new(content.to_string());
    // Newest notes go to the front of the list
    notes.insert(0, note.clone());
    store.save_notes(&notes)?;

    result.add_message(CmdMessage::success(format!("Note added: {}", note.content)));
    result.affected_notes.push(note);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn new_note_lands_at_the_front() {
        let mut store = InMemoryStore::new();
        run(&mut store, "first").unwrap();
        run(&mut store, "second").unwrap();

        let notes = store.load_notes().unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].content, "second");
        assert_eq!(notes[1].content, "first");
    }

    #[test]
    fn new_note_starts_with_zero_count_and_no_comments() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "fresh").unwrap();

        assert_eq!(result.affected_notes.len(), 1);
        let note = &result.affected_notes[0];
        assert_eq!(note.count, 0);
        assert!(note.comments.is_empty());
    }

    #[test]
    fn content_is_trimmed() {
        let mut store = InMemoryStore::new();
        run(&mut store, "  padded  ").unwrap();

        let notes = store.load_notes().unwrap();
        assert_eq!(notes[0].content, "padded");
    }

    #[test]
    fn empty_content_is_rejected() {
        let mut store = InMemoryStore::new();
        run(&mut store, "").unwrap();
        run(&mut store, "   ").unwrap();

        assert!(store.load_notes().unwrap().is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let mut store = InMemoryStore::new();
        run(&mut store, "same content").unwrap();
        run(&mut store, "same content").unwrap();

        let notes = store.load_notes().unwrap();
        assert_ne!(notes[0].id, notes[1].id);
    }
}
