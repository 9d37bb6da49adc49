use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::notes_at_positions;

pub fn run<S: DataStore>(store: &S, positions: &[usize]) -> Result<CmdResult> {
    let listed = notes_at_positions(store, positions)?;
    Ok(CmdResult::default().with_listed_notes(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn returns_requested_notes_in_request_order() {
        let mut store = InMemoryStore::new();
        create::run(&mut store, "A").unwrap();
        create::run(&mut store, "B").unwrap();
        create::run(&mut store, "C").unwrap();

        // List order is C, B, A
        let result = run(&store, &[3, 1]).unwrap();

        assert_eq!(result.listed_notes.len(), 2);
        assert_eq!(result.listed_notes[0].note.content, "A");
        assert_eq!(result.listed_notes[1].note.content, "C");
    }

    #[test]
    fn unknown_position_is_an_error() {
        let mut store = InMemoryStore::new();
        create::run(&mut store, "only").unwrap();

        assert!(run(&store, &[2]).is_err());
    }
}
