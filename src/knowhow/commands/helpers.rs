use crate::error::{KnowhowError, Result};
use crate::index::{index_notes, DisplayNote};
use crate::store::DataStore;
use uuid::Uuid;

pub fn indexed_notes<S: DataStore>(store: &S) -> Result<Vec<DisplayNote>> {
    let notes = store.load_notes()?;
    Ok(index_notes(notes))
}

/// Resolve 1-based list positions to stable note ids.
///
/// Positions come from what the user last saw printed; a position with no
/// note behind it is an input error, unlike a stale id deeper down.
pub fn resolve_positions<S: DataStore>(
    store: &S,
    positions: &[usize],
) -> Result<Vec<(usize, Uuid)>> {
    let indexed = indexed_notes(store)?;

    positions
        .iter()
        .map(|&pos| {
            indexed
                .iter()
                .find(|dn| dn.index == pos)
                .map(|dn| (pos, dn.note.id))
                .ok_or_else(|| KnowhowError::Api(format!("No note at position {}", pos)))
        })
        .collect()
}

pub fn notes_at_positions<S: DataStore>(
    store: &S,
    positions: &[usize],
) -> Result<Vec<DisplayNote>> {
    let indexed = indexed_notes(store)?;
    positions
        .iter()
        .map(|&pos| {
            indexed
                .iter()
                .find(|dn| dn.index == pos)
                .cloned()
                .ok_or_else(|| KnowhowError::Api(format!("No note at position {}", pos)))
        })
        .collect()
}
