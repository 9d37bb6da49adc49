use crate::commands::get::NoteFilter;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{KnowhowError, Result};
use crate::store::DataStore;

/// Move the note at 1-based position `from` to position `to`, shifting the
/// notes in between.
///
/// Only legal against the full list: with any search or status filter in
/// effect the rendered positions no longer line up with the stored sequence,
/// so the operation is refused outright rather than remapped.
pub fn run<S: DataStore>(
    store: &mut S,
    from: usize,
    to: usize,
    filter: &NoteFilter,
) -> Result<CmdResult> {
    if !filter.is_neutral() {
        return Err(KnowhowError::Api(
            "Reordering is only available on the full, unfiltered list".to_string(),
        ));
    }

    let mut notes = store.load_notes()?;
    let len = notes.len();
    if from == 0 || from > len {
        return Err(KnowhowError::Api(format!("No note at position {}", from)));
    }
    if to == 0 || to > len {
        return Err(KnowhowError::Api(format!("No note at position {}", to)));
    }

    let mut result = CmdResult::default();
    if from == to {
        result.add_message(CmdMessage::info(format!("Note already at position {}", to)));
        return Ok(result);
    }

    let note = notes.remove(from - 1);
    notes.insert(to - 1, note.clone());
    store.save_notes(&notes)?;

    result.add_message(CmdMessage::success(format!(
        "Moved to position {}: {}",
        to, note.content
    )));
    result.affected_notes.push(note);
    Ok(result)
}
