use crate::model::UsageNote;

/// A note paired with its 1-based position in the rendered list.
#[derive(Debug, Clone)]
pub struct DisplayNote {
    pub note: UsageNote,
    pub index: usize,
}

/// Assigns 1-based display positions following the stored order.
///
/// The collection's order is canonical and user-arranged (new notes at the
/// front, `move` rearranges), so positions number the sequence exactly as the
/// store holds it — no sorting happens here. Filtering keeps these positions,
/// which is what makes a position printed in a filtered listing still resolve
/// to the same note.
pub fn index_notes(notes: Vec<UsageNote>) -> Vec<DisplayNote> {
    notes
        .into_iter()
        .enumerate()
        .map(|(i, note)| DisplayNote {
            note,
            index: i + 1,
        })
        .collect()
}
