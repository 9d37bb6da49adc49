use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayNote;
use crate::model::UsageNote;
use crate::store::DataStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Confirmed,
    Unconfirmed,
}

#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    pub status: StatusFilter,
    /// Case-insensitive substring match against note content. Empty or
    /// absent matches everything.
    pub search_term: Option<String>,
}

impl NoteFilter {
    /// True when the filter would pass every note through unchanged — the
    /// only state in which the rendered list equals the full list and
    /// position-based reordering is allowed.
    pub fn is_neutral(&self) -> bool {
        self.status == StatusFilter::All
            && self.search_term.as_deref().map_or(true, str::is_empty)
    }

    fn matches(&self, note: &UsageNote, term_lower: &str) -> bool {
        let matches_search =
            term_lower.is_empty() || note.content.to_lowercase().contains(term_lower);

        let matches_status = match self.status {
            StatusFilter::All => true,
            StatusFilter::Confirmed => note.is_confirmed(),
            StatusFilter::Unconfirmed => !note.is_confirmed(),
        };

        matches_search && matches_status
    }
}

/// Evaluate the filter over the full list, preserving relative order and
/// canonical positions of the surviving notes.
pub fn run<S: DataStore>(store: &S, filter: &NoteFilter) -> Result<CmdResult> {
    let indexed = super::helpers::indexed_notes(store)?;
    let total = indexed.len();

    let term_lower = filter
        .search_term
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();

    let listed: Vec<DisplayNote> = indexed
        .into_iter()
        .filter(|dn| filter.matches(&dn.note, &term_lower))
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        if total == 0 {
            result.add_message(CmdMessage::info(
                "No notes recorded yet. Add your first one with `knowhow add`.",
            ));
        } else {
            result.add_message(CmdMessage::info("No notes match the current search/filter."));
        }
    }
    Ok(result.with_listed_notes(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn counted_store(counts: &[u32]) -> InMemoryStore {
        // Later entries push earlier ones down, so insert in reverse to get
        // the listed order to mirror `counts`
        let mut fixture = StoreFixture::new();
        for (i, &count) in counts.iter().enumerate().rev() {
            fixture = fixture.with_used_note(&format!("note {}", i), count);
        }
        fixture.store
    }

    #[test]
    fn confirmed_filter_partitions_by_threshold() {
        let store = counted_store(&[0, 3, 5, 2]);

        let confirmed = run(
            &store,
            &NoteFilter {
                status: StatusFilter::Confirmed,
                search_term: None,
            },
        )
        .unwrap();
        let counts: Vec<u32> = confirmed.listed_notes.iter().map(|dn| dn.note.count).collect();
        assert_eq!(counts, vec![3, 5]);

        let unconfirmed = run(
            &store,
            &NoteFilter {
                status: StatusFilter::Unconfirmed,
                search_term: None,
            },
        )
        .unwrap();
        let counts: Vec<u32> = unconfirmed
            .listed_notes
            .iter()
            .map(|dn| dn.note.count)
            .collect();
        assert_eq!(counts, vec![0, 2]);
    }

    #[test]
    fn filtered_notes_keep_their_canonical_positions() {
        let store = counted_store(&[0, 3, 5, 2]);

        let result = run(
            &store,
            &NoteFilter {
                status: StatusFilter::Confirmed,
                search_term: None,
            },
        )
        .unwrap();

        let positions: Vec<usize> = result.listed_notes.iter().map(|dn| dn.index).collect();
        assert_eq!(positions, vec![2, 3]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let store = StoreFixture::new()
            .with_note("xyz")
            .with_note("ABCdef")
            .store;

        let result = run(
            &store,
            &NoteFilter {
                status: StatusFilter::All,
                search_term: Some("abc".to_string()),
            },
        )
        .unwrap();

        assert_eq!(result.listed_notes.len(), 1);
        assert_eq!(result.listed_notes[0].note.content, "ABCdef");
    }

    #[test]
    fn empty_search_term_matches_everything() {
        let store = StoreFixture::new().with_notes(3).store;

        let result = run(
            &store,
            &NoteFilter {
                status: StatusFilter::All,
                search_term: Some(String::new()),
            },
        )
        .unwrap();

        assert_eq!(result.listed_notes.len(), 3);
    }

    #[test]
    fn search_and_status_combine_with_and() {
        let store = StoreFixture::new()
            .with_used_note("git rebase --onto", 0)
            .with_used_note("git bisect run", 4)
            .with_used_note("jq group_by", 5)
            .store;

        let result = run(
            &store,
            &NoteFilter {
                status: StatusFilter::Confirmed,
                search_term: Some("git".to_string()),
            },
        )
        .unwrap();

        assert_eq!(result.listed_notes.len(), 1);
        assert_eq!(result.listed_notes[0].note.content, "git bisect run");
    }

    #[test]
    fn neutral_filter_detection() {
        assert!(NoteFilter::default().is_neutral());
        assert!(NoteFilter {
            status: StatusFilter::All,
            search_term: Some(String::new()),
        }
        .is_neutral());
        assert!(!NoteFilter {
            status: StatusFilter::Confirmed,
            search_term: None,
        }
        .is_neutral());
        assert!(!NoteFilter {
            status: StatusFilter::All,
            search_term: Some("x".to_string()),
        }
        .is_neutral());
    }

    #[test]
    fn empty_store_and_empty_match_report_differently() {
        let empty = InMemoryStore::new();
        let result = run(&empty, &NoteFilter::default()).unwrap();
        assert!(result.messages[0].content.contains("No notes recorded yet"));

        let store = StoreFixture::new().with_note("something").store;
        let result = run(
            &store,
            &NoteFilter {
                status: StatusFilter::All,
                search_term: Some("no such term".to_string()),
            },
        )
        .unwrap();
        assert!(result.messages[0].content.contains("match"));
    }
}
