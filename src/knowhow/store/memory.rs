use super::DataStore;
use crate::error::Result;
use crate::model::UsageNote;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    notes: Vec<UsageNote>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load_notes(&self) -> Result<Vec<UsageNote>> {
        Ok(self.notes.clone())
    }

    fn save_notes(&mut self, notes: &[UsageNote]) -> Result<()> {
        self.notes = notes.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Comment;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        fn push_front(&mut self, note: UsageNote) {
            let mut notes = self.store.load_notes().unwrap();
            notes.insert(0, note);
            self.store.save_notes(&notes).unwrap();
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                self.push_front(UsageNote::new(format!("Test note {}", i + 1)));
            }
            self
        }

        pub fn with_note(mut self, content: &str) -> Self {
            self.push_front(UsageNote::new(content.to_string()));
            self
        }

        pub fn with_used_note(mut self, content: &str, count: u32) -> Self {
            let mut note = UsageNote::new(content.to_string());
            note.count = count;
            self.push_front(note);
            self
        }

        pub fn with_commented_note(mut self, content: &str, comments: &[&str]) -> Self {
            let mut note = UsageNote::new(content.to_string());
            for text in comments {
                note.comments.push(Comment::new(text.to_string()));
            }
            self.push_front(note);
            self
        }
    }
}
