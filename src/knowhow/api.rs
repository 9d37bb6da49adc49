//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as
//! the single entry point for all knowhow operations, regardless of the UI
//! being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (1-based list positions → note ids)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! The facade never touches stdout/stderr, never formats for a terminal, and
//! holds no business logic — that belongs in `commands/*.rs`.
//!
//! ## Generic Over DataStore
//!
//! `KnowhowApi<S: DataStore>` is generic over the storage backend:
//! - Production: `KnowhowApi<FileStore>`
//! - Testing: `KnowhowApi<InMemoryStore>`
//!
//! This enables exercising the whole stack without touching the filesystem.

use crate::commands;
use crate::error::{KnowhowError, Result};
use crate::store::DataStore;
use std::path::PathBuf;

/// The main API facade for knowhow operations.
///
/// Generic over `DataStore` to allow different storage backends. All UI
/// clients should interact through this API.
pub struct KnowhowApi<S: DataStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: DataStore> KnowhowApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn create_note(&mut self, content: &str) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, content)
    }

    pub fn list_notes(&self, filter: NoteFilter) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, &filter)
    }

    pub fn view_notes(&self, positions: &[usize]) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, positions)
    }

    pub fn mark_used(&mut self, positions: &[usize]) -> Result<commands::CmdResult> {
        let resolved = commands::helpers::resolve_positions(&self.store, positions)?;
        let mut result = commands::CmdResult::default();
        for (_, id) in resolved {
            result.merge(commands::increment::run(&mut self.store, id)?);
        }
        Ok(result)
    }

    pub fn update_note(&mut self, position: usize, content: &str) -> Result<commands::CmdResult> {
        let resolved = commands::helpers::resolve_positions(&self.store, &[position])?;
        commands::update::run(&mut self.store, resolved[0].1, content)
    }

    pub fn delete_notes(&mut self, positions: &[usize]) -> Result<commands::CmdResult> {
        let resolved = commands::helpers::resolve_positions(&self.store, positions)?;
        let mut result = commands::CmdResult::default();
        for (_, id) in resolved {
            result.merge(commands::delete::run(&mut self.store, id)?);
        }
        Ok(result)
    }

    pub fn comment_note(&mut self, position: usize, text: &str) -> Result<commands::CmdResult> {
        let resolved = commands::helpers::resolve_positions(&self.store, &[position])?;
        commands::comment::add(&mut self.store, resolved[0].1, text)
    }

    /// Remove a comment addressed by its 1-based position within the note's
    /// comment list.
    pub fn uncomment_note(
        &mut self,
        position: usize,
        comment_pos: usize,
    ) -> Result<commands::CmdResult> {
        let notes = commands::helpers::notes_at_positions(&self.store, &[position])?;
        let note = &notes[0].note;
        let comment_id = comment_pos
            .checked_sub(1)
            .and_then(|i| note.comments.get(i))
            .map(|c| c.id)
            .ok_or_else(|| {
                KnowhowError::Api(format!(
                    "No comment {} on note at position {}",
                    comment_pos, position
                ))
            })?;
        commands::comment::remove(&mut self.store, note.id, comment_id)
    }

    /// Manual reordering of the full list. Always runs against a neutral
    /// filter: a filtered view never offers this operation.
    pub fn move_note(&mut self, from: usize, to: usize) -> Result<commands::CmdResult> {
        commands::reorder::run(&mut self.store, from, to, &NoteFilter::default())
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::get::{NoteFilter, StatusFilter};
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> KnowhowApi<InMemoryStore> {
        KnowhowApi::new(InMemoryStore::new(), std::env::temp_dir())
    }

    #[test]
    fn positions_resolve_against_the_rendered_list() {
        let mut api = api();
        api.create_note("old").unwrap();
        api.create_note("new").unwrap();

        // "new" is at position 1; using it twice only bumps that note
        api.mark_used(&[1]).unwrap();
        api.mark_used(&[1]).unwrap();

        let listed = api.list_notes(NoteFilter::default()).unwrap().listed_notes;
        assert_eq!(listed[0].note.count, 2);
        assert_eq!(listed[1].note.count, 0);
    }

    #[test]
    fn uncomment_resolves_comment_by_position() {
        let mut api = api();
        api.create_note("note").unwrap();
        api.comment_note(1, "first").unwrap();
        api.comment_note(1, "second").unwrap();

        api.uncomment_note(1, 1).unwrap();

        let listed = api.view_notes(&[1]).unwrap().listed_notes;
        assert_eq!(listed[0].note.comments.len(), 1);
        assert_eq!(listed[0].note.comments[0].text, "second");
    }

    #[test]
    fn uncomment_with_bad_comment_position_errors() {
        let mut api = api();
        api.create_note("note").unwrap();

        assert!(api.uncomment_note(1, 1).is_err());
        assert!(api.uncomment_note(1, 0).is_err());
    }

    #[test]
    fn delete_accepts_multiple_positions() {
        let mut api = api();
        api.create_note("A").unwrap();
        api.create_note("B").unwrap();
        api.create_note("C").unwrap();

        // Positions resolve to ids before any deletion happens, so both go
        api.delete_notes(&[1, 3]).unwrap();

        let listed = api.list_notes(NoteFilter::default()).unwrap().listed_notes;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].note.content, "B");
    }
}
