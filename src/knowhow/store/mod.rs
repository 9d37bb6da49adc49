//! # Storage Layer
//!
//! This module defines the storage abstraction for knowhow. The [`DataStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Snapshot Model
//!
//! The durable state is exactly one value: the full ordered sequence of
//! notes. Implementations load it whole and overwrite it whole — there is no
//! per-record CRUD and no delta writing. An absent store reads as an empty
//! sequence. Writes are best effort: no retry, no versioning, no migration.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON file in the data
//!   directory (`notes.json` by default, configurable)
//! - [`memory::InMemoryStore`]: In-memory storage for testing

use crate::error::Result;
use crate::model::UsageNote;

pub mod fs;
pub mod memory;

/// Abstract interface for note persistence.
pub trait DataStore {
    /// Load the full ordered collection. An empty store yields an empty list.
    fn load_notes(&self) -> Result<Vec<UsageNote>>;

    /// Overwrite the stored collection with the given sequence.
    fn save_notes(&mut self, notes: &[UsageNote]) -> Result<()>;
}
