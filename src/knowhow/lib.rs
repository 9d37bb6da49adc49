//! # Knowhow Architecture
//!
//! Knowhow is a **UI-agnostic usage-notes library**. The CLI is a client of the
//! library, not the other way around, and that distinction drives the layout.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, asks for confirmation  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (list positions → note ids)            │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, one module per operation            │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait over one whole-snapshot value   │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Collection Model
//!
//! The entire state is one ordered list of [`model::UsageNote`] records. The
//! order is user-arranged (new notes land at the front, `move` rearranges),
//! so nothing in the core ever sorts it. Every mutating command writes the
//! full list back through the store — there is no partial persistence.
//!
//! A note whose reuse count reaches [`model::CONFIRM_THRESHOLD`] is
//! *confirmed*. That status is always computed from the count, never stored.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! User feedback travels as leveled [`commands::CmdMessage`] values inside
//! [`commands::CmdResult`]; only the CLI decides how to render them.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`UsageNote`, `Comment`)
//! - [`index`]: Display positions for the rendered list
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `args`/`main`: argument parsing and terminal output for the binary
//!   (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
