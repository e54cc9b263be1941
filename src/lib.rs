//! Core library surface for the train departures CLI.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as the integration tests can reuse the same pieces:
//! persistence, the domain types, the table formatter, and the command loop.
pub mod db;
pub mod error;
pub mod format;
pub mod models;
pub mod repl;

/// Convenience re-exports for the persistence layer, typically used by
/// `main.rs` to bring up the SQLite store.
pub use db::{Repository, StorageConfig};

/// The error taxonomy every layer reports through.
pub use error::{Error, Result};

/// The two domain types that other layers manipulate.
pub use models::{DepartureRecord, TimeOfDay};

/// The interactive entry point.
pub use repl::run;
