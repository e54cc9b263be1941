//! Error taxonomy shared across the crate. The command loop only ever needs to
//! distinguish two situations: the user typed something unusable, or the
//! storage layer failed underneath a well-formed request. Both are reported and
//! the loop keeps running.

use thiserror::Error;

/// Crate-wide result alias so signatures stay short.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The user's input could not be understood (malformed time, non-numeric
    /// train number, missing argument). The message is shown verbatim.
    #[error("{0}")]
    Validation(String),
    /// The database could not be opened or a statement failed. Wrapping
    /// `anyhow::Error` keeps the `.context(...)` chains the persistence layer
    /// attaches to every statement.
    #[error(transparent)]
    Data(#[from] anyhow::Error),
}

impl Error {
    /// Shorthand for building a validation error from any message-like value.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
