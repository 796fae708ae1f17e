//! Error types for the grid and its persistence helpers

use thiserror::Error;

/// Input-contract violations detected by the grid
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Two items share the same identity
    #[error("duplicate item id: {0:?}")]
    DuplicateId(String),

    /// An item has an empty identity
    #[error("item at index {index} has an empty id")]
    EmptyId { index: usize },

    /// An id that is not part of the grid
    #[error("unknown item id: {0:?}")]
    UnknownId(String),

    /// A slot outside `0..len`
    #[error("slot {slot} out of range for {len} items")]
    SlotOutOfRange { slot: usize, len: usize },
}

/// Errors from reading or writing RON files (grid config, saved notes)
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("serialize error: {0}")]
    Serialize(#[from] ron::Error),

    #[error("no config or data directory on this platform")]
    NoDirectory,
}
