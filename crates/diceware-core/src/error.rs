//! Error types for the diceware core.
//!
//! Strongly-typed errors per layer: grid index violations and word
//! store faults. A [`WordStoreError::MissingKey`] for a key in the
//! valid dice range indicates a corrupt or incomplete word list, not a
//! user mistake, and callers are expected to treat it as fatal.

use thiserror::Error;

use crate::LookupKey;

/// Errors from [`DiceGrid`](crate::DiceGrid) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Row index outside the current grid.
    #[error("no row at index {index} (grid has {len} rows)")]
    InvalidRow {
        /// Zero-based index that was requested.
        index: usize,
        /// Row count at the time of the request.
        len: usize,
    },
}

/// Errors from building or querying a [`WordStore`](crate::WordStore).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordStoreError {
    /// No word stored for the given key.
    #[error("no word for key {0}")]
    MissingKey(LookupKey),

    /// The same key appeared twice in the source records.
    #[error("duplicate key {0} in word list")]
    DuplicateKey(LookupKey),

    /// A record mapped a key to an empty word.
    #[error("empty word for key {0}")]
    EmptyWord(LookupKey),

    /// A word list line could not be parsed as `<key> <word>`.
    #[error("malformed word list line {line_no}")]
    MalformedLine {
        /// One-based line number in the source text.
        line_no: usize,
    },
}
