//! Domain core for diceware passphrase generation.
//!
//! Pure data types and operations with no I/O: the mutable grid of dice
//! rows, the deterministic face-to-key encoder, and the read-only word
//! store. Session orchestration lives in `diceware-app`; terminal
//! rendering lives in `diceware-cli`.
//!
//! # Components
//!
//! - [`DiceGrid`]: ordered rows of die faces with reroll/add/remove
//! - [`encode`]: maps a row's faces to its word-list [`LookupKey`]
//! - [`WordStore`]: static key-to-word table loaded once at startup

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod encode;
mod error;
mod grid;
mod wordlist;

pub use encode::encode;
pub use error::{GridError, WordStoreError};
pub use grid::{DiceGrid, DieFace, Row};
pub use wordlist::{WordStore, standard_keys};

/// Number of faces on each die.
pub const FACE_COUNT: u8 = 6;

/// Number of dice in one row; five dice select one word-list entry.
pub const DICE_PER_ROW: usize = 5;

/// Minimum number of rows the grid may shrink to.
pub const MIN_ROWS: usize = 3;

/// Expected entry count of a complete word list (`FACE_COUNT ^ DICE_PER_ROW`).
pub const WORDLIST_LEN: usize = 7776;

/// Integer key formed by concatenating a row's face digits.
///
/// For the standard five-dice, six-face configuration the valid range
/// is `11111..=66666`.
pub type LookupKey = u32;
