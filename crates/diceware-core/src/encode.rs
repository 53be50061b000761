//! Face-to-key encoding.

use crate::{LookupKey, Row};

/// Encode a row as its word-list lookup key.
///
/// Concatenates the decimal digit of each face in roll order, e.g.
/// faces `[1, 2, 3, 4, 5]` encode to `12345`. Pure and total for any
/// face in `1..=9`; no leading-zero handling is needed because a face
/// digit is never zero.
pub fn encode(row: &Row) -> LookupKey {
    row.faces().iter().fold(0, |key, &face| key * 10 + LookupKey::from(face))
}
