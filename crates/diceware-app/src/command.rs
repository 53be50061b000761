//! Command parsing.
//!
//! User input is parsed into a closed [`Command`] alphabet before
//! dispatch, decoupling parsing from the state transitions in
//! [`Session`](crate::Session).

/// One user command, parsed from a prompt line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `r<N>`: reroll the N-th row (1-based as typed; range checking
    /// happens in the session, where the row count is known).
    RerollRow(usize),
    /// `r`: reroll every row.
    RerollAll,
    /// `+`: append one freshly rolled row.
    AddRow,
    /// `-`: remove the last row.
    RemoveRow,
    /// `p`: show the passphrase built from the current rows.
    Print,
    /// `q`: quit with a redacted final display.
    Quit,
    /// Anything that matches no other command.
    Invalid,
}

impl Command {
    /// Parse a prompt line, case-insensitively, ignoring surrounding
    /// whitespace.
    pub fn parse(input: &str) -> Self {
        let input = input.trim().to_ascii_lowercase();
        match input.as_str() {
            "r" => Self::RerollAll,
            "+" => Self::AddRow,
            "-" => Self::RemoveRow,
            "p" => Self::Print,
            "q" => Self::Quit,
            other => {
                // `r` followed by digits only; a number too large for
                // usize is as invalid as any other stray input.
                if let Some(digits) = other.strip_prefix('r') {
                    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                        return digits.parse().map_or(Self::Invalid, Self::RerollRow);
                    }
                }
                Self::Invalid
            },
        }
    }
}
