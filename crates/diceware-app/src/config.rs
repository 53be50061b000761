//! Session configuration.
//!
//! Explicit configuration passed into session construction; there is no
//! process-wide mutable state.

use std::num::NonZeroUsize;

/// Default number of dice rows to roll at startup.
pub const DEFAULT_ROWS: usize = 5;

/// Startup configuration for one interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Initial row count. At least 1; the
    /// [`MIN_ROWS`](diceware_core::MIN_ROWS) floor applies only to
    /// shrink operations, so starting smaller is legal.
    pub rows: NonZeroUsize,
}

impl SessionConfig {
    /// Configuration with the given initial row count.
    pub fn new(rows: NonZeroUsize) -> Self {
        Self { rows }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        // DEFAULT_ROWS is non-zero by definition.
        Self { rows: NonZeroUsize::new(DEFAULT_ROWS).unwrap_or(NonZeroUsize::MIN) }
    }
}
