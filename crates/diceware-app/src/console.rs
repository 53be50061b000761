//! Console abstraction.
//!
//! The [`Console`] trait decouples the runtime loop from terminal
//! specifics. The production implementation renders boxed tables and
//! reads raw-mode input; tests drive the same runtime with a scripted
//! double.

use crate::{GridView, Notification};

/// Prompt shown before every command read.
pub const PROMPT: &str = "Enter an option (q to quit) → ";

/// Menu of available commands, in display order.
pub const MENU: [(&str, &str); 5] = [
    ("r", "reroll all dice"),
    ("rn", "reroll only the nth row"),
    ("p", "print words"),
    ("+/-", "add or remove one row"),
    ("q", "quit"),
];

/// One line of user input, or the end of the input stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineInput {
    /// A submitted line (without the trailing newline).
    Line(String),
    /// Interrupt or end-of-input while awaiting a command; routes to
    /// the redacted quit path, never to an error.
    Interrupted,
}

/// Platform-specific rendering and input for the runtime loop.
///
/// Implementations own no session state: the runtime supplies fully
/// resolved [`GridView`]s and pending notifications.
pub trait Console {
    /// Platform-specific error type.
    type Error: std::error::Error + 'static;

    /// Clear the display before a fresh render cycle.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Render a resolved grid (live or redacted).
    fn render_grid(&mut self, view: &GridView) -> Result<(), Self::Error>;

    /// Render the command menu ([`MENU`]).
    fn render_menu(&mut self) -> Result<(), Self::Error>;

    /// Render a pending notification.
    fn render_notification(&mut self, notification: &Notification) -> Result<(), Self::Error>;

    /// Block until the user submits a line or interrupts.
    fn read_line(&mut self, prompt: &str) -> Result<LineInput, Self::Error>;

    /// Final farewell on the quit path.
    fn farewell(&mut self) -> Result<(), Self::Error>;
}
