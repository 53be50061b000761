//! Application layer for the diceware generator.
//!
//! Pure session state machine plus a generic runtime loop, decoupled
//! from terminal I/O through the [`Console`] trait so the same
//! orchestration code runs in production and in scripted tests.
//!
//! # Components
//!
//! - [`Command`]: closed command alphabet parsed from user input
//! - [`Session`]: the state machine (grid, notification slot, RNG)
//! - [`NotificationSlot`]: single-slot consume-once status channel
//! - [`GridView`]: ephemeral view model handed to the presenter
//! - [`Console`]: trait for platform-specific rendering and input
//! - [`Runtime`]: blocking read-command / apply / render loop

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod command;
mod config;
mod console;
mod notification;
mod runtime;
mod session;
mod view;

pub use command::Command;
pub use config::SessionConfig;
pub use console::{Console, LineInput, MENU, PROMPT};
pub use notification::{Notification, NotificationSlot, Severity};
pub use runtime::{Runtime, RuntimeError};
pub use session::{Session, SessionAction, SessionError, SessionEvent};
pub use view::{DisplayRow, GridView, MASK_FACE, MASK_WORD};
