//! Terminal front end for the diceware generator.
//!
//! A thin shell over [`diceware_app::Console`]: boxed grid and menu
//! rendering with comfy-table, notification styling and raw-mode line
//! input with crossterm. All orchestration logic lives in the generic
//! [`diceware_app::Runtime`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod term;

pub use term::{TermConsole, TermError};
