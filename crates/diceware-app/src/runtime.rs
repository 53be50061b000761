//! Runtime loop.
//!
//! Generic orchestration over a [`Console`]: render the grid, show the
//! menu and any pending notification, block on one command line, apply
//! it to the [`Session`], execute the resulting actions. Single
//! threaded and synchronous; the only suspension point is the blocking
//! read.

use thiserror::Error;

use crate::console::PROMPT;
use crate::{Console, LineInput, Session, SessionAction, SessionError, SessionEvent};

/// Errors that terminate the runtime loop.
///
/// User mistakes never appear here; they stay inside the session's
/// notification channel.
#[derive(Error, Debug)]
pub enum RuntimeError<E: std::error::Error + 'static> {
    /// Console rendering or input failed.
    #[error("console error: {0}")]
    Console(#[source] E),

    /// Fatal session fault (word list integrity).
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Drives one interactive session through a console.
pub struct Runtime<C: Console> {
    console: C,
    session: Session,
}

impl<C: Console> Runtime<C> {
    /// Pair a session with a console.
    pub fn new(session: Session, console: C) -> Self {
        Self { console, session }
    }

    /// Run the blocking read-command / apply / render loop.
    ///
    /// Returns `Ok(())` on both normal and interrupted quits; the
    /// redacted grid has been rendered and the farewell shown by then.
    ///
    /// # Errors
    ///
    /// Console failures and fatal session faults.
    pub fn run(mut self) -> Result<(), RuntimeError<C::Error>> {
        self.console.clear().map_err(RuntimeError::Console)?;
        let view = self.session.view()?;
        self.console.render_grid(&view).map_err(RuntimeError::Console)?;

        loop {
            self.console.render_menu().map_err(RuntimeError::Console)?;
            if let Some(notification) = self.session.take_notification() {
                self.console.render_notification(&notification).map_err(RuntimeError::Console)?;
            }

            let event = match self.console.read_line(PROMPT).map_err(RuntimeError::Console)? {
                LineInput::Line(line) => SessionEvent::Line(line),
                LineInput::Interrupted => SessionEvent::Interrupted,
            };

            self.console.clear().map_err(RuntimeError::Console)?;
            for action in self.session.handle(event)? {
                match action {
                    SessionAction::Render => {
                        let view = self.session.view()?;
                        self.console.render_grid(&view).map_err(RuntimeError::Console)?;
                    },
                    SessionAction::RenderRedacted => {
                        let view = self.session.redacted_view();
                        self.console.render_grid(&view).map_err(RuntimeError::Console)?;
                        self.console.render_menu().map_err(RuntimeError::Console)?;
                    },
                    SessionAction::Quit => {
                        self.console.farewell().map_err(RuntimeError::Console)?;
                        return Ok(());
                    },
                }
            }
        }
    }

    /// Read access to the session (for tests and diagnostics).
    pub fn session(&self) -> &Session {
        &self.session
    }
}
