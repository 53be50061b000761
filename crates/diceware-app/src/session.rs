//! Session state machine.
//!
//! [`Session`] owns the dice grid, the notification slot, and the RNG
//! for the lifetime of one interactive run. It is a synchronous state
//! machine: it consumes [`SessionEvent`] inputs and produces
//! [`SessionAction`] instructions for the runtime to execute, with
//! `Idle` as the only steady state - every command runs to completion
//! before the next prompt.

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use diceware_core::{DiceGrid, MIN_ROWS, WordStore, WordStoreError, encode};

use crate::view::{MASK_FACE, MASK_WORD};
use crate::{Command, DisplayRow, GridView, Notification, NotificationSlot, SessionConfig};

const NO_SUCH_ROW: &str = "There is no such row. Please try again.";
const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

/// Inputs driving the session state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A submitted command line.
    Line(String),
    /// Interrupt or end-of-input while awaiting a command.
    Interrupted,
}

/// Instructions produced by the session for the runtime to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Recompute the view and render the live grid.
    Render,
    /// Render the redacted grid (quit path only).
    RenderRedacted,
    /// Leave the loop.
    Quit,
}

/// Fatal session faults.
///
/// User mistakes never surface here; they are posted to the
/// notification slot and the loop continues. A word-list miss is a
/// data-integrity fault and terminates the session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The word list has no entry for a rolled key.
    #[error("word list integrity: {0}")]
    WordStore(#[from] WordStoreError),
}

/// The interactive session: grid, notification slot, word store, RNG.
///
/// The word store is owned but never mutated; the grid and slot are
/// mutated only through [`Session::handle`].
#[derive(Debug)]
pub struct Session {
    grid: DiceGrid,
    slot: NotificationSlot,
    store: WordStore,
    rng: StdRng,
}

impl Session {
    /// Start a session with an OS-seeded RNG.
    pub fn new(config: SessionConfig, store: WordStore) -> Self {
        Self::with_rng(config, store, StdRng::from_os_rng())
    }

    /// Start a session with a caller-supplied RNG (deterministic runs
    /// and tests).
    pub fn with_rng(config: SessionConfig, store: WordStore, mut rng: StdRng) -> Self {
        let grid = DiceGrid::new(config.rows, &mut rng);
        Self { grid, slot: NotificationSlot::new(), store, rng }
    }

    /// Process one event and return the actions to execute.
    ///
    /// # Errors
    ///
    /// Only [`SessionError::WordStore`]; every user-level failure is
    /// posted as a notification instead.
    pub fn handle(&mut self, event: SessionEvent) -> Result<Vec<SessionAction>, SessionError> {
        match event {
            SessionEvent::Line(line) => self.apply(Command::parse(&line)),
            SessionEvent::Interrupted => {
                tracing::debug!("input stream ended, quitting");
                Ok(vec![SessionAction::RenderRedacted, SessionAction::Quit])
            },
        }
    }

    /// Apply one parsed command.
    fn apply(&mut self, command: Command) -> Result<Vec<SessionAction>, SessionError> {
        tracing::debug!(?command, rows = self.grid.len(), "applying command");
        match command {
            Command::RerollRow(n) => {
                // The grid's bounds check backs the 1-based prompt
                // contract; 0 and past-the-end both land here.
                let rerolled = n
                    .checked_sub(1)
                    .map(|index| self.grid.reroll_row(index, &mut self.rng))
                    .is_some_and(|result| result.is_ok());
                if !rerolled {
                    self.slot.post(Notification::error(NO_SUCH_ROW));
                }
            },
            Command::RerollAll => self.grid.reroll_all(&mut self.rng),
            Command::AddRow => self.grid.add_row(&mut self.rng),
            Command::RemoveRow => {
                // The boundary message fires on the exact boundary
                // attempt; below the floor removal stays a silent
                // no-op.
                if self.grid.len() == MIN_ROWS {
                    self.slot.post(Notification::error(format!(
                        "Can't remove any further. {MIN_ROWS} rows is the minimum."
                    )));
                }
                let _ = self.grid.remove_row();
            },
            Command::Print => {
                let passphrase = self.passphrase()?;
                self.slot.post(Notification::info(passphrase));
            },
            Command::Quit => {
                return Ok(vec![SessionAction::RenderRedacted, SessionAction::Quit]);
            },
            Command::Invalid => self.slot.post(Notification::error(INVALID_CHOICE)),
        }
        Ok(vec![SessionAction::Render])
    }

    /// Resolve every row to its word and build the live view.
    ///
    /// Recomputed in full on every render - labels and words must
    /// always reflect current dice state.
    ///
    /// # Errors
    ///
    /// A lookup miss for any row is fatal ([`WordStoreError::MissingKey`]).
    pub fn view(&self) -> Result<GridView, SessionError> {
        let mut rows = Vec::with_capacity(self.grid.len());
        for (index, row) in self.grid.rows().iter().enumerate() {
            let word = self.store.word(encode(row))?.to_owned();
            rows.push(DisplayRow { label: index + 1, faces: *row.faces(), word });
        }
        Ok(GridView { rows, redacted: false })
    }

    /// Build the redacted view: every face masked, every word replaced
    /// by the mask token. Infallible - no lookups happen, so the true
    /// values cannot leak on the quit path.
    pub fn redacted_view(&self) -> GridView {
        let rows = (0..self.grid.len())
            .map(|index| DisplayRow {
                label: index + 1,
                faces: [MASK_FACE; diceware_core::DICE_PER_ROW],
                word: MASK_WORD.to_owned(),
            })
            .collect();
        GridView { rows, redacted: true }
    }

    /// The current passphrase: all row words space-joined in row order.
    ///
    /// # Errors
    ///
    /// Same integrity contract as [`Session::view`].
    pub fn passphrase(&self) -> Result<String, SessionError> {
        let mut words = Vec::with_capacity(self.grid.len());
        for row in self.grid.rows() {
            words.push(self.store.word(encode(row))?);
        }
        Ok(words.join(" "))
    }

    /// Consume the pending notification, if any.
    pub fn take_notification(&mut self) -> Option<Notification> {
        self.slot.take()
    }

    /// Read view of the grid.
    pub fn grid(&self) -> &DiceGrid {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use diceware_core::standard_keys;

    use super::*;
    use crate::Severity;

    fn complete_store() -> WordStore {
        WordStore::from_records(standard_keys().map(|key| (key, format!("w{key}")))).unwrap()
    }

    fn session(rows: usize) -> Session {
        let config = SessionConfig::new(NonZeroUsize::new(rows).unwrap());
        Session::with_rng(config, complete_store(), StdRng::seed_from_u64(11))
    }

    fn line(s: &str) -> SessionEvent {
        SessionEvent::Line(s.to_owned())
    }

    #[test]
    fn reroll_one_row_touches_only_that_row() {
        let mut session = session(5);
        let before = session.grid().rows().to_vec();

        let actions = session.handle(line("r3")).unwrap();
        assert_eq!(actions, vec![SessionAction::Render]);
        assert!(session.take_notification().is_none());

        for (i, row) in session.grid().rows().iter().enumerate() {
            if i != 2 {
                assert_eq!(*row, before[i], "row {i} must be untouched");
            }
        }
    }

    #[test]
    fn reroll_out_of_range_posts_no_such_row() {
        let mut session = session(5);
        let before = session.grid().rows().to_vec();

        session.handle(line("r9")).unwrap();

        assert_eq!(session.grid().rows(), before.as_slice());
        let n = session.take_notification().unwrap();
        assert_eq!(n.severity, Severity::Error);
        assert_eq!(n.text, NO_SUCH_ROW);
    }

    #[test]
    fn reroll_row_zero_posts_no_such_row() {
        let mut session = session(5);
        session.handle(line("r0")).unwrap();
        assert_eq!(session.take_notification().unwrap().text, NO_SUCH_ROW);
    }

    #[test]
    fn add_and_remove_adjust_row_count() {
        let mut session = session(5);

        session.handle(line("+")).unwrap();
        assert_eq!(session.grid().len(), 6);

        session.handle(line("-")).unwrap();
        assert_eq!(session.grid().len(), 5);
        assert!(session.take_notification().is_none());
    }

    #[test]
    fn remove_at_floor_is_noop_with_notification() {
        let mut session = session(3);

        session.handle(line("-")).unwrap();

        assert_eq!(session.grid().len(), 3);
        let n = session.take_notification().unwrap();
        assert_eq!(n.severity, Severity::Error);
        assert!(n.text.contains("3 rows is the minimum"));
    }

    #[test]
    fn remove_below_floor_is_silent_noop() {
        let mut session = session(2);
        session.handle(line("-")).unwrap();
        assert_eq!(session.grid().len(), 2);
        assert!(session.take_notification().is_none());
    }

    #[test]
    fn print_posts_space_joined_words() {
        let mut session = session(4);
        let expected = session.passphrase().unwrap();

        session.handle(line("p")).unwrap();

        let n = session.take_notification().unwrap();
        assert_eq!(n.severity, Severity::Info);
        assert_eq!(n.text, expected);
        assert_eq!(n.text.split(' ').count(), 4);
    }

    #[test]
    fn invalid_input_posts_invalid_choice() {
        let mut session = session(5);
        let before = session.grid().rows().to_vec();

        session.handle(line("banana")).unwrap();

        assert_eq!(session.grid().rows(), before.as_slice());
        assert_eq!(session.take_notification().unwrap().text, INVALID_CHOICE);
    }

    #[test]
    fn quit_and_interrupt_take_the_redacted_path() {
        let mut session = session(5);
        let expected = vec![SessionAction::RenderRedacted, SessionAction::Quit];

        assert_eq!(session.handle(line("q")).unwrap(), expected);
        assert_eq!(session.handle(SessionEvent::Interrupted).unwrap(), expected);
    }

    #[test]
    fn redacted_view_masks_everything() {
        let session = session(5);
        let view = session.redacted_view();

        assert!(view.redacted);
        assert_eq!(view.rows.len(), 5);
        for row in &view.rows {
            assert_eq!(row.faces, [MASK_FACE; diceware_core::DICE_PER_ROW]);
            assert_eq!(row.word, MASK_WORD);
        }
    }

    #[test]
    fn view_reflects_current_state() {
        let mut session = session(3);
        session.handle(line("+")).unwrap();

        let view = session.view().unwrap();
        assert_eq!(view.rows.len(), 4);
        let labels: Vec<usize> = view.rows.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec![1, 2, 3, 4]);
        for (display, row) in view.rows.iter().zip(session.grid().rows()) {
            assert_eq!(display.word, format!("w{}", encode(row)));
        }
    }

    #[test]
    fn missing_word_is_fatal_for_view_and_print() {
        let store = WordStore::from_records([(11111, "lonely".to_owned())]).unwrap();
        let config = SessionConfig::new(NonZeroUsize::new(3).unwrap());
        let mut session = Session::with_rng(config, store, StdRng::seed_from_u64(5));

        assert!(matches!(
            session.view(),
            Err(SessionError::WordStore(WordStoreError::MissingKey(_)))
        ));
        assert!(session.handle(line("p")).is_err());
    }

    #[test]
    fn seeded_sessions_roll_identical_grids() {
        let a = session(5);
        let b = session(5);
        assert_eq!(a.grid(), b.grid());
    }
}
