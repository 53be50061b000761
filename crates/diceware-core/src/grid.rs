//! Dice grid state.
//!
//! [`DiceGrid`] owns an ordered sequence of [`Row`]s. Every mutation is
//! bounds-checked: a bad index is a typed error, never a silent
//! truncation, and removal never shrinks the grid below
//! [`MIN_ROWS`](crate::MIN_ROWS).

use std::num::NonZeroUsize;

use rand::Rng;

use crate::{DICE_PER_ROW, FACE_COUNT, GridError, MIN_ROWS};

/// Outcome of one six-sided die roll, `1..=6`.
///
/// Faces are produced only by the rolling functions in this module and
/// are replaced wholesale on reroll.
pub type DieFace = u8;

/// One passphrase unit: a fixed group of five die faces.
///
/// The length invariant is structural; a `Row` can never hold more or
/// fewer than [`DICE_PER_ROW`] faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row([DieFace; DICE_PER_ROW]);

impl Row {
    /// Roll a fresh row, each face drawn uniformly and independently.
    pub fn roll(rng: &mut impl Rng) -> Self {
        let mut faces = [0; DICE_PER_ROW];
        for face in &mut faces {
            *face = rng.random_range(1..=FACE_COUNT);
        }
        Self(faces)
    }

    /// The faces of this row in roll order.
    pub fn faces(&self) -> &[DieFace; DICE_PER_ROW] {
        &self.0
    }
}

/// Ordered sequence of dice rows.
///
/// Insertion order is display order is row-label order (1-indexed at
/// the presentation layer). The grid grows without bound and shrinks no
/// further than [`MIN_ROWS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceGrid {
    rows: Vec<Row>,
}

impl DiceGrid {
    /// Roll a new grid with `row_count` rows.
    ///
    /// The `row_count >= 1` precondition is carried by the type; the
    /// runtime floor [`MIN_ROWS`] applies only to removal, so a grid
    /// may legitimately start smaller.
    pub fn new(row_count: NonZeroUsize, rng: &mut impl Rng) -> Self {
        let rows = (0..row_count.get()).map(|_| Row::roll(rng)).collect();
        Self { rows }
    }

    /// Replace every face of row `index` with fresh draws.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidRow`] if `index` is out of range.
    /// User-facing bounds checking happens at the session layer, where
    /// the row count is part of the prompt contract; this is the
    /// caller-contract backstop.
    pub fn reroll_row(&mut self, index: usize, rng: &mut impl Rng) -> Result<(), GridError> {
        let len = self.rows.len();
        let row = self.rows.get_mut(index).ok_or(GridError::InvalidRow { index, len })?;
        *row = Row::roll(rng);
        Ok(())
    }

    /// Reroll every row, in ascending index order.
    ///
    /// Each row's draws are independent, but the order is fixed so that
    /// seeded-RNG tests see deterministic output.
    pub fn reroll_all(&mut self, rng: &mut impl Rng) {
        for row in &mut self.rows {
            *row = Row::roll(rng);
        }
    }

    /// Append one freshly rolled row.
    pub fn add_row(&mut self, rng: &mut impl Rng) {
        self.rows.push(Row::roll(rng));
    }

    /// Remove the last row, unless the grid is at the [`MIN_ROWS`]
    /// floor (or below it).
    ///
    /// Returns whether a row was removed. The boundary notification is
    /// the session layer's job; here the floor is only enforced.
    pub fn remove_row(&mut self) -> bool {
        if self.rows.len() > MIN_ROWS {
            self.rows.pop();
            true
        } else {
            false
        }
    }

    /// Read view of all rows in display order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Current row count.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
