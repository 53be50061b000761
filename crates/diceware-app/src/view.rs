//! View model handed to the presenter.
//!
//! [`GridView`] is ephemeral: it is recomputed from the current grid on
//! every render and never cached across mutations, so row labels and
//! words always reflect live state.

use diceware_core::{DICE_PER_ROW, DieFace};

/// Masked face value used in the redacted view.
pub const MASK_FACE: DieFace = 0;

/// Masked word token used in the redacted view.
pub const MASK_WORD: &str = "XXXXX";

/// One grid row resolved for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// 1-based row label.
    pub label: usize,
    /// Die faces in roll order.
    pub faces: [DieFace; DICE_PER_ROW],
    /// The word this row's faces select.
    pub word: String,
}

/// Fully resolved grid ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    /// Rows in display order.
    pub rows: Vec<DisplayRow>,
    /// Whether all values (faces, words, labels) are masked.
    pub redacted: bool,
}
