//! The guess grid: 10 rows of 4 cells, filled left to right.
//!
//! Callers never address a cell directly. An incoming color lands in
//! the next available slot of the row the engine says is current, so
//! rows fill strictly left to right and rows beyond the current one
//! stay empty until reached.

use serde::{Deserialize, Serialize};

use crate::core::color::Color;
use crate::core::config::{CODE_LENGTH, GRID_ROWS};

/// The 10x4 table of placed guesses. `None` is an empty cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessGrid {
    cells: [[Option<Color>; CODE_LENGTH]; GRID_ROWS],
}

impl Default for GuessGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl GuessGrid {
    /// Create an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [[None; CODE_LENGTH]; GRID_ROWS],
        }
    }

    /// Read a single cell.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Color> {
        self.cells[row][col]
    }

    /// Read a whole row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Option<Color>; CODE_LENGTH] {
        &self.cells[row]
    }

    /// First empty column of `row`, scanning left to right.
    /// `None` means the row is full.
    #[must_use]
    pub fn next_available_slot(&self, row: usize) -> Option<usize> {
        self.cells[row].iter().position(Option::is_none)
    }

    /// Whether every cell of `row` holds a color.
    #[must_use]
    pub fn is_row_filled(&self, row: usize) -> bool {
        self.cells[row].iter().all(Option::is_some)
    }

    /// The row as a complete code, or `None` if any cell is empty.
    #[must_use]
    pub fn filled_row(&self, row: usize) -> Option<[Color; CODE_LENGTH]> {
        let mut out = [Color::Red; CODE_LENGTH];
        for (slot, cell) in out.iter_mut().zip(&self.cells[row]) {
            *slot = (*cell)?;
        }
        Some(out)
    }

    /// Whether the whole grid is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(Option::is_none))
    }

    pub(crate) fn place(&mut self, row: usize, col: usize, color: Color) {
        debug_assert!(self.cells[row][col].is_none(), "cell already occupied");
        self.cells[row][col] = Some(color);
    }

    pub(crate) fn clear_row(&mut self, row: usize) {
        self.cells[row] = [None; CODE_LENGTH];
    }
}
