//! The feedback grid: per-row scoring results.
//!
//! A row's feedback is written exactly once, when the row is
//! submitted, and is immutable after that. An unscored row reads as
//! an empty slice; a scored row always holds exactly four pegs.
//! Peg order within a row carries no positional information (the
//! scorer shuffles it), so readers must treat a row as a multiset.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::{CODE_LENGTH, GRID_ROWS};

/// A single feedback classification, per Mastermind convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackPeg {
    /// Right color, right position.
    Correct,
    /// Right color, wrong position (after exact matches are removed).
    WrongPosition,
    /// Color not present in the remaining secret.
    Incorrect,
}

/// One row's worth of feedback pegs.
///
/// SmallVec keeps the four pegs inline without heap allocation.
pub type Feedback = SmallVec<[FeedbackPeg; CODE_LENGTH]>;

/// The 10-row table of scored feedback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackGrid {
    rows: [Feedback; GRID_ROWS],
}

impl Default for FeedbackGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackGrid {
    /// Create a grid with every row unscored.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: Default::default(),
        }
    }

    /// Read a row's pegs. Empty until the row has been scored.
    #[must_use]
    pub fn row(&self, row: usize) -> &[FeedbackPeg] {
        &self.rows[row]
    }

    /// Whether `row` has been scored.
    #[must_use]
    pub fn is_scored(&self, row: usize) -> bool {
        !self.rows[row].is_empty()
    }

    pub(crate) fn record(&mut self, row: usize, feedback: Feedback) {
        debug_assert!(!self.is_scored(row), "row scored twice");
        debug_assert_eq!(feedback.len(), CODE_LENGTH);
        self.rows[row] = feedback;
    }
}
