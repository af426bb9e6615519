//! # mastermind-engine
//!
//! A deterministic engine for the Mastermind code-breaking game:
//! secret generation, left-to-right guess placement, two-pass
//! feedback scoring, and round progression (win, loss, timeout).
//!
//! ## Design Principles
//!
//! 1. **Command/query only**: The presentation layer issues commands
//!    and reads snapshots. No callbacks, no observers, no reactive
//!    state inside the engine.
//!
//! 2. **Deterministic**: All randomness (secret draw, feedback
//!    shuffle) flows through a seedable [`GameRng`]. A fixed seed
//!    replays an identical round.
//!
//! 3. **Advisory errors**: Refused commands (`RowFull`,
//!    `RowIncomplete`, `RoundOver`) are expected player-driven
//!    conditions, never faults, and never leave state half-mutated.
//!
//! ## Architecture
//!
//! - **Position-blind feedback**: Scored pegs are shuffled before
//!   they are stored so their order can never leak which guess
//!   column they correspond to.
//!
//! - **External clock**: The engine counts the round down but never
//!   reads a wall clock; the host calls [`GameEngine::tick`] once per
//!   second.
//!
//! ## Modules
//!
//! - `core`: Colors, configuration constants, RNG, errors
//! - `grid`: Guess grid and feedback grid
//! - `engine`: Scoring algorithm and the `GameEngine` state machine

pub mod core;
pub mod engine;
pub mod grid;

// Re-export commonly used types
pub use crate::core::{
    Color, CommandError, GameRng, GameRngState, CODE_LENGTH, COLOR_COUNT, GRID_ROWS, ROUND_SECONDS,
};

pub use crate::grid::{Feedback, FeedbackGrid, FeedbackPeg, GuessGrid};

pub use crate::engine::{peg_counts, score_guess, GameEngine, RoundState};
