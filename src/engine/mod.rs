//! The rules engine: scoring and round progression.

pub mod game;
pub mod scoring;

pub use game::{GameEngine, RoundState};
pub use scoring::{peg_counts, score_guess};
