//! Core engine types: colors, configuration, RNG, errors.
//!
//! This module contains the fundamental building blocks the grid and
//! rules layers are built from.

pub mod color;
pub mod config;
pub mod error;
pub mod rng;

pub use color::Color;
pub use config::{CODE_LENGTH, COLOR_COUNT, GRID_ROWS, ROUND_SECONDS};
pub use error::CommandError;
pub use rng::{GameRng, GameRngState};
