//! Peg colors.
//!
//! The color set is fixed at six members. Colors have equality only —
//! no ordering and no numeric meaning. Anything outside the set is
//! unrepresentable, so "invalid color" is not a runtime condition.

use serde::{Deserialize, Serialize};

/// A peg color, one of the six the game is played with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Purple,
    Yellow,
    Brown,
    Green,
    Blue,
}

impl Color {
    /// Every color, in declaration order. Used for uniform sampling
    /// when generating a secret code.
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Purple,
        Color::Yellow,
        Color::Brown,
        Color::Green,
        Color::Blue,
    ];
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Purple => "purple",
            Color::Yellow => "yellow",
            Color::Brown => "brown",
            Color::Green => "green",
            Color::Blue => "blue",
        };
        write!(f, "{name}")
    }
}
