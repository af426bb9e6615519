//! Fixed game configuration.
//!
//! These are the classic board dimensions and are not runtime-tunable:
//! the grid types bake them into their array sizes, and the scoring
//! invariants assume them.

/// Number of guess rows on the board (attempts per round).
pub const GRID_ROWS: usize = 10;

/// Pegs per row, and length of the secret code.
pub const CODE_LENGTH: usize = 4;

/// Size of the color set pegs are drawn from.
pub const COLOR_COUNT: usize = 6;

/// Round duration in seconds. The engine counts down from here, one
/// external tick at a time.
pub const ROUND_SECONDS: u32 = 600;
