//! The game engine state machine.
//!
//! `GameEngine` owns the secret code, both grids, the round state,
//! and the transition rules. The presentation layer drives it with
//! commands (`place_color`, `clear_row`, `submit_guess`, `tick`,
//! `start_round`) and reads state back through the query methods; it
//! never mutates state directly and never sees the secret before the
//! round ends.
//!
//! Every command is synchronous and atomic: it either fully applies
//! or returns a [`CommandError`] with state unchanged. The engine has
//! no clock of its own — the host calls [`GameEngine::tick`] once per
//! elapsed second while a round is live.

use serde::{Deserialize, Serialize};

use crate::core::color::Color;
use crate::core::config::{CODE_LENGTH, GRID_ROWS, ROUND_SECONDS};
use crate::core::error::CommandError;
use crate::core::rng::GameRng;
use crate::engine::scoring::score_guess;
use crate::grid::feedback::{FeedbackGrid, FeedbackPeg};
use crate::grid::guess::GuessGrid;

/// Round progression state.
///
/// `current_row` and `time_remaining` move monotonically within a
/// round; the three flags flip at most once. Everything resets
/// together on [`GameEngine::start_round`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    current_row: usize,
    time_remaining: u32,
    over: bool,
    won: bool,
    secret_revealed: bool,
}

impl RoundState {
    fn new() -> Self {
        Self {
            current_row: 0,
            time_remaining: ROUND_SECONDS,
            over: false,
            won: false,
            secret_revealed: false,
        }
    }

    /// The row the next placement and submission apply to (0-9).
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.current_row
    }

    /// Seconds left on the round clock.
    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Whether the round has reached a terminal state.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Whether the round ended in a win. Meaningless until `is_over`.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Whether the secret may be shown to the player.
    #[must_use]
    pub fn is_secret_revealed(&self) -> bool {
        self.secret_revealed
    }
}

/// The Mastermind rules engine.
///
/// ## Example
///
/// ```
/// use mastermind_engine::{Color, GameEngine};
///
/// let mut engine = GameEngine::new(42);
/// for _ in 0..4 {
///     engine.place_color(Color::Red).unwrap();
/// }
/// engine.submit_guess().unwrap();
/// assert!(engine.feedback().is_scored(0));
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    secret: [Color; CODE_LENGTH],
    guesses: GuessGrid,
    feedback: FeedbackGrid,
    round: RoundState,
    /// Presentation-driven hint only; no rule reads it.
    selected_color: Option<Color>,
    rng: GameRng,
}

impl GameEngine {
    /// Create an engine and start its first round.
    ///
    /// The seed fully determines the secret and every feedback
    /// shuffle, so a fixed seed replays the identical round.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Create an engine from an existing RNG and start its first
    /// round. Lets a host hand over a mid-stream or restored RNG.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        let mut engine = Self {
            secret: [Color::Red; CODE_LENGTH],
            guesses: GuessGrid::new(),
            feedback: FeedbackGrid::new(),
            round: RoundState::new(),
            selected_color: None,
            rng,
        };
        engine.start_round();
        engine
    }

    // === Commands ===

    /// Begin a fresh round: draw a new secret (four uniform samples
    /// with replacement) and reset grids, round state, and the
    /// selected-color hint. Safe to call at any time, including after
    /// a terminal round.
    pub fn start_round(&mut self) {
        self.secret = std::array::from_fn(|_| {
            Color::ALL[self.rng.gen_range_usize(0..Color::ALL.len())]
        });
        self.guesses = GuessGrid::new();
        self.feedback = FeedbackGrid::new();
        self.round = RoundState::new();
        self.selected_color = None;
    }

    /// Advance the round clock by one second.
    ///
    /// Hitting zero ends the round as a loss. No-op once the round is
    /// over. The host clock must call this exactly once per elapsed
    /// second; the engine does no wall-clock tracking of its own.
    pub fn tick(&mut self) {
        if self.round.over {
            return;
        }
        if self.round.time_remaining > 0 {
            self.round.time_remaining -= 1;
        }
        if self.round.time_remaining == 0 {
            self.end_round(false);
        }
    }

    /// Place `color` into the next available slot of the current row.
    ///
    /// Returns the column the peg landed in, so the presentation
    /// layer knows where to animate it. Fails with `RoundOver` after
    /// the round ends and `RowFull` when the row has no empty slot;
    /// in both cases the grid is untouched.
    pub fn place_color(&mut self, color: Color) -> Result<usize, CommandError> {
        if self.round.over {
            return Err(CommandError::RoundOver);
        }
        let col = self
            .guesses
            .next_available_slot(self.round.current_row)
            .ok_or(CommandError::RowFull)?;
        self.guesses.place(self.round.current_row, col, color);
        Ok(col)
    }

    /// Empty every cell of the current row. Other rows and all
    /// feedback are unaffected.
    pub fn clear_row(&mut self) -> Result<(), CommandError> {
        if self.round.over {
            return Err(CommandError::RoundOver);
        }
        self.guesses.clear_row(self.round.current_row);
        Ok(())
    }

    /// Score the current row against the secret.
    ///
    /// On success the row's feedback is recorded (exactly once, in
    /// position-blind order) and the round progresses: four `Correct`
    /// pegs win, a non-winning final row loses, anything else
    /// advances `current_row`.
    pub fn submit_guess(&mut self) -> Result<(), CommandError> {
        if self.round.over {
            return Err(CommandError::RoundOver);
        }
        let row = self.round.current_row;
        let guess = self
            .guesses
            .filled_row(row)
            .ok_or(CommandError::RowIncomplete)?;

        let feedback = score_guess(&self.secret, &guess, &mut self.rng);
        let won = feedback.iter().all(|peg| *peg == FeedbackPeg::Correct);
        self.feedback.record(row, feedback);

        if won {
            self.end_round(true);
        } else if row == GRID_ROWS - 1 {
            self.end_round(false);
        } else {
            self.round.current_row += 1;
        }
        Ok(())
    }

    /// Record which color the player currently has picked up. Purely
    /// a presentation hint; cleared on `start_round`.
    pub fn select_color(&mut self, color: Option<Color>) {
        self.selected_color = color;
    }

    fn end_round(&mut self, won: bool) {
        self.round.over = true;
        self.round.won = won;
        self.round.secret_revealed = true;
    }

    // === Queries ===

    /// Round progression state.
    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// The guess grid.
    #[must_use]
    pub fn guesses(&self) -> &GuessGrid {
        &self.guesses
    }

    /// The feedback grid.
    #[must_use]
    pub fn feedback(&self) -> &FeedbackGrid {
        &self.feedback
    }

    /// First empty column of the current row, or `None` if full.
    #[must_use]
    pub fn next_available_slot(&self) -> Option<usize> {
        self.guesses.next_available_slot(self.round.current_row)
    }

    /// The secret code, available only once the round has revealed
    /// it. `None` while the round is live.
    #[must_use]
    pub fn secret(&self) -> Option<&[Color; CODE_LENGTH]> {
        if self.round.secret_revealed {
            Some(&self.secret)
        } else {
            None
        }
    }

    /// The currently selected color hint.
    #[must_use]
    pub fn selected_color(&self) -> Option<Color> {
        self.selected_color
    }
}
