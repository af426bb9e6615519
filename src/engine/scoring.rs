//! Guess scoring: the classic two-pass Mastermind algorithm.
//!
//! ## Algorithm
//!
//! 1. Pass 1 walks the four positions and awards `Correct` for exact
//!    matches, nulling both the guess and secret cell so neither can
//!    match again.
//! 2. Pass 2 walks the remaining guess cells in ascending order and
//!    awards `WrongPosition` when the color still exists among the
//!    remaining secret cells, nulling the first such secret cell and
//!    the guess cell. One secret peg can never satisfy two guess pegs.
//! 3. Whatever is left is `Incorrect`, padding the result to four.
//! 4. The four pegs are shuffled before being returned: peg order
//!    must never reveal which guess column a peg corresponds to.

use crate::core::color::Color;
use crate::core::config::CODE_LENGTH;
use crate::core::rng::GameRng;
use crate::grid::feedback::{Feedback, FeedbackPeg};

/// Score one guess against the secret, returning exactly four pegs
/// in position-blind (shuffled) order.
pub fn score_guess(
    secret: &[Color; CODE_LENGTH],
    guess: &[Color; CODE_LENGTH],
    rng: &mut GameRng,
) -> Feedback {
    let mut secret_left: [Option<Color>; CODE_LENGTH] = secret.map(Some);
    let mut guess_left: [Option<Color>; CODE_LENGTH] = guess.map(Some);
    let mut feedback = Feedback::new();

    // Pass 1: exact positional matches.
    for i in 0..CODE_LENGTH {
        if guess[i] == secret[i] {
            feedback.push(FeedbackPeg::Correct);
            secret_left[i] = None;
            guess_left[i] = None;
        }
    }

    // Pass 2: color-only matches against what pass 1 left behind.
    for i in 0..CODE_LENGTH {
        let Some(color) = guess_left[i] else {
            continue;
        };
        if let Some(j) = secret_left.iter().position(|s| *s == Some(color)) {
            feedback.push(FeedbackPeg::WrongPosition);
            secret_left[j] = None;
            guess_left[i] = None;
        }
    }

    while feedback.len() < CODE_LENGTH {
        feedback.push(FeedbackPeg::Incorrect);
    }

    rng.shuffle(feedback.as_mut_slice());
    feedback
}

/// Count pegs of each kind: `(correct, wrong_position, incorrect)`.
///
/// Feedback rows are shuffled, so this multiset view is the only
/// meaningful way to compare them.
#[must_use]
pub fn peg_counts(feedback: &[FeedbackPeg]) -> (usize, usize, usize) {
    let mut counts = (0, 0, 0);
    for peg in feedback {
        match peg {
            FeedbackPeg::Correct => counts.0 += 1,
            FeedbackPeg::WrongPosition => counts.1 += 1,
            FeedbackPeg::Incorrect => counts.2 += 1,
        }
    }
    counts
}
