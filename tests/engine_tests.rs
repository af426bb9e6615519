//! Round lifecycle integration tests.
//!
//! These drive the engine exactly the way a presentation layer would:
//! commands in, snapshots out. Seeds are pinned so every round here
//! is reproducible.

use mastermind_engine::{
    peg_counts, Color, CommandError, FeedbackPeg, GameEngine, GameRng, CODE_LENGTH, GRID_ROWS,
    ROUND_SECONDS,
};

/// Learn the secret of a live round by running a clone to timeout.
fn peek_secret(engine: &GameEngine) -> [Color; CODE_LENGTH] {
    let mut probe = engine.clone();
    for _ in 0..ROUND_SECONDS {
        probe.tick();
    }
    *probe.secret().unwrap()
}

/// Place a full row of pegs.
fn fill_row(engine: &mut GameEngine, colors: &[Color; CODE_LENGTH]) {
    for &color in colors {
        engine.place_color(color).unwrap();
    }
}

/// A row guaranteed not to win: every peg differs from secret[0].
fn losing_row(secret: &[Color; CODE_LENGTH]) -> [Color; CODE_LENGTH] {
    let wrong = Color::ALL.into_iter().find(|c| *c != secret[0]).unwrap();
    [wrong; CODE_LENGTH]
}

// =============================================================================
// Winning and Losing
// =============================================================================

/// Submitting the secret itself ends the round as a win and reveals
/// the secret.
#[test]
fn test_winning_guess_ends_round() {
    let mut engine = GameEngine::new(42);
    let secret = peek_secret(&engine);

    fill_row(&mut engine, &secret);
    engine.submit_guess().unwrap();

    assert!(engine.round().is_over());
    assert!(engine.round().has_won());
    assert!(engine.round().is_secret_revealed());
    assert_eq!(engine.secret(), Some(&secret));
    assert_eq!(peg_counts(engine.feedback().row(0)), (4, 0, 0));
}

/// A non-winning submission on the final row ends the round as a loss.
#[test]
fn test_exhausting_rows_loses() {
    let mut engine = GameEngine::new(7);
    let wrong = losing_row(&peek_secret(&engine));

    for row in 0..GRID_ROWS {
        assert_eq!(engine.round().current_row(), row);
        fill_row(&mut engine, &wrong);
        engine.submit_guess().unwrap();
    }

    assert!(engine.round().is_over());
    assert!(!engine.round().has_won());
    assert!(engine.round().is_secret_revealed());
    // Every row got scored on the way down.
    for row in 0..GRID_ROWS {
        assert!(engine.feedback().is_scored(row));
        assert_eq!(engine.feedback().row(row).len(), CODE_LENGTH);
    }
}

/// A winning guess midway leaves later rows untouched.
#[test]
fn test_rows_beyond_current_stay_empty() {
    let mut engine = GameEngine::new(11);
    let secret = peek_secret(&engine);
    let wrong = losing_row(&secret);

    fill_row(&mut engine, &wrong);
    engine.submit_guess().unwrap();
    fill_row(&mut engine, &secret);
    engine.submit_guess().unwrap();

    assert!(engine.round().has_won());
    for row in 2..GRID_ROWS {
        assert!(engine.guesses().row(row).iter().all(Option::is_none));
        assert!(!engine.feedback().is_scored(row));
    }
}

// =============================================================================
// Timer
// =============================================================================

/// Each tick removes one second; the clock starts at the full round
/// duration.
#[test]
fn test_tick_decrements_once() {
    let mut engine = GameEngine::new(1);
    assert_eq!(engine.round().time_remaining(), ROUND_SECONDS);

    engine.tick();
    assert_eq!(engine.round().time_remaining(), ROUND_SECONDS - 1);
}

/// Running the clock out with no submissions loses the round.
#[test]
fn test_timeout_loses_round() {
    let mut engine = GameEngine::new(1);

    for _ in 0..ROUND_SECONDS {
        engine.tick();
    }

    assert_eq!(engine.round().time_remaining(), 0);
    assert!(engine.round().is_over());
    assert!(!engine.round().has_won());
    assert!(engine.round().is_secret_revealed());
}

/// Ticks after the round ends are no-ops.
#[test]
fn test_tick_is_noop_after_round_ends() {
    let mut engine = GameEngine::new(42);
    let secret = peek_secret(&engine);
    fill_row(&mut engine, &secret);
    engine.submit_guess().unwrap();

    let remaining = engine.round().time_remaining();
    engine.tick();
    engine.tick();

    assert_eq!(engine.round().time_remaining(), remaining);
    assert!(engine.round().has_won());
}

// =============================================================================
// Refused Commands
// =============================================================================

/// Placing into a full row is refused and changes nothing.
#[test]
fn test_place_into_full_row() {
    let mut engine = GameEngine::new(5);
    fill_row(&mut engine, &[Color::Purple; CODE_LENGTH]);

    let before = engine.guesses().clone();
    assert_eq!(
        engine.place_color(Color::Yellow),
        Err(CommandError::RowFull)
    );
    assert_eq!(engine.guesses(), &before);
}

/// Once the round is over, every mutating command is refused and
/// state is unchanged.
#[test]
fn test_terminal_round_refuses_commands() {
    let mut engine = GameEngine::new(42);
    let secret = peek_secret(&engine);
    fill_row(&mut engine, &secret);
    engine.submit_guess().unwrap();

    let guesses = engine.guesses().clone();
    let feedback = engine.feedback().clone();
    let round = engine.round().clone();

    assert_eq!(
        engine.place_color(Color::Red),
        Err(CommandError::RoundOver)
    );
    assert_eq!(engine.clear_row(), Err(CommandError::RoundOver));
    assert_eq!(engine.submit_guess(), Err(CommandError::RoundOver));

    assert_eq!(engine.guesses(), &guesses);
    assert_eq!(engine.feedback(), &feedback);
    assert_eq!(engine.round(), &round);
}

// =============================================================================
// Clearing and Resetting
// =============================================================================

/// Clearing empties only the current row; earlier rows and their
/// feedback survive.
#[test]
fn test_clear_row_scoped_to_current() {
    let mut engine = GameEngine::new(9);
    let wrong = losing_row(&peek_secret(&engine));

    fill_row(&mut engine, &wrong);
    engine.submit_guess().unwrap();

    engine.place_color(Color::Green).unwrap();
    engine.place_color(Color::Blue).unwrap();
    engine.clear_row().unwrap();

    assert_eq!(engine.next_available_slot(), Some(0));
    assert!(engine.guesses().row(1).iter().all(Option::is_none));
    assert!(engine.guesses().is_row_filled(0));
    assert!(engine.feedback().is_scored(0));
}

/// `start_round` after a terminal round restores every initial value.
#[test]
fn test_start_round_resets_everything() {
    let mut engine = GameEngine::new(13);
    let wrong = losing_row(&peek_secret(&engine));

    fill_row(&mut engine, &wrong);
    engine.submit_guess().unwrap();
    engine.tick();
    engine.select_color(Some(Color::Brown));
    for _ in 0..ROUND_SECONDS {
        engine.tick();
    }
    assert!(engine.round().is_over());

    engine.start_round();

    assert!(engine.guesses().is_empty());
    for row in 0..GRID_ROWS {
        assert!(!engine.feedback().is_scored(row));
    }
    assert_eq!(engine.round().current_row(), 0);
    assert_eq!(engine.round().time_remaining(), ROUND_SECONDS);
    assert!(!engine.round().is_over());
    assert!(!engine.round().has_won());
    assert!(!engine.round().is_secret_revealed());
    assert!(engine.secret().is_none());
    assert_eq!(engine.selected_color(), None);
}

// =============================================================================
// Determinism and Snapshots
// =============================================================================

/// Identical seeds and identical commands produce identical rounds,
/// including feedback peg order.
#[test]
fn test_replay_is_identical() {
    let mut a = GameEngine::new(1234);
    let mut b = GameEngine::new(1234);

    let script = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
        Color::Brown,
        Color::Red,
        Color::Red,
    ];

    for chunk in script.chunks(CODE_LENGTH) {
        for &color in chunk {
            assert_eq!(a.place_color(color), b.place_color(color));
        }
        assert_eq!(a.submit_guess(), b.submit_guess());
    }

    assert_eq!(a.guesses(), b.guesses());
    assert_eq!(a.feedback(), b.feedback());
    assert_eq!(a.round(), b.round());
}

/// An engine built from a restored RNG state draws the same secret as
/// the engine whose state was captured.
#[test]
fn test_engine_from_restored_rng() {
    let rng = GameRng::new(77);
    let state = rng.state();

    let a = GameEngine::from_rng(rng);
    let b = GameEngine::from_rng(GameRng::from_state(&state));

    assert_eq!(peek_secret(&a), peek_secret(&b));
}

/// Grids and round state snapshot cleanly through serde.
#[test]
fn test_snapshots_serialize() {
    let mut engine = GameEngine::new(21);
    engine.place_color(Color::Red).unwrap();
    engine.place_color(Color::Blue).unwrap();

    let json = serde_json::to_string(engine.guesses()).unwrap();
    let grid: mastermind_engine::GuessGrid = serde_json::from_str(&json).unwrap();
    assert_eq!(&grid, engine.guesses());

    let json = serde_json::to_string(engine.round()).unwrap();
    let round: mastermind_engine::RoundState = serde_json::from_str(&json).unwrap();
    assert_eq!(&round, engine.round());

    let json = serde_json::to_string(engine.feedback()).unwrap();
    let feedback: mastermind_engine::FeedbackGrid = serde_json::from_str(&json).unwrap();
    assert_eq!(&feedback, engine.feedback());
}

/// Scored feedback never exposes peg positions: only counts are
/// stable across seeds for the same guess.
#[test]
fn test_feedback_is_multiset_stable() {
    let secret = [Color::Red, Color::Red, Color::Blue, Color::Green];
    let guess = [Color::Red, Color::Blue, Color::Red, Color::Green];

    let mut counts_seen = std::collections::HashSet::new();
    for seed in 0..20 {
        let mut rng = GameRng::new(seed);
        let feedback = mastermind_engine::score_guess(&secret, &guess, &mut rng);
        counts_seen.insert(peg_counts(&feedback));
    }

    // Every seed agrees on the multiset: 2 correct, 2 wrong position.
    assert_eq!(counts_seen.len(), 1);
    assert!(counts_seen.contains(&(2, 2, 0)));
}

/// Feedback rows eventually differ in order across seeds, which is
/// what makes them position-blind.
#[test]
fn test_feedback_order_varies_across_seeds() {
    let secret = [Color::Red, Color::Red, Color::Blue, Color::Green];
    let guess = [Color::Red, Color::Blue, Color::Red, Color::Green];

    let mut orders = std::collections::HashSet::new();
    for seed in 0..20 {
        let mut rng = GameRng::new(seed);
        let feedback = mastermind_engine::score_guess(&secret, &guess, &mut rng);
        orders.insert(feedback.to_vec());
    }

    assert!(orders.len() > 1, "shuffle never changed the peg order");
}

/// FeedbackPeg is a plain value type usable in sets and snapshots.
#[test]
fn test_feedback_peg_serde() {
    let peg = FeedbackPeg::WrongPosition;
    let json = serde_json::to_string(&peg).unwrap();
    let back: FeedbackPeg = serde_json::from_str(&json).unwrap();
    assert_eq!(peg, back);
}
