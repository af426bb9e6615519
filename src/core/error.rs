//! Advisory error conditions.
//!
//! Nothing here is fatal: every variant is an expected, player-driven
//! condition the presentation layer surfaces as a transient notice.
//! Operations that return one of these leave engine state untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a command was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CommandError {
    /// Placement attempted when the current row has no empty slot.
    #[error("current row is already full")]
    RowFull,

    /// Submission attempted while the current row has an empty slot.
    #[error("current row is not completely filled")]
    RowIncomplete,

    /// A mutating command arrived after the round ended.
    #[error("round is over")]
    RoundOver,
}
