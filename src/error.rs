//! Error taxonomy for the Reversi engine.
//!
//! The core never prints or panics on user-facing failures; every fallible
//! operation returns a typed result and the calling shell decides what the
//! user sees. Variants split into recoverable conditions (an illegal manual
//! move, a dropped search candidate) and fatal ones (board state that can no
//! longer be trusted, caller contract breaches).

use crate::board::Coord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A coordinate outside the board bounds. Never silently clamped.
    #[error("coordinate ({row}, {col}) is outside the board")]
    InvalidCoordinate { row: usize, col: usize },

    /// A placement that flips nothing (or targets an occupied cell).
    ///
    /// Recoverable at the manual-input boundary: the shell re-prompts.
    /// Fatal when produced by an automated seat, since strategies must only
    /// return pre-validated legal coordinates.
    #[error("illegal move at {0}")]
    IllegalMove(Coord),

    /// A search-node board duplication could not complete. The affected
    /// candidate coordinate is dropped from scoring and the search continues.
    #[error("failed to clone board for search")]
    CloneFailed,

    /// Board consistency can no longer be trusted. Aborts the match.
    #[error("board invariant violated: {0}")]
    InvariantViolation(String),

    /// A caller bug, e.g. dispatching the manual sentinel strategy or
    /// submitting a manual move for an automated seat.
    #[error("contract violation: {0}")]
    ContractViolation(&'static str),
}
