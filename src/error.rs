//! Error types.
//!
//! `Rejection` is the reason a move or barrier placement was refused. Every
//! rejection leaves the session exactly as it was, so callers can show the
//! message and ask again.
//!
//! `StateError` covers sessions assembled from outside data: snapshots and
//! custom setups.

use thiserror::Error;

/// Why a move or barrier placement was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    /// A winner has been decided.
    #[error("the game is over")]
    GameOver,

    /// The acting player does not hold the turn.
    #[error("it is not this player's turn")]
    NotYourTurn,

    /// The target cell is off the board or not reachable by any legal move,
    /// or the barrier slot does not exist.
    #[error("illegal target")]
    IllegalTarget,

    /// The placing player has no barriers left.
    #[error("no barriers left")]
    NoBudget,

    /// A barrier already occupies the slot.
    #[error("slot already occupied")]
    SlotOccupied,

    /// The barrier would cut a player off from their goal row.
    #[error("barrier breaks the fair play rule")]
    FairPlay,
}

/// A session assembled from outside data is unusable.
#[derive(Debug, Error)]
pub enum StateError {
    /// Snapshot serialization failed.
    #[error("failed to encode session")]
    Encode(#[source] bincode::Error),

    /// Snapshot bytes could not be decoded.
    #[error("failed to decode session")]
    Decode(#[source] bincode::Error),

    /// The state breaks a board invariant.
    #[error("inconsistent session state: {0}")]
    Inconsistent(&'static str),
}
