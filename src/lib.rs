//! # rust-quoridor
//!
//! Rules engine for a two-player barrier race on a 9×9 grid.
//!
//! Each player races a token to the far edge. Instead of moving, a player
//! may spend one of a limited stock of barriers to block a cell boundary,
//! but never in a way that cuts a player off from their goal row.
//!
//! ## Design
//!
//! 1. **State Without Rules**: `GridState` only records where tokens and
//!    barriers are.
//!
//! 2. **Pure Validators**: move classification, placement checks and the
//!    route search read the grid and return an answer.
//!
//! 3. **One Mutator**: `GameSession` sequences validators and applies the
//!    result. A rejected request changes nothing.
//!
//! ## Modules
//!
//! - `core`: Coordinates, directions, players, rules configuration
//! - `board`: Token and barrier occupancy
//! - `rules`: Move, placement and route checks
//! - `session`: Turn order, budgets, win state, snapshots
//!
//! ## Example
//!
//! ```
//! use rust_quoridor::{Coord, GameSession, Orientation, PlayerId, Rejection};
//!
//! let mut game = GameSession::new();
//! game.attempt_move(PlayerId::One, Coord::new(4, 1)).unwrap();
//! game.attempt_barrier(PlayerId::Two, Orientation::Horizontal, Coord::new(4, 2)).unwrap();
//!
//! assert_eq!(game.attempt_move(PlayerId::One, Coord::new(4, 2)), Err(Rejection::IllegalTarget));
//! assert_eq!(game.barriers_remaining(PlayerId::Two), 9);
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Coord, Direction, Orientation, BOARD_SIZE,
    PlayerId, PlayerMap,
    FairPlayScope, RulesConfig, WinTurnPolicy,
};

pub use crate::board::GridState;

pub use crate::rules::{check_placement, classify_move, has_path_to_goal, legal_targets, MoveKind};

pub use crate::session::{GameSession, MoveOutcome, PlayerState, SessionBuilder};

pub use crate::error::{Rejection, StateError};
