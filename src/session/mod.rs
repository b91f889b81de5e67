//! Game session: the single owner of mutable game state.
//!
//! - `game`: `GameSession` with the move and barrier entry points.
//! - `builder`: sessions starting from a custom position.
//! - `snapshot`: binary encoding of a whole session.
//!
//! The session has no internal locking. Hosts that share one across threads
//! serialize access themselves, e.g. with a `Mutex<GameSession>`.

pub mod game;
pub mod builder;
mod snapshot;

pub use game::{GameSession, MoveOutcome, PlayerState};
pub use builder::SessionBuilder;
