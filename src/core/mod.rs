//! Core types: coordinates, directions, players, rules configuration.
//!
//! Everything here is plain data with no rules knowledge. The board model
//! lives in `board`, legality in `rules`, turn sequencing in `session`.

pub mod coord;
pub mod player;
pub mod config;

pub use coord::{Coord, Direction, Orientation, BOARD_SIZE};
pub use player::{PlayerId, PlayerMap};
pub use config::{FairPlayScope, RulesConfig, WinTurnPolicy, DEFAULT_BARRIERS};
