//! Legality checks.
//!
//! Every function here is pure: it reads a `GridState` and answers a
//! question. The session decides what to do with the answer.
//!
//! - `moves`: classify a token move as step, jump or diagonal.
//! - `barriers`: structural checks for a barrier placement.
//! - `path`: does a player still have a route to their goal row.

pub mod moves;
pub mod barriers;
pub mod path;

pub use moves::{classify_move, legal_targets, MoveKind, MoveList};
pub use barriers::check_placement;
pub use path::has_path_to_goal;
