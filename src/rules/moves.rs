//! Token move legality.
//!
//! A move is classified into exactly one `MoveKind`, checked in order:
//!
//! 1. **Step**: one cell orthogonally, onto an empty cell, no barrier between.
//! 2. **Jump**: two cells in a straight line over the adjacent opponent, with
//!    no barrier on either boundary crossed.
//! 3. **Diagonal**: when a barrier directly behind the adjacent opponent
//!    blocks the jump, one cell to either side of the opponent.
//!
//! Any other target is illegal. Classification is pure; applying the move
//! and checking for a win is the session's job.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::GridState;
use crate::core::coord::{Coord, Direction};
use crate::core::player::PlayerId;

/// Category of a legal token move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// One cell orthogonally.
    Step,
    /// Two cells straight over the opponent.
    Jump,
    /// One cell diagonally, around an opponent backed by a barrier.
    Diagonal,
}

impl std::fmt::Display for MoveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveKind::Step => write!(f, "step"),
            MoveKind::Jump => write!(f, "jump"),
            MoveKind::Diagonal => write!(f, "diagonal"),
        }
    }
}

/// Legal targets from one cell. At most five exist on any board.
pub type MoveList = SmallVec<[(Coord, MoveKind); 8]>;

/// Classify a move of `mover` from `current` to `target`.
///
/// Returns `None` if the move is illegal.
#[must_use]
pub fn classify_move(
    grid: &GridState,
    mover: PlayerId,
    current: Coord,
    target: Coord,
) -> Option<MoveKind> {
    if !target.is_on_board() || grid.is_occupied(target) {
        return None;
    }

    let dx = i16::from(target.x) - i16::from(current.x);
    let dy = i16::from(target.y) - i16::from(current.y);

    match (dx.abs(), dy.abs()) {
        (1, 0) | (0, 1) => {
            let direction = Direction::from_delta(dx, dy)?;
            grid.can_cross(current, direction).then_some(MoveKind::Step)
        }
        (2, 0) | (0, 2) => {
            let direction = Direction::from_delta(dx.signum(), dy.signum())?;
            is_jump(grid, mover, current, direction).then_some(MoveKind::Jump)
        }
        (1, 1) => {
            let across = Direction::from_delta(dx, 0)?;
            let along = Direction::from_delta(0, dy)?;
            let legal = is_diagonal(grid, mover, current, along, across)
                || is_diagonal(grid, mover, current, across, along);
            legal.then_some(MoveKind::Diagonal)
        }
        _ => None,
    }
}

/// Every legal target for `mover` standing on `from`.
#[must_use]
pub fn legal_targets(grid: &GridState, mover: PlayerId, from: Coord) -> MoveList {
    let mut targets = MoveList::new();
    for dy in -2i8..=2 {
        for dx in -2i8..=2 {
            let Some(target) = from.offset(dx, dy) else {
                continue;
            };
            if let Some(kind) = classify_move(grid, mover, from, target) {
                targets.push((target, kind));
            }
        }
    }
    targets
}

/// The opponent stands on the neighbour of `from` in `ahead`, and nothing
/// separates the two tokens.
fn faces_opponent(grid: &GridState, mover: PlayerId, from: Coord, ahead: Direction) -> Option<Coord> {
    let neighbour = from.step(ahead)?;
    let facing = grid.occupant(neighbour) == Some(mover.opponent()) && grid.can_cross(from, ahead);
    facing.then_some(neighbour)
}

fn is_jump(grid: &GridState, mover: PlayerId, from: Coord, ahead: Direction) -> bool {
    faces_opponent(grid, mover, from, ahead)
        .is_some_and(|opponent| grid.can_cross(opponent, ahead))
}

/// Diagonal step from `from` to the cell beside the opponent on the `side` of it.
///
/// The board edge behind the opponent does not count as a barrier.
fn is_diagonal(
    grid: &GridState,
    mover: PlayerId,
    from: Coord,
    ahead: Direction,
    side: Direction,
) -> bool {
    faces_opponent(grid, mover, from, ahead).is_some_and(|opponent| {
        grid.is_blocked(opponent, ahead) && grid.can_cross(opponent, side)
    })
}
