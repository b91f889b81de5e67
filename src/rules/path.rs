//! Route-to-goal search backing the fair-play rule.
//!
//! Breadth-first search over the cell graph, where two neighbouring cells
//! are connected unless a barrier sits between them. Tokens are ignored:
//! the question is whether a route exists at all, not whether it is free
//! right now.
//!
//! Each call owns its worklist and visited set, so every search is an
//! independent query and visits at most `BOARD_SIZE²` cells.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::board::GridState;
use crate::core::coord::{Coord, Direction};
use crate::core::player::PlayerId;

/// Check if `player` could reach their goal row from `start`.
///
/// Off-board starts have no route.
#[must_use]
pub fn has_path_to_goal(grid: &GridState, player: PlayerId, start: Coord) -> bool {
    if !start.is_on_board() {
        return false;
    }

    let mut visited: FxHashSet<Coord> = FxHashSet::default();
    let mut frontier = VecDeque::new();
    visited.insert(start);
    frontier.push_back(start);

    while let Some(cell) = frontier.pop_front() {
        if player.is_goal(cell) {
            trace!(%player, %start, visited = visited.len(), "route to goal found");
            return true;
        }
        for direction in Direction::ALL {
            if !grid.can_cross(cell, direction) {
                continue;
            }
            if let Some(next) = cell.step(direction) {
                if visited.insert(next) {
                    frontier.push_back(next);
                }
            }
        }
    }

    trace!(%player, %start, visited = visited.len(), "no route to goal");
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::coord::Orientation;

    fn seal_row(grid: &mut GridState, y: u8, skip: Option<u8>) {
        for x in 0..crate::core::BOARD_SIZE {
            if Some(x) != skip {
                grid.set_barrier(Orientation::Horizontal, Coord::new(x, y));
            }
        }
    }

    #[test]
    fn test_open_board() {
        let grid = GridState::new();
        assert!(has_path_to_goal(&grid, PlayerId::One, Coord::new(4, 0)));
        assert!(has_path_to_goal(&grid, PlayerId::Two, Coord::new(4, 8)));
    }

    #[test]
    fn test_start_on_goal_row() {
        let mut grid = GridState::new();
        seal_row(&mut grid, 8, None);
        assert!(has_path_to_goal(&grid, PlayerId::One, Coord::new(0, 8)));
    }

    #[test]
    fn test_sealed_row() {
        let mut grid = GridState::new();
        seal_row(&mut grid, 4, None);
        assert!(!has_path_to_goal(&grid, PlayerId::One, Coord::new(4, 0)));
        assert!(!has_path_to_goal(&grid, PlayerId::Two, Coord::new(4, 8)));
        // Cells past the wall still reach their own side.
        assert!(has_path_to_goal(&grid, PlayerId::One, Coord::new(0, 5)));
    }

    #[test]
    fn test_single_gap_is_enough() {
        let mut grid = GridState::new();
        seal_row(&mut grid, 4, Some(8));
        assert!(has_path_to_goal(&grid, PlayerId::One, Coord::new(0, 0)));
        assert!(has_path_to_goal(&grid, PlayerId::Two, Coord::new(0, 8)));
    }

    #[test]
    fn test_winding_route() {
        // Two walls with gaps on opposite sides force a detour.
        let mut grid = GridState::new();
        seal_row(&mut grid, 3, Some(0));
        seal_row(&mut grid, 6, Some(8));
        assert!(has_path_to_goal(&grid, PlayerId::One, Coord::new(4, 0)));

        grid.set_barrier(Orientation::Vertical, Coord::new(1, 3));
        grid.set_barrier(Orientation::Horizontal, Coord::new(0, 4));
        assert!(!has_path_to_goal(&grid, PlayerId::One, Coord::new(4, 0)));
    }

    #[test]
    fn test_boxed_in_cell() {
        let mut grid = GridState::new();
        grid.set_barrier(Orientation::Vertical, Coord::new(4, 0));
        grid.set_barrier(Orientation::Vertical, Coord::new(5, 0));
        grid.set_barrier(Orientation::Horizontal, Coord::new(4, 1));
        assert!(!has_path_to_goal(&grid, PlayerId::One, Coord::new(4, 0)));
        assert!(has_path_to_goal(&grid, PlayerId::One, Coord::new(3, 0)));
    }

    #[test]
    fn test_tokens_do_not_block() {
        // Player Two stands in the only gap.
        let mut grid = GridState::with_tokens(Coord::new(0, 0), Coord::new(8, 4)).unwrap();
        seal_row(&mut grid, 4, Some(8));
        seal_row(&mut grid, 5, Some(8));
        assert!(has_path_to_goal(&grid, PlayerId::One, Coord::new(0, 0)));
    }

    #[test]
    fn test_off_board_start() {
        let grid = GridState::new();
        assert!(!has_path_to_goal(&grid, PlayerId::One, Coord::new(9, 9)));
    }

    #[test]
    fn test_idempotent() {
        let mut grid = GridState::new();
        seal_row(&mut grid, 2, Some(3));
        let first = has_path_to_goal(&grid, PlayerId::Two, Coord::new(4, 8));
        let second = has_path_to_goal(&grid, PlayerId::Two, Coord::new(4, 8));
        assert_eq!(first, second);
    }
}
