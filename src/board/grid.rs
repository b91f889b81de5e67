//! Positional state of the board: token occupancy and barrier occupancy.
//!
//! `GridState` stores facts only. It never decides whether a move or a
//! placement is legal; the `rules` module does that against a shared
//! reference, and the session applies accepted changes through the
//! crate-private mutators here.
//!
//! ## Layout
//!
//! Cells and both slot families are fixed `BOARD_SIZE × BOARD_SIZE` arrays
//! indexed `[y][x]`. Slot keys outside the declared ranges (vertical `x = 0`,
//! horizontal `y = 0`) are never written and are not reachable through the
//! public accessors.
//!
//! ```
//! use rust_quoridor::board::GridState;
//! use rust_quoridor::core::{Coord, Direction, Orientation, PlayerId};
//!
//! let grid = GridState::new();
//! assert_eq!(grid.occupant(Coord::new(4, 0)), Some(PlayerId::One));
//! assert_eq!(grid.barrier(Orientation::Vertical, Coord::new(4, 2)), Some(false));
//! assert_eq!(grid.barrier(Orientation::Vertical, Coord::new(0, 2)), None);
//! assert!(grid.can_cross(Coord::new(4, 0), Direction::South));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::coord::{Coord, Direction, Orientation, BOARD_SIZE, N};
use crate::core::player::PlayerId;

/// Token and barrier occupancy of the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridState {
    /// Token per cell, `[y][x]`.
    cells: [[Option<PlayerId>; N]; N],

    /// Vertical slots, `[y][x]`; column 0 unused.
    vertical: [[bool; N]; N],

    /// Horizontal slots, `[y][x]`; row 0 unused.
    horizontal: [[bool; N]; N],
}

impl Default for GridState {
    fn default() -> Self {
        Self::new()
    }
}

impl GridState {
    /// Create the starting grid: both tokens on their home midpoints, no barriers.
    #[must_use]
    pub fn new() -> Self {
        let mut grid = Self::bare();
        for player in PlayerId::ALL {
            grid.put(player.start(), Some(player));
        }
        grid
    }

    /// Create a grid with tokens on arbitrary cells and no barriers.
    ///
    /// Returns `None` if either cell is off the board or both are the same cell.
    #[must_use]
    pub fn with_tokens(one: Coord, two: Coord) -> Option<Self> {
        if !one.is_on_board() || !two.is_on_board() || one == two {
            return None;
        }
        let mut grid = Self::bare();
        grid.put(one, Some(PlayerId::One));
        grid.put(two, Some(PlayerId::Two));
        Some(grid)
    }

    fn bare() -> Self {
        Self {
            cells: [[None; N]; N],
            vertical: [[false; N]; N],
            horizontal: [[false; N]; N],
        }
    }

    // === Cells ===

    /// Token on `cell`, if any. Off-board cells are empty.
    #[must_use]
    pub fn occupant(&self, cell: Coord) -> Option<PlayerId> {
        if !cell.is_on_board() {
            return None;
        }
        let (row, col) = cell.index();
        self.cells[row][col]
    }

    /// Check if a token stands on `cell`.
    #[must_use]
    pub fn is_occupied(&self, cell: Coord) -> bool {
        self.occupant(cell).is_some()
    }

    /// Cell holding `player`'s token.
    #[must_use]
    pub fn locate(&self, player: PlayerId) -> Option<Coord> {
        self.tokens()
            .find_map(|(cell, occupant)| (occupant == player).then_some(cell))
    }

    /// Iterate over every occupied cell, row by row.
    pub fn tokens(&self) -> impl Iterator<Item = (Coord, PlayerId)> + '_ {
        all_cells().filter_map(move |cell| self.occupant(cell).map(|player| (cell, player)))
    }

    /// Move `player`'s token from `from` to `to`.
    ///
    /// Legality is the caller's business; this only rewrites the two cells.
    pub(crate) fn move_token(&mut self, player: PlayerId, from: Coord, to: Coord) {
        self.put(from, None);
        self.put(to, Some(player));
    }

    fn put(&mut self, cell: Coord, occupant: Option<PlayerId>) {
        let (row, col) = cell.index();
        self.cells[row][col] = occupant;
    }

    // === Slots ===

    /// Occupancy of a slot; `None` if the slot does not exist.
    #[must_use]
    pub fn barrier(&self, orientation: Orientation, slot: Coord) -> Option<bool> {
        if !orientation.contains(slot) {
            return None;
        }
        let (row, col) = slot.index();
        Some(match orientation {
            Orientation::Vertical => self.vertical[row][col],
            Orientation::Horizontal => self.horizontal[row][col],
        })
    }

    /// Check if a barrier occupies a slot. Nonexistent slots are never occupied.
    #[must_use]
    pub fn has_barrier(&self, orientation: Orientation, slot: Coord) -> bool {
        self.barrier(orientation, slot).unwrap_or(false)
    }

    /// Iterate over every placed barrier.
    pub fn barriers(&self) -> impl Iterator<Item = (Orientation, Coord)> + '_ {
        [Orientation::Horizontal, Orientation::Vertical]
            .into_iter()
            .flat_map(move |orientation| {
                all_cells()
                    .filter(move |&slot| self.has_barrier(orientation, slot))
                    .map(move |slot| (orientation, slot))
            })
    }

    /// Number of placed barriers.
    #[must_use]
    pub fn barrier_count(&self) -> usize {
        self.barriers().count()
    }

    /// Occupy a slot. Returns `false` (and changes nothing) if the slot does not exist.
    pub(crate) fn set_barrier(&mut self, orientation: Orientation, slot: Coord) -> bool {
        self.write_slot(orientation, slot, true)
    }

    /// Free a slot. Only the fair-play rollback calls this.
    pub(crate) fn clear_barrier(&mut self, orientation: Orientation, slot: Coord) -> bool {
        self.write_slot(orientation, slot, false)
    }

    fn write_slot(&mut self, orientation: Orientation, slot: Coord, value: bool) -> bool {
        if !orientation.contains(slot) {
            return false;
        }
        let (row, col) = slot.index();
        match orientation {
            Orientation::Vertical => self.vertical[row][col] = value,
            Orientation::Horizontal => self.horizontal[row][col] = value,
        }
        true
    }

    /// Check that no slot outside the declared ranges is set.
    ///
    /// Always true for grids built by this crate; decoded grids may not be.
    #[must_use]
    pub fn slots_in_range(&self) -> bool {
        (0..N).all(|i| !self.vertical[i][0] && !self.horizontal[0][i])
    }

    // === Boundaries ===

    /// Check if a barrier blocks the boundary on the `direction` side of `cell`.
    ///
    /// The board edge is not a barrier: stepping off the board is ruled out
    /// separately by `can_cross`.
    #[must_use]
    pub fn is_blocked(&self, cell: Coord, direction: Direction) -> bool {
        cell.boundary(direction)
            .is_some_and(|(orientation, slot)| self.has_barrier(orientation, slot))
    }

    /// Check if a token could pass from `cell` to its neighbour in `direction`,
    /// ignoring tokens: the neighbour exists and no barrier is in the way.
    #[must_use]
    pub fn can_cross(&self, cell: Coord, direction: Direction) -> bool {
        cell.boundary(direction)
            .is_some_and(|(orientation, slot)| !self.has_barrier(orientation, slot))
    }
}

/// Every cell on the board, row by row.
pub fn all_cells() -> impl Iterator<Item = Coord> {
    (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Coord::new(x, y)))
}
