//! Board geometry: cell coordinates, movement directions, barrier orientation.
//!
//! ## Coordinate System
//!
//! `x` grows east, `y` grows south. Row `y = 0` is the edge Player One starts
//! on, row `y = BOARD_SIZE - 1` the edge Player Two starts on.
//!
//! ## Slots
//!
//! A barrier sits on the boundary between two adjacent cells and is keyed by
//! the cell with the larger coordinate:
//!
//! - Vertical slot `(x, y)`, `x ∈ [1, N-1]`: between `(x-1, y)` and `(x, y)`.
//! - Horizontal slot `(x, y)`, `y ∈ [1, N-1]`: between `(x, y-1)` and `(x, y)`.
//!
//! ```
//! use rust_quoridor::core::{Coord, Direction, Orientation};
//!
//! let cell = Coord::new(4, 4);
//! assert_eq!(cell.boundary(Direction::East), Some((Orientation::Vertical, Coord::new(5, 4))));
//! assert_eq!(cell.boundary(Direction::North), Some((Orientation::Horizontal, Coord::new(4, 4))));
//! assert_eq!(Coord::new(0, 0).boundary(Direction::West), None);
//! ```

use serde::{Deserialize, Serialize};

/// Cells per board side.
pub const BOARD_SIZE: u8 = 9;

/// `BOARD_SIZE` as an array length.
pub(crate) const N: usize = BOARD_SIZE as usize;

/// A cell (or slot) coordinate.
///
/// Coordinates are not validated on construction: callers hand in whatever
/// the user asked for and the engine rejects off-board values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Check if this coordinate names a cell on the board.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// The neighbouring cell in `direction`, if it is on the board.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Coord> {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }

    /// Shift by `(dx, dy)`, returning `None` when the result leaves the board.
    #[must_use]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Coord> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        let moved = Coord::new(x, y);
        moved.is_on_board().then_some(moved)
    }

    /// Direction from this cell to an orthogonally adjacent cell.
    #[must_use]
    pub fn direction_to(self, other: Coord) -> Option<Direction> {
        let dx = i16::from(other.x) - i16::from(self.x);
        let dy = i16::from(other.y) - i16::from(self.y);
        Direction::from_delta(dx, dy)
    }

    /// The slot separating this cell from its neighbour in `direction`.
    ///
    /// `None` when there is no neighbour (board edge).
    #[must_use]
    pub fn boundary(self, direction: Direction) -> Option<(Orientation, Coord)> {
        let neighbour = self.step(direction)?;
        let key = match direction {
            Direction::East | Direction::South => neighbour,
            Direction::West | Direction::North => self,
        };
        Some((direction.barrier_orientation(), key))
    }

    /// Row-major index into a `BOARD_SIZE × BOARD_SIZE` array.
    pub(crate) const fn index(self) -> (usize, usize) {
        (self.y as usize, self.x as usize)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four orthogonal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards `y = 0`.
    North,
    /// Towards `y = BOARD_SIZE - 1`.
    South,
    /// Towards `x = BOARD_SIZE - 1`.
    East,
    /// Towards `x = 0`.
    West,
}

impl Direction {
    /// All directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit step `(dx, dy)`.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// Direction of a unit delta. Anything that is not a unit step is `None`.
    #[must_use]
    pub fn from_delta(dx: i16, dy: i16) -> Option<Direction> {
        match (dx, dy) {
            (0, -1) => Some(Direction::North),
            (0, 1) => Some(Direction::South),
            (1, 0) => Some(Direction::East),
            (-1, 0) => Some(Direction::West),
            _ => None,
        }
    }

    /// Orientation of the barrier that blocks movement in this direction.
    #[must_use]
    pub const fn barrier_orientation(self) -> Orientation {
        match self {
            Direction::North | Direction::South => Orientation::Horizontal,
            Direction::East | Direction::West => Orientation::Vertical,
        }
    }
}

/// Barrier orientation.
///
/// Vertical barriers block east/west movement, horizontal barriers block
/// north/south movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Check if `slot` exists for this orientation.
    #[must_use]
    pub const fn contains(self, slot: Coord) -> bool {
        match self {
            Orientation::Vertical => slot.x >= 1 && slot.x < BOARD_SIZE && slot.y < BOARD_SIZE,
            Orientation::Horizontal => slot.x < BOARD_SIZE && slot.y >= 1 && slot.y < BOARD_SIZE,
        }
    }
}

impl TryFrom<char> for Orientation {
    type Error = char;

    /// Parse the `'h'` / `'v'` tags used by text front ends.
    fn try_from(tag: char) -> Result<Self, Self::Error> {
        match tag.to_ascii_lowercase() {
            'h' => Ok(Orientation::Horizontal),
            'v' => Ok(Orientation::Vertical),
            _ => Err(tag),
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "h"),
            Orientation::Vertical => write!(f, "v"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stays_on_board() {
        let corner = Coord::new(0, 0);
        assert_eq!(corner.step(Direction::North), None);
        assert_eq!(corner.step(Direction::West), None);
        assert_eq!(corner.step(Direction::South), Some(Coord::new(0, 1)));
        assert_eq!(corner.step(Direction::East), Some(Coord::new(1, 0)));

        let far = Coord::new(8, 8);
        assert_eq!(far.step(Direction::South), None);
        assert_eq!(far.step(Direction::East), None);
    }

    #[test]
    fn test_offset_rejects_off_board() {
        assert_eq!(Coord::new(4, 4).offset(2, -2), Some(Coord::new(6, 2)));
        assert_eq!(Coord::new(1, 4).offset(-2, 0), None);
        assert_eq!(Coord::new(7, 4).offset(2, 0), None);
    }

    #[test]
    fn test_direction_to() {
        let c = Coord::new(3, 3);
        assert_eq!(c.direction_to(Coord::new(3, 2)), Some(Direction::North));
        assert_eq!(c.direction_to(Coord::new(2, 3)), Some(Direction::West));
        assert_eq!(c.direction_to(Coord::new(4, 4)), None);
        assert_eq!(c.direction_to(c), None);
    }

    #[test]
    fn test_boundary_keys_larger_cell() {
        let c = Coord::new(4, 2);
        assert_eq!(c.boundary(Direction::West), Some((Orientation::Vertical, Coord::new(4, 2))));
        assert_eq!(c.boundary(Direction::East), Some((Orientation::Vertical, Coord::new(5, 2))));
        assert_eq!(c.boundary(Direction::North), Some((Orientation::Horizontal, Coord::new(4, 2))));
        assert_eq!(c.boundary(Direction::South), Some((Orientation::Horizontal, Coord::new(4, 3))));
    }

    #[test]
    fn test_boundary_slots_exist() {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                for dir in Direction::ALL {
                    if let Some((orientation, slot)) = Coord::new(x, y).boundary(dir) {
                        assert!(orientation.contains(slot), "{orientation} {slot} from ({x}, {y})");
                    }
                }
            }
        }
    }

    #[test]
    fn test_slot_ranges() {
        assert!(!Orientation::Vertical.contains(Coord::new(0, 4)));
        assert!(Orientation::Vertical.contains(Coord::new(1, 0)));
        assert!(Orientation::Vertical.contains(Coord::new(8, 8)));
        assert!(!Orientation::Vertical.contains(Coord::new(9, 0)));

        assert!(!Orientation::Horizontal.contains(Coord::new(4, 0)));
        assert!(Orientation::Horizontal.contains(Coord::new(0, 1)));
        assert!(!Orientation::Horizontal.contains(Coord::new(0, 9)));
    }

    #[test]
    fn test_orientation_tags() {
        assert_eq!(Orientation::try_from('h'), Ok(Orientation::Horizontal));
        assert_eq!(Orientation::try_from('V'), Ok(Orientation::Vertical));
        assert_eq!(Orientation::try_from('x'), Err('x'));
        assert_eq!(format!("{}", Orientation::Vertical), "v");
    }

    #[test]
    fn test_coord_display() {
        assert_eq!(format!("{}", Coord::new(4, 8)), "(4, 8)");
    }
}
