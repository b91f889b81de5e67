//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Closed two-player identifier. Each player knows its starting cell and the
//! goal row it races towards.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::coord::{Coord, BOARD_SIZE};

/// One of the two players.
///
/// Player One starts on row `0` and races south, Player Two starts on the
/// last row and races north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Both players, in turn order.
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Index into per-player storage (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Starting cell: the midpoint of the player's home edge.
    ///
    /// ```
    /// use rust_quoridor::core::{Coord, PlayerId};
    ///
    /// assert_eq!(PlayerId::One.start(), Coord::new(4, 0));
    /// assert_eq!(PlayerId::Two.start(), Coord::new(4, 8));
    /// ```
    #[must_use]
    pub const fn start(self) -> Coord {
        match self {
            PlayerId::One => Coord::new(BOARD_SIZE / 2, 0),
            PlayerId::Two => Coord::new(BOARD_SIZE / 2, BOARD_SIZE - 1),
        }
    }

    /// Row this player must reach to win.
    #[must_use]
    pub const fn goal_row(self) -> u8 {
        match self {
            PlayerId::One => BOARD_SIZE - 1,
            PlayerId::Two => 0,
        }
    }

    /// Check if `cell` is on this player's goal row.
    #[must_use]
    pub const fn is_goal(self, cell: Coord) -> bool {
        cell.is_on_board() && cell.y == self.goal_row()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::One => write!(f, "Player 1"),
            PlayerId::Two => write!(f, "Player 2"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_quoridor::core::{PlayerId, PlayerMap};
///
/// let mut budget: PlayerMap<u8> = PlayerMap::with_value(10);
/// budget[PlayerId::Two] -= 1;
///
/// assert_eq!(budget[PlayerId::One], 10);
/// assert_eq!(budget[PlayerId::Two], 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::ALL.map(factory),
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
