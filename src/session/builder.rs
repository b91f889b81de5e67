//! Builder for sessions that start from a custom position.
//!
//! Puzzles, tutorials and tests need positions that are tedious to reach by
//! play. The builder places tokens and barriers directly and validates the
//! result against the same invariants a snapshot must satisfy.
//!
//! ```
//! use rust_quoridor::core::{Coord, Orientation, PlayerId};
//! use rust_quoridor::session::SessionBuilder;
//!
//! let session = SessionBuilder::new()
//!     .position(PlayerId::One, Coord::new(4, 1))
//!     .position(PlayerId::Two, Coord::new(4, 2))
//!     .barrier(Orientation::Horizontal, Coord::new(4, 3))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(session.barrier(Orientation::Horizontal, Coord::new(4, 3)), Some(true));
//! assert_eq!(session.turn(), PlayerId::One);
//! ```

use crate::board::GridState;
use crate::core::config::RulesConfig;
use crate::core::coord::{Coord, Orientation};
use crate::core::player::{PlayerId, PlayerMap};
use crate::error::StateError;

use super::game::{GameSession, PlayerState};

/// Builder for a `GameSession` in a custom position.
#[derive(Clone, Debug)]
pub struct SessionBuilder {
    config: RulesConfig,
    positions: PlayerMap<Coord>,
    budgets: PlayerMap<Option<u8>>,
    barriers: Vec<(Orientation, Coord)>,
    turn: PlayerId,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            config: RulesConfig::default(),
            positions: PlayerMap::new(PlayerId::start),
            budgets: PlayerMap::with_value(None),
            barriers: Vec::new(),
            turn: PlayerId::One,
        }
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    pub fn position(mut self, player: PlayerId, cell: Coord) -> Self {
        self.positions[player] = cell;
        self
    }

    /// Remaining barriers for `player`. Defaults to the configured budget.
    pub fn barriers_remaining(mut self, player: PlayerId, count: u8) -> Self {
        self.budgets[player] = Some(count);
        self
    }

    /// Pre-place a barrier. Placed barriers are not charged to either budget.
    pub fn barrier(mut self, orientation: Orientation, slot: Coord) -> Self {
        self.barriers.push((orientation, slot));
        self
    }

    pub fn turn(mut self, player: PlayerId) -> Self {
        self.turn = player;
        self
    }

    /// Build the session.
    ///
    /// Fails if a token is off the board, both tokens share a cell, a token
    /// already stands on its goal row, a barrier slot does not exist or is
    /// listed twice, or a budget exceeds the configured one.
    pub fn build(self) -> Result<GameSession, StateError> {
        let mut grid = GridState::with_tokens(self.positions[PlayerId::One], self.positions[PlayerId::Two])
            .ok_or(StateError::Inconsistent("tokens must stand on distinct board cells"))?;

        for &(orientation, slot) in &self.barriers {
            match grid.barrier(orientation, slot) {
                None => return Err(StateError::Inconsistent("barrier slot does not exist")),
                Some(true) => return Err(StateError::Inconsistent("barrier slot listed twice")),
                Some(false) => {
                    grid.set_barrier(orientation, slot);
                }
            }
        }

        let config = self.config;
        let positions = self.positions;
        let budgets = self.budgets;
        let session = GameSession {
            config,
            grid,
            players: PlayerMap::new(|player| PlayerState {
                position: positions[player],
                barriers_remaining: budgets[player].unwrap_or(config.barriers_per_player),
            }),
            turn: self.turn,
            winner: None,
        };
        session.check_invariants()?;
        Ok(session)
    }
}
