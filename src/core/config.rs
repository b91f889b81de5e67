//! Rules configuration.
//!
//! The board size is fixed (`BOARD_SIZE`). What a session can configure is
//! the barrier budget and the two rule variants the reference game leaves
//! open:
//!
//! - `FairPlayScope`: whose route a barrier placement must leave open.
//! - `WinTurnPolicy`: whether a winning move still hands the turn over.

use serde::{Deserialize, Serialize};

/// Barriers each player starts with by default.
pub const DEFAULT_BARRIERS: u8 = 10;

/// Whose route to goal is checked after a barrier placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FairPlayScope {
    /// Only the opponent of the placing player must keep a route.
    ///
    /// A placement that walls in the placer's own token is accepted.
    #[default]
    Opponent,
    /// Both players must keep a route.
    BothPlayers,
}

/// What happens to the turn after a winning move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinTurnPolicy {
    /// The turn passes to the loser like after any other move.
    #[default]
    Advance,
    /// The turn stays with the winner.
    Hold,
}

/// Rules configuration for a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Barriers each player may place over the whole game.
    pub barriers_per_player: u8,

    /// Whose route a placement must preserve.
    pub fair_play: FairPlayScope,

    /// Turn handling on a winning move.
    pub win_turn: WinTurnPolicy,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            barriers_per_player: DEFAULT_BARRIERS,
            fair_play: FairPlayScope::Opponent,
            win_turn: WinTurnPolicy::Advance,
        }
    }
}

impl RulesConfig {
    /// Set the starting barrier budget.
    #[must_use]
    pub fn with_barriers(mut self, count: u8) -> Self {
        self.barriers_per_player = count;
        self
    }

    /// Set the fair-play scope.
    #[must_use]
    pub fn with_fair_play(mut self, scope: FairPlayScope) -> Self {
        self.fair_play = scope;
        self
    }

    /// Set the turn policy for winning moves.
    #[must_use]
    pub fn with_win_turn(mut self, policy: WinTurnPolicy) -> Self {
        self.win_turn = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RulesConfig::default();
        assert_eq!(config.barriers_per_player, 10);
        assert_eq!(config.fair_play, FairPlayScope::Opponent);
        assert_eq!(config.win_turn, WinTurnPolicy::Advance);
    }

    #[test]
    fn test_builder_pattern() {
        let config = RulesConfig::default()
            .with_barriers(3)
            .with_fair_play(FairPlayScope::BothPlayers)
            .with_win_turn(WinTurnPolicy::Hold);

        assert_eq!(config.barriers_per_player, 3);
        assert_eq!(config.fair_play, FairPlayScope::BothPlayers);
        assert_eq!(config.win_turn, WinTurnPolicy::Hold);
    }

    #[test]
    fn test_serialization() {
        let config = RulesConfig::default().with_fair_play(FairPlayScope::BothPlayers);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RulesConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
