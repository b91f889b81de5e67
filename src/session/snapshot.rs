//! Binary session snapshots.
//!
//! A snapshot is the whole `GameSession` encoded with `bincode`. Decoding
//! re-checks the board invariants, since the bytes may come from anywhere.

use crate::core::player::PlayerId;
use crate::error::StateError;

use super::game::GameSession;

impl GameSession {
    /// Encode the session.
    pub fn to_bytes(&self) -> Result<Vec<u8>, StateError> {
        bincode::serialize(self).map_err(StateError::Encode)
    }

    /// Decode a session and verify it is consistent.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StateError> {
        let session: GameSession = bincode::deserialize(bytes).map_err(StateError::Decode)?;
        session.check_invariants()?;
        Ok(session)
    }

    /// Verify the invariants every reachable session satisfies.
    pub(crate) fn check_invariants(&self) -> Result<(), StateError> {
        if !self.grid.slots_in_range() {
            return Err(StateError::Inconsistent("barrier outside slot range"));
        }
        if self.grid.tokens().count() != PlayerId::ALL.len() {
            return Err(StateError::Inconsistent("board must hold exactly two tokens"));
        }

        for player in PlayerId::ALL {
            let state = &self.players[player];
            if self.grid.occupant(state.position) != Some(player) {
                return Err(StateError::Inconsistent("player position disagrees with board"));
            }
            if state.barriers_remaining > self.config.barriers_per_player {
                return Err(StateError::Inconsistent("barrier budget above configured maximum"));
            }
            let on_goal = player.is_goal(state.position);
            match self.winner {
                None if on_goal => {
                    return Err(StateError::Inconsistent("token on goal row without a winner"));
                }
                Some(winner) if winner == player && !on_goal => {
                    return Err(StateError::Inconsistent("winner is not on their goal row"));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::coord::{Coord, Orientation};
    use crate::session::SessionBuilder;

    #[test]
    fn test_snapshot_round_trip() {
        let mut session = GameSession::new();
        session.attempt_move(PlayerId::One, Coord::new(4, 1)).unwrap();
        session
            .attempt_barrier(PlayerId::Two, Orientation::Horizontal, Coord::new(4, 2))
            .unwrap();

        let bytes = session.to_bytes().unwrap();
        let restored = GameSession::from_bytes(&bytes).unwrap();
        assert_eq!(session, restored);
    }

    #[test]
    fn test_truncated_snapshot() {
        let bytes = GameSession::new().to_bytes().unwrap();
        let result = GameSession::from_bytes(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(StateError::Decode(_))));
    }

    #[test]
    fn test_position_mismatch_detected() {
        let mut session = GameSession::new();
        session.players[PlayerId::Two].position = Coord::new(0, 5);
        let bytes = session.to_bytes().unwrap();
        assert!(matches!(
            GameSession::from_bytes(&bytes),
            Err(StateError::Inconsistent(_))
        ));
    }

    #[test]
    fn test_winner_must_stand_on_goal() {
        let mut session = SessionBuilder::new().build().unwrap();
        session.winner = Some(PlayerId::Two);
        assert!(session.check_invariants().is_err());
    }
}
