//! Shared helpers for integration tests.

#![allow(dead_code)]

use rust_quoridor::{GameSession, PlayerId};

/// Assert the board invariants every reachable session satisfies.
pub fn assert_consistent(game: &GameSession) {
    let tokens: Vec<_> = game.grid().tokens().collect();
    assert_eq!(tokens.len(), 2, "exactly two tokens on the board");

    for player in PlayerId::ALL {
        let cells: Vec<_> = tokens
            .iter()
            .filter(|(_, occupant)| *occupant == player)
            .map(|(cell, _)| *cell)
            .collect();
        assert_eq!(cells, vec![game.position(player)], "{player} token matches position");
        assert!(game.barriers_remaining(player) <= game.config().barriers_per_player);
    }

    assert!(game.grid().slots_in_range());
}
