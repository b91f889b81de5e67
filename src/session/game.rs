//! Turn sequencing, barrier budgets and win state.
//!
//! `GameSession` is the only owner of mutable game state. Both entry points
//! run the same guards first (game over, then turn), delegate legality to
//! `rules`, and only then mutate. A rejected request leaves every field as
//! it was.
//!
//! ## Barrier Placement
//!
//! 1. Structural check (`rules::check_placement`).
//! 2. Write the barrier provisionally.
//! 3. Route check for the defending player (and the placer too under
//!    `FairPlayScope::BothPlayers`).
//! 4. On failure, clear the slot and reject with `Rejection::FairPlay`.
//! 5. On success, charge the placer one barrier and pass the turn.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::GridState;
use crate::core::config::{FairPlayScope, RulesConfig, WinTurnPolicy};
use crate::core::coord::{Coord, Orientation};
use crate::core::player::{PlayerId, PlayerMap};
use crate::error::Rejection;
use crate::rules::{check_placement, classify_move, has_path_to_goal, legal_targets, MoveKind, MoveList};

/// Per-player state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    pub(crate) position: Coord,
    pub(crate) barriers_remaining: u8,
}

impl PlayerState {
    /// Cell the player's token stands on.
    #[must_use]
    pub fn position(&self) -> Coord {
        self.position
    }

    /// Barriers the player may still place.
    #[must_use]
    pub fn barriers_remaining(&self) -> u8 {
        self.barriers_remaining
    }
}

/// An accepted token move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// How the move was classified.
    pub kind: MoveKind,
    /// Cell the token left.
    pub from: Coord,
    /// Cell the token arrived on.
    pub to: Coord,
    /// Set when this move won the game.
    pub winner: Option<PlayerId>,
}

/// A game in progress (or finished).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) config: RulesConfig,
    pub(crate) grid: GridState,
    pub(crate) players: PlayerMap<PlayerState>,
    pub(crate) turn: PlayerId,
    pub(crate) winner: Option<PlayerId>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Start a game with the default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Start a game with custom rules.
    ///
    /// Tokens start on their home midpoints, Player One moves first.
    #[must_use]
    pub fn with_config(config: RulesConfig) -> Self {
        Self {
            config,
            grid: GridState::new(),
            players: PlayerMap::new(|player| PlayerState {
                position: player.start(),
                barriers_remaining: config.barriers_per_player,
            }),
            turn: PlayerId::One,
            winner: None,
        }
    }

    // === Read Accessors ===

    /// Rules in force.
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Read-only board.
    #[must_use]
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    /// Token on `cell`, if any.
    #[must_use]
    pub fn occupant(&self, cell: Coord) -> Option<PlayerId> {
        self.grid.occupant(cell)
    }

    /// Occupancy of a slot; `None` if the slot does not exist.
    #[must_use]
    pub fn barrier(&self, orientation: Orientation, slot: Coord) -> Option<bool> {
        self.grid.barrier(orientation, slot)
    }

    /// A player's state.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    /// Cell a player's token stands on.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> Coord {
        self.players[player].position
    }

    /// Barriers a player may still place.
    #[must_use]
    pub fn barriers_remaining(&self, player: PlayerId) -> u8 {
        self.players[player].barriers_remaining
    }

    /// Player to act.
    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    /// Winner, once decided.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Check if a winner has been decided.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Every cell `player` could move to right now.
    ///
    /// Empty when the game is over or it is not `player`'s turn.
    #[must_use]
    pub fn legal_moves(&self, player: PlayerId) -> MoveList {
        if self.ensure_can_act(player).is_err() {
            return MoveList::new();
        }
        legal_targets(&self.grid, player, self.players[player].position)
    }

    // === Entry Points ===

    /// Move `player`'s token to `target`.
    pub fn attempt_move(&mut self, player: PlayerId, target: Coord) -> Result<MoveOutcome, Rejection> {
        let result = self.apply_move(player, target);
        match &result {
            Ok(outcome) => debug!(%player, from = %outcome.from, to = %target, kind = %outcome.kind, "move accepted"),
            Err(reason) => debug!(%player, %target, %reason, "move rejected"),
        }
        result
    }

    /// Place a barrier for `player`.
    pub fn attempt_barrier(
        &mut self,
        player: PlayerId,
        orientation: Orientation,
        slot: Coord,
    ) -> Result<(), Rejection> {
        let result = self.apply_barrier(player, orientation, slot);
        match &result {
            Ok(()) => debug!(
                %player,
                %orientation,
                %slot,
                remaining = self.players[player].barriers_remaining,
                "barrier placed"
            ),
            Err(reason) => debug!(%player, %orientation, %slot, %reason, "barrier rejected"),
        }
        result
    }

    fn ensure_can_act(&self, player: PlayerId) -> Result<(), Rejection> {
        if self.winner.is_some() {
            return Err(Rejection::GameOver);
        }
        if self.turn != player {
            return Err(Rejection::NotYourTurn);
        }
        Ok(())
    }

    fn apply_move(&mut self, player: PlayerId, target: Coord) -> Result<MoveOutcome, Rejection> {
        self.ensure_can_act(player)?;
        if !target.is_on_board() {
            return Err(Rejection::IllegalTarget);
        }

        let from = self.players[player].position;
        let kind = classify_move(&self.grid, player, from, target).ok_or(Rejection::IllegalTarget)?;

        self.grid.move_token(player, from, target);
        self.players[player].position = target;

        if player.is_goal(target) {
            self.winner = Some(player);
            info!(%player, cell = %target, "goal reached");
        }
        if self.winner.is_none() || self.config.win_turn == WinTurnPolicy::Advance {
            self.turn = player.opponent();
        }

        Ok(MoveOutcome {
            kind,
            from,
            to: target,
            winner: self.winner,
        })
    }

    fn apply_barrier(
        &mut self,
        player: PlayerId,
        orientation: Orientation,
        slot: Coord,
    ) -> Result<(), Rejection> {
        self.ensure_can_act(player)?;
        check_placement(&self.grid, self.players[player].barriers_remaining, orientation, slot)?;

        self.grid.set_barrier(orientation, slot);
        if !self.routes_open(player) {
            self.grid.clear_barrier(orientation, slot);
            return Err(Rejection::FairPlay);
        }

        self.players[player].barriers_remaining -= 1;
        self.turn = player.opponent();
        Ok(())
    }

    /// Routes the fair-play rule protects after `placer` puts down a barrier.
    fn routes_open(&self, placer: PlayerId) -> bool {
        let has_route = |player: PlayerId| {
            has_path_to_goal(&self.grid, player, self.players[player].position)
        };
        match self.config.fair_play {
            FairPlayScope::Opponent => has_route(placer.opponent()),
            FairPlayScope::BothPlayers => has_route(placer.opponent()) && has_route(placer),
        }
    }
}
