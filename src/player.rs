use rand::rngs::SmallRng;

use crate::{board::Board, common::AttackResult, BoardError};

/// Interface implemented by every kind of player.
///
/// The turn manager drives human and automated players through the same
/// calls; a player that does not learn from results keeps the default
/// no-op callbacks.
pub trait Player {
    /// Display name.
    fn name(&self) -> &str;

    /// `true` for computer-controlled players.
    fn is_automated(&self) -> bool;

    /// Place a complete fleet onto the provided board.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError>;

    /// Choose the next coordinate to fire at. `None` means the player has no
    /// move to offer (input closed or every cell already tried).
    fn select_target(&mut self, rng: &mut SmallRng) -> Option<(usize, usize)>;

    /// Inform the player of the result of its last shot.
    fn handle_attack_result(&mut self, _coord: (usize, usize), _result: AttackResult) {}

    /// Prepare for a new round.
    fn reset(&mut self, _rng: &mut SmallRng) {}
}
