use alloc::string::String;
use rand::rngs::SmallRng;

use crate::{ai::HuntTargeting, board::Board, common::AttackResult, player::Player, BoardError};

/// Computer player: random fleet placement and hunt/search targeting.
pub struct AiPlayer {
    name: String,
    targeting: HuntTargeting,
}

impl AiPlayer {
    pub fn new(rng: &mut SmallRng) -> Self {
        Self::named("Computer", rng)
    }

    pub fn named(name: &str, rng: &mut SmallRng) -> Self {
        Self {
            name: String::from(name),
            targeting: HuntTargeting::new(rng),
        }
    }

    /// Targeting for an opponent board of the given size.
    pub fn with_board_size(name: &str, size: usize, rng: &mut SmallRng) -> Self {
        Self {
            name: String::from(name),
            targeting: HuntTargeting::with_size(size, rng),
        }
    }

    pub fn targeting(&self) -> &HuntTargeting {
        &self.targeting
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_automated(&self) -> bool {
        true
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        board.place_fleet_random(rng)
    }

    fn select_target(&mut self, _rng: &mut SmallRng) -> Option<(usize, usize)> {
        self.targeting.next_target()
    }

    fn handle_attack_result(&mut self, coord: (usize, usize), result: AttackResult) {
        match result {
            AttackResult::Hit => self.targeting.on_hit(coord.0, coord.1),
            AttackResult::Destroyed => self.targeting.on_destroyed(),
            _ => {}
        }
    }

    fn reset(&mut self, rng: &mut SmallRng) {
        self.targeting.reset(rng);
    }
}
