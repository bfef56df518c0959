//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, AttackResult, Board, CellState, Game, GameStatus, HuntTargeting, Orientation,
    Player, Seat,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer};
