//! A single grid position and its state.

use crate::ship::ShipId;

/// State of one cell on the board.
///
/// `Blocked` marks the buffer zone around a placed ship. It only restricts
/// placement; an attacker cannot tell it apart from `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Ship,
    Miss,
    Hit,
    Destroyed,
    Blocked,
}

impl CellState {
    /// `true` for states that belong to a ship deck.
    pub fn is_ship(self) -> bool {
        matches!(self, CellState::Ship | CellState::Hit | CellState::Destroyed)
    }

    /// `true` once a shot has landed on the cell.
    pub fn is_fired(self) -> bool {
        matches!(self, CellState::Miss | CellState::Hit | CellState::Destroyed)
    }
}

/// One grid cell: its state and, for deck cells, the owning ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    state: CellState,
    ship: Option<ShipId>,
}

impl Cell {
    pub fn state(&self) -> CellState {
        self.state
    }

    /// Id of the ship occupying this cell, if any.
    pub fn ship(&self) -> Option<ShipId> {
        self.ship
    }

    pub(crate) fn occupy(&mut self, id: ShipId) {
        self.state = CellState::Ship;
        self.ship = Some(id);
    }

    /// Change the state while keeping the occupant. Callers keep the
    /// `ship.is_some() == state.is_ship()` pairing intact.
    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }
}
