//! Game board: the cell grid, the ship registry, placement and attack rules.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::cell::{Cell, CellState};
use crate::common::{AttackResult, BoardError};
use crate::config::{
    fleet_count, DEFAULT_BOARD_SIZE, FLEET, FLEET_ATTEMPTS, FLEET_SIZE, MAX_BOARD_SIZE,
    MAX_SHIP_LENGTH, PLACEMENT_ATTEMPTS,
};
use crate::ship::{Orientation, Ship, ShipId};

/// Serializable view of the board, one row of cell states per `y`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    pub size: usize,
    pub rows: Vec<Vec<CellState>>,
    pub ships: usize,
    pub destroyed: usize,
}

/// A square grid owning the ships placed on it.
///
/// Cells are stored row-major. Every cell in state `Ship`, `Hit` or
/// `Destroyed` carries the id of a registered ship whose decks include it.
#[derive(Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
    destroyed: usize,
    next_id: u32,
}

impl Board {
    /// Create an empty board of the default size.
    pub fn new() -> Self {
        Self::empty(DEFAULT_BOARD_SIZE)
    }

    /// Create an empty `size`×`size` board.
    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize { size });
        }
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        Board {
            size,
            cells: alloc::vec![Cell::default(); size * size],
            ships: Vec::new(),
            destroyed: 0,
            next_id: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.size && y < self.size).then(|| y * self.size + x)
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn cell_state(&self, x: usize, y: usize) -> Option<CellState> {
        self.cell(x, y).map(Cell::state)
    }

    /// All placed ships, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.iter().find(|s| s.id() == id)
    }

    /// The ship whose deck lies on (`x`, `y`), if any.
    pub fn ship_at(&self, x: usize, y: usize) -> Option<&Ship> {
        self.cell(x, y).and_then(Cell::ship).and_then(|id| self.ship(id))
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    pub fn alive_count(&self) -> usize {
        self.ships.len() - self.destroyed
    }

    /// Returns `true` once every registered ship is destroyed. Only
    /// meaningful after the fleet has been placed.
    pub fn all_destroyed(&self) -> bool {
        self.destroyed >= self.ships.len()
    }

    /// `true` when the registry matches the standard fleet composition.
    pub fn is_fleet_complete(&self) -> bool {
        self.ships.len() == FLEET_SIZE
            && (1..=MAX_SHIP_LENGTH).all(|len| {
                self.ships.iter().filter(|s| s.length() == len).count() == fleet_count(len)
            })
    }

    /// In-bounds cells of the 3×3 block centred on (`x`, `y`).
    fn around(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        let last = self.size - 1;
        let xs = x.saturating_sub(1)..=(x + 1).min(last);
        let ys = y.saturating_sub(1)..=(y + 1).min(last);
        ys.flat_map(move |ny| xs.clone().map(move |nx| (nx, ny)))
    }

    /// Check that a ship of `length` fits at (`x`, `y`): every deck in bounds
    /// and currently `Empty`. Blocked cells reject the placement.
    pub fn can_place(&self, x: usize, y: usize, length: usize, orientation: Orientation) -> bool {
        if length == 0 || length > MAX_SHIP_LENGTH {
            return false;
        }
        let (dx, dy) = orientation.step();
        (0..length).all(|i| {
            let deck = x.checked_add(dx * i).zip(y.checked_add(dy * i));
            deck.and_then(|(cx, cy)| self.cell_state(cx, cy)) == Some(CellState::Empty)
        })
    }

    /// Place a ship, blocking its surrounding cells. Returns `false` without
    /// touching the board when the placement is rejected.
    pub fn place(&mut self, x: usize, y: usize, length: usize, orientation: Orientation) -> bool {
        if !self.can_place(x, y, length, orientation) {
            return false;
        }
        let id = ShipId(self.next_id);
        self.next_id += 1;
        let ship = Ship::new(id, length, x, y, orientation);

        for (cx, cy) in ship.decks() {
            let i = cy * self.size + cx;
            self.cells[i].occupy(id);
        }
        for (cx, cy) in ship.decks() {
            for (nx, ny) in self.around(cx, cy) {
                let cell = &mut self.cells[ny * self.size + nx];
                if cell.state() == CellState::Empty {
                    cell.set_state(CellState::Blocked);
                }
            }
        }

        log::debug!(
            "placed {} (id {}) at ({}, {}) {:?}",
            ship.name(),
            id.0,
            x,
            y,
            orientation
        );
        self.ships.push(ship);
        true
    }

    /// Try random origins and orientations until a ship of `length` fits.
    /// Gives up after `PLACEMENT_ATTEMPTS` tries.
    pub fn place_random<R: Rng + ?Sized>(&mut self, rng: &mut R, length: usize) -> bool {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let x = rng.random_range(0..self.size);
            let y = rng.random_range(0..self.size);
            let orientation = if rng.random_bool(0.5) {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            if self.place(x, y, length, orientation) {
                return true;
            }
        }
        log::debug!(
            "no room for a ship of length {} after {} attempts",
            length,
            PLACEMENT_ATTEMPTS
        );
        false
    }

    /// Reset the board and place the standard fleet at random, largest ship
    /// first. A round that leaves the fleet short is thrown away and retried;
    /// after `FLEET_ATTEMPTS` failed rounds the last partial fleet is kept.
    pub fn place_fleet_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for round in 1..=FLEET_ATTEMPTS {
            self.reset();
            for &length in FLEET.iter() {
                self.place_random(rng, length);
            }
            if self.is_fleet_complete() {
                log::debug!("fleet placed in {} round(s)", round);
                return Ok(());
            }
            log::warn!(
                "fleet round {} placed {} of {} ships, retrying",
                round,
                self.ships.len(),
                FLEET_SIZE
            );
        }
        Err(BoardError::FleetIncomplete {
            placed: self.ships.len(),
            expected: FLEET_SIZE,
        })
    }

    /// Fire at (`x`, `y`).
    ///
    /// Open water (empty or blocked) turns into a miss. A ship deck turns into
    /// a hit; if that was its last intact deck the whole ship is marked
    /// destroyed and its outline is revealed as misses. Out-of-bounds and
    /// already resolved cells leave the board untouched.
    pub fn attack(&mut self, x: usize, y: usize) -> AttackResult {
        let Some(i) = self.index(x, y) else {
            return AttackResult::Invalid;
        };
        let result = match self.cells[i].state() {
            state if state.is_fired() => AttackResult::AlreadyHit,
            CellState::Ship => {
                self.cells[i].set_state(CellState::Hit);
                self.strike(i, x, y)
            }
            _ => {
                self.cells[i].set_state(CellState::Miss);
                AttackResult::Miss
            }
        };
        log::trace!("attack ({}, {}) -> {:?}", x, y, result);
        result
    }

    fn strike(&mut self, i: usize, x: usize, y: usize) -> AttackResult {
        let Some(id) = self.cells[i].ship() else {
            log::error!("deck at ({}, {}) has no owning ship", x, y);
            return AttackResult::Hit;
        };
        let Some(ship) = self.ships.iter_mut().find(|s| s.id() == id) else {
            log::error!("deck at ({}, {}) points at unknown ship {}", x, y, id.0);
            return AttackResult::Hit;
        };
        ship.hit();
        if !ship.is_destroyed() {
            return AttackResult::Hit;
        }
        let sunk = *ship;
        self.mark_destroyed(&sunk);
        self.destroyed += 1;
        log::debug!("{} (id {}) destroyed", sunk.name(), id.0);
        AttackResult::Destroyed
    }

    fn mark_destroyed(&mut self, ship: &Ship) {
        for (cx, cy) in ship.decks() {
            self.cells[cy * self.size + cx].set_state(CellState::Destroyed);
        }
        for (cx, cy) in ship.decks() {
            for (nx, ny) in self.around(cx, cy) {
                let cell = &mut self.cells[ny * self.size + nx];
                if matches!(cell.state(), CellState::Empty | CellState::Blocked) {
                    cell.set_state(CellState::Miss);
                }
            }
        }
    }

    /// Remove every ship and clear all cells. Ship ids keep counting up.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::default());
        self.ships.clear();
        self.destroyed = 0;
    }

    /// Copy the grid out, optionally masking intact ships and buffer zones
    /// as open water the way an opponent sees them.
    pub fn snapshot(&self, hide_ships: bool) -> BoardSnapshot {
        let rows = self
            .cells
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .map(|c| match c.state() {
                        CellState::Ship | CellState::Blocked if hide_ships => CellState::Empty,
                        s => s,
                    })
                    .collect()
            })
            .collect();
        BoardSnapshot {
            size: self.size,
            rows,
            ships: self.ships.len(),
            destroyed: self.destroyed,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{ size: {}, destroyed: {}/{}, ships: {:?} }}",
            self.size,
            self.destroyed,
            self.ships.len(),
            self.ships
        )
    }
}
