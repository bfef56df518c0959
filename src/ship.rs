//! Ship definitions: class names, orientation and damage tracking.

use core::fmt;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Unit step `(dx, dy)` from one deck to the next.
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// Identifier handed out by the owning board, unique within that board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub u32);

/// Display class of a ship, looked up by length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipClass {
    Battleship,
    Cruiser,
    Destroyer,
    Boat,
}

impl ShipClass {
    pub fn from_length(length: usize) -> Option<Self> {
        match length {
            4 => Some(ShipClass::Battleship),
            3 => Some(ShipClass::Cruiser),
            2 => Some(ShipClass::Destroyer),
            1 => Some(ShipClass::Boat),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShipClass::Battleship => "Battleship",
            ShipClass::Cruiser => "Cruiser",
            ShipClass::Destroyer => "Destroyer",
            ShipClass::Boat => "Boat",
        }
    }

    pub fn length(self) -> usize {
        match self {
            ShipClass::Battleship => 4,
            ShipClass::Cruiser => 3,
            ShipClass::Destroyer => 2,
            ShipClass::Boat => 1,
        }
    }
}

/// A ship of `length` decks starting at `origin`.
///
/// Ships carry no bounds knowledge; the board validates a placement before
/// constructing one.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    id: ShipId,
    length: usize,
    x: usize,
    y: usize,
    orientation: Orientation,
    hits: usize,
}

impl Ship {
    pub fn new(id: ShipId, length: usize, x: usize, y: usize, orientation: Orientation) -> Self {
        Ship {
            id,
            length,
            x,
            y,
            orientation,
            hits: 0,
        }
    }

    /// Register one hit. Hits past the ship's length are ignored.
    pub fn hit(&mut self) {
        if self.hits < self.length {
            self.hits += 1;
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.hits >= self.length
    }

    /// Coordinates of every deck, origin first.
    pub fn decks(&self) -> impl Iterator<Item = (usize, usize)> {
        let (dx, dy) = self.orientation.step();
        let (x, y) = (self.x, self.y);
        (0..self.length).map(move |i| (x + dx * i, y + dy * i))
    }

    /// `true` if one of the decks lies on (`x`, `y`).
    pub fn occupies(&self, x: usize, y: usize) -> bool {
        self.decks().any(|d| d == (x, y))
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn hit_count(&self) -> usize {
        self.hits
    }

    pub fn origin(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn class(&self) -> Option<ShipClass> {
        ShipClass::from_length(self.length)
    }

    /// Class name, or a generic "Ship" for lengths outside the fleet.
    pub fn name(&self) -> &'static str {
        self.class().map_or("Ship", ShipClass::name)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ id: {}, name: \"{}\", origin: ({}, {}), orientation: {:?}, hits: {}/{} }}",
            self.id.0,
            self.name(),
            self.x,
            self.y,
            self.orientation,
            self.hits,
            self.length,
        )
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{} decks, hits: {}/{}]",
            self.name(),
            self.length,
            self.hits,
            self.length
        )
    }
}
