//! Common types for the sea battle core: attack results and board errors.

/// Outcome of firing at a single coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    /// Shot landed on open water (including a ship's buffer zone).
    Miss,
    /// Shot struck a deck of a ship that is still afloat.
    Hit,
    /// Shot struck the last intact deck of a ship.
    Destroyed,
    /// The coordinate was already resolved by an earlier shot.
    AlreadyHit,
    /// The coordinate lies outside the board.
    Invalid,
}

impl AttackResult {
    /// `true` for results that struck a ship deck.
    pub fn is_hit(self) -> bool {
        matches!(self, AttackResult::Hit | AttackResult::Destroyed)
    }

    /// `true` when the shot changed the board, i.e. it was a legal new shot.
    pub fn is_resolved(self) -> bool {
        matches!(
            self,
            AttackResult::Miss | AttackResult::Hit | AttackResult::Destroyed
        )
    }
}

/// Errors returned by Board construction and bulk placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Requested board size is zero or does not fit the column labels.
    InvalidSize { size: usize },
    /// Automatic placement could not fit the whole fleet.
    FleetIncomplete { placed: usize, expected: usize },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidSize { size } => write!(
                f,
                "Board size {} is out of range 1..={}",
                size,
                crate::config::MAX_BOARD_SIZE
            ),
            BoardError::FleetIncomplete { placed, expected } => write!(
                f,
                "Unable to place fleet: {} of {} ships placed",
                placed, expected
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
