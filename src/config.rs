pub const DEFAULT_BOARD_SIZE: usize = 10;
/// Columns are labelled with a single letter, so boards stop at `Z`.
pub const MAX_BOARD_SIZE: usize = 26;
pub const MAX_SHIP_LENGTH: usize = 4;

pub const FLEET_SIZE: usize = 10;
/// Ship lengths of one side's fleet, largest first.
pub const FLEET: [usize; FLEET_SIZE] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of decks in the standard fleet.
pub const TOTAL_DECKS: usize = 4 + 3 * 2 + 2 * 3 + 4;

/// Random origins tried by `Board::place_random` before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 1000;
/// Whole-fleet rounds tried by `Board::place_fleet_random` before giving up.
pub const FLEET_ATTEMPTS: usize = 100;

/// Number of ships of the given length in the standard fleet.
pub fn fleet_count(length: usize) -> usize {
    FLEET.iter().filter(|&&l| l == length).count()
}
