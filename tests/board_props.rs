use seabattle::{AttackResult, Board, CellState, Orientation, DEFAULT_BOARD_SIZE};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

const N: usize = DEFAULT_BOARD_SIZE;

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    board.place_fleet_random(&mut rng).unwrap();
    let shots = rng.random_range(0..N * N);
    for _ in 0..shots {
        let x = rng.random_range(0..N);
        let y = rng.random_range(0..N);
        board.attack(x, y);
    }
    board
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ship_cells_partition_into_decks(seed in any::<u64>()) {
        let board = random_board(seed);
        let mut deck_cells = 0;
        for y in 0..N {
            for x in 0..N {
                let cell = board.cell(x, y).unwrap();
                if cell.state().is_ship() {
                    deck_cells += 1;
                    let id = cell.ship();
                    prop_assert!(id.is_some());
                    let ship = board.ship(id.unwrap());
                    prop_assert!(ship.is_some());
                    prop_assert!(ship.unwrap().occupies(x, y));
                } else {
                    prop_assert!(cell.ship().is_none());
                }
            }
        }
        let total: usize = board.ships().iter().map(|s| s.length()).sum();
        prop_assert_eq!(deck_cells, total);
    }

    #[test]
    fn ships_never_touch(seed in any::<u64>()) {
        let board = random_board(seed);
        for ship in board.ships() {
            for (x, y) in ship.decks() {
                for ny in y.saturating_sub(1)..=(y + 1).min(N - 1) {
                    for nx in x.saturating_sub(1)..=(x + 1).min(N - 1) {
                        if let Some(other) = board.ship_at(nx, ny) {
                            prop_assert_eq!(other.id(), ship.id());
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn destroyed_count_matches_ships(seed in any::<u64>()) {
        let board = random_board(seed);
        let sunk = board.ships().iter().filter(|s| s.is_destroyed()).count();
        prop_assert_eq!(board.destroyed_count(), sunk);
        for ship in board.ships() {
            let hit_decks = ship
                .decks()
                .filter(|&(x, y)| board.cell_state(x, y) != Some(CellState::Ship))
                .count();
            prop_assert_eq!(ship.hit_count(), hit_decks);
            prop_assert!(ship.hit_count() <= ship.length());
        }
    }

    #[test]
    fn attack_is_idempotent(seed in any::<u64>(), x in 0..N, y in 0..N) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        board.place_fleet_random(&mut rng).unwrap();
        let before = board.snapshot(false);
        let first = board.attack(x, y);
        prop_assert!(matches!(
            first,
            AttackResult::Miss | AttackResult::Hit | AttackResult::Destroyed
        ));
        let after = board.snapshot(false);
        prop_assert_ne!(&before, &after);
        for _ in 0..3 {
            prop_assert_eq!(board.attack(x, y), AttackResult::AlreadyHit);
            prop_assert_eq!(&board.snapshot(false), &after);
        }
    }

    #[test]
    fn can_place_keeps_a_gap(
        seed in any::<u64>(),
        x in 0..N,
        y in 0..N,
        length in 1usize..=4,
        o in orientation(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        for len in [4, 3, 2] {
            board.place_random(&mut rng, len);
        }
        if board.can_place(x, y, length, o) {
            let (dx, dy) = match o {
                Orientation::Horizontal => (1, 0),
                Orientation::Vertical => (0, 1),
            };
            for i in 0..length {
                let (cx, cy) = (x + dx * i, y + dy * i);
                prop_assert_eq!(board.cell_state(cx, cy), Some(CellState::Empty));
                for ny in cy.saturating_sub(1)..=(cy + 1).min(N - 1) {
                    for nx in cx.saturating_sub(1)..=(cx + 1).min(N - 1) {
                        prop_assert!(board.cell_state(nx, ny) != Some(CellState::Ship));
                    }
                }
            }
            prop_assert!(board.place(x, y, length, o));
        } else {
            let before = board.snapshot(false);
            prop_assert!(!board.place(x, y, length, o));
            prop_assert_eq!(board.snapshot(false), before);
        }
    }
}
