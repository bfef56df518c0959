use seabattle::{Orientation, Ship, ShipClass, ShipId};

#[test]
fn test_decks_follow_orientation() {
    let horizontal = Ship::new(ShipId(0), 3, 2, 5, Orientation::Horizontal);
    let decks: Vec<_> = horizontal.decks().collect();
    assert_eq!(decks, vec![(2, 5), (3, 5), (4, 5)]);

    let vertical = Ship::new(ShipId(1), 4, 0, 0, Orientation::Vertical);
    let decks: Vec<_> = vertical.decks().collect();
    assert_eq!(decks, vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    assert!(vertical.occupies(0, 3));
    assert!(!vertical.occupies(0, 4));
}

#[test]
fn test_hit_until_destroyed() {
    for length in 1..=4 {
        let mut ship = Ship::new(ShipId(0), length, 0, 0, Orientation::Horizontal);
        for _ in 0..length - 1 {
            ship.hit();
        }
        assert!(!ship.is_destroyed(), "length {} sunk too early", length);
        ship.hit();
        assert!(ship.is_destroyed());
        assert_eq!(ship.hit_count(), length);
    }
}

#[test]
fn test_hit_saturates_at_length() {
    let mut ship = Ship::new(ShipId(7), 2, 1, 1, Orientation::Vertical);
    for _ in 0..10 {
        ship.hit();
    }
    assert_eq!(ship.hit_count(), 2);
    assert!(ship.is_destroyed());
}

#[test]
fn test_class_names_by_length() {
    let names: Vec<_> = (1..=4)
        .map(|len| ShipClass::from_length(len).map(ShipClass::name))
        .collect();
    assert_eq!(
        names,
        vec![
            Some("Boat"),
            Some("Destroyer"),
            Some("Cruiser"),
            Some("Battleship")
        ]
    );
    assert_eq!(ShipClass::from_length(5), None);
    assert_eq!(ShipClass::Cruiser.length(), 3);

    let ship = Ship::new(ShipId(3), 4, 0, 0, Orientation::Horizontal);
    assert_eq!(ship.name(), "Battleship");
    assert_eq!(ship.to_string(), "Battleship [4 decks, hits: 0/4]");
}
