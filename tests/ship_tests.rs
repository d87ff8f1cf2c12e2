use flotilla::{Board, CellMark, Coord, Ship, ShotOutcome};

fn coord(token: &str) -> Coord {
    token.parse().unwrap()
}

#[test]
fn test_new_and_cells() {
    let ship = Ship::new("Submarine", [coord("A0"), coord("A1"), coord("A2")]).unwrap();
    assert_eq!(ship.name(), "Submarine");
    assert_eq!(ship.letter(), 'S');
    assert_eq!(ship.len(), 3);
    assert_eq!(ship.hit_count(), 0);
    assert!(!ship.is_sunk());

    let cells: Vec<Coord> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![
            Coord { row: 0, col: 0 },
            Coord { row: 1, col: 0 },
            Coord { row: 2, col: 0 }
        ]
    );
}

#[test]
fn test_letter_is_uppercased() {
    let ship = Ship::new("destroyer", [coord("A0")]).unwrap();
    assert_eq!(ship.letter(), 'D');
}

#[test]
fn test_register_shot_progression() {
    let mut ship = Ship::new("Destroyer", [coord("A0"), coord("B0")]).unwrap();
    let mut board = Board::new();

    // stray shot touches nothing
    assert_eq!(
        ship.register_shot(coord("E5"), &mut board).unwrap(),
        ShotOutcome::Miss
    );
    assert_eq!(ship.hit_count(), 0);

    // first hit marks the cell
    assert_eq!(
        ship.register_shot(coord("A0"), &mut board).unwrap(),
        ShotOutcome::Hit
    );
    assert!(!ship.is_sunk());
    assert_eq!(board.at(coord("A0")).unwrap(), CellMark::Hit);

    // the finishing hit repaints every cell with the type letter
    assert_eq!(
        ship.register_shot(coord("B0"), &mut board).unwrap(),
        ShotOutcome::Sunk
    );
    assert!(ship.is_sunk());
    assert_eq!(board.at(coord("A0")).unwrap(), CellMark::Sunk('D'));
    assert_eq!(board.at(coord("B0")).unwrap(), CellMark::Sunk('D'));
}

#[test]
fn test_sunk_report_is_edge_triggered() {
    let mut ship = Ship::new("Sub", [coord("A0"), coord("A1")]).unwrap();
    let mut board = Board::new();

    ship.register_shot(coord("A0"), &mut board).unwrap();
    assert_eq!(
        ship.register_shot(coord("A1"), &mut board).unwrap(),
        ShotOutcome::Sunk
    );

    // re-hitting a sunk ship's cell reports a plain hit and keeps the marks
    assert_eq!(
        ship.register_shot(coord("A0"), &mut board).unwrap(),
        ShotOutcome::Hit
    );
    assert!(ship.is_sunk());
    assert_eq!(board.at(coord("A0")).unwrap(), CellMark::Sunk('S'));
    assert_eq!(board.at(coord("A1")).unwrap(), CellMark::Sunk('S'));
}

#[test]
fn test_rehit_before_sunk_does_not_double_count() {
    let mut ship = Ship::new("Sub", [coord("A0"), coord("A1")]).unwrap();
    let mut board = Board::new();

    ship.register_shot(coord("A0"), &mut board).unwrap();
    assert_eq!(
        ship.register_shot(coord("A0"), &mut board).unwrap(),
        ShotOutcome::Hit
    );
    assert_eq!(ship.hit_count(), 1);
    assert!(!ship.is_sunk());
}

#[test]
fn test_empty_ship_never_sinks() {
    let mut ship = Ship::new("Ghost", std::iter::empty::<Coord>()).unwrap();
    let mut board = Board::new();
    assert!(ship.is_empty());
    assert_eq!(
        ship.register_shot(coord("A0"), &mut board).unwrap(),
        ShotOutcome::Miss
    );
    assert!(!ship.is_sunk());
}
