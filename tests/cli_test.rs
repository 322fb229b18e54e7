#![cfg(feature = "cli")]

use std::io::Cursor;

use broadside::{level_from, Board, CliCommander, Commander, Coordinate, ShipKind, FLEET};
use log::LevelFilter;
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn test_manual_placement_from_input() {
    let input = "A1 H\nA2 h\nZ9 H\nA3 H\nA3 H\nA4 H\nA5 H\n";
    let mut commander = CliCommander::with_input(Cursor::new(input));
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = Board::new();
    commander.place_ships(&mut rng, &mut board).unwrap();

    assert!(board.fleet_placed());
    for (row, kind) in FLEET.into_iter().enumerate() {
        assert_eq!(board.cells_of(kind)[0], Coordinate::new(row, 0));
    }
}

#[test]
fn test_blank_input_places_at_random() {
    let mut commander = CliCommander::with_input(Cursor::new("A1 V\n"));
    let mut rng = SmallRng::seed_from_u64(2);
    let mut board = Board::new();
    commander.place_ships(&mut rng, &mut board).unwrap();

    assert!(board.fleet_placed());
    let carrier = board.cells_of(ShipKind::Carrier);
    assert_eq!(carrier[0], Coordinate::new(0, 0));
    assert_eq!(carrier[4], Coordinate::new(4, 0));
}

#[test]
fn test_placement_orientation_letters() {
    // `X` is rejected, a bare coordinate defaults to horizontal
    let mut commander = CliCommander::with_input(Cursor::new("A1 X\nA1\nA2 V\n"));
    let mut rng = SmallRng::seed_from_u64(4);
    let mut board = Board::new();
    commander.place_ships(&mut rng, &mut board).unwrap();

    assert!(board.fleet_placed());
    assert_eq!(
        board.cells_of(ShipKind::Carrier),
        (0..5).map(|y| Coordinate::new(0, y)).collect::<Vec<_>>()
    );
    assert_eq!(
        board.cells_of(ShipKind::Battleship),
        (1..5).map(|x| Coordinate::new(x, 0)).collect::<Vec<_>>()
    );
}

#[test]
fn test_target_selection_skips_bad_input() {
    let mut board = Board::new();
    board.receive_attack(Coordinate::new(0, 0)).unwrap();
    let mut commander = CliCommander::with_input(Cursor::new("zz\nA1\nB1\n"));
    let mut rng = SmallRng::seed_from_u64(3);

    assert_eq!(
        commander.select_target(&mut rng, &board),
        Some(Coordinate::new(0, 1))
    );
    assert_eq!(commander.select_target(&mut rng, &board), None);
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(level_from(None), LevelFilter::Info);
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some("nonsense")), LevelFilter::Info);
}
