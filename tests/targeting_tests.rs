use std::collections::HashSet;

use broadside::{
    AttackHistory, AttackResult, Board, Coordinate, Orientation, Phase, ShipKind, TargetingStrategy,
};
use rand::{rngs::SmallRng, SeedableRng};

fn c(x: usize, y: usize) -> Coordinate {
    Coordinate::new(x, y)
}

/// Attack history built by hand, for states no real board would reach quickly.
#[derive(Default)]
struct Tried(HashSet<Coordinate>);

impl AttackHistory for Tried {
    fn is_attacked(&self, coord: Coordinate) -> bool {
        self.0.contains(&coord)
    }
}

/// Resolve `coord` on `board` and report the outcome to `strategy`.
fn fire(strategy: &mut TargetingStrategy, board: &mut Board, coord: Coordinate) -> AttackResult {
    let result = board.receive_attack(coord).unwrap();
    let sunk = board.ship_at(coord).is_some_and(|s| s.is_sunk());
    strategy.record_result(&*board, coord, result, sunk);
    result
}

/// Ask the strategy for its next shot and fire it.
fn step(
    strategy: &mut TargetingStrategy,
    board: &mut Board,
    rng: &mut SmallRng,
) -> (Coordinate, AttackResult) {
    let coord = strategy.next_target(&*board, rng).unwrap();
    (coord, fire(strategy, board, coord))
}

#[test]
fn test_starts_hunting() {
    let strategy = TargetingStrategy::new();
    assert_eq!(strategy.phase(), Phase::Hunt);
    assert_eq!(strategy.first_hit(), None);
    assert_eq!(strategy.last_hit(), None);
    assert_eq!(strategy.direction(), None);
    assert!(strategy.candidates().is_empty());
}

#[test]
fn test_hunt_picks_untried_cells() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut strategy = TargetingStrategy::new();
    let mut tried = Tried::default();
    for _ in 0..100 {
        let coord = strategy.next_target(&tried, &mut rng).unwrap();
        assert!(coord.in_bounds());
        assert!(tried.0.insert(coord), "{} picked twice", coord);
        strategy.record_result(&tried, coord, AttackResult::Miss, false);
    }
    assert_eq!(strategy.next_target(&tried, &mut rng), None);
}

#[test]
fn test_hunt_hit_queues_neighbours() {
    let mut strategy = TargetingStrategy::new();
    let mut board = Board::new();
    board.place(ShipKind::Carrier, Orientation::Row, 5, 3).unwrap();
    board.receive_attack(c(4, 5)).unwrap();

    fire(&mut strategy, &mut board, c(5, 5));
    assert_eq!(strategy.phase(), Phase::Target);
    assert_eq!(strategy.first_hit(), Some(c(5, 5)));
    assert_eq!(strategy.last_hit(), Some(c(5, 5)));
    // (4,5) was already tried
    assert_eq!(strategy.candidates(), vec![c(6, 5), c(5, 4), c(5, 6)]);
}

#[test]
fn test_corner_hit_queues_in_bounds_neighbours() {
    let mut strategy = TargetingStrategy::new();
    let mut board = Board::new();
    board.place(ShipKind::Carrier, Orientation::Col, 0, 0).unwrap();
    fire(&mut strategy, &mut board, c(0, 0));
    assert_eq!(strategy.candidates(), vec![c(1, 0), c(0, 1)]);
}

#[test]
fn test_target_then_sink_returns_to_hunt() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut strategy = TargetingStrategy::new();
    let mut board = Board::new();
    board.place(ShipKind::Destroyer, Orientation::Row, 5, 5).unwrap();

    fire(&mut strategy, &mut board, c(5, 5));
    assert_eq!(step(&mut strategy, &mut board, &mut rng), (c(4, 5), AttackResult::Miss));
    assert_eq!(strategy.phase(), Phase::Target);
    assert_eq!(step(&mut strategy, &mut board, &mut rng), (c(6, 5), AttackResult::Miss));
    assert_eq!(step(&mut strategy, &mut board, &mut rng), (c(5, 4), AttackResult::Miss));
    assert_eq!(step(&mut strategy, &mut board, &mut rng), (c(5, 6), AttackResult::Hit));
    assert!(board.ship(ShipKind::Destroyer).is_sunk());
    assert_eq!(strategy.phase(), Phase::Hunt);
    assert_eq!(strategy.first_hit(), None);
}

#[test]
fn test_second_hit_sets_direction_and_reverses_after_miss() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut strategy = TargetingStrategy::new();
    let mut board = Board::new();
    board.place(ShipKind::Cruiser, Orientation::Row, 3, 3).unwrap();

    // first hit lands mid-hull
    fire(&mut strategy, &mut board, c(3, 4));
    assert_eq!(step(&mut strategy, &mut board, &mut rng), (c(2, 4), AttackResult::Miss));
    assert_eq!(step(&mut strategy, &mut board, &mut rng), (c(4, 4), AttackResult::Miss));
    assert_eq!(step(&mut strategy, &mut board, &mut rng), (c(3, 3), AttackResult::Hit));
    assert_eq!(strategy.phase(), Phase::Direction);
    assert_eq!(strategy.direction(), Some((0, -1)));
    assert_eq!(strategy.last_hit(), Some(c(3, 3)));
    assert!(strategy.candidates().is_empty());

    assert_eq!(step(&mut strategy, &mut board, &mut rng), (c(3, 2), AttackResult::Miss));
    assert_eq!(strategy.phase(), Phase::Direction);
    assert_eq!(strategy.direction(), Some((0, 1)));
    assert_eq!(strategy.last_hit(), Some(c(3, 4)));

    assert_eq!(step(&mut strategy, &mut board, &mut rng), (c(3, 5), AttackResult::Hit));
    assert!(board.ship(ShipKind::Cruiser).is_sunk());
    assert_eq!(strategy.phase(), Phase::Hunt);
}

#[test]
fn test_reverse_probe_at_grid_edge() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut strategy = TargetingStrategy::new();
    let mut board = Board::new();
    board.place(ShipKind::Battleship, Orientation::Row, 0, 0).unwrap();

    fire(&mut strategy, &mut board, c(0, 2));
    assert_eq!(step(&mut strategy, &mut board, &mut rng), (c(1, 2), AttackResult::Miss));
    assert_eq!(step(&mut strategy, &mut board, &mut rng), (c(0, 1), AttackResult::Hit));
    assert_eq!(step(&mut strategy, &mut board, &mut rng), (c(0, 0), AttackResult::Hit));
    assert_eq!(strategy.last_hit(), Some(c(0, 0)));

    // stepping on would leave the grid, so the probe flips to the far side of the first hit
    let next = strategy.next_target(&board, &mut rng).unwrap();
    assert_eq!(next, c(0, 3));
    assert_eq!(strategy.direction(), Some((0, 1)));
    assert_eq!(strategy.last_hit(), Some(c(0, 2)));
    assert_eq!(fire(&mut strategy, &mut board, next), AttackResult::Hit);
    assert!(board.ship(ShipKind::Battleship).is_sunk());
    assert_eq!(strategy.phase(), Phase::Hunt);
}

#[test]
fn test_exhausted_queue_falls_back_to_hunt() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut strategy = TargetingStrategy::new();
    let mut tried = Tried::default();
    tried.0.insert(c(5, 5));
    strategy.record_result(&tried, c(5, 5), AttackResult::Hit, false);
    assert_eq!(strategy.candidates().len(), 4);

    // someone else used up every neighbour
    for n in c(5, 5).neighbors() {
        tried.0.insert(n);
    }
    let coord = strategy.next_target(&tried, &mut rng).unwrap();
    assert!(!tried.is_attacked(coord));
    assert_eq!(strategy.phase(), Phase::Hunt);
}

#[test]
fn test_blocked_direction_falls_back_to_hunt() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut strategy = TargetingStrategy::new();
    let mut tried = Tried::default();
    for coord in [c(2, 2), c(2, 3)] {
        tried.0.insert(coord);
    }
    strategy.record_result(&tried, c(2, 2), AttackResult::Hit, false);
    strategy.record_result(&tried, c(2, 3), AttackResult::Hit, false);
    assert_eq!(strategy.phase(), Phase::Direction);
    assert_eq!(strategy.direction(), Some((0, 1)));

    // both ends already tried
    tried.0.insert(c(2, 4));
    tried.0.insert(c(2, 1));
    let coord = strategy.next_target(&tried, &mut rng).unwrap();
    assert!(!tried.is_attacked(coord));
    assert_eq!(strategy.phase(), Phase::Hunt);
}

#[test]
fn test_miss_after_reversing_resets() {
    let mut strategy = TargetingStrategy::new();
    let tried = Tried::default();
    strategy.record_result(&tried, c(6, 6), AttackResult::Hit, false);
    strategy.record_result(&tried, c(7, 6), AttackResult::Hit, false);
    strategy.record_result(&tried, c(8, 6), AttackResult::Miss, false);
    assert_eq!(strategy.direction(), Some((-1, 0)));
    assert_eq!(strategy.last_hit(), Some(c(6, 6)));
    strategy.record_result(&tried, c(5, 6), AttackResult::Miss, false);
    assert_eq!(strategy.phase(), Phase::Hunt);
}

#[test]
fn test_miss_with_reverse_already_tried_resets() {
    let mut tried = Tried::default();
    tried.0.insert(c(0, 4));
    let mut strategy = TargetingStrategy::new();
    for coord in [c(0, 5), c(0, 6)] {
        tried.0.insert(coord);
        strategy.record_result(&tried, coord, AttackResult::Hit, false);
    }
    assert_eq!(strategy.direction(), Some((0, 1)));

    tried.0.insert(c(0, 7));
    strategy.record_result(&tried, c(0, 7), AttackResult::Miss, false);
    assert_eq!(strategy.phase(), Phase::Hunt);
    assert_eq!(strategy.direction(), None);
    assert_eq!(strategy.last_hit(), None);
}

#[test]
fn test_miss_at_grid_edge_with_no_way_back_resets() {
    let mut tried = Tried::default();
    let mut strategy = TargetingStrategy::new();
    // hull runs right from column 0, so there is nothing left of the first hit
    for coord in [c(9, 0), c(9, 1)] {
        tried.0.insert(coord);
        strategy.record_result(&tried, coord, AttackResult::Hit, false);
    }
    tried.0.insert(c(9, 2));
    strategy.record_result(&tried, c(9, 2), AttackResult::Miss, false);
    assert_eq!(strategy.phase(), Phase::Hunt);
}

#[test]
fn test_sunk_interrupt_discards_leads() {
    let mut strategy = TargetingStrategy::new();
    let tried = Tried::default();
    strategy.record_result(&tried, c(1, 1), AttackResult::Hit, false);
    assert_eq!(strategy.phase(), Phase::Target);
    strategy.record_result(&tried, c(1, 2), AttackResult::Hit, true);
    assert_eq!(strategy.phase(), Phase::Hunt);
    assert!(strategy.candidates().is_empty());

    strategy.record_result(&tried, c(4, 4), AttackResult::Hit, false);
    strategy.record_result(&tried, c(4, 5), AttackResult::Hit, false);
    assert_eq!(strategy.phase(), Phase::Direction);
    strategy.record_result(&tried, c(4, 6), AttackResult::Hit, true);
    assert_eq!(strategy.phase(), Phase::Hunt);
    assert_eq!(strategy.direction(), None);
}

#[test]
fn test_reset() {
    let mut strategy = TargetingStrategy::new();
    strategy.record_result(&Tried::default(), c(3, 3), AttackResult::Hit, false);
    strategy.reset();
    assert_eq!(strategy, TargetingStrategy::new());
}
