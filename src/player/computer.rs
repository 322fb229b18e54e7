use rand::rngs::SmallRng;

use crate::{
    ai::TargetingStrategy,
    board::Board,
    common::{AttackResult, BoardError, Coordinate},
    setup,
};

use super::Commander;

/// Computer opponent: random fleet layout and hunt/target/direction search.
#[derive(Debug, Default, Clone)]
pub struct ComputerCommander {
    strategy: TargetingStrategy,
}

impl ComputerCommander {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strategy(&self) -> &TargetingStrategy {
        &self.strategy
    }

    /// Forget every lead, as at the start of a new game.
    pub fn reset(&mut self) {
        self.strategy.reset();
    }
}

impl Commander for ComputerCommander {
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        setup::place_fleet_randomly(board, rng)
    }

    fn select_target(&mut self, rng: &mut SmallRng, target: &Board) -> Option<Coordinate> {
        self.strategy.next_target(target, rng)
    }

    fn handle_attack_result(
        &mut self,
        target: &Board,
        coord: Coordinate,
        result: AttackResult,
        sunk: bool,
    ) {
        self.strategy.record_result(target, coord, result, sunk);
    }
}
