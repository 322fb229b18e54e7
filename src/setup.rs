//! Random fleet placement for the setup phase.

use log::{debug, warn};
use rand::Rng;

use crate::{
    board::Board,
    common::BoardError,
    config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS, MAX_PLACEMENT_RESTARTS},
    ship::{Orientation, ShipKind},
};

/// Returns a random `(x, y, Orientation)` at which `kind` fits on `board`.
/// Fails with `AlreadyPlaced` if `kind` is already on the grid.
///
/// Start cells are drawn from the whole grid, so most draws near the far
/// edges fail and are retried, up to `MAX_PLACEMENT_ATTEMPTS` times.
pub fn random_placement<R: Rng + ?Sized>(
    board: &Board,
    kind: ShipKind,
    rng: &mut R,
) -> Result<(usize, usize, Orientation), BoardError> {
    if board.is_placed(kind) {
        return Err(BoardError::AlreadyPlaced(kind));
    }
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Row
        } else {
            Orientation::Col
        };
        let x = rng.random_range(0..BOARD_SIZE);
        let y = rng.random_range(0..BOARD_SIZE);
        if board.can_place(kind, orientation, x, y) {
            return Ok((x, y, orientation));
        }
    }
    Err(BoardError::UnableToPlaceFleet)
}

/// Clear `board` and lay out the whole fleet at random.
///
/// When a ship cannot be placed the board is cleared and the fleet started
/// over, at most `MAX_PLACEMENT_RESTARTS` times.
pub fn place_fleet_randomly<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Result<(), BoardError> {
    for restart in 0..=MAX_PLACEMENT_RESTARTS {
        board.clear();
        if try_place_fleet(board, rng).is_ok() {
            debug!("fleet placed after {} restarts", restart);
            return Ok(());
        }
    }
    warn!("giving up on random fleet placement");
    board.clear();
    Err(BoardError::UnableToPlaceFleet)
}

fn try_place_fleet<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Result<(), BoardError> {
    for kind in FLEET {
        let (x, y, orientation) = random_placement(board, kind, rng)?;
        board.place(kind, orientation, x, y)?;
    }
    Ok(())
}
