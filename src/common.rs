//! Common types for the engine: board coordinates, attack results and board errors.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::BOARD_SIZE;
use crate::ship::ShipKind;

/// A cell on the board. `x` is the first (row) index, `y` the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns `true` if the coordinate lies within the grid.
    pub fn in_bounds(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// The coordinate shifted by `(dx, dy)`, or `None` if that leaves the grid.
    pub fn offset(&self, dx: isize, dy: isize) -> Option<Coordinate> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        let next = Coordinate { x, y };
        next.in_bounds().then_some(next)
    }

    /// In-bounds orthogonal neighbours, ordered up, down, left, right.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// Every coordinate of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|x| (0..BOARD_SIZE).map(move |y| Coordinate { x, y }))
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Coordinate { x, y }
    }
}

/// Formats as the `"x,y"` key used by renderers.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Coordinate {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BoardError::InvalidCoordinate(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_| invalid())?;
        let y = y.trim().parse().map_err(|_| invalid())?;
        Ok(Coordinate { x, y })
    }
}

/// Result of an attack against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackResult {
    /// The attack struck a ship segment.
    Hit,
    /// The attack found open water.
    Miss,
}

impl AttackResult {
    pub fn is_hit(self) -> bool {
        self == AttackResult::Hit
    }
}

impl fmt::Display for AttackResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackResult::Hit => f.write_str("hit"),
            AttackResult::Miss => f.write_str("miss"),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Named ship not found in the fleet catalog.
    #[error("Invalid ship name: {0}")]
    InvalidShipName(String),
    /// Direction flag is neither `row` nor `col`.
    #[error("Invalid direction: {0}")]
    InvalidDirection(String),
    /// Text could not be read as an `x,y` coordinate.
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
    /// Ship extent leaves the grid at the given cell.
    #[error("Ship placement out of bounds at {x},{y}")]
    OutOfBounds { x: usize, y: usize },
    /// Ship extent collides with another ship at the given cell.
    #[error("Ship overlaps with {other} at {x},{y}")]
    Overlap { x: usize, y: usize, other: ShipKind },
    /// Ship is already on the grid; remove or reposition it instead.
    #[error("Ship {0} is already placed")]
    AlreadyPlaced(ShipKind),
    /// Random placement ran out of attempts.
    #[error("Unable to place fleet")]
    UnableToPlaceFleet,
}
