//! Game board state: ship placements, fleet damage, hits and misses.

use std::collections::BTreeSet;

use log::{debug, trace};

use crate::common::{AttackResult, BoardError, Coordinate};
use crate::config::{BOARD_SIZE, FLEET, NUM_SHIPS};
use crate::ship::{Orientation, Ship, ShipKind};

type Grid = [[Option<ShipKind>; BOARD_SIZE]; BOARD_SIZE];

/// One player's side of the ocean.
///
/// Every cell holds at most one ship. All mutation goes through
/// [`place`](Board::place), [`reposition`](Board::reposition),
/// [`remove_ship`](Board::remove_ship), [`receive_attack`](Board::receive_attack)
/// and [`clear`](Board::clear); everything else is a read-only view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    ships: [Ship; NUM_SHIPS],
    hits: BTreeSet<Coordinate>,
    misses: BTreeSet<Coordinate>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with a fresh, unplaced fleet.
    pub fn new() -> Self {
        Board {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
            ships: FLEET.map(Ship::new),
            hits: BTreeSet::new(),
            misses: BTreeSet::new(),
        }
    }

    /// Place a ship starting at (`x`, `y`) and extending along `orientation`.
    ///
    /// Nothing is written unless every check passes.
    pub fn place(
        &mut self,
        kind: ShipKind,
        orientation: Orientation,
        x: usize,
        y: usize,
    ) -> Result<(), BoardError> {
        let cells = match self.check_placement(kind, orientation, x, y, false) {
            Ok(cells) => cells,
            Err(err) => {
                debug!("rejected {} {} at {},{}: {}", kind, orientation, x, y, err);
                return Err(err);
            }
        };
        if self.is_placed(kind) {
            return Err(BoardError::AlreadyPlaced(kind));
        }
        self.write_cells(kind, &cells);
        debug!("placed {} {} at {},{}", kind, orientation, x, y);
        Ok(())
    }

    /// Like [`place`](Board::place), but takes the ship name and direction as
    /// text (`"carrier"`, `"row"`). Validation order: name, direction, bounds,
    /// overlap.
    pub fn place_named(
        &mut self,
        name: &str,
        direction: &str,
        x: usize,
        y: usize,
    ) -> Result<(), BoardError> {
        let kind: ShipKind = name.parse()?;
        let orientation: Orientation = direction.parse()?;
        self.place(kind, orientation, x, y)
    }

    /// Dry run of [`place`](Board::place) that never errors. Cells already
    /// held by `kind` itself count as free, so a ship can be checked against
    /// its own current position.
    pub fn can_place(&self, kind: ShipKind, orientation: Orientation, x: usize, y: usize) -> bool {
        self.check_placement(kind, orientation, x, y, true).is_ok()
    }

    /// String-surface variant of [`can_place`](Board::can_place); unknown
    /// names or directions yield `false`.
    pub fn can_place_named(&self, name: &str, direction: &str, x: usize, y: usize) -> bool {
        match (name.parse::<ShipKind>(), direction.parse::<Orientation>()) {
            (Ok(kind), Ok(orientation)) => self.can_place(kind, orientation, x, y),
            _ => false,
        }
    }

    /// Move `kind` to a new position, placing it if it is not on the grid yet.
    /// A failed move leaves the ship where it was.
    pub fn reposition(
        &mut self,
        kind: ShipKind,
        orientation: Orientation,
        x: usize,
        y: usize,
    ) -> Result<(), BoardError> {
        let cells = self.check_placement(kind, orientation, x, y, true)?;
        self.remove_ship(kind);
        self.write_cells(kind, &cells);
        debug!("moved {} to {} at {},{}", kind, orientation, x, y);
        Ok(())
    }

    /// Clear every cell occupied by `kind`. Damage already taken is kept.
    pub fn remove_ship(&mut self, kind: ShipKind) {
        for cell in self.grid.iter_mut().flatten() {
            if *cell == Some(kind) {
                *cell = None;
            }
        }
    }

    /// Resolve an attack at `coord`, recording it as a hit or a miss.
    ///
    /// Repeated attacks are not rejected here; the turn controller is
    /// responsible for that.
    pub fn receive_attack(&mut self, coord: Coordinate) -> Result<AttackResult, BoardError> {
        if !coord.in_bounds() {
            return Err(BoardError::OutOfBounds {
                x: coord.x,
                y: coord.y,
            });
        }
        let result = match self.grid[coord.x][coord.y] {
            Some(kind) => {
                self.hits.insert(coord);
                self.ships[kind.index()].hit();
                AttackResult::Hit
            }
            None => {
                self.misses.insert(coord);
                AttackResult::Miss
            }
        };
        trace!("attack at {} -> {}", coord, result);
        Ok(result)
    }

    /// Returns `true` when every ship in the fleet is sunk. An unplaced ship
    /// can never be sunk, so this stays `false` until the whole fleet is on
    /// the grid and destroyed.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Discard placements, attack history and fleet damage.
    pub fn clear(&mut self) {
        *self = Board::new();
    }

    /// The ship occupying `coord`, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&Ship> {
        self.occupant(coord).map(|kind| self.ship(kind))
    }

    /// Kind of the ship occupying `coord`, if any.
    pub fn occupant(&self, coord: Coordinate) -> Option<ShipKind> {
        if coord.in_bounds() {
            self.grid[coord.x][coord.y]
        } else {
            None
        }
    }

    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.occupant(coord).is_some()
    }

    /// Coordinates attacked so far that struck a ship.
    pub fn hits(&self) -> &BTreeSet<Coordinate> {
        &self.hits
    }

    /// Coordinates attacked so far that found open water.
    pub fn misses(&self) -> &BTreeSet<Coordinate> {
        &self.misses
    }

    pub fn is_attacked(&self, coord: Coordinate) -> bool {
        self.hits.contains(&coord) || self.misses.contains(&coord)
    }

    /// Number of distinct coordinates attacked.
    pub fn attack_count(&self) -> usize {
        self.hits.len() + self.misses.len()
    }

    /// Fleet status in catalog order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, kind: ShipKind) -> &Ship {
        &self.ships[kind.index()]
    }

    /// Cells currently occupied by `kind`, in row-major order.
    pub fn cells_of(&self, kind: ShipKind) -> Vec<Coordinate> {
        Coordinate::all()
            .filter(|&c| self.grid[c.x][c.y] == Some(kind))
            .collect()
    }

    pub fn is_placed(&self, kind: ShipKind) -> bool {
        self.grid.iter().flatten().any(|cell| *cell == Some(kind))
    }

    /// Ships currently on the grid, in catalog order.
    pub fn placed_ships(&self) -> Vec<ShipKind> {
        FLEET.into_iter().filter(|&k| self.is_placed(k)).collect()
    }

    /// Returns `true` once every fleet member is on the grid.
    pub fn fleet_placed(&self) -> bool {
        FLEET.iter().all(|&k| self.is_placed(k))
    }

    /// Compute the extent of a placement and validate it against the grid.
    fn check_placement(
        &self,
        kind: ShipKind,
        orientation: Orientation,
        x: usize,
        y: usize,
        allow_self: bool,
    ) -> Result<Vec<Coordinate>, BoardError> {
        let (dx, dy) = orientation.step();
        let start = Coordinate::new(x, y);
        let mut cells = Vec::with_capacity(kind.length());
        for i in 0..kind.length() as isize {
            let cell = start.offset(dx * i, dy * i).ok_or(BoardError::OutOfBounds {
                x: x.saturating_add((dx * i) as usize),
                y: y.saturating_add((dy * i) as usize),
            })?;
            cells.push(cell);
        }
        for cell in &cells {
            match self.grid[cell.x][cell.y] {
                Some(other) if !(allow_self && other == kind) => {
                    return Err(BoardError::Overlap {
                        x: cell.x,
                        y: cell.y,
                        other,
                    });
                }
                _ => {}
            }
        }
        Ok(cells)
    }

    fn write_cells(&mut self, kind: ShipKind, cells: &[Coordinate]) {
        for cell in cells {
            self.grid[cell.x][cell.y] = Some(kind);
        }
    }
}
