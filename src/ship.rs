//! Ship definitions: the fixed fleet catalog, placement orientation and
//! per-ship damage tracking.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::BoardError;

/// Orientation of a ship on the board.
///
/// `Row` lays the ship along increasing `y`, `Col` along increasing `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Row,
    Col,
}

impl Orientation {
    /// Unit step `(dx, dy)` between consecutive cells of a ship.
    pub fn step(self) -> (isize, isize) {
        match self {
            Orientation::Row => (0, 1),
            Orientation::Col => (1, 0),
        }
    }

    /// Lowercase name used by the string placement surface.
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Row => "row",
            Orientation::Col => "col",
        }
    }
}

impl FromStr for Orientation {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row" => Ok(Orientation::Row),
            "col" => Ok(Orientation::Col),
            other => Err(BoardError::InvalidDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of ship: one of the five members of the fleet catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShipKind {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipKind {
    /// Ship's name.
    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "carrier",
            ShipKind::Battleship => "battleship",
            ShipKind::Cruiser => "cruiser",
            ShipKind::Submarine => "submarine",
            ShipKind::Destroyer => "destroyer",
        }
    }

    /// Ship's length.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Cruiser => 3,
            ShipKind::Submarine => 3,
            ShipKind::Destroyer => 2,
        }
    }

    /// Position of this kind in [`FLEET`](crate::config::FLEET).
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for ShipKind {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::config::ship_kind_by_name(s).ok_or_else(|| BoardError::InvalidShipName(s.to_string()))
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single vessel with its damage counter.
///
/// `hits` never exceeds the ship's length: hits on a sunk ship are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    hits: usize,
    sunk: bool,
}

impl Ship {
    /// Create an undamaged ship of the given kind.
    pub fn new(kind: ShipKind) -> Self {
        Self {
            kind,
            hits: 0,
            sunk: false,
        }
    }

    /// Register one hit. No effect once the ship is sunk.
    pub fn hit(&mut self) {
        if self.sunk {
            return;
        }
        self.hits += 1;
        self.sunk = self.hits >= self.kind.length();
    }

    /// Check if the ship is sunk (every segment hit).
    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Number of hits taken so far.
    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn length(&self) -> usize {
        self.kind.length()
    }
}
