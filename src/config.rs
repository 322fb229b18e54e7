use crate::ship::ShipKind;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::Carrier,
    ShipKind::Battleship,
    ShipKind::Cruiser,
    ShipKind::Submarine,
    ShipKind::Destroyer,
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random placement tries per ship before the whole fleet is restarted.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;
/// Fleet restarts before random placement gives up.
pub const MAX_PLACEMENT_RESTARTS: usize = 10;

/// Enumerate the fleet catalog as `(name, length)` pairs, in fleet order.
pub fn fleet_catalog() -> impl Iterator<Item = (&'static str, usize)> {
    FLEET.iter().map(|kind| (kind.name(), kind.length()))
}

/// Convert a ship name string to its catalog entry. Returns `None` if the
/// name does not match any ship in the fleet.
pub fn ship_kind_by_name(name: &str) -> Option<ShipKind> {
    FLEET.iter().copied().find(|kind| kind.name() == name)
}
