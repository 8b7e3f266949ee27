use crate::ship::ShipType;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 10;

/// Number of ships in the standard fleet.
pub const FLEET_SIZE: usize = 5;

/// The standard fleet. Engine operations take the fleet as a slice, so any
/// other composition works as long as it fits.
pub const STANDARD_FLEET: [ShipType; FLEET_SIZE] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Destroyer", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Patrol Boat", 2),
];

/// Random checkerboard draws the hunting search makes before scanning for
/// the first unattacked cell.
pub const HUNT_ATTEMPTS: usize = 100;

/// Random placements tried per ship before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 1000;

/// Look up a ship of the standard fleet by name, ignoring ASCII case.
pub fn standard_ship(name: &str) -> Option<ShipType> {
    STANDARD_FLEET
        .iter()
        .copied()
        .find(|def| def.name().eq_ignore_ascii_case(name))
}
