use crate::ship::ShipKind;

/// Side length of the square board ships are placed on.
pub const BOARD_SIZE: i32 = 10;
/// Ship count ceiling checked by fleet admission.
pub const FLEET_SIZE: usize = 10;
/// Extent of the region accepted by shot validation, rows and columns `0..=BOARD_SIZE`.
pub const SHOT_GRID: usize = BOARD_SIZE as usize + 1;
/// Shots read per `rajada` command.
pub const SHOTS_PER_BURST: usize = 3;

/// Canonical fleet composition. Admission accepts a ship while the fleet
/// holds at most `FLEET_SIZE` ships, so a full fleet has eleven.
pub const STANDARD_FLEET: [ShipKind; FLEET_SIZE + 1] = [
    ShipKind::Galleon,
    ShipKind::Frigate,
    ShipKind::Carrack,
    ShipKind::Carrack,
    ShipKind::Caravel,
    ShipKind::Caravel,
    ShipKind::Caravel,
    ShipKind::Barge,
    ShipKind::Barge,
    ShipKind::Barge,
    ShipKind::Barge,
];

/// Total number of cells covered by `STANDARD_FLEET`.
pub const STANDARD_FLEET_CELLS: usize = 5 + 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;
