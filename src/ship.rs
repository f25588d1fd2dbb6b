//! Ship kinds, bearings and the footprint each combination occupies.

use alloc::vec::Vec;
use core::fmt;

use crate::common::ShipError;
use crate::position::{Coordinate, Position};

/// Direction a ship faces on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Bearing {
    North,
    South,
    East,
    West,
    /// Produced for unrecognised input; no footprint validates against it.
    Unknown,
}

impl Bearing {
    /// The four real bearings, in text-code order.
    pub const CARDINAL: [Bearing; 4] = [Bearing::North, Bearing::South, Bearing::East, Bearing::West];

    /// Single-character code: `n`, `s`, `e`, `o` for west, `u` for unknown.
    pub fn as_char(self) -> char {
        match self {
            Bearing::North => 'n',
            Bearing::South => 's',
            Bearing::East => 'e',
            Bearing::West => 'o',
            Bearing::Unknown => 'u',
        }
    }

    /// Inverse of [`Bearing::as_char`]; any other character maps to `Unknown`.
    pub fn from_char(c: char) -> Bearing {
        match c {
            'n' => Bearing::North,
            's' => Bearing::South,
            'e' => Bearing::East,
            'o' => Bearing::West,
            _ => Bearing::Unknown,
        }
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The five kinds of ship a fleet is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Barge,
    Caravel,
    Carrack,
    Frigate,
    Galleon,
}

impl ShipKind {
    pub const ALL: [ShipKind; 5] = [
        ShipKind::Barge,
        ShipKind::Caravel,
        ShipKind::Carrack,
        ShipKind::Frigate,
        ShipKind::Galleon,
    ];

    /// Number of cells a ship of this kind occupies.
    pub const fn size(self) -> usize {
        match self {
            ShipKind::Barge => 1,
            ShipKind::Caravel => 2,
            ShipKind::Carrack => 3,
            ShipKind::Frigate => 4,
            ShipKind::Galleon => 5,
        }
    }

    /// Display name, also the key used by [`crate::Fleet::ships_like`].
    pub const fn category(self) -> &'static str {
        match self {
            ShipKind::Barge => "Barca",
            ShipKind::Caravel => "Caravela",
            ShipKind::Carrack => "Nau",
            ShipKind::Frigate => "Fragata",
            ShipKind::Galleon => "Galeao",
        }
    }

    /// Factory tag accepted by [`build_ship`].
    pub const fn tag(self) -> &'static str {
        match self {
            ShipKind::Barge => "barca",
            ShipKind::Caravel => "caravela",
            ShipKind::Carrack => "nau",
            ShipKind::Frigate => "fragata",
            ShipKind::Galleon => "galeao",
        }
    }

    /// Case-sensitive lookup by factory tag.
    pub fn from_tag(tag: &str) -> Option<ShipKind> {
        ShipKind::ALL.iter().copied().find(|k| k.tag() == tag)
    }

    /// Cell offsets from the anchor for this kind facing `bearing`.
    ///
    /// Linear ships grow towards increasing row for north/south and
    /// increasing column for east/west, whatever the facing. Carracks and
    /// frigates fall back to the row run for `Unknown`; caravels and
    /// galleons reject it.
    pub fn footprint(self, bearing: Bearing) -> Result<&'static [(i32, i32)], ShipError> {
        use Bearing::*;
        let cells: &'static [(i32, i32)] = match (self, bearing) {
            (ShipKind::Barge, _) => &BARGE,
            (ShipKind::Caravel, North | South) => &CARAVEL_ROWS,
            (ShipKind::Caravel, East | West) => &CARAVEL_COLS,
            (ShipKind::Carrack, East | West) => &CARRACK_COLS,
            (ShipKind::Carrack, _) => &CARRACK_ROWS,
            (ShipKind::Frigate, East | West) => &FRIGATE_COLS,
            (ShipKind::Frigate, _) => &FRIGATE_ROWS,
            (ShipKind::Galleon, North) => &GALLEON_NORTH,
            (ShipKind::Galleon, South) => &GALLEON_SOUTH,
            (ShipKind::Galleon, East) => &GALLEON_EAST,
            (ShipKind::Galleon, West) => &GALLEON_WEST,
            (ShipKind::Caravel | ShipKind::Galleon, Unknown) => {
                return Err(ShipError::InvalidBearing { kind: self })
            }
        };
        Ok(cells)
    }
}

const BARGE: [(i32, i32); 1] = [(0, 0)];
const CARAVEL_ROWS: [(i32, i32); 2] = [(0, 0), (1, 0)];
const CARAVEL_COLS: [(i32, i32); 2] = [(0, 0), (0, 1)];
const CARRACK_ROWS: [(i32, i32); 3] = [(0, 0), (1, 0), (2, 0)];
const CARRACK_COLS: [(i32, i32); 3] = [(0, 0), (0, 1), (0, 2)];
const FRIGATE_ROWS: [(i32, i32); 4] = [(0, 0), (1, 0), (2, 0), (3, 0)];
const FRIGATE_COLS: [(i32, i32); 4] = [(0, 0), (0, 1), (0, 2), (0, 3)];

// Galleon silhouettes, in the order their cells are recorded.
const GALLEON_NORTH: [(i32, i32); 5] = [(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)];
const GALLEON_SOUTH: [(i32, i32); 5] = [(0, 0), (1, 0), (2, -1), (2, 0), (2, 1)];
const GALLEON_EAST: [(i32, i32); 5] = [(0, 0), (1, -2), (1, -1), (1, 0), (2, 0)];
const GALLEON_WEST: [(i32, i32); 5] = [(0, 0), (1, 0), (1, 1), (1, 2), (2, 0)];

/// Build a ship from its factory tag (`"barca"`, `"caravela"`, `"nau"`,
/// `"fragata"`, `"galeao"`).
pub fn build_ship(tag: &str, bearing: Bearing, anchor: Coordinate) -> Result<Ship, ShipError> {
    let kind = ShipKind::from_tag(tag).ok_or_else(|| ShipError::UnknownKind(tag.into()))?;
    Ship::new(kind, bearing, anchor)
}

/// A ship anchored on the board, owning the cells it occupies.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Ship {
    kind: ShipKind,
    bearing: Bearing,
    anchor: Coordinate,
    positions: Vec<Position>,
}

impl Ship {
    /// Lay out a ship of `kind` at `anchor` facing `bearing`.
    pub fn new(kind: ShipKind, bearing: Bearing, anchor: Coordinate) -> Result<Self, ShipError> {
        let positions = kind
            .footprint(bearing)?
            .iter()
            .map(|&(dr, dc)| {
                let mut p = Position::at(anchor.offset(dr, dc));
                p.occupy();
                p
            })
            .collect();
        Ok(Ship {
            kind,
            bearing,
            anchor,
            positions,
        })
    }

    /// Kind of ship.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Number of cells, constant per kind.
    pub fn size(&self) -> usize {
        self.kind.size()
    }

    /// Display name of the kind, e.g. `"Nau"`.
    pub fn category(&self) -> &'static str {
        self.kind.category()
    }

    /// Bearing the ship was built with.
    pub fn bearing(&self) -> Bearing {
        self.bearing
    }

    /// Coordinate the footprint was laid out from.
    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    /// Occupied cells in footprint order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Occupied coordinates in footprint order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.positions.iter().map(Position::coord)
    }

    /// Smallest row covered.
    pub fn top_most(&self) -> i32 {
        self.cells().map(|c| c.row).min().unwrap_or(self.anchor.row)
    }

    /// Largest row covered.
    pub fn bottom_most(&self) -> i32 {
        self.cells().map(|c| c.row).max().unwrap_or(self.anchor.row)
    }

    /// Smallest column covered.
    pub fn left_most(&self) -> i32 {
        self.cells().map(|c| c.col).min().unwrap_or(self.anchor.col)
    }

    /// Largest column covered.
    pub fn right_most(&self) -> i32 {
        self.cells().map(|c| c.col).max().unwrap_or(self.anchor.col)
    }

    /// Whether `coord` is one of this ship's cells.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.positions.iter().any(|p| *p == coord)
    }

    /// True while at least one cell has not been hit.
    pub fn still_floating(&self) -> bool {
        self.positions.iter().any(|p| !p.is_hit())
    }

    /// Every cell has been hit.
    pub fn is_sunk(&self) -> bool {
        !self.still_floating()
    }

    /// True if any cell of `other` overlaps or touches this ship.
    pub fn too_close_to(&self, other: &Ship) -> bool {
        other.cells().any(|c| self.too_close_to_coord(c))
    }

    /// True if `coord` is one of this ship's cells or a neighbour of one.
    pub fn too_close_to_coord(&self, coord: Coordinate) -> bool {
        self.positions.iter().any(|p| p.is_adjacent_to(coord))
    }

    /// Mark the cell at `coord` as hit. Returns whether this ship occupies it.
    pub fn shoot(&mut self, coord: Coordinate) -> bool {
        match self.positions.iter_mut().find(|p| **p == coord) {
            Some(p) => {
                p.shoot();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ kind: {:?}, anchor: ({}, {}), bearing: {:?}, hits: {}, cells: {:?} }}",
            self.kind,
            self.anchor.row,
            self.anchor.col,
            self.bearing,
            self.positions.iter().filter(|p| p.is_hit()).count(),
            self.positions.iter().map(|p| (p.row(), p.col())).collect::<Vec<_>>(),
        )
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {}]", self.category(), self.bearing, self.anchor)
    }
}
