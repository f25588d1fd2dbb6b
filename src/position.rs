//! Board coordinates and the per-cell state a ship keeps for each of them.

use core::fmt;

/// A `(row, column)` pair on the board, 0-indexed.
///
/// Signed because some footprints extend left of their anchor; such cells
/// are simply rejected by the bounds checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    /// Coordinate at `row`, `col`.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// True when both row and column differ by at most one, which includes
    /// diagonal neighbours and the coordinate itself.
    pub fn is_adjacent_to(&self, other: Coordinate) -> bool {
        self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }

    /// Coordinate displaced by `(dr, dc)`, wrapping at the `i32` limits.
    /// Only anchors far off the board can wrap, and the anchor is always one
    /// of a footprint's cells, so such ships still fail the bounds checks.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self::new(self.row.wrapping_add(dr), self.col.wrapping_add(dc))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Coordinate::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Linha = {} Coluna = {}", self.row, self.col)
    }
}

/// A cell touched by a ship, with its occupancy and hit flags.
///
/// Equality only looks at the coordinate.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    coord: Coordinate,
    occupied: bool,
    hit: bool,
}

impl Position {
    /// Unoccupied, unhit cell at `row`, `col`.
    pub fn new(row: i32, col: i32) -> Self {
        Self::at(Coordinate::new(row, col))
    }

    /// Unoccupied, unhit cell at `coord`.
    pub fn at(coord: Coordinate) -> Self {
        Self {
            coord,
            occupied: false,
            hit: false,
        }
    }

    /// Row of the cell.
    pub fn row(&self) -> i32 {
        self.coord.row
    }

    /// Column of the cell.
    pub fn col(&self) -> i32 {
        self.coord.col
    }

    /// Coordinate of the cell, without its flags.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// See [`Coordinate::is_adjacent_to`].
    pub fn is_adjacent_to(&self, other: Coordinate) -> bool {
        self.coord.is_adjacent_to(other)
    }

    /// Marks the cell as belonging to a ship.
    pub fn occupy(&mut self) {
        self.occupied = true;
    }

    /// Marks the cell as hit. Shooting twice changes nothing.
    pub fn shoot(&mut self) {
        self.hit = true;
    }

    /// Whether a ship claimed this cell.
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Whether the cell has been shot.
    pub fn is_hit(&self) -> bool {
        self.hit
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Position {}

impl PartialEq<Coordinate> for Position {
    fn eq(&self, other: &Coordinate) -> bool {
        self.coord == *other
    }
}

impl From<Coordinate> for Position {
    fn from(coord: Coordinate) -> Self {
        Position::at(coord)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.coord.fmt(f)
    }
}
