//! Common types for the fleet engine: construction, placement and parse errors.

use alloc::string::String;

use crate::ship::ShipKind;

/// Errors returned when building a ship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShipError {
    /// The bearing has no footprint for this kind of ship.
    InvalidBearing { kind: ShipKind },
    /// Factory tag does not name any ship kind.
    UnknownKind(String),
}

impl core::fmt::Display for ShipError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShipError::InvalidBearing { kind } => {
                write!(f, "invalid bearing for the {}", kind.category())
            }
            ShipError::UnknownKind(tag) => write!(f, "unknown ship kind '{}'", tag),
        }
    }
}

/// Reasons a fleet refuses a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// The fleet already holds more than `FLEET_SIZE` ships.
    FleetFull,
    /// Part of the ship lies outside the board.
    OutOfBounds,
    /// The ship overlaps or touches the ship at this index.
    TooClose { other: usize },
    /// Random placement ran out of attempts.
    UnableToPlace,
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::FleetFull => write!(f, "Fleet is already full"),
            PlacementError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlacementError::TooClose { other } => {
                write!(f, "Ship placement touches ship #{}", other)
            }
            PlacementError::UnableToPlace => write!(f, "Unable to place ship"),
        }
    }
}

/// Errors from parsing textual coordinates and bearings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input ended before the expected token.
    MissingToken(&'static str),
    /// A number could not be parsed.
    InvalidNumber(String),
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::MissingToken(what) => write!(f, "expected {}", what),
            ParseError::InvalidNumber(tok) => write!(f, "'{}' is not a number", tok),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShipError {}
#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
