//! Fleet state: admitted ships, placement validation and queries.

use alloc::vec::Vec;
use core::fmt;
use log::debug;
use rand::Rng;

use crate::common::PlacementError;
use crate::config::{BOARD_SIZE, FLEET_SIZE};
use crate::position::Coordinate;
use crate::ship::{Bearing, Ship, ShipKind};

/// Whole-fleet restarts attempted by [`Fleet::random`].
const MAX_FLEET_ATTEMPTS: usize = 100;

/// Index of a ship within its fleet, stable for the fleet's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub usize);

/// Ships in arrival order. No two of them overlap or touch and all lie
/// inside the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Empty fleet.
    pub fn new() -> Self {
        Self { ships: Vec::new() }
    }

    /// Admitted ships in insertion order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of admitted ships.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    /// True before any ship has been admitted.
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Ship behind a handle returned by [`Fleet::try_add_ship`].
    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.0)
    }

    pub(crate) fn ship_mut(&mut self, id: ShipId) -> Option<&mut Ship> {
        self.ships.get_mut(id.0)
    }

    /// Check whether `ship` could be admitted right now, without storing it.
    pub fn check(&self, ship: &Ship) -> Result<(), PlacementError> {
        if self.ships.len() > FLEET_SIZE {
            return Err(PlacementError::FleetFull);
        }
        if !is_inside_board(ship) {
            return Err(PlacementError::OutOfBounds);
        }
        if let Some(other) = self.ships.iter().position(|s| s.too_close_to(ship)) {
            return Err(PlacementError::TooClose { other });
        }
        Ok(())
    }

    /// Admit `ship`, returning its handle, or say why it was refused.
    /// A refused ship is dropped and the fleet is left untouched.
    pub fn try_add_ship(&mut self, ship: Ship) -> Result<ShipId, PlacementError> {
        self.check(&ship)?;
        self.ships.push(ship);
        Ok(ShipId(self.ships.len() - 1))
    }

    /// Admit `ship` if it fits; `false` means it was refused.
    pub fn add_ship(&mut self, ship: Ship) -> bool {
        let label = (ship.category(), ship.bearing(), ship.anchor());
        match self.try_add_ship(ship) {
            Ok(_) => true,
            Err(e) => {
                debug!("rejected {} {} {}: {}", label.0, label.1, label.2, e);
                false
            }
        }
    }

    /// First ship, in insertion order, occupying `coord`.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&Ship> {
        self.ship_id_at(coord).and_then(|id| self.ship(id))
    }

    /// Handle of the first ship occupying `coord`.
    pub fn ship_id_at(&self, coord: Coordinate) -> Option<ShipId> {
        self.ships.iter().position(|s| s.occupies(coord)).map(ShipId)
    }

    /// Ships whose category name equals `category`, e.g. `"Nau"`.
    pub fn ships_like(&self, category: &str) -> Vec<&Ship> {
        self.ships
            .iter()
            .filter(|s| s.category() == category)
            .collect()
    }

    /// Ships with at least one unhit cell, in insertion order.
    pub fn floating_ships(&self) -> Vec<&Ship> {
        self.ships.iter().filter(|s| s.still_floating()).collect()
    }

    /// Printable summary: every ship, the floating ones, then each category.
    pub fn status(&self) -> FleetStatus<'_> {
        FleetStatus { fleet: self }
    }

    /// Pick uniformly among every admissible placement of `kind`.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        kind: ShipKind,
    ) -> Result<Ship, PlacementError> {
        let mut candidates = Vec::new();
        for bearing in Bearing::CARDINAL {
            for row in 0..BOARD_SIZE {
                for col in 0..BOARD_SIZE {
                    if let Ok(ship) = Ship::new(kind, bearing, Coordinate::new(row, col)) {
                        if self.check(&ship).is_ok() {
                            candidates.push(ship);
                        }
                    }
                }
            }
        }
        if candidates.is_empty() {
            return Err(PlacementError::UnableToPlace);
        }
        let pick = rng.random_range(0..candidates.len());
        Ok(candidates.swap_remove(pick))
    }

    /// Build a fleet of `kinds` at random, starting over when a ship no
    /// longer fits anywhere.
    pub fn random<R: Rng>(rng: &mut R, kinds: &[ShipKind]) -> Result<Fleet, PlacementError> {
        'attempt: for attempt in 0..MAX_FLEET_ATTEMPTS {
            let mut fleet = Fleet::new();
            for &kind in kinds {
                let ship = match fleet.random_placement(rng, kind) {
                    Ok(ship) => ship,
                    Err(_) => {
                        debug!("random fleet attempt {} stuck on {}", attempt, kind.category());
                        continue 'attempt;
                    }
                };
                fleet.try_add_ship(ship)?;
            }
            return Ok(fleet);
        }
        Err(PlacementError::UnableToPlace)
    }
}

fn is_inside_board(ship: &Ship) -> bool {
    ship.left_most() >= 0
        && ship.right_most() <= BOARD_SIZE - 1
        && ship.top_most() >= 0
        && ship.bottom_most() <= BOARD_SIZE - 1
}

/// Display adapter returned by [`Fleet::status`].
pub struct FleetStatus<'a> {
    fleet: &'a Fleet,
}

impl fmt::Display for FleetStatus<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frota:")?;
        for s in self.fleet.ships() {
            writeln!(f, "  {}", s)?;
        }
        writeln!(f, "A flutuar:")?;
        for s in self.fleet.floating_ships() {
            writeln!(f, "  {}", s)?;
        }
        for kind in ShipKind::ALL.iter().rev() {
            writeln!(f, "{}:", kind.category())?;
            for s in self.fleet.ships_like(kind.category()) {
                writeln!(f, "  {}", s)?;
            }
        }
        Ok(())
    }
}
