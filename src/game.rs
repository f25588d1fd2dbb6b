use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::{Borrow, BorrowMut};
use log::debug;

use crate::{
    bitboard::BitBoard,
    config::{BOARD_SIZE, SHOT_GRID},
    fleet::{Fleet, ShipId},
    position::Coordinate,
    ship::Ship,
};

/// Cells of the placement board, used for rendering.
type BB = BitBoard<u128, { BOARD_SIZE as usize }>;
/// Cells accepted by shot validation, one row and column wider than the board.
type ShotBB = BitBoard<u128, SHOT_GRID>;

/// How a single shot was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Outside the accepted shot region; not recorded.
    Invalid,
    /// Already fired at; not recorded again.
    Repeated,
    /// Recorded, no ship there.
    Miss,
    /// Recorded, ship hit but still floating.
    Hit(ShipId),
    /// Recorded, and this shot sank the ship.
    Sunk(ShipId),
}

/// Counter snapshot for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameStats {
    pub hits: usize,
    pub invalid_shots: usize,
    pub repeated_shots: usize,
    pub sunk_ships: usize,
    pub remaining_ships: usize,
}

/// Shot bookkeeping against one fleet.
///
/// The fleet is held through `BorrowMut`, so a game may own its fleet or
/// borrow one the caller keeps.
pub struct Game<F = Fleet>
where
    F: BorrowMut<Fleet>,
{
    fleet: F,
    shots: Vec<Coordinate>,
    shot_map: ShotBB,
    invalid_shots: usize,
    repeated_shots: usize,
    hits: usize,
    sinks: usize,
}

impl<F> Game<F>
where
    F: BorrowMut<Fleet>,
{
    /// Start a game with no shots fired against `fleet`.
    pub fn new(fleet: F) -> Self {
        Self {
            fleet,
            shots: Vec::new(),
            shot_map: ShotBB::new(),
            invalid_shots: 0,
            repeated_shots: 0,
            hits: 0,
            sinks: 0,
        }
    }

    /// The fleet being fired at.
    pub fn fleet(&self) -> &Fleet {
        <F as Borrow<Fleet>>::borrow(&self.fleet)
    }

    /// Give the fleet back, ending the game.
    pub fn into_fleet(self) -> F {
        self.fleet
    }

    /// Resolve a shot at `coord`, updating history and counters.
    pub fn resolve(&mut self, coord: Coordinate) -> ShotOutcome {
        if !is_valid_shot(coord) {
            self.invalid_shots += 1;
            debug!("invalid shot at ({}, {})", coord.row, coord.col);
            return ShotOutcome::Invalid;
        }
        // valid shots always fall inside the SHOT_GRID-wide shot map
        if !matches!(self.shot_map.insert(coord), Ok(true)) {
            self.repeated_shots += 1;
            debug!("repeated shot at ({}, {})", coord.row, coord.col);
            return ShotOutcome::Repeated;
        }
        self.shots.push(coord);

        let fleet = <F as BorrowMut<Fleet>>::borrow_mut(&mut self.fleet);
        let Some(id) = fleet.ship_id_at(coord) else {
            return ShotOutcome::Miss;
        };
        let Some(ship) = fleet.ship_mut(id) else {
            return ShotOutcome::Miss;
        };
        ship.shoot(coord);
        self.hits += 1;
        if ship.still_floating() {
            ShotOutcome::Hit(id)
        } else {
            self.sinks += 1;
            debug!("{} sunk by shot at ({}, {})", ship.category(), coord.row, coord.col);
            ShotOutcome::Sunk(id)
        }
    }

    /// Fire at `coord`. Returns the ship only when this shot sank it.
    pub fn fire(&mut self, coord: Coordinate) -> Option<&Ship> {
        match self.resolve(coord) {
            ShotOutcome::Sunk(id) => self.fleet().ship(id),
            _ => None,
        }
    }

    /// Distinct valid shots in the order they were fired.
    pub fn shots(&self) -> &[Coordinate] {
        &self.shots
    }

    /// Shots rejected for falling outside the shot region.
    pub fn invalid_shots(&self) -> usize {
        self.invalid_shots
    }

    /// Shots at a coordinate already fired at.
    pub fn repeated_shots(&self) -> usize {
        self.repeated_shots
    }

    /// Shots that landed on a ship.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Ships sunk so far.
    pub fn sunk_ships(&self) -> usize {
        self.sinks
    }

    /// Ships still floating, counted from the fleet on every call.
    pub fn remaining_ships(&self) -> usize {
        self.fleet().floating_ships().len()
    }

    /// Snapshot of all counters.
    pub fn stats(&self) -> GameStats {
        GameStats {
            hits: self.hits,
            invalid_shots: self.invalid_shots,
            repeated_shots: self.repeated_shots,
            sunk_ships: self.sinks,
            remaining_ships: self.remaining_ships(),
        }
    }

    /// Board with an `X` on every recorded shot that lands on the grid.
    pub fn render_shots(&self) -> String {
        render_grid(&BB::from_coords(self.shots.iter().copied()), 'X')
    }

    /// Board with a `#` on every ship cell.
    pub fn render_fleet(&self) -> String {
        let cells = self.fleet().ships().iter().flat_map(|s| s.cells());
        render_grid(&BB::from_coords(cells), '#')
    }
}

/// Shots are accepted for rows and columns in `0..=BOARD_SIZE`, one wider
/// than the placement bound.
fn is_valid_shot(coord: Coordinate) -> bool {
    (0..=BOARD_SIZE).contains(&coord.row) && (0..=BOARD_SIZE).contains(&coord.col)
}

fn render_grid(marks: &BB, marker: char) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            out.push(if marks.contains(Coordinate::new(row, col)) {
                marker
            } else {
                '.'
            });
        }
        out.push('\n');
    }
    out
}
