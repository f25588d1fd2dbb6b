#![cfg(feature = "std")]
//! Text command session: reads whitespace-separated commands and drives a
//! fleet and its game.
//!
//! Commands: `nova` builds a fleet, `estado` prints its status, `mapa`
//! shows where the ships are, `rajada` fires a burst of shots, `ver` shows
//! the shots fired and `desisto` ends the session.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::{anyhow, Result};
use log::info;

use crate::common::{ParseError, ShipError};
use crate::config::{SHOTS_PER_BURST, STANDARD_FLEET};
use crate::fleet::Fleet;
use crate::game::Game;
use crate::position::Coordinate;
use crate::ship::{build_ship, Bearing, Ship};

/// Printed when the player gives up with `desisto`.
pub const FAREWELL: &str = "Bons ventos!";
const UNKNOWN_COMMAND: &str = "Que comando é esse??? Repete ...";
const NO_FLEET: &str = "Ainda nao ha frota. Use 'nova' primeiro.";

/// Splits a reader into whitespace-separated tokens, one line at a time.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the input is exhausted.
    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    fn expect(&mut self, what: &'static str) -> Result<String> {
        self.next_token()?
            .ok_or_else(|| anyhow!(ParseError::MissingToken(what)))
    }

    fn number(&mut self, what: &'static str) -> Result<i32> {
        let tok = self.expect(what)?;
        tok.parse()
            .map_err(|_| anyhow!(ParseError::InvalidNumber(tok)))
    }

    fn coordinate(&mut self) -> Result<Coordinate> {
        let row = self.number("row")?;
        let col = self.number("column")?;
        Ok(Coordinate::new(row, col))
    }

    /// `kind row col bearing`, e.g. `galeao 2 3 n`.
    fn ship(&mut self) -> Result<std::result::Result<Ship, ShipError>> {
        let kind = self.expect("ship kind")?;
        let anchor = self.coordinate()?;
        let bearing = self
            .expect("bearing")?
            .chars()
            .next()
            .map(Bearing::from_char)
            .unwrap_or(Bearing::Unknown);
        Ok(build_ship(&kind, bearing, anchor))
    }
}

/// Interactive session over any reader and writer.
pub struct Session<R, W> {
    input: Tokens<R>,
    out: W,
    game: Option<Game>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Session with no fleet yet, reading commands from `reader`.
    pub fn new(reader: R, out: W) -> Self {
        Self {
            input: Tokens::new(reader),
            out,
            game: None,
        }
    }

    /// Current game, once a fleet has been built.
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Process commands until `desisto` or end of input.
    pub fn run(&mut self) -> Result<()> {
        while let Some(command) = self.input.next_token()? {
            match command.as_str() {
                "nova" => {
                    let fleet = self.build_fleet()?;
                    self.game = Some(Game::new(fleet));
                }
                "estado" => match &self.game {
                    Some(game) => write!(self.out, "{}", game.fleet().status())?,
                    None => writeln!(self.out, "{}", NO_FLEET)?,
                },
                "mapa" => match &self.game {
                    Some(game) => write!(self.out, "{}", game.render_fleet())?,
                    None => writeln!(self.out, "{}", NO_FLEET)?,
                },
                "rajada" => self.firing_round()?,
                "ver" => match &self.game {
                    Some(game) => write!(self.out, "{}", game.render_shots())?,
                    None => writeln!(self.out, "{}", NO_FLEET)?,
                },
                "desisto" => {
                    writeln!(self.out, "{}", FAREWELL)?;
                    info!("session ended by player");
                    return Ok(());
                }
                _ => writeln!(self.out, "{}", UNKNOWN_COMMAND)?,
            }
        }
        info!("input exhausted, session over");
        Ok(())
    }

    /// Read ships until the standard fleet size has been admitted.
    fn build_fleet(&mut self) -> Result<Fleet> {
        let mut fleet = Fleet::new();
        while fleet.len() < STANDARD_FLEET.len() {
            match self.input.ship()? {
                Ok(ship) => {
                    let label = ship.to_string();
                    if !fleet.add_ship(ship) {
                        writeln!(self.out, "Falha na criacao de {}", label)?;
                    }
                }
                Err(ShipError::UnknownKind(_)) => writeln!(self.out, "Navio desconhecido!")?,
                Err(e) => writeln!(self.out, "Falha na criacao: {}", e)?,
            }
        }
        writeln!(self.out, "{} navios adicionados com sucesso!", fleet.len())?;
        info!("fleet of {} ships ready", fleet.len());
        Ok(fleet)
    }

    /// Fire a burst of shots, report sinks, then the running totals.
    fn firing_round(&mut self) -> Result<()> {
        let Some(game) = self.game.as_mut() else {
            writeln!(self.out, "{}", NO_FLEET)?;
            return Ok(());
        };
        for _ in 0..SHOTS_PER_BURST {
            let coord = self.input.coordinate()?;
            if let Some(ship) = game.fire(coord) {
                writeln!(
                    self.out,
                    "Mas... mas... {}s nao sao a prova de bala? :-(",
                    ship.category()
                )?;
            }
        }
        writeln!(
            self.out,
            "Hits: {} Inv: {} Rep: {} Restam {} navios.",
            game.hits(),
            game.invalid_shots(),
            game.repeated_shots(),
            game.remaining_ships()
        )?;
        if game.remaining_ships() == 0 {
            writeln!(self.out, "Maldito sejas, eu voltarei, glub glub glub...")?;
            info!("fleet destroyed after {} shots", game.shots().len());
        }
        Ok(())
    }
}
