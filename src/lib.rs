#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod bitboard;
mod common;
mod config;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod position;
#[cfg(feature = "std")]
pub mod session;
mod ship;

pub use bitboard::{BitBoard, BitBoardError};
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from};
pub use position::*;
#[cfg(feature = "std")]
pub use session::Session;
pub use ship::*;
