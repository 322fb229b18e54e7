//! Two-player grid-combat engine: a 10×10 board per side, the fixed
//! five-ship fleet, attack resolution and the computer opponent's
//! hunt/target/direction search.

mod ai;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "cli")]
mod logging;
pub mod player;
pub mod setup;
mod ship;
pub mod ui;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "cli")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use player::{Commander, ComputerCommander, Player, PlayerError, PlayerKind};
#[cfg(feature = "cli")]
pub use player::CliCommander;
pub use ship::*;
