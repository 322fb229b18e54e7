//! Players and the commanders that drive them
//!
//! - `Player`: one side of the game, binding a `PlayerKind` to its `Board`
//! - `Commander`: decides where to place ships and what to attack
//!   - `ComputerCommander`: random placement + hunt/target/direction search
//!   - `CliCommander`: interactive terminal input (`cli` feature)

use core::fmt;
use core::str::FromStr;

use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    board::Board,
    common::{AttackResult, BoardError, Coordinate},
};

/// Who controls a side of the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    #[default]
    Human,
    Computer,
}

impl PlayerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Computer => "computer",
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerKind {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(PlayerKind::Human),
            "computer" => Ok(PlayerKind::Computer),
            other => Err(PlayerError::InvalidKind(other.to_string())),
        }
    }
}

/// Errors raised while constructing a player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("Player type must be either 'human' or 'computer' (got '{0}')")]
    InvalidKind(String),
}

/// One side of the game: its kind and its board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    kind: PlayerKind,
    board: Board,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PlayerKind::default())
    }
}

impl Player {
    /// Create a player with an empty board.
    pub fn new(kind: PlayerKind) -> Self {
        Self {
            kind,
            board: Board::new(),
        }
    }

    /// Create a player from its kind name (`"human"` or `"computer"`).
    pub fn from_kind_name(kind: &str) -> Result<Self, PlayerError> {
        Ok(Self::new(kind.parse()?))
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

/// Interface implemented by whatever drives one side of the game.
///
/// A commander is responsible for:
/// - Placing ships on its own board
/// - Selecting targets on the opponent's board
/// - Handling feedback from its attacks
pub trait Commander {
    /// Place all ships onto the provided board.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError>;

    /// Choose the next coordinate to attack on `target`. `None` means the
    /// commander has nothing left to fire at.
    fn select_target(&mut self, rng: &mut SmallRng, target: &Board) -> Option<Coordinate>;

    /// Inform the commander of the result of its last attack.
    fn handle_attack_result(
        &mut self,
        _target: &Board,
        _coord: Coordinate,
        _result: AttackResult,
        _sunk: bool,
    ) {
    }
}

pub mod computer;
pub use computer::ComputerCommander;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub use cli::CliCommander;
