//! Game session: both players, the turn pointer and the computer's
//! targeting state, with explicit construction and reset.

use log::{debug, info};
use rand::{rngs::SmallRng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    ai::TargetingStrategy,
    common::{AttackResult, BoardError, Coordinate},
    player::{Commander, ComputerCommander, Player, PlayerKind},
    setup,
    ship::{Orientation, ShipKind},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Fleets are being placed; no attacks yet.
    Setup,
    InProgress,
    Over { winner: PlayerKind },
}

/// Everything that happened during one resolved attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub attacker: PlayerKind,
    pub coord: Coordinate,
    pub result: AttackResult,
    /// Ship sunk by this attack, if any.
    pub sunk: Option<ShipKind>,
    /// Set when this attack ended the game.
    pub winner: Option<PlayerKind>,
}

/// Turn-controller policy violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Already attacked that spot ({0})")]
    AlreadyAttacked(Coordinate),
    #[error("Coordinate {0} is off the board")]
    OutOfBounds(Coordinate),
    #[error("It is not {0}'s turn")]
    NotYourTurn(PlayerKind),
    #[error("The game is over")]
    GameOver,
    #[error("The game has not started")]
    NotStarted,
    #[error("The game has already started")]
    AlreadyStarted,
    #[error("The {0} fleet is not fully placed")]
    FleetIncomplete(PlayerKind),
    #[error("No untried coordinates left")]
    NoTargetsLeft,
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// A human-versus-computer game.
#[derive(Debug, Clone)]
pub struct Game {
    human: Player,
    computer: Player,
    commander: ComputerCommander,
    turn: PlayerKind,
    status: GameStatus,
    rng: SmallRng,
}

impl Game {
    /// Create a game in the setup phase with empty boards.
    pub fn new(rng: SmallRng) -> Self {
        Self {
            human: Player::new(PlayerKind::Human),
            computer: Player::new(PlayerKind::Computer),
            commander: ComputerCommander::new(),
            turn: PlayerKind::Human,
            status: GameStatus::Setup,
            rng,
        }
    }

    /// Reproducible game driven by a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Game seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        let mut seed_rng = rand::rng();
        Self::new(SmallRng::from_rng(&mut seed_rng))
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn computer(&self) -> &Player {
        &self.computer
    }

    pub fn player(&self, kind: PlayerKind) -> &Player {
        match kind {
            PlayerKind::Human => &self.human,
            PlayerKind::Computer => &self.computer,
        }
    }

    /// Targeting state of the computer opponent.
    pub fn strategy(&self) -> &TargetingStrategy {
        self.commander.strategy()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_side(&self) -> PlayerKind {
        self.turn
    }

    pub fn winner(&self) -> Option<PlayerKind> {
        match self.status {
            GameStatus::Over { winner } => Some(winner),
            _ => None,
        }
    }

    /// Place one human ship during setup. See [`Board::place`](crate::Board::place).
    pub fn place_human_ship(
        &mut self,
        kind: ShipKind,
        orientation: Orientation,
        x: usize,
        y: usize,
    ) -> Result<(), GameError> {
        self.ensure_setup()?;
        self.human.board_mut().place(kind, orientation, x, y)?;
        Ok(())
    }

    /// Move a human ship during setup. See [`Board::reposition`](crate::Board::reposition).
    pub fn reposition_human_ship(
        &mut self,
        kind: ShipKind,
        orientation: Orientation,
        x: usize,
        y: usize,
    ) -> Result<(), GameError> {
        self.ensure_setup()?;
        self.human.board_mut().reposition(kind, orientation, x, y)?;
        Ok(())
    }

    /// Take a human ship off the grid during setup.
    pub fn remove_human_ship(&mut self, kind: ShipKind) -> Result<(), GameError> {
        self.ensure_setup()?;
        self.human.board_mut().remove_ship(kind);
        Ok(())
    }

    /// Let `commander` lay out the human fleet. Only available during setup.
    pub fn place_human_fleet<C: Commander + ?Sized>(&mut self, commander: &mut C) -> Result<(), GameError> {
        self.ensure_setup()?;
        commander.place_ships(&mut self.rng, self.human.board_mut())?;
        Ok(())
    }

    /// Lay out the computer fleet at random. Only available during setup.
    pub fn place_computer_fleet(&mut self) -> Result<(), GameError> {
        self.ensure_setup()?;
        self.commander.place_ships(&mut self.rng, self.computer.board_mut())?;
        Ok(())
    }

    /// Abandon the current game and place both fleets at random.
    pub fn randomize_fleets(&mut self) -> Result<(), GameError> {
        self.reset();
        setup::place_fleet_randomly(self.human.board_mut(), &mut self.rng)?;
        self.place_computer_fleet()
    }

    /// Leave the setup phase. Both fleets must be fully placed.
    pub fn start(&mut self) -> Result<(), GameError> {
        self.ensure_setup()?;
        for player in [&self.human, &self.computer] {
            if !player.board().fleet_placed() {
                return Err(GameError::FleetIncomplete(player.kind()));
            }
        }
        self.status = GameStatus::InProgress;
        self.turn = PlayerKind::Human;
        info!("game started");
        Ok(())
    }

    /// Discard both boards and all targeting state, returning to setup.
    pub fn reset(&mut self) {
        self.human.board_mut().clear();
        self.computer.board_mut().clear();
        self.commander.reset();
        self.turn = PlayerKind::Human;
        self.status = GameStatus::Setup;
    }

    /// Attack `coord` on behalf of whichever side is to move.
    pub fn play_turn(&mut self, coord: Coordinate) -> Result<TurnReport, GameError> {
        self.attack(self.turn, coord)
    }

    /// Human attack on the computer's board.
    pub fn human_attack(&mut self, coord: Coordinate) -> Result<TurnReport, GameError> {
        self.attack(PlayerKind::Human, coord)
    }

    /// Let the computer pick a target and attack the human's board.
    pub fn computer_turn(&mut self) -> Result<TurnReport, GameError> {
        self.ensure_turn(PlayerKind::Computer)?;
        let coord = self
            .commander
            .select_target(&mut self.rng, self.human.board())
            .ok_or(GameError::NoTargetsLeft)?;
        self.attack(PlayerKind::Computer, coord)
    }

    fn attack(&mut self, attacker: PlayerKind, coord: Coordinate) -> Result<TurnReport, GameError> {
        self.ensure_turn(attacker)?;
        if !coord.in_bounds() {
            return Err(GameError::OutOfBounds(coord));
        }
        let defender = match attacker {
            PlayerKind::Human => &mut self.computer,
            PlayerKind::Computer => &mut self.human,
        };
        if defender.board().is_attacked(coord) {
            return Err(GameError::AlreadyAttacked(coord));
        }

        let result = defender.board_mut().receive_attack(coord)?;
        let board = defender.board();
        let sunk = board
            .ship_at(coord)
            .filter(|ship| result.is_hit() && ship.is_sunk())
            .map(|ship| ship.kind());
        if attacker == PlayerKind::Computer {
            self.commander
                .handle_attack_result(board, coord, result, sunk.is_some());
        }
        debug!("{} attacks {} -> {}", attacker, coord, result);
        if let Some(kind) = sunk {
            info!("{} sank the {}'s {}", attacker, defender.kind(), kind);
        }

        let winner = board.all_sunk().then_some(attacker);
        match winner {
            Some(winner) => {
                info!("game over, {} wins", winner);
                self.status = GameStatus::Over { winner };
            }
            None => self.turn = opponent(attacker),
        }
        Ok(TurnReport {
            attacker,
            coord,
            result,
            sunk,
            winner,
        })
    }

    fn ensure_setup(&self) -> Result<(), GameError> {
        match self.status {
            GameStatus::Setup => Ok(()),
            _ => Err(GameError::AlreadyStarted),
        }
    }

    fn ensure_turn(&self, side: PlayerKind) -> Result<(), GameError> {
        match self.status {
            GameStatus::Setup => Err(GameError::NotStarted),
            GameStatus::Over { .. } => Err(GameError::GameOver),
            GameStatus::InProgress if self.turn != side => Err(GameError::NotYourTurn(side)),
            GameStatus::InProgress => Ok(()),
        }
    }
}

fn opponent(kind: PlayerKind) -> PlayerKind {
    match kind {
        PlayerKind::Human => PlayerKind::Computer,
        PlayerKind::Computer => PlayerKind::Human,
    }
}
