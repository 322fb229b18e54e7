// Hunt/target/direction search used by the computer opponent.
// The strategy only reads attack history; the caller resolves each attack
// and reports the outcome back through `record_result`.

use std::collections::VecDeque;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    board::Board,
    common::{AttackResult, Coordinate},
};

/// Read-only view of which coordinates have already been attacked.
pub trait AttackHistory {
    fn is_attacked(&self, coord: Coordinate) -> bool;
}

impl AttackHistory for Board {
    fn is_attacked(&self, coord: Coordinate) -> bool {
        Board::is_attacked(self, coord)
    }
}

/// Public name of the strategy's current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No lead: fire at a random untried cell.
    Hunt,
    /// One hit: probe its neighbours to find the ship's orientation.
    Target,
    /// Two hits in line: keep stepping along the established vector.
    Direction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Hunt,
    Target {
        first_hit: Coordinate,
        last_hit: Coordinate,
        candidates: VecDeque<Coordinate>,
    },
    Direction {
        first_hit: Coordinate,
        last_hit: Coordinate,
        step: (isize, isize),
        reversed: bool,
    },
}

/// Three-phase targeting state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetingStrategy {
    mode: Mode,
}

impl Default for TargetingStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetingStrategy {
    /// Start in hunt mode with no leads.
    pub fn new() -> Self {
        Self { mode: Mode::Hunt }
    }

    /// Drop every lead and return to hunting.
    pub fn reset(&mut self) {
        self.mode = Mode::Hunt;
    }

    pub fn phase(&self) -> Phase {
        match self.mode {
            Mode::Hunt => Phase::Hunt,
            Mode::Target { .. } => Phase::Target,
            Mode::Direction { .. } => Phase::Direction,
        }
    }

    /// First hit of the current lead.
    pub fn first_hit(&self) -> Option<Coordinate> {
        match self.mode {
            Mode::Hunt => None,
            Mode::Target { first_hit, .. } | Mode::Direction { first_hit, .. } => Some(first_hit),
        }
    }

    /// Most recent hit of the current lead.
    pub fn last_hit(&self) -> Option<Coordinate> {
        match self.mode {
            Mode::Hunt => None,
            Mode::Target { last_hit, .. } | Mode::Direction { last_hit, .. } => Some(last_hit),
        }
    }

    /// Step vector `(dx, dy)` once an orientation has been established.
    pub fn direction(&self) -> Option<(isize, isize)> {
        match self.mode {
            Mode::Direction { step, .. } => Some(step),
            _ => None,
        }
    }

    /// Neighbour cells still queued for probing, oldest first.
    pub fn candidates(&self) -> Vec<Coordinate> {
        match &self.mode {
            Mode::Target { candidates, .. } => candidates.iter().copied().collect(),
            _ => Vec::new(),
        }
    }

    /// Choose the next coordinate to attack.
    ///
    /// The result is always in bounds and never previously attacked. Leads
    /// that run dry fall back to hunting within the same call. Returns `None`
    /// only when every cell has been attacked.
    pub fn next_target<H, R>(&mut self, history: &H, rng: &mut R) -> Option<Coordinate>
    where
        H: AttackHistory + ?Sized,
        R: Rng + ?Sized,
    {
        loop {
            let pick = match &mut self.mode {
                Mode::Hunt => return hunt(history, rng),
                Mode::Target { candidates, .. } => drain_candidates(candidates, history),
                Mode::Direction {
                    first_hit,
                    last_hit,
                    step,
                    reversed,
                } => {
                    let forward = last_hit
                        .offset(step.0, step.1)
                        .filter(|&c| !history.is_attacked(c));
                    match forward {
                        Some(c) => Some(c),
                        None if !*reversed => {
                            let back = first_hit
                                .offset(-step.0, -step.1)
                                .filter(|&c| !history.is_attacked(c));
                            if back.is_some() {
                                *step = (-step.0, -step.1);
                                *last_hit = *first_hit;
                                *reversed = true;
                            }
                            back
                        }
                        None => None,
                    }
                }
            };
            match pick {
                Some(coord) => return Some(coord),
                None => {
                    debug!("lead exhausted in {:?} phase, hunting again", self.phase());
                    self.reset();
                }
            }
        }
    }

    /// Feed back the outcome of the attack at `coord`.
    ///
    /// `sunk` reports whether the ship at `coord` is now sunk; a sinking hit
    /// always returns the strategy to hunting.
    pub fn record_result<H>(&mut self, history: &H, coord: Coordinate, result: AttackResult, sunk: bool)
    where
        H: AttackHistory + ?Sized,
    {
        if result == AttackResult::Hit && sunk {
            if self.phase() != Phase::Hunt {
                debug!("ship sunk at {}, hunting again", coord);
            }
            self.reset();
            return;
        }

        match (&mut self.mode, result) {
            (Mode::Hunt, AttackResult::Hit) => {
                let candidates = coord
                    .neighbors()
                    .filter(|&c| !history.is_attacked(c))
                    .collect();
                debug!("hit at {}, probing neighbours", coord);
                self.mode = Mode::Target {
                    first_hit: coord,
                    last_hit: coord,
                    candidates,
                };
            }
            (Mode::Target { first_hit, .. }, AttackResult::Hit) => {
                let first_hit = *first_hit;
                let step = (
                    (coord.x as isize - first_hit.x as isize).signum(),
                    (coord.y as isize - first_hit.y as isize).signum(),
                );
                debug!("second hit at {}, following {:?}", coord, step);
                self.mode = Mode::Direction {
                    first_hit,
                    last_hit: coord,
                    step,
                    reversed: false,
                };
            }
            (Mode::Direction { last_hit, .. }, AttackResult::Hit) => {
                *last_hit = coord;
            }
            (
                Mode::Direction {
                    first_hit,
                    last_hit,
                    step,
                    reversed,
                },
                AttackResult::Miss,
            ) => {
                let back = first_hit
                    .offset(-step.0, -step.1)
                    .filter(|&c| !history.is_attacked(c));
                if *reversed || back.is_none() {
                    debug!("miss at {} with no way back, hunting again", coord);
                    self.reset();
                } else {
                    *step = (-step.0, -step.1);
                    *last_hit = *first_hit;
                    *reversed = true;
                }
            }
            (Mode::Hunt, AttackResult::Miss) | (Mode::Target { .. }, AttackResult::Miss) => {}
        }
    }
}

/// Pop queued neighbours until an untried one turns up.
fn drain_candidates<H>(candidates: &mut VecDeque<Coordinate>, history: &H) -> Option<Coordinate>
where
    H: AttackHistory + ?Sized,
{
    while let Some(c) = candidates.pop_front() {
        if !history.is_attacked(c) {
            return Some(c);
        }
    }
    None
}

/// Uniformly random untried coordinate.
fn hunt<H, R>(history: &H, rng: &mut R) -> Option<Coordinate>
where
    H: AttackHistory + ?Sized,
    R: Rng + ?Sized,
{
    let untried: Vec<Coordinate> = Coordinate::all().filter(|&c| !history.is_attacked(c)).collect();
    if untried.is_empty() {
        return None;
    }
    Some(untried[rng.random_range(0..untried.len())])
}
