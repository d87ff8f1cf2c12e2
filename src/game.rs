use crate::board::{Board, CellMark};
use crate::common::{GridError, ShotOutcome};
use crate::coord::Coord;
use crate::fleet::Fleet;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
}

/// Result of asking the engine to process one shot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shot {
    /// The cell already carried a mark; nothing changed.
    Repeat,
    /// The shot was applied to the board and fleet.
    Fired {
        outcome: ShotOutcome,
        /// Name of the ship this shot sank, if any.
        sunk: Option<String>,
        /// Whether this shot completed the fleet.
        won: bool,
    },
}

/// Core game logic: the fleet under fire and the shot-history board.
pub struct Game {
    fleet: Fleet,
    board: Board,
}

impl Game {
    /// Start a game against `fleet` with a fresh board.
    pub fn new(fleet: Fleet) -> Self {
        Game {
            fleet,
            board: Board::new(),
        }
    }

    /// Process one shot at `coord`.
    ///
    /// A cell that was already shot at returns [`Shot::Repeat`] untouched.
    /// Otherwise the cell is marked as a miss, every ship gets to register
    /// the shot (at most one can own the cell since placements are
    /// disjoint), and the sunk-ship count is recomputed over the entire
    /// fleet. The count is a fresh fold each round, never carried across
    /// rounds.
    pub fn fire(&mut self, coord: Coord) -> Result<Shot, GridError> {
        if !self.board.is_clear(coord)? {
            return Ok(Shot::Repeat);
        }
        self.board.mark(coord, CellMark::Miss)?;
        let mut outcome = ShotOutcome::Miss;
        let mut sunk = None;
        for ship in self.fleet.ships_mut() {
            match ship.register_shot(coord, &mut self.board)? {
                ShotOutcome::Miss => {}
                ShotOutcome::Hit => outcome = ShotOutcome::Hit,
                ShotOutcome::Sunk => {
                    outcome = ShotOutcome::Sunk;
                    sunk = Some(ship.name().to_string());
                }
            }
        }
        let won = self.fleet.all_sunk();
        log::debug!("shot {} -> {:?}", coord, outcome);
        Ok(Shot::Fired { outcome, sunk, won })
    }

    /// Evaluate the current game status with a fresh fold over the fleet.
    pub fn status(&self) -> GameStatus {
        if self.fleet.all_sunk() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// The shot-history board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The fleet under fire.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }
}
