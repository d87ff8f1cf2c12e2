//! Common types: shot results and the error enums shared across modules.

use core::fmt;
use std::io;

use crate::bitboard::BitBoardError;
use crate::coord::Coord;

/// Effect of one shot on one ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The shot did not touch this ship.
    Miss,
    /// The shot hit a segment without finishing the ship, or re-hit a
    /// segment of a ship that was already reported sunk.
    Hit,
    /// The shot completed the ship. Reported exactly once per ship.
    Sunk,
}

/// Errors from cell access on the board or a ship mask.
#[derive(Debug, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate outside the 10x10 grid.
    OutOfBounds { row: usize, col: usize },
}

impl From<BitBoardError> for GridError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => GridError::OutOfBounds { row, col },
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { row, col } => {
                write!(f, "coordinate out of bounds: row={}, col={}", row, col)
            }
        }
    }
}

/// Errors detected while loading a fleet file. All are fatal: the message is
/// shown once and no game starts.
#[derive(Debug)]
pub enum FleetError {
    /// The placement file is missing or unreadable.
    SourceUnavailable(io::Error),
    /// A coordinate token is not one letter A-J followed by one digit 0-9,
    /// or a line has no ship name.
    CoordinateFormat { line: usize, token: String },
    /// A coordinate is claimed twice, within one ship or across ships.
    Overlap { line: usize, coord: Coord },
}

impl From<io::Error> for FleetError {
    fn from(err: io::Error) -> Self {
        FleetError::SourceUnavailable(err)
    }
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::SourceUnavailable(_) => write!(f, "File can not be read!"),
            FleetError::CoordinateFormat { .. } => write!(f, "Error in ship coordinates!"),
            FleetError::Overlap { .. } => {
                write!(f, "There are overlapping ships in the input file!")
            }
        }
    }
}
