//! Single-player battleship: sink a file-defined fleet on a 10x10 grid.
//!
//! The fleet comes from a placement file (`Name;A0;A1;...` per line); play
//! is one blocking line read per shot until every ship is sunk or the
//! player quits.

mod bitboard;
mod board;
mod common;
mod config;
mod coord;
mod fleet;
mod game;
mod logging;
pub mod session;
mod ship;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::{Board, CellMark};
pub use common::{FleetError, GridError, ShotOutcome};
pub use config::{Cells, BOARD_SIZE};
pub use coord::{Coord, ParseCoordError};
pub use fleet::Fleet;
pub use game::{Game, GameStatus, Shot};
pub use logging::init_logging;
pub use session::Outcome;
pub use ship::Ship;
