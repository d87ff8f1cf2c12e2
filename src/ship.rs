//! A single ship: occupied cells, accumulated hits, sunk state.

use core::fmt;

use crate::board::{Board, CellMark};
use crate::common::{GridError, ShotOutcome};
use crate::config::Cells;
use crate::coord::Coord;

/// One ship of the fleet.
///
/// The occupancy mask is fixed at construction; only the hit mask and the
/// sunk flag change during play. Hits are always a subset of the occupancy,
/// and the sunk flag is monotonic.
pub struct Ship {
    name: String,
    letter: char,
    mask: Cells,
    hits: Cells,
    sunk: bool,
}

impl Ship {
    /// Build a ship from its name and the cells it occupies.
    pub fn new<I>(name: impl Into<String>, cells: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mask = Cells::from_iter(cells.into_iter().map(|c| (c.row, c.col)))?;
        Ok(Self::from_mask(name.into(), mask))
    }

    /// Build a ship from a pre-computed occupancy mask. The loader validates
    /// that the name is non-empty before calling this.
    pub(crate) fn from_mask(name: String, mask: Cells) -> Self {
        let letter = name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or(' ');
        Ship {
            name,
            letter,
            mask,
            hits: Cells::new(),
            sunk: false,
        }
    }

    /// Apply one shot to this ship, updating the board marks.
    ///
    /// A shot outside the ship's cells returns [`ShotOutcome::Miss`] and
    /// changes nothing. A shot on an occupied cell records the hit and marks
    /// the board cell `Hit`; the shot that completes the ship repaints every
    /// occupied cell with the ship's type letter and returns
    /// [`ShotOutcome::Sunk`]. The sunk report is edge-triggered: later shots
    /// at cells of an already-sunk ship return `Hit` and leave the letter
    /// marks in place.
    pub fn register_shot(&mut self, coord: Coord, board: &mut Board) -> Result<ShotOutcome, GridError> {
        if !self.mask.get(coord.row, coord.col)? {
            return Ok(ShotOutcome::Miss);
        }
        if self.sunk {
            return Ok(ShotOutcome::Hit);
        }
        self.hits.set(coord.row, coord.col)?;
        board.mark(coord, CellMark::Hit)?;
        if self.hits == self.mask {
            self.sunk = true;
            for (row, col) in self.mask.iter_set_bits() {
                board.mark(Coord { row, col }, CellMark::Sunk(self.letter))?;
            }
            return Ok(ShotOutcome::Sunk);
        }
        Ok(ShotOutcome::Hit)
    }

    /// Whether every occupied cell has been hit.
    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Ship's name as given in the placement file.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type letter: first letter of the name, uppercased.
    pub fn letter(&self) -> char {
        self.letter
    }

    /// Number of cells the ship occupies.
    pub fn len(&self) -> usize {
        self.mask.count_ones()
    }

    /// True for a ship occupying no cells (legal in placement files, but it
    /// can never be sunk).
    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    /// Number of distinct cells hit so far.
    pub fn hit_count(&self) -> usize {
        self.hits.count_ones()
    }

    /// Iterator over the occupied cells, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.mask.iter_set_bits().map(|(row, col)| Coord { row, col })
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", cells: {}, hits: {}, sunk: {} }}",
            self.name,
            self.mask.count_ones(),
            self.hits.count_ones(),
            self.sunk,
        )
    }
}
