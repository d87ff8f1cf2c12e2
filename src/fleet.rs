//! Fleet loading: parse a placement file into a validated set of ships.

use std::fs;
use std::path::Path;

use crate::common::FleetError;
use crate::config::Cells;
use crate::coord::Coord;
use crate::ship::Ship;

/// The complete set of ships for one game.
///
/// Composition is fixed at load time; only each ship's hit state mutates
/// during play. Occupied cells are pairwise disjoint across the whole fleet.
#[derive(Debug)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Read a placement file and parse it. The file is consumed in one
    /// read-to-completion; an unreadable file is
    /// [`FleetError::SourceUnavailable`].
    pub fn load(path: impl AsRef<Path>) -> Result<Fleet, FleetError> {
        let text = fs::read_to_string(path)?;
        Fleet::parse(text.lines())
    }

    /// Parse placement lines of the form `name;coord1;coord2;...`.
    ///
    /// Each coordinate is one letter A-J (case-insensitive) followed by one
    /// digit 0-9. Validation fails fast on the first bad token: a malformed
    /// coordinate or a missing name is [`FleetError::CoordinateFormat`], and
    /// a cell claimed twice anywhere in the file is [`FleetError::Overlap`]
    /// (one global disjointness constraint, not per ship). Blank lines are
    /// skipped.
    pub fn parse<'a, I>(lines: I) -> Result<Fleet, FleetError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut ships = Vec::new();
        let mut reserved = Cells::new();
        for (idx, raw) in lines.into_iter().enumerate() {
            let line = raw.trim_end();
            if line.is_empty() {
                continue;
            }
            let lineno = idx + 1;
            let mut tokens = line.split(';');
            let name = tokens.next().unwrap_or_default();
            if name.is_empty() {
                return Err(FleetError::CoordinateFormat {
                    line: lineno,
                    token: String::new(),
                });
            }
            let mut mask = Cells::new();
            for token in tokens {
                let coord: Coord = token.parse().map_err(|_| FleetError::CoordinateFormat {
                    line: lineno,
                    token: token.to_string(),
                })?;
                if reserved.get(coord.row, coord.col).unwrap_or(false) {
                    return Err(FleetError::Overlap {
                        line: lineno,
                        coord,
                    });
                }
                let _ = reserved.set(coord.row, coord.col);
                let _ = mask.set(coord.row, coord.col);
            }
            ships.push(Ship::from_mask(name.to_string(), mask));
        }
        log::debug!("loaded fleet of {} ships", ships.len());
        Ok(Fleet { ships })
    }

    /// Ships in file order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub(crate) fn ships_mut(&mut self) -> core::slice::IterMut<'_, Ship> {
        self.ships.iter_mut()
    }

    /// Number of ships in the fleet.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    /// True for a fleet with no ships at all.
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Count of sunk ships, freshly folded over the whole fleet.
    pub fn sunk_count(&self) -> usize {
        self.ships.iter().filter(|s| s.is_sunk()).count()
    }

    /// Returns true when every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.sunk_count() == self.ships.len()
    }
}
