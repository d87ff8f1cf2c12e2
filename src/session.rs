//! The interactive shot-entry loop.
//!
//! Drives a [`Game`] over any `BufRead`/`Write` pair so the transcript can
//! be tested without a terminal; `main` passes locked stdin/stdout.

use std::io::{BufRead, Write};

use crate::coord::Coord;
use crate::game::{Game, Shot};

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every ship was sunk.
    Won,
    /// The player quit, or input ended.
    Aborted,
}

/// Run the shot-entry loop until the fleet is sunk or the player quits.
///
/// Renders the board once up front, then per iteration: prompt, one blocking
/// line read, dispatch. `q`/`Q` (and end of input) abort; a line that is not
/// a coordinate or names an already-shot cell is reported inline and the
/// loop continues.
pub fn run<R, W>(game: &mut Game, input: &mut R, output: &mut W) -> anyhow::Result<Outcome>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", game.board())?;
    loop {
        write!(output, "\nEnter place to shoot (q to quit): ")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output, "Aborting game!")?;
            return Ok(Outcome::Aborted);
        }
        let line = line.trim_end_matches(&['\r', '\n'][..]);

        if line == "q" || line == "Q" {
            writeln!(output, "Aborting game!")?;
            return Ok(Outcome::Aborted);
        }

        let coord: Coord = match line.parse() {
            Ok(coord) => coord,
            Err(_) => {
                writeln!(output, "Invalid command!")?;
                writeln!(output, "{}", game.board())?;
                continue;
            }
        };

        match game.fire(coord).map_err(|e| anyhow::anyhow!(e))? {
            Shot::Repeat => {
                writeln!(output, "Location has already been shot at!")?;
                writeln!(output, "{}", game.board())?;
            }
            Shot::Fired { sunk, won, .. } => {
                if let Some(name) = sunk {
                    writeln!(output, "You sank a {}!", name)?;
                }
                writeln!(output, "{}", game.board())?;
                if won {
                    writeln!(output, "\nCongratulations! You sank all enemy ships.")?;
                    return Ok(Outcome::Won);
                }
            }
        }
    }
}
