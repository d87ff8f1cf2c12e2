use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use flotilla::{init_logging, session, Fleet, Game};

/// Sink a file-defined fleet on a 10x10 grid.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Fleet placement file. Prompted for interactively when omitted.
    fleet_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let path = match cli.fleet_file {
        Some(path) => path,
        None => {
            write!(output, "Enter file name: ")?;
            output.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(());
            }
            PathBuf::from(line.trim_end_matches(&['\r', '\n'][..]))
        }
    };

    // Any load failure ends the program after one message; no game starts.
    let fleet = match Fleet::load(&path) {
        Ok(fleet) => fleet,
        Err(err) => {
            writeln!(output, "{}", err)?;
            return Ok(());
        }
    };

    let mut game = Game::new(fleet);
    let outcome = session::run(&mut game, &mut input, &mut output)?;
    log::debug!("session ended: {:?}", outcome);
    Ok(())
}
