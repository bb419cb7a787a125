use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::Verbosity;
use sweeper_core::*;

use command::{Command, HELP};

mod command;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Mode {
    Beginner,
    Intermediate,
    Expert,
}

impl From<Mode> for GameMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Beginner => GameMode::BEGINNER,
            Mode::Intermediate => GameMode::INTERMEDIATE,
            Mode::Expert => GameMode::EXPERT,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PlacementArg {
    Rejection,
    Shuffle,
}

impl From<PlacementArg> for Placement {
    fn from(placement: PlacementArg) -> Self {
        match placement {
            PlacementArg::Rejection => Placement::Rejection,
            PlacementArg::Shuffle => Placement::Shuffle,
        }
    }
}

/// Play Minesweeper in the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Board preset
    #[arg(short, long, value_enum, default_value_t = Mode::Beginner)]
    mode: Mode,

    /// Seed for the first board, random if omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// How mines are distributed
    #[arg(long, value_enum, default_value_t = PlacementArg::Rejection)]
    placement: PlacementArg,

    #[command(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let mode = GameMode::from(cli.mode);
    let placement = Placement::from(cli.placement);
    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut game =
        Game::with_seed(mode, placement, seed).context("failed to deal the first board")?;
    log::info!("Started {} game with seed {}", mode, seed);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{HELP}")?;
    draw(&mut stdout, &game)?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(stdout, "{err:#}")?;
                continue;
            }
        };

        match command {
            Command::Open(coords) => match game.reveal(coords) {
                Ok(outcome) => log::debug!("reveal {:?}: {:?}", coords, outcome),
                Err(err) => writeln!(stdout, "{err}")?,
            },
            Command::Flag(coords) => match game.toggle_flag(coords) {
                Ok(outcome) => log::debug!("flag {:?}: {:?}", coords, outcome),
                Err(err) => writeln!(stdout, "{err}")?,
            },
            Command::Restart => {
                if let Err(err) = game.restart() {
                    writeln!(stdout, "{err}")?;
                }
            }
            Command::ChangeMode(mode) => {
                if let Err(err) = game.change_mode(mode) {
                    writeln!(stdout, "{err}")?;
                }
            }
            Command::Json => {
                let json = Snapshot::from_game(&game)
                    .to_json()
                    .context("failed to encode snapshot")?;
                writeln!(stdout, "{json}")?;
                continue;
            }
            Command::Help => {
                writeln!(stdout, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
        }

        draw(&mut stdout, &game)?;
    }

    Ok(())
}

fn draw(out: &mut impl Write, game: &Game) -> Result<()> {
    let snapshot = Snapshot::from_game(game);
    let status = match snapshot.state {
        GameState::Playing => "playing",
        GameState::Won => "you won!",
        GameState::Lost => "boom, you lost",
    };

    writeln!(out)?;
    write!(out, "    ")?;
    for column in 0..snapshot.cells.first().map_or(0, Vec::len) {
        write!(out, "{}", column % 10)?;
    }
    writeln!(out)?;
    for (row, line) in snapshot.render_text().lines().enumerate() {
        writeln!(out, "{row:>3} {line}")?;
    }
    writeln!(
        out,
        "mines left: {}  time: {}s  {}",
        snapshot.remaining_mines, snapshot.elapsed_secs, status
    )?;
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
