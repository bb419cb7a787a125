use std::str::FromStr;

use anyhow::{Context, bail};
use sweeper_core::{Coord, Coord2, GameMode};

pub const HELP: &str = "\
commands:
  o <row> <col>   open a cell
  f <row> <col>   toggle a flag
  n               new game, same mode
  m <mode>        new game in beginner, intermediate or expert
  j               print the board as JSON
  h               show this help
  q               quit";

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Open(Coord2),
    Flag(Coord2),
    Restart,
    ChangeMode(GameMode),
    Json,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            bail!("empty command, type h for help");
        };
        let args: Vec<&str> = words.collect();

        let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("o" | "open", [row, column]) => Self::Open(parse_coords(row, column)?),
            ("f" | "flag", [row, column]) => Self::Flag(parse_coords(row, column)?),
            ("n" | "new", []) => Self::Restart,
            ("m" | "mode", [name]) => Self::ChangeMode(
                GameMode::preset(name).with_context(|| format!("unknown mode {name:?}"))?,
            ),
            ("j" | "json", []) => Self::Json,
            ("h" | "help" | "?", []) => Self::Help,
            ("q" | "quit" | "exit", []) => Self::Quit,
            _ => bail!("could not understand {line:?}, type h for help"),
        };
        Ok(command)
    }
}

fn parse_coords(row: &str, column: &str) -> anyhow::Result<Coord2> {
    let row: Coord = row.parse().with_context(|| format!("bad row {row:?}"))?;
    let column: Coord = column
        .parse()
        .with_context(|| format!("bad column {column:?}"))?;
    Ok((row, column))
}
