use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a presentation layer needs to redraw a game, detached from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub mode: GameMode,
    pub state: GameState,
    pub remaining_mines: isize,
    pub elapsed_secs: u64,
    /// Display values row by row.
    pub cells: Vec<Vec<DisplayValue>>,
}

impl Snapshot {
    pub fn from_game(game: &Game) -> Self {
        let (rows, columns) = game.size();
        let cells = (0..rows)
            .map(|row| {
                (0..columns)
                    .map(|column| game.board()[(row, column)].display())
                    .collect()
            })
            .collect();

        Self {
            mode: game.mode(),
            state: game.state(),
            remaining_mines: game.remaining_mines(),
            elapsed_secs: game.elapsed_secs(),
            cells,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Plain-text grid, one line per row.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for row in &self.cells {
            out.extend(row.iter().map(|value| value.symbol()));
            out.push('\n');
        }
        out
    }
}
