use serde::{Deserialize, Serialize};

use crate::*;
pub use fixed::*;
pub use rejection::*;
pub use shuffle::*;

mod fixed;
mod rejection;
mod shuffle;

pub trait MineGenerator {
    /// Turns exactly `mines` distinct cells of a freshly allocated `board` into mines,
    /// or fails without touching the board.
    fn place_mines(self, board: &mut Board, mines: CellCount) -> Result<()>;
}

/// Every generator leaves at least one cell free of mines.
pub(crate) fn check_capacity(board: &Board, mines: CellCount) -> Result<()> {
    let cells = board.total_cells();
    if mines >= cells {
        log::warn!("Requested {} mines but the board only has {} cells", mines, cells);
        Err(GameError::TooManyMines { mines, cells })
    } else {
        Ok(())
    }
}

/// Random placement strategies selectable at runtime.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    #[default]
    Rejection,
    Shuffle,
}

impl Placement {
    pub fn place_mines(self, seed: u64, board: &mut Board, mines: CellCount) -> Result<()> {
        match self {
            Self::Rejection => RejectionSampler::new(seed).place_mines(board, mines),
            Self::Shuffle => ShuffleGenerator::new(seed).place_mines(board, mines),
        }
    }
}
