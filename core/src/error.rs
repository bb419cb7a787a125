use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Too many mines: {mines} requested but the board only has {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("Board must have at least one row and one column")]
    EmptyBoard,
    #[error("Mode declares {expected} mines but {placed} were placed")]
    MineCountMismatch { expected: CellCount, placed: CellCount },
}

pub type Result<T> = core::result::Result<T, GameError>;
