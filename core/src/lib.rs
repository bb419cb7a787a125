use core::fmt;
use serde::{Deserialize, Serialize};

pub use adjacency::*;
pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use reveal::*;
pub use snapshot::*;
pub use stopwatch::*;
pub use types::*;

mod adjacency;
mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod reveal;
mod snapshot;
mod stopwatch;
mod types;

/// Board dimensions and mine count. Only constructible through the presets or
/// [`GameMode::new`], which rejects boards that could never be filled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMode {
    rows: Coord,
    columns: Coord,
    mines: CellCount,
}

impl GameMode {
    pub const BEGINNER: Self = Self::new_unchecked((9, 9), 10);
    pub const INTERMEDIATE: Self = Self::new_unchecked((16, 16), 40);
    pub const EXPERT: Self = Self::new_unchecked((16, 30), 99);

    pub const PRESETS: [(&'static str, Self); 3] = [
        ("beginner", Self::BEGINNER),
        ("intermediate", Self::INTERMEDIATE),
        ("expert", Self::EXPERT),
    ];

    const fn new_unchecked((rows, columns): Coord2, mines: CellCount) -> Self {
        Self {
            rows,
            columns,
            mines,
        }
    }

    /// Validates a custom board. At least one cell must stay free of mines,
    /// otherwise placement could never terminate and the game could never be won.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let (rows, columns) = size;
        if rows == 0 || columns == 0 {
            return Err(GameError::EmptyBoard);
        }
        let cells = mult(rows, columns);
        if mines >= cells {
            return Err(GameError::TooManyMines { mines, cells });
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub fn preset(name: &str) -> Option<Self> {
        Self::PRESETS
            .iter()
            .find(|(preset, _)| preset.eq_ignore_ascii_case(name))
            .map(|&(_, mode)| mode)
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn columns(&self) -> Coord {
        self.columns
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.columns)
    }

    pub const fn total_mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.columns)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl Default for GameMode {
    fn default() -> Self {
        Self::BEGINNER
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} with {} mines", self.rows, self.columns, self.mines)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Result of a reveal request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// Nothing was opened: the cell was already open, flagged, or the game is over.
    NoChange,
    /// Cells were opened and the game goes on.
    Continue,
    HitMine,
    /// The last safe cell was opened.
    Cleared,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Continue => true,
            HitMine => true,
            Cleared => true,
        }
    }
}
