use super::*;

/// Predetermined mine positions, for replays and hand-built boards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FixedLayout {
    mode: GameMode,
    mines: Vec<Coord2>,
}

impl FixedLayout {
    pub fn new(size: Coord2, mines: &[Coord2]) -> Result<Self> {
        let (rows, columns) = size;
        if let Some(&outside) = mines.iter().find(|&&(r, c)| r >= rows || c >= columns) {
            log::debug!("Mine at {:?} lies outside a {:?} board", outside, size);
            return Err(GameError::InvalidCoords);
        }

        let mut mines = mines.to_vec();
        mines.sort_unstable();
        mines.dedup();
        let count = CellCount::try_from(mines.len()).map_err(|_| GameError::TooManyMines {
            mines: CellCount::MAX,
            cells: mult(rows, columns),
        })?;
        let mode = GameMode::new(size, count)?;

        Ok(Self { mode, mines })
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn mines(&self) -> &[Coord2] {
        &self.mines
    }
}

impl MineGenerator for FixedLayout {
    fn place_mines(self, board: &mut Board, mines: CellCount) -> Result<()> {
        check_capacity(board, mines)?;
        if usize::from(mines) != self.mines.len() {
            return Err(GameError::MineCountMismatch {
                expected: mines,
                placed: self.mode.total_mines(),
            });
        }
        if let Some(&outside) = self.mines.iter().find(|&&pos| !board.contains(pos)) {
            log::debug!("Mine at {:?} lies outside a {:?} board", outside, board.size());
            return Err(GameError::InvalidCoords);
        }

        for pos in self.mines {
            board[pos].value = CellValue::Mine;
        }
        Ok(())
    }
}
