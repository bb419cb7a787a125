use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Above this density rejection sampling spends most of its draws on cells
/// that already hold a mine.
const DENSITY_WARN_THRESHOLD: f32 = 0.5;

/// Draws uniformly random cells and redraws on duplicates until enough mines
/// are placed. Only terminates while at least one cell stays free, which
/// [`GameMode::new`] guarantees.
#[derive(Clone, Debug, PartialEq)]
pub struct RejectionSampler {
    seed: u64,
}

impl RejectionSampler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RejectionSampler {
    fn place_mines(self, board: &mut Board, mines: CellCount) -> Result<()> {
        check_capacity(board, mines)?;
        let (rows, columns) = board.size();
        let total_cells = board.total_cells();

        let density = f32::from(mines) / f32::from(total_cells);
        if density > DENSITY_WARN_THRESHOLD {
            log::warn!(
                "Mine density {:.2} is high for rejection sampling, prefer shuffle placement",
                density
            );
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed = 0;
        let mut draws: u32 = 0;
        while placed < mines {
            let coords = (rng.random_range(0..rows), rng.random_range(0..columns));
            draws += 1;
            let cell = &mut board[coords];
            if !cell.is_mine() {
                cell.value = CellValue::Mine;
                placed += 1;
            }
        }
        log::trace!("Placed {} mines in {} draws", placed, draws);
        Ok(())
    }
}
