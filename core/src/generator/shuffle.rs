use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use super::*;

/// Shuffles every coordinate and mines the first `mines` of them. Runs in
/// time linear in the board size regardless of density.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffleGenerator {
    seed: u64,
}

impl ShuffleGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for ShuffleGenerator {
    fn place_mines(self, board: &mut Board, mines: CellCount) -> Result<()> {
        check_capacity(board, mines)?;
        let mut coords: Vec<Coord2> = board.coords().collect();

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let (chosen, _) = coords.partial_shuffle(&mut rng, mines.into());
        for &pos in chosen.iter() {
            board[pos].value = CellValue::Mine;
        }
        Ok(())
    }
}
