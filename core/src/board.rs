use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular grid of cells addressed by `(row, column)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Allocates `rows × columns` closed, unflagged, zero-valued cells.
    pub fn new(mode: GameMode) -> Self {
        Self {
            cells: Array2::default(mode.size().to_nd_index()),
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn columns(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let (rows, columns) = self.size();
        coords.0 < rows && coords.1 < columns
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Lookup that treats anything outside the grid as "no cell".
    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn get_mut(&mut self, coords: Coord2) -> Option<&mut Cell> {
        self.cells.get_mut(coords.to_nd_index())
    }

    /// The up-to-8 cells around `coords` that lie on the grid, row-major.
    /// Owns its bounds so callers can mutate the board while iterating.
    pub fn neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + Clone + use<> {
        let (row, column) = coords;
        let (last_row, last_column) = (self.rows() - 1, self.columns() - 1);
        let rows = row.saturating_sub(1)..=row.saturating_add(1).min(last_row);
        let columns = column.saturating_sub(1)..=column.saturating_add(1).min(last_column);

        rows.flat_map(move |r| columns.clone().map(move |c| (r, c)))
            .filter(move |&pos| pos != coords)
    }

    pub fn neighbor_cells(&self, coords: Coord2) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.neighbors(coords).map(|pos| (pos, &self[pos]))
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, columns) = self.size();
        (0..rows).flat_map(move |row| (0..columns).map(move |column| (row, column)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.coords().map(|pos| (pos, &self[pos]))
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_where(Cell::is_mine)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_where(|cell| cell.flagged)
    }

    pub fn opened_count(&self) -> CellCount {
        self.count_where(|cell| cell.opened)
    }

    fn count_where(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| predicate(cell))
            .count()
            .try_into()
            .unwrap()
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}
