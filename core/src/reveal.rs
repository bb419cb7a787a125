use std::collections::VecDeque;

use crate::*;

/// What [`open_cell`] did to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpenResult {
    /// Target was outside the grid, already open, or flagged.
    Blocked,
    Mine,
    Safe { opened: CellCount },
}

/// Opens a single cell, flood-filling from it when it has no adjacent mines.
///
/// The flood fill walks an explicit work list. A cell's `opened` flag doubles
/// as the visited marker and is set before the cell is queued, so every cell
/// is processed at most once. Numbered cells are opened as the boundary of
/// the region but never queued; flagged cells are left alone.
pub fn open_cell(board: &mut Board, coords: Coord2) -> OpenResult {
    let Some(cell) = board.get_mut(coords) else {
        return OpenResult::Blocked;
    };
    if !cell.is_openable() {
        return OpenResult::Blocked;
    }

    cell.opened = true;
    match cell.value {
        CellValue::Mine => return OpenResult::Mine,
        CellValue::Count(count) if count > 0 => return OpenResult::Safe { opened: 1 },
        CellValue::Count(_) => {}
    }

    let mut opened: CellCount = 1;
    let mut to_visit = VecDeque::from([coords]);
    log::trace!("Starting flood-fill from {:?}", coords);

    while let Some(visit_coords) = to_visit.pop_front() {
        for pos in board.neighbors(visit_coords) {
            let neighbor = &mut board[pos];
            if !neighbor.is_openable() {
                continue;
            }
            debug_assert!(!neighbor.is_mine(), "zero cell {:?} borders a mine", visit_coords);

            neighbor.opened = true;
            opened += 1;
            log::trace!("Flood opened cell at {:?}, value: {:?}", pos, neighbor.value);

            if neighbor.value.is_zero() {
                to_visit.push_back(pos);
            }
        }
    }

    OpenResult::Safe { opened }
}
