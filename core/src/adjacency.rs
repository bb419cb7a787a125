use crate::*;

/// Fills in adjacent-mine counts. Visits every mine once and bumps each
/// neighbor that is not itself a mine, so it must run exactly once on a board
/// whose non-mine cells are all still zero.
pub fn compute_adjacency(board: &mut Board) {
    let mines: Vec<Coord2> = board
        .iter()
        .filter(|(_, cell)| cell.is_mine())
        .map(|(pos, _)| pos)
        .collect();

    for mine in mines {
        for pos in board.neighbors(mine) {
            if let CellValue::Count(count) = &mut board[pos].value {
                *count += 1;
            }
        }
    }
}

/// Counts mines around `coords` by scanning its neighbors directly.
pub fn adjacent_mine_count(board: &Board, coords: Coord2) -> u8 {
    board
        .neighbor_cells(coords)
        .filter(|(_, cell)| cell.is_mine())
        .count()
        .try_into()
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_mines(size: Coord2, mines: &[Coord2]) -> Board {
        let layout = FixedLayout::new(size, mines).unwrap();
        let mut board = Board::new(layout.mode());
        let count = layout.mode().total_mines();
        layout.place_mines(&mut board, count).unwrap();
        compute_adjacency(&mut board);
        board
    }

    #[test]
    fn counts_match_neighbor_scan() {
        let board = board_with_mines((4, 5), &[(0, 0), (1, 2), (3, 4), (2, 2)]);

        for (pos, cell) in board.iter() {
            match cell.value {
                CellValue::Mine => {}
                CellValue::Count(count) => {
                    assert_eq!(count, adjacent_mine_count(&board, pos), "at {:?}", pos)
                }
            }
        }
    }

    #[test]
    fn mines_keep_their_marker() {
        let board = board_with_mines((2, 2), &[(0, 0), (1, 1)]);

        assert_eq!(board[(0, 0)].value, CellValue::Mine);
        assert_eq!(board[(1, 1)].value, CellValue::Mine);
        assert_eq!(board[(0, 1)].value, CellValue::Count(2));
        assert_eq!(board[(1, 0)].value, CellValue::Count(2));
    }

    #[test]
    fn surrounded_cell_counts_eight() {
        let ring = [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 2),
            (2, 0),
            (2, 1),
            (2, 2),
        ];
        let board = board_with_mines((3, 3), &ring);

        assert_eq!(board[(1, 1)].value, CellValue::Count(8));
    }
}
