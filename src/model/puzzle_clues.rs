use serde::{Deserialize, Serialize};

use crate::model::{Cell, Letter, LEN};

/// Number of line groups carrying clues: both diagonals plus every row and
/// column.
pub const NUM_LINES: usize = 2 + LEN + LEN;

/// Cells of a line group. Group order: 0 is the major diagonal, 1 the minor
/// diagonal, then rows by y, then columns by x.
pub fn line_cells(line: usize) -> [Cell; LEN] {
    assert!(line < NUM_LINES, "line group {} out of range", line);
    std::array::from_fn(|i| match line {
        0 => Cell::new(i, i),
        1 => Cell::new(LEN - 1 - i, i),
        l if l < 2 + LEN => Cell::new(i, l - 2),
        l => Cell::new(l - 2 - LEN, i),
    })
}

/// Indexes of every line group the cell belongs to.
pub fn lines_through(cell: Cell) -> Vec<usize> {
    let mut lines = Vec::with_capacity(4);
    if cell.x == cell.y {
        lines.push(0);
    }
    if cell.x + cell.y == LEN - 1 {
        lines.push(1);
    }
    lines.push(2 + cell.y);
    lines.push(2 + LEN + cell.x);
    lines
}

/// Clue input consumed by `ConstraintBoard::apply_clues`: the position of
/// letter A plus, per line group, the letters known to lie somewhere in
/// that line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleClues {
    pub a_cell: Cell,
    pub major_diagonal: Vec<Letter>,
    pub minor_diagonal: Vec<Letter>,
    pub rows: [Vec<Letter>; LEN],
    pub columns: [Vec<Letter>; LEN],
}

impl PuzzleClues {
    /// Clues revealing nothing beyond the position of letter A.
    pub fn new(a_cell: Cell) -> Self {
        Self {
            a_cell,
            major_diagonal: Vec::new(),
            minor_diagonal: Vec::new(),
            rows: std::array::from_fn(|_| Vec::new()),
            columns: std::array::from_fn(|_| Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_cells() {
        let major: Vec<Cell> = line_cells(0).to_vec();
        assert!(major.iter().all(|cell| cell.x == cell.y));
        let minor: Vec<Cell> = line_cells(1).to_vec();
        assert!(minor.iter().all(|cell| cell.x + cell.y == LEN - 1));
    }

    #[test]
    fn test_row_and_column_cells() {
        assert!(line_cells(2 + 3).iter().all(|cell| cell.y == 3));
        assert!(line_cells(2 + LEN + 1).iter().all(|cell| cell.x == 1));
    }

    #[test]
    fn test_lines_through_membership() {
        // Corner (0,0): major diagonal, row 0, column 0.
        assert_eq!(lines_through(Cell::new(0, 0)), vec![0, 2, 2 + LEN]);
        // Center sits on both diagonals.
        assert_eq!(
            lines_through(Cell::new(2, 2)),
            vec![0, 1, 2 + 2, 2 + LEN + 2]
        );
        // Every line reported for a cell actually contains it.
        for cell in Cell::all() {
            for line in lines_through(cell) {
                assert!(line_cells(line).contains(&cell));
            }
        }
    }
}
