use serde::{Deserialize, Serialize};

/// Grid edge length.
pub const LEN: usize = 5;
/// Number of cells on the board.
pub const BOARD_CELLS: usize = LEN * LEN;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        debug_assert!(x < LEN && y < LEN);
        Self { x, y }
    }

    pub fn from_index(index: usize) -> Self {
        Self::new(index % LEN, index / LEN)
    }

    pub fn index(self) -> usize {
        self.y * LEN + self.x
    }

    /// All cells in row-major order (y outer, x inner), the scan order used
    /// by every board loop.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_CELLS).map(Cell::from_index)
    }

    /// The up-to-eight king-move neighbors of this cell.
    pub fn king_neighbors(self) -> Vec<Cell> {
        let mut neighbors = Vec::with_capacity(8);
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = self.x as i32 + dx;
                let ny = self.y as i32 + dy;
                if (0..LEN as i32).contains(&nx) && (0..LEN as i32).contains(&ny) {
                    neighbors.push(Cell::new(nx as usize, ny as usize));
                }
            }
        }
        neighbors
    }

    /// True when the cells differ by at most one in both coordinates,
    /// excluding the cell itself.
    pub fn is_adjacent(self, other: Cell) -> bool {
        self != other && self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for index in 0..BOARD_CELLS {
            assert_eq!(Cell::from_index(index).index(), index);
        }
        assert_eq!(Cell::new(3, 2).index(), 13);
    }

    #[test]
    fn test_all_is_row_major() {
        let cells: Vec<Cell> = Cell::all().collect();
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[1], Cell::new(1, 0));
        assert_eq!(cells[LEN], Cell::new(0, 1));
        assert_eq!(cells.len(), BOARD_CELLS);
    }

    #[test]
    fn test_king_neighbors_counts() {
        assert_eq!(Cell::new(0, 0).king_neighbors().len(), 3);
        assert_eq!(Cell::new(2, 0).king_neighbors().len(), 5);
        assert_eq!(Cell::new(2, 2).king_neighbors().len(), 8);
        assert_eq!(Cell::new(4, 4).king_neighbors().len(), 3);
    }

    #[test]
    fn test_is_adjacent() {
        let center = Cell::new(2, 2);
        assert!(center.is_adjacent(Cell::new(3, 3)));
        assert!(center.is_adjacent(Cell::new(1, 2)));
        assert!(!center.is_adjacent(center));
        assert!(!center.is_adjacent(Cell::new(4, 2)));
    }
}
