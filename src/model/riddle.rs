use serde::{Deserialize, Serialize};

use crate::model::{Cell, FinalLayout, Letter, PuzzleClues, LEN, NUM_LINES};

/// A finished puzzle: the unique solution, one revealed letter pair per
/// line group, and the position of letter A.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Riddle {
    pub solution: FinalLayout,
    /// Letter pairs by line group: major diagonal, minor diagonal, rows,
    /// columns. Pair order carries no position information.
    pub clues: [[Letter; 2]; NUM_LINES],
    pub a_cell: Cell,
}

impl Riddle {
    /// The clue input that reproduces `solution` on a fresh board.
    pub fn board_clues(&self) -> PuzzleClues {
        PuzzleClues {
            a_cell: self.a_cell,
            major_diagonal: self.clues[0].to_vec(),
            minor_diagonal: self.clues[1].to_vec(),
            rows: std::array::from_fn(|y| self.clues[2 + y].to_vec()),
            columns: std::array::from_fn(|x| self.clues[2 + LEN + x].to_vec()),
        }
    }
}
