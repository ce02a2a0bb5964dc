use std::fmt;

use crate::model::{Cell, Letter};

/// One inference or search step taken by the solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// Only one cell is still open for the letter.
    LastRemainingCellForLetter { letter: Letter, cell: Cell },
    /// Only one letter is still open for the cell.
    LastRemainingLetterForCell { cell: Cell, letter: Letter },
    /// The target letter was ruled out of a cell beyond king-move reach of
    /// every cell still open for the source letter.
    LettersNotInVicinity {
        source: Letter,
        target: Letter,
        cell: Cell,
    },
    /// A search branch fixing the letter at the cell was opened.
    TryingLetterForCell { letter: Letter, cell: Cell },
    /// The branch ended in a contradiction.
    ResultsInAnError { letter: Letter, cell: Cell },
    /// The branch found at least one complete layout.
    ResultsInASuccess { letter: Letter, cell: Cell },
}

/// A `MoveKind` annotated with the recursion depth it was discovered at;
/// depth grows by one each time a branch's log is merged into its parent.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub kind: MoveKind,
    pub depth: usize,
}

impl Move {
    pub fn new(kind: MoveKind) -> Self {
        Self { kind, depth: 0 }
    }

    /// Copy of this move one recursion level deeper.
    pub fn bump(self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::LastRemainingCellForLetter { letter, cell } => {
                write!(f, "[d{}] {} only fits {}", self.depth, letter, cell)
            }
            MoveKind::LastRemainingLetterForCell { cell, letter } => {
                write!(f, "[d{}] {} only takes {}", self.depth, cell, letter)
            }
            MoveKind::LettersNotInVicinity {
                source,
                target,
                cell,
            } => write!(
                f,
                "[d{}] {} at {} is out of reach of {}",
                self.depth, target, cell, source
            ),
            MoveKind::TryingLetterForCell { letter, cell } => {
                write!(f, "[d{}] trying {} at {}", self.depth, letter, cell)
            }
            MoveKind::ResultsInAnError { letter, cell } => {
                write!(f, "[d{}] {} at {} fails", self.depth, letter, cell)
            }
            MoveKind::ResultsInASuccess { letter, cell } => {
                write!(f, "[d{}] {} at {} succeeds", self.depth, letter, cell)
            }
        }
    }
}
