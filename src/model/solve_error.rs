use std::fmt;

use crate::model::{Cell, Letter};

/// A contradiction or input problem met while solving. Errors are values:
/// they live in the board's error slot and are returned from `solve`, never
/// thrown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// A letter has no candidate cell left.
    LetterHasNoCell(Letter),
    /// A cell has no candidate letter left.
    CellHasNoLetter(Cell),
    /// A letter is pinned outside the vicinity of its alphabetic neighbor.
    MismatchedVerdict(Cell),
    /// Every branch of the search led to a contradiction.
    AllOptionsBad,
    /// A clue referenced a symbol outside 'A'..'Y'.
    UnknownLetter(char),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::LetterHasNoCell(letter) => {
                write!(f, "letter {} has no remaining cell", letter)
            }
            SolveError::CellHasNoLetter(cell) => {
                write!(f, "cell {} has no remaining letter", cell)
            }
            SolveError::MismatchedVerdict(cell) => {
                write!(f, "conflicting verdicts at {}", cell)
            }
            SolveError::AllOptionsBad => write!(f, "every branch led to a contradiction"),
            SolveError::UnknownLetter(c) => write!(f, "unknown letter '{}'", c),
        }
    }
}

impl std::error::Error for SolveError {}

/// Successful result of a solve run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Exactly one complete layout satisfies the clues.
    Success,
    /// More than one complete layout satisfies the clues.
    SuccessMultiple,
}
