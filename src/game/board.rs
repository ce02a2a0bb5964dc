use crate::model::{
    line_cells, Cell, FinalLayout, Letter, Move, PuzzleClues, SolveError, Verdict, BOARD_CELLS,
    LEN, LETTER_COUNT,
};
use log::trace;

/// Tri-state knowledge of the whole board: one verdict per (letter, cell)
/// pair, plus the audit log and outcome bookkeeping of a solve run.
pub struct ConstraintBoard {
    verdicts: [Verdict; LETTER_COUNT * BOARD_CELLS],
    pub(crate) iter_changed: usize,
    pub(crate) moves: Vec<Move>,
    pub(crate) error: Option<SolveError>,
    pub(crate) successful_layouts: Vec<ConstraintBoard>,
}

impl Default for ConstraintBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintBoard {
    /// A board where everything is still possible.
    pub fn new() -> Self {
        Self {
            verdicts: [Verdict::Maybe; LETTER_COUNT * BOARD_CELLS],
            iter_changed: 0,
            moves: Vec::new(),
            error: None,
            successful_layouts: Vec::new(),
        }
    }

    /// Independent branch of this board: copies the verdict matrix, starts
    /// with a fresh move log, error slot and success list.
    pub fn branch(&self) -> Self {
        Self {
            verdicts: self.verdicts,
            ..Self::new()
        }
    }

    fn offset(letter: Letter, cell: Cell) -> usize {
        letter.index() * BOARD_CELLS + cell.index()
    }

    pub fn verdict(&self, letter: Letter, cell: Cell) -> Verdict {
        self.verdicts[Self::offset(letter, cell)]
    }

    pub(crate) fn set_verdict(&mut self, letter: Letter, cell: Cell, verdict: Verdict) {
        self.verdicts[Self::offset(letter, cell)] = verdict;
    }

    /// Pin `letter` at `cell`: YES there, NO at every other cell for the
    /// letter, NO at the cell for every other letter.
    pub fn set_conclusive_verdict(&mut self, letter: Letter, cell: Cell) {
        for other in Cell::all() {
            let verdict = if other == cell {
                Verdict::Yes
            } else {
                Verdict::No
            };
            self.set_verdict(letter, other, verdict);
        }
        for other in Letter::all() {
            if other != letter {
                self.set_verdict(other, cell, Verdict::No);
            }
        }
    }

    /// Scope every letter of a clue list to the cells of its line: MAYBE on
    /// the line, NO everywhere else. Overwrites whatever was there before;
    /// `apply_clues` relies on its fixed application order.
    fn set_line_verdicts(&mut self, letters: &[Letter], line: &[Cell; LEN]) {
        let mut in_line = [false; BOARD_CELLS];
        for cell in line {
            in_line[cell.index()] = true;
        }
        for &letter in letters {
            for cell in Cell::all() {
                let verdict = if in_line[cell.index()] {
                    Verdict::Maybe
                } else {
                    Verdict::No
                };
                self.set_verdict(letter, cell, verdict);
            }
        }
    }

    /// Apply a clue set in the fixed observable order: A-clue, major
    /// diagonal, minor diagonal, columns, rows.
    pub fn apply_clues(&mut self, clues: &PuzzleClues) {
        self.set_conclusive_verdict(Letter::A, clues.a_cell);
        self.set_line_verdicts(&clues.major_diagonal, &line_cells(0));
        self.set_line_verdicts(&clues.minor_diagonal, &line_cells(1));
        for x in 0..LEN {
            self.set_line_verdicts(&clues.columns[x], &line_cells(2 + LEN + x));
        }
        for y in 0..LEN {
            self.set_line_verdicts(&clues.rows[y], &line_cells(2 + y));
        }
    }

    /// Letters not yet ruled out for the cell.
    pub fn possible_letters(&self, cell: Cell) -> Vec<Letter> {
        Letter::all()
            .filter(|&letter| self.verdict(letter, cell) != Verdict::No)
            .collect()
    }

    /// Char form of `possible_letters`, for presentation layers.
    pub fn possible_letters_for_cell(&self, x: usize, y: usize) -> Vec<char> {
        self.possible_letters(Cell::new(x, y))
            .into_iter()
            .map(Letter::to_char)
            .collect()
    }

    pub(crate) fn add_move(&mut self, mv: Move) {
        trace!(target: "solver", "{:?}", mv);
        self.moves.push(mv);
        self.iter_changed += 1;
    }

    pub(crate) fn flush_changed(&mut self) -> usize {
        std::mem::take(&mut self.iter_changed)
    }

    pub(crate) fn take_moves(&mut self) -> Vec<Move> {
        std::mem::take(&mut self.moves)
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn error(&self) -> Option<SolveError> {
        self.error
    }

    /// Complete boards discovered by `solve`, one per distinct layout.
    pub fn successful_layouts(&self) -> &[ConstraintBoard] {
        &self.successful_layouts
    }

    /// The single layout of a fully determined board.
    pub fn final_layout(&self) -> Option<FinalLayout> {
        let mut cells = [0u8; BOARD_CELLS];
        for cell in Cell::all() {
            let letters = self.possible_letters(cell);
            if letters.len() != 1 {
                return None;
            }
            cells[cell.index()] = letters[0].index() as u8 + 1;
        }
        Some(FinalLayout::new(cells))
    }
}

impl std::fmt::Debug for ConstraintBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut output = String::new();
        output.push('\n');
        for y in 0..LEN {
            output.push_str(&format!("{}|", y));
            for x in 0..LEN {
                let letters = self.possible_letters(Cell::new(x, y));
                if letters.len() == LETTER_COUNT {
                    output.push_str("*|");
                } else {
                    let cell: String = letters.iter().map(|l| l.to_char()).collect();
                    output.push_str(&format!("{}|", cell));
                }
            }
            output.push('\n');
        }
        write!(f, "{}", output)
    }
}
