use crate::game::ConstraintBoard;
use crate::model::{Cell, Letter, Move, MoveKind, SolveError, SolveOutcome, Verdict, BOARD_CELLS};
use log::trace;

impl ConstraintBoard {
    /// Per-letter inference: promote a letter down to one candidate cell to
    /// conclusive, and rule its alphabetic neighbors out of every cell
    /// beyond king-move reach of its candidate zone. The first
    /// contradiction sets the error slot and aborts the pass.
    fn infer_letters(&mut self) {
        for letter in Letter::all() {
            let true_cells: Vec<Cell> = Cell::all()
                .filter(|&cell| self.verdict(letter, cell) != Verdict::No)
                .collect();

            if true_cells.is_empty() {
                self.error = Some(SolveError::LetterHasNoCell(letter));
                return;
            }
            if true_cells.len() == 1 && self.verdict(letter, true_cells[0]) == Verdict::Maybe {
                self.set_conclusive_verdict(letter, true_cells[0]);
                self.add_move(Move::new(MoveKind::LastRemainingCellForLetter {
                    letter,
                    cell: true_cells[0],
                }));
            }

            // Admissible zone for the letters adjacent in the alphabet: the
            // candidate cells themselves plus their king-move neighbors.
            let mut vicinity = [false; BOARD_CELLS];
            for &cell in &true_cells {
                vicinity[cell.index()] = true;
                for neighbor in cell.king_neighbors() {
                    vicinity[neighbor.index()] = true;
                }
            }

            for target in [letter.pred(), letter.succ()].into_iter().flatten() {
                for cell in Cell::all() {
                    if vicinity[cell.index()] {
                        continue;
                    }
                    match self.verdict(target, cell) {
                        Verdict::Yes => {
                            self.error = Some(SolveError::MismatchedVerdict(cell));
                            return;
                        }
                        Verdict::Maybe => {
                            self.set_verdict(target, cell, Verdict::No);
                            self.add_move(Move::new(MoveKind::LettersNotInVicinity {
                                source: letter,
                                target,
                                cell,
                            }));
                        }
                        Verdict::No => {}
                    }
                }
            }
        }
    }

    /// Per-cell inference: a cell with no candidate letter is a
    /// contradiction, a cell with exactly one is promoted to conclusive.
    fn infer_cells(&mut self) {
        for cell in Cell::all() {
            let letters = self.possible_letters(cell);
            if letters.is_empty() {
                self.error = Some(SolveError::CellHasNoLetter(cell));
                return;
            }
            if letters.len() == 1 && self.verdict(letters[0], cell) == Verdict::Maybe {
                self.set_conclusive_verdict(letters[0], cell);
                self.add_move(Move::new(MoveKind::LastRemainingLetterForCell {
                    cell,
                    letter: letters[0],
                }));
            }
        }
    }

    fn inference_iteration(&mut self) -> usize {
        self.infer_letters();
        if self.error.is_none() {
            self.infer_cells();
        }
        self.flush_changed()
    }

    /// Run letter and cell inference to a fixpoint. Returns the number of
    /// changes applied; stops as soon as a contradiction sets the error
    /// slot.
    pub fn propagate(&mut self) -> usize {
        let mut num_changed = 0;
        loop {
            let iter_changed = self.inference_iteration();
            if self.error.is_some() || iter_changed == 0 {
                return num_changed;
            }
            num_changed += iter_changed;
        }
    }

    /// Depth-first search over the remaining choices, branching on the cell
    /// with the fewest candidate letters above one. Branches run on
    /// independent `branch()` copies of this board; each branch's move log
    /// is merged back with its depths bumped, and the search stops once the
    /// solution count is settled as zero, one, or many.
    pub fn solve(&mut self) -> Result<SolveOutcome, SolveError> {
        self.propagate();
        if let Some(error) = self.error {
            return Err(error);
        }

        let mut branch_cell = None;
        let mut branch_options: Vec<Letter> = Vec::new();
        for cell in Cell::all() {
            let letters = self.possible_letters(cell);
            if letters.is_empty() {
                let error = SolveError::CellHasNoLetter(cell);
                self.error = Some(error);
                return Err(error);
            }
            if letters.len() > 1 && (branch_cell.is_none() || letters.len() < branch_options.len())
            {
                branch_options = letters;
                branch_cell = Some(cell);
            }
        }

        let Some(cell) = branch_cell else {
            // Fully determined: the board itself is the single solution.
            let solved = self.branch();
            self.successful_layouts = vec![solved];
            return Ok(SolveOutcome::Success);
        };

        trace!(
            target: "solver",
            "branching on {:?} between {:?}",
            cell,
            branch_options
        );
        for letter in branch_options {
            let mut branch = self.branch();
            self.add_move(Move::new(MoveKind::TryingLetterForCell { letter, cell }));
            branch.set_conclusive_verdict(letter, cell);
            let result = branch.solve();
            for mv in branch.take_moves() {
                self.add_move(mv.bump());
            }
            match result {
                Err(_) => {
                    self.add_move(Move::new(MoveKind::ResultsInAnError { letter, cell }));
                }
                Ok(_) => {
                    self.add_move(Move::new(MoveKind::ResultsInASuccess { letter, cell }));
                    self.successful_layouts
                        .append(&mut branch.successful_layouts);
                }
            }
            if self.successful_layouts.len() > 1 {
                // Two layouts already prove ambiguity; callers only
                // distinguish one solution from many.
                break;
            }
        }

        match self.successful_layouts.len() {
            0 => {
                self.error = Some(SolveError::AllOptionsBad);
                Err(SolveError::AllOptionsBad)
            }
            1 => Ok(SolveOutcome::Success),
            _ => Ok(SolveOutcome::SuccessMultiple),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{serpentine_layout, FinalLayout, PuzzleClues};

    fn fully_specified_board(layout: &FinalLayout) -> ConstraintBoard {
        let mut board = ConstraintBoard::new();
        for cell in Cell::all() {
            board.set_conclusive_verdict(layout.letter_at(cell), cell);
        }
        board
    }

    #[test]
    fn test_fully_specified_board_solves_without_branching() {
        let layout = serpentine_layout();
        let mut board = fully_specified_board(&layout);

        assert_eq!(board.solve(), Ok(SolveOutcome::Success));
        assert_eq!(board.successful_layouts().len(), 1);
        assert_eq!(board.successful_layouts()[0].final_layout(), Some(layout));
        assert!(board
            .moves()
            .iter()
            .all(|mv| !matches!(mv.kind, MoveKind::TryingLetterForCell { .. })));
    }

    #[test]
    fn test_conflicting_conclusive_verdicts_are_detected() {
        let mut board = ConstraintBoard::new();
        board.set_conclusive_verdict(Letter::A, Cell::new(0, 0));
        board.set_conclusive_verdict(Letter::from_char('B').unwrap(), Cell::new(4, 4));

        // B is pinned far outside A's vicinity.
        assert_eq!(
            board.solve(),
            Err(SolveError::MismatchedVerdict(Cell::new(4, 4)))
        );
        assert_eq!(board.error(), Some(SolveError::MismatchedVerdict(Cell::new(4, 4))));
    }

    #[test]
    fn test_unreachable_line_clue_is_detected() {
        // A in the top-left corner while B is confined to the bottom row:
        // no cell of that row touches A's neighborhood.
        let mut clues = PuzzleClues::new(Cell::new(0, 0));
        let b = Letter::from_char('B').unwrap();
        clues.rows[4].push(b);

        let mut board = ConstraintBoard::new();
        board.apply_clues(&clues);
        assert_eq!(board.solve(), Err(SolveError::LetterHasNoCell(b)));
    }

    #[test]
    fn test_a_only_board_branches_and_terminates() {
        let mut board = ConstraintBoard::new();
        board.apply_clues(&PuzzleClues::new(Cell::new(2, 2)));

        let outcome = board.solve();
        assert_eq!(outcome, Ok(SolveOutcome::SuccessMultiple));
        assert!(board
            .moves()
            .iter()
            .any(|mv| matches!(mv.kind, MoveKind::TryingLetterForCell { .. })));
    }

    #[test]
    fn test_propagation_is_idempotent() {
        let mut board = ConstraintBoard::new();
        board.apply_clues(&PuzzleClues::new(Cell::new(0, 0)));

        let first = board.propagate();
        assert!(first > 0);
        let n_moves = board.moves().len();

        assert_eq!(board.propagate(), 0);
        assert_eq!(board.moves().len(), n_moves);
    }

    #[test]
    fn test_at_most_one_yes_per_cell_after_propagation() {
        let mut board = ConstraintBoard::new();
        board.apply_clues(&PuzzleClues::new(Cell::new(1, 2)));
        board.propagate();

        for cell in Cell::all() {
            let yes_count = Letter::all()
                .filter(|&letter| board.verdict(letter, cell) == Verdict::Yes)
                .count();
            assert!(yes_count <= 1, "cell {} holds {} YES verdicts", cell, yes_count);
        }
    }

    #[test]
    fn test_solved_layouts_are_hamiltonian_paths() {
        let mut board = ConstraintBoard::new();
        board.apply_clues(&PuzzleClues::new(Cell::new(3, 1)));
        board.solve().unwrap();

        for solved in board.successful_layouts() {
            let layout = solved.final_layout().expect("successful board undetermined");
            assert!(layout.is_hamiltonian_path());
        }
    }
}
