use itertools::Itertools;
use log::{info, trace};
use rand::{rngs::StdRng, seq::SliceRandom};

use crate::game::{calc_final_layout, ConstraintBoard};
use crate::model::{
    line_cells, lines_through, Cell, FinalLayout, Riddle, SolveOutcome, LEN, NUM_LINES,
};

/// Per-line bookkeeping during the clue search.
#[derive(Clone)]
struct LineChoice {
    /// Cells of the line not yet committed to any clue.
    num_remaining: u8,
    /// The pair revealed for this line, once chosen.
    cells: Option<(usize, usize)>,
}

/// One frame of the clue search.
struct RiddleFrame {
    pos_taken: u32,
    lines: [LineChoice; NUM_LINES],
    /// Chosen line plus its untried cell pairs, filled on first visit.
    pending: Option<(usize, Vec<(usize, usize)>)>,
}

impl RiddleFrame {
    fn new() -> Self {
        Self {
            pos_taken: 0,
            lines: std::array::from_fn(|_| LineChoice {
                num_remaining: LEN as u8,
                cells: None,
            }),
            pending: None,
        }
    }

    /// Commit a cell to some clue: exclude it from every later pair and
    /// shrink the pool of every line through it.
    fn mark(&mut self, cell_index: usize) {
        self.pos_taken |= 1 << cell_index;
        for line in lines_through(Cell::from_index(cell_index)) {
            self.lines[line].num_remaining -= 1;
        }
    }

    fn child(&self) -> Self {
        Self {
            pos_taken: self.pos_taken,
            lines: self.lines.clone(),
            pending: None,
        }
    }

    /// Open line with the fewest untaken cells, ties broken by line index.
    fn most_constrained_open_line(&self) -> Option<(usize, u8)> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.cells.is_none())
            .map(|(index, line)| (index, line.num_remaining))
            .min_by_key(|&(index, num_remaining)| (num_remaining, index))
    }

    fn untaken_pairs(&self, line: usize) -> Vec<(usize, usize)> {
        let positions: Vec<usize> = line_cells(line)
            .iter()
            .map(|cell| cell.index())
            .filter(|&index| self.pos_taken & (1 << index) == 0)
            .collect();
        positions.into_iter().tuple_combinations().collect()
    }
}

/// Candidate riddle for a complete pair assignment. Each pair is shuffled
/// so the clue order reveals nothing about position within the line.
fn build_candidate(
    rng: &mut StdRng,
    layout: &FinalLayout,
    frame: &RiddleFrame,
    a_cell: Cell,
) -> Riddle {
    let clues = std::array::from_fn(|line| {
        let (first, second) = frame.lines[line]
            .cells
            .expect("complete assignment with an unchosen line");
        let mut pair = [first, second];
        pair.shuffle(rng);
        pair.map(|index| layout.letter_at(Cell::from_index(index)))
    });
    Riddle {
        solution: layout.clone(),
        clues,
        a_cell,
    }
}

/// Search for a clue assignment whose unique solution is `layout`, using
/// the constraint solver as the uniqueness oracle: a candidate is accepted
/// only when a fresh board given its clues solves to exactly one layout.
///
/// Panics if the pair search space is exhausted; a valid layout always
/// admits an unambiguous assignment in practice.
pub fn riddle_for_layout(rng: &mut StdRng, layout: &FinalLayout) -> Riddle {
    let a_cell = layout.a_cell();
    let mut root = RiddleFrame::new();
    root.mark(a_cell.index());
    let mut stack = vec![root];
    let mut candidates_checked = 0usize;

    while !stack.is_empty() {
        let top = stack.last_mut().unwrap();

        if top.pending.is_none() {
            match top.most_constrained_open_line() {
                None => {
                    // Every line has its pair: consult the oracle.
                    let candidate = build_candidate(rng, layout, top, a_cell);
                    candidates_checked += 1;
                    let mut oracle = ConstraintBoard::new();
                    oracle.apply_clues(&candidate.board_clues());
                    if oracle.solve() == Ok(SolveOutcome::Success) {
                        info!(
                            target: "riddle_generator",
                            "unique riddle found after {} candidate assignments",
                            candidates_checked
                        );
                        return candidate;
                    }
                    trace!(
                        target: "riddle_generator",
                        "candidate assignment is ambiguous or unsolvable, backtracking"
                    );
                    stack.pop();
                    continue;
                }
                Some((_, num_remaining)) if num_remaining < 2 => {
                    // Too few untaken cells left to form a pair.
                    stack.pop();
                    continue;
                }
                Some((line, _)) => {
                    let mut pairs = top.untaken_pairs(line);
                    pairs.shuffle(rng);
                    top.pending = Some((line, pairs));
                }
            }
        }

        let top = stack.last_mut().unwrap();
        let (line, pairs) = top.pending.as_mut().unwrap();
        let line = *line;
        if pairs.is_empty() {
            stack.pop();
            continue;
        }
        let (first, second) = pairs.remove(0);

        let mut next = top.child();
        next.mark(first);
        next.mark(second);
        next.lines[line].cells = Some((first, second));
        stack.push(next);
    }

    panic!("clue pair search exhausted without an unambiguous riddle");
}

/// Generate a layout and a riddle over it from one sequential RNG stream.
pub fn calc_riddle(rng: &mut StdRng) -> Riddle {
    let layout = calc_final_layout(rng);
    trace!(target: "riddle_generator", "layout:\n{}", layout);
    riddle_for_layout(rng, &layout)
}
