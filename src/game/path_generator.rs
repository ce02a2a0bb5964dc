use log::trace;
use rand::{rngs::StdRng, seq::SliceRandom, Rng};

use crate::model::{Cell, FinalLayout, BOARD_CELLS};

/// One frame of the path search: the board as visited so far and the
/// shuffled neighbor cells not yet tried from the frame's head cell.
struct PathState {
    cells: [u8; BOARD_CELLS],
    untried: Vec<usize>,
}

/// Unvisited king-move neighbors of `cell_index`.
fn open_neighbors(cells: &[u8; BOARD_CELLS], cell_index: usize) -> Vec<usize> {
    Cell::from_index(cell_index)
        .king_neighbors()
        .into_iter()
        .map(Cell::index)
        .filter(|&neighbor| cells[neighbor] == 0)
        .collect()
}

/// Size of the connected component of unvisited cells containing the first
/// unvisited cell, walking king-move adjacency.
fn num_connected(cells: &[u8; BOARD_CELLS]) -> usize {
    let Some(start) = cells.iter().position(|&value| value == 0) else {
        return 0;
    };
    let mut connected = [false; BOARD_CELLS];
    let mut work = vec![start];
    let mut count = 0;
    while let Some(index) = work.pop() {
        if connected[index] {
            continue;
        }
        connected[index] = true;
        count += 1;
        work.extend(
            open_neighbors(cells, index)
                .into_iter()
                .filter(|&neighbor| !connected[neighbor]),
        );
    }
    count
}

fn push_state(
    stack: &mut Vec<PathState>,
    mut cells: [u8; BOARD_CELLS],
    cell_index: usize,
    rng: &mut StdRng,
) {
    cells[cell_index] = (stack.len() + 1) as u8;
    let mut untried = open_neighbors(&cells, cell_index);
    untried.shuffle(rng);
    stack.push(PathState { cells, untried });
}

/// Random full Hamiltonian-path labeling of the board: depth-first from a
/// uniformly random start cell with shuffled neighbor order, abandoning any
/// branch whose unvisited cells no longer form a single connected
/// component of the required size.
///
/// Panics if the search space is exhausted, which would mean the grid
/// admits no Hamiltonian path at all.
pub fn calc_final_layout(rng: &mut StdRng) -> FinalLayout {
    let mut stack: Vec<PathState> = Vec::new();
    let start = rng.gen_range(0..BOARD_CELLS);
    trace!(target: "path_generator", "starting path at cell {}", start);
    push_state(&mut stack, [0; BOARD_CELLS], start, rng);

    while !stack.is_empty() {
        if stack.len() == BOARD_CELLS {
            return FinalLayout::new(stack.last().unwrap().cells);
        }

        let depth = stack.len();
        let top = stack.last_mut().unwrap();
        let cells = top.cells;
        let next = if top.untried.is_empty() {
            None
        } else {
            Some(top.untried.remove(0))
        };

        match next {
            Some(cell_index) if num_connected(&cells) == BOARD_CELLS - depth => {
                push_state(&mut stack, cells, cell_index, rng);
            }
            _ => {
                stack.pop();
            }
        }
    }

    panic!("no Hamiltonian path found for the grid");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_generated_layouts_are_hamiltonian_paths() {
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            let layout = calc_final_layout(&mut rng);
            assert!(
                layout.is_hamiltonian_path(),
                "seed {} produced an invalid layout: {:?}",
                seed,
                layout
            );
        }
    }

    #[test]
    fn test_generation_is_deterministic_per_seed() {
        let first = calc_final_layout(&mut StdRng::seed_from_u64(42));
        let second = calc_final_layout(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_connectivity_count() {
        // Visiting the full middle column splits the rest in two.
        let mut cells = [0u8; BOARD_CELLS];
        for y in 0..crate::model::LEN {
            cells[Cell::new(2, y).index()] = (y + 1) as u8;
        }
        assert_eq!(num_connected(&cells), 10);
    }
}
