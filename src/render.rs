use itertools::Itertools;

use crate::game::ConstraintBoard;
use crate::model::{Riddle, LEN, NUM_LINES};

fn render_row(cols: Vec<String>) -> String {
    let padded = cols
        .into_iter()
        .map(|s| if s.len() == 1 { format!("  {}  ", s) } else { s })
        .join(" | ");
    format!("| {} |\n", padded)
}

/// Per-cell "possible letters" table for a board, one text row per board
/// row plus a column header.
pub fn possible_letters_table(board: &ConstraintBoard) -> String {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(LEN + 1);
    rows.push((0..LEN).map(|x| format!("X = {}", x + 1)).collect());
    for y in 0..LEN {
        rows.push(
            (0..LEN)
                .map(|x| board.possible_letters_for_cell(x, y).iter().join(","))
                .collect(),
        );
    }
    rows.into_iter().map(render_row).collect()
}

/// One possible-letters table per successful layout of a solved board.
pub fn successes_text_tables(board: &ConstraintBoard) -> Vec<String> {
    board
        .successful_layouts()
        .iter()
        .map(possible_letters_table)
        .collect()
}

fn line_name(line: usize) -> String {
    match line {
        0 => "major diagonal".to_string(),
        1 => "minor diagonal".to_string(),
        l if l < 2 + LEN => format!("row {}", l - 2 + 1),
        l => format!("column {}", l - 2 - LEN + 1),
    }
}

/// Printable riddle: the position of A plus the letter pair revealed for
/// each line group.
pub fn riddle_table(riddle: &Riddle) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "A is at ({},{})\n",
        riddle.a_cell.x + 1,
        riddle.a_cell.y + 1
    ));
    for line in 0..NUM_LINES {
        let [first, second] = riddle.clues[line];
        output.push_str(&format!("{:<15} {} {}\n", line_name(line), first, second));
    }
    output
}
