use crate::{game::selection::solution_mask, models::Puzzle};

/// Placeholder for cells outside the answer key
const HIDDEN_CELL: char = '.';

/// Printable grid, one row per line, cells separated by a space
pub fn render_grid(puzzle: &Puzzle) -> String {
    puzzle
        .grid
        .iter()
        .map(|row| join_row(row.iter().copied()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Same layout as [`render_grid`] with filler cells blanked out
pub fn render_answer_key(puzzle: &Puzzle) -> String {
    let mask = solution_mask(puzzle);

    puzzle
        .grid
        .iter()
        .zip(&mask)
        .map(|(row, covered)| {
            join_row(
                row.iter()
                    .zip(covered)
                    .map(|(ch, is_word)| if *is_word { *ch } else { HIDDEN_CELL }),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn join_row(cells: impl Iterator<Item = char>) -> String {
    cells.map(String::from).collect::<Vec<_>>().join(" ")
}
