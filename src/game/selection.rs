//! Turning drag gestures into grid lines and checking them against a puzzle.
//!
//! Everything here is read-only over [`Puzzle`]. Gestures that do not form a
//! straight line are an ordinary part of interactive play, so they come back as
//! `None` instead of an error.

use serde::{Deserialize, Serialize};

use crate::models::{Position, Puzzle};

/// One solution cell and the word that covers it.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct HighlightCell {
    pub position: Position,
    pub word: String,
}

/// Cells from `start` to `end` inclusive, in drag order.
///
/// Returns `None` unless the two points share a row, a column, or an exact
/// diagonal. A zero-length drag yields just the start cell.
pub fn cells_on_line(start: Position, end: Position) -> Option<Vec<Position>> {
    let row_diff = end.row as isize - start.row as isize;
    let col_diff = end.col as isize - start.col as isize;

    let straight = row_diff == 0 || col_diff == 0 || row_diff.abs() == col_diff.abs();
    if !straight {
        tracing::trace!("Ignoring non-linear selection {:?} -> {:?}", start, end);
        return None;
    }

    let steps = row_diff.abs().max(col_diff.abs());
    let row_step = row_diff.signum();
    let col_step = col_diff.signum();

    let cells = (0..=steps)
        .map(|i| {
            Position::new(
                (start.row as isize + i * row_step) as usize,
                (start.col as isize + i * col_step) as usize,
            )
        })
        .collect();

    Some(cells)
}

/// Letters under `cells`, in the given order. `None` if any cell is off the grid.
pub fn extract_word(puzzle: &Puzzle, cells: &[Position]) -> Option<String> {
    cells.iter().map(|pos| puzzle.letter_at(*pos)).collect()
}

/// The puzzle word spelled by `cells`, read either forwards or backwards.
pub fn resolve_selection<'p>(puzzle: &'p Puzzle, cells: &[Position]) -> Option<&'p str> {
    if cells.is_empty() {
        return None;
    }

    let forward = extract_word(puzzle, cells)?;
    let backward: String = forward.chars().rev().collect();

    puzzle
        .words
        .iter()
        .find(|word| **word == forward || **word == backward)
        .map(String::as_str)
}

/// Convenience for a whole gesture: line geometry plus word lookup.
pub fn resolve_gesture(puzzle: &Puzzle, start: Position, end: Position) -> Option<&str> {
    let cells = cells_on_line(start, end)?;
    resolve_selection(puzzle, &cells)
}

/// Every placed cell tagged with its word, recomputed from the placements.
pub fn solution_overlay(puzzle: &Puzzle) -> Vec<HighlightCell> {
    puzzle
        .placements
        .iter()
        .flat_map(|placement| {
            placement.cells().into_iter().map(move |position| HighlightCell {
                position,
                word: placement.word.clone(),
            })
        })
        .collect()
}

/// Per-cell flag: does any placement cover this cell
pub fn solution_mask(puzzle: &Puzzle) -> Vec<Vec<bool>> {
    let mut mask = vec![vec![false; puzzle.size]; puzzle.size];
    for placement in &puzzle.placements {
        for pos in placement.cells() {
            if puzzle.in_bounds(pos) {
                mask[pos.row][pos.col] = true;
            }
        }
    }
    mask
}

pub fn is_cell_in_solution(puzzle: &Puzzle, position: Position) -> bool {
    puzzle
        .placements
        .iter()
        .any(|placement| placement.cells().contains(&position))
}
