// Puzzle generation and solving

pub mod grid;
pub mod render;
pub mod selection;
pub mod session;

pub use grid::{generate_puzzle, PuzzleBuilder};
pub use selection::{
    cells_on_line, is_cell_in_solution, resolve_gesture, resolve_selection, solution_mask,
    solution_overlay, HighlightCell,
};
pub use session::{SelectionOutcome, SolveSession};
