use std::collections::HashSet;

use serde::Serialize;

use crate::{
    game::selection::{cells_on_line, resolve_selection},
    models::{Position, Puzzle},
};

/// Result of a single drag gesture during play
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionOutcome {
    /// Not a straight line
    Invalid,
    /// Straight line that spells no puzzle word
    Miss,
    Found { word: String, cells: Vec<Position> },
    AlreadyFound { word: String },
}

/// Found-word bookkeeping for one player working one puzzle.
///
/// The puzzle itself stays untouched; only the set of found words lives here.
#[derive(Debug, Clone, Default)]
pub struct SolveSession {
    found: HashSet<String>,
}

impl SolveSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, puzzle: &Puzzle, start: Position, end: Position) -> SelectionOutcome {
        let Some(cells) = cells_on_line(start, end) else {
            return SelectionOutcome::Invalid;
        };

        match resolve_selection(puzzle, &cells) {
            None => SelectionOutcome::Miss,
            Some(word) if self.found.contains(word) => SelectionOutcome::AlreadyFound {
                word: word.to_string(),
            },
            Some(word) => {
                self.found.insert(word.to_string());
                tracing::debug!("Found word {} ({} of {})", word, self.found.len(), puzzle.words.len());
                SelectionOutcome::Found {
                    word: word.to_string(),
                    cells,
                }
            }
        }
    }

    pub fn is_found(&self, word: &str) -> bool {
        self.found.contains(word)
    }

    /// Found words in puzzle order
    pub fn found_words<'p>(&self, puzzle: &'p Puzzle) -> Vec<&'p str> {
        let mut seen = HashSet::new();
        puzzle
            .words
            .iter()
            .map(String::as_str)
            .filter(|word| self.found.contains(*word) && seen.insert(*word))
            .collect()
    }

    /// Words still hidden, in puzzle order. Duplicate entries are listed once.
    pub fn remaining<'p>(&self, puzzle: &'p Puzzle) -> Vec<&'p str> {
        let mut seen = HashSet::new();
        puzzle
            .words
            .iter()
            .map(String::as_str)
            .filter(|word| !self.found.contains(*word) && seen.insert(*word))
            .collect()
    }

    pub fn is_complete(&self, puzzle: &Puzzle) -> bool {
        puzzle.words.iter().all(|word| self.found.contains(word))
    }

    pub fn reset(&mut self) {
        self.found.clear();
    }
}
