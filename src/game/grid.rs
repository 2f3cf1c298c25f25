use rand::Rng;

use crate::{
    error::PuzzleError,
    models::{Direction, Grid, Locale, Placement, Position, Puzzle},
    utils::letters::{filler_alphabet, normalize_word, MIN_WORD_LEN},
};

pub const DEFAULT_GRID_SIZE: usize = 15;
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;
/// Largest grid the builder accepts
pub const MAX_GRID_SIZE: usize = 64;

/// Builds word-search puzzles of a fixed size.
#[derive(Debug, Clone)]
pub struct PuzzleBuilder {
    size: usize,
    max_attempts: usize,
}

impl Default for PuzzleBuilder {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl PuzzleBuilder {
    pub fn new(size: usize) -> Result<Self, PuzzleError> {
        if !(MIN_WORD_LEN..=MAX_GRID_SIZE).contains(&size) {
            return Err(PuzzleError::InvalidGridSize {
                size,
                min: MIN_WORD_LEN,
                max: MAX_GRID_SIZE,
            });
        }

        Ok(Self {
            size,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        })
    }

    /// Placement attempts per word before it is dropped. Zero is treated as one.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Generate a puzzle from raw candidate words.
    ///
    /// Never fails: words that normalize to an unusable length, or that find no
    /// conflict-free spot within the attempt budget, are dropped. The returned
    /// grid is always fully filled.
    pub fn generate<S: AsRef<str>>(
        &self,
        words: &[S],
        locale: Locale,
        rng: &mut impl Rng,
    ) -> Puzzle {
        let mut grid = LetterGrid::new(self.size);
        let mut placed_words = Vec::new();
        let mut placements = Vec::new();

        for raw in words {
            let raw = raw.as_ref();
            let Some(word) = normalize_word(raw, locale, self.size) else {
                tracing::trace!("Skipping unusable word {:?}", raw);
                continue;
            };

            match self.place_word(&mut grid, &word, rng) {
                Some(placement) => {
                    placed_words.push(word);
                    placements.push(placement);
                }
                None => {
                    tracing::debug!(
                        "Dropped word {} after {} placement attempts",
                        word,
                        self.max_attempts
                    );
                }
            }
        }

        tracing::debug!(
            "Placed {} of {} candidate words on a {}x{} grid",
            placements.len(),
            words.len(),
            self.size,
            self.size
        );

        Puzzle {
            grid: grid.fill(locale, rng),
            words: placed_words,
            placements,
            size: self.size,
        }
    }

    /// Same as [`generate`](Self::generate) with a fresh thread-local generator
    pub fn generate_with_entropy<S: AsRef<str>>(&self, words: &[S], locale: Locale) -> Puzzle {
        let mut rng = rand::rng();
        self.generate(words, locale, &mut rng)
    }

    fn place_word(&self, grid: &mut LetterGrid, word: &str, rng: &mut impl Rng) -> Option<Placement> {
        let letters: Vec<char> = word.chars().collect();

        for _ in 0..self.max_attempts {
            let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            let start = Self::random_start(self.size, letters.len(), direction, rng);

            if grid.fits(&letters, start, direction) {
                grid.write(&letters, start, direction);
                return Some(Placement {
                    word: word.to_string(),
                    start_row: start.row,
                    start_col: start.col,
                    direction,
                });
            }
        }

        None
    }

    /// Uniform start cell such that the whole word stays on the grid.
    /// Requires `len <= size`.
    fn random_start(size: usize, len: usize, direction: Direction, rng: &mut impl Rng) -> Position {
        let (row_dir, col_dir) = direction.vector();
        let last_row = if row_dir == 0 { size - 1 } else { size - len };
        let last_col = if col_dir == 0 { size - 1 } else { size - len };

        Position::new(rng.random_range(0..=last_row), rng.random_range(0..=last_col))
    }
}

/// Generate with the default 15x15 builder and thread-local randomness
pub fn generate_puzzle<S: AsRef<str>>(words: &[S], locale: Locale) -> Puzzle {
    PuzzleBuilder::default().generate_with_entropy(words, locale)
}

/// Working grid where `None` marks a cell no word has claimed yet.
#[derive(Debug, Clone)]
pub(crate) struct LetterGrid {
    size: usize,
    cells: Vec<Vec<Option<char>>>,
}

impl LetterGrid {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![None; size]; size],
        }
    }

    /// Every cell is on the grid and either empty or already holds the same letter
    pub(crate) fn fits(&self, letters: &[char], start: Position, direction: Direction) -> bool {
        let (row_dir, col_dir) = direction.vector();

        letters.iter().enumerate().all(|(i, letter)| {
            let row = start.row + i * row_dir;
            let col = start.col + i * col_dir;
            if row >= self.size || col >= self.size {
                return false;
            }
            match self.cells[row][col] {
                None => true,
                Some(existing) => existing == *letter,
            }
        })
    }

    pub(crate) fn write(&mut self, letters: &[char], start: Position, direction: Direction) {
        let (row_dir, col_dir) = direction.vector();
        for (i, letter) in letters.iter().enumerate() {
            self.cells[start.row + i * row_dir][start.col + i * col_dir] = Some(*letter);
        }
    }

    /// Replace every empty cell with a random filler character
    pub(crate) fn fill(self, locale: Locale, rng: &mut impl Rng) -> Grid {
        let alphabet = filler_alphabet(locale);

        self.cells
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| cell.unwrap_or_else(|| alphabet[rng.random_range(0..alphabet.len())]))
                    .collect()
            })
            .collect()
    }
}
