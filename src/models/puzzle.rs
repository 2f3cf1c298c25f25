use serde::{Deserialize, Serialize};

/// Direction a word is written in. Words always read forward along the vector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
    Diagonal,
}

impl Direction {
    pub const ALL: [Direction; 3] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
    ];

    /// (row step, col step) for one letter along this direction
    pub fn vector(self) -> (usize, usize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Where a word was written into the grid.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub word: String,
    pub start_row: usize,
    pub start_col: usize,
    pub direction: Direction,
}

impl Placement {
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Cells covered by this placement, in reading order.
    pub fn cells(&self) -> Vec<Position> {
        let (row_dir, col_dir) = self.direction.vector();
        (0..self.len())
            .map(|i| Position::new(self.start_row + i * row_dir, self.start_col + i * col_dir))
            .collect()
    }

    /// Last cell of the word, or the start cell for an empty word
    pub fn end(&self) -> Position {
        let (row_dir, col_dir) = self.direction.vector();
        let steps = self.len().saturating_sub(1);
        Position::new(
            self.start_row + steps * row_dir,
            self.start_col + steps * col_dir,
        )
    }

    /// Last cell if every cell of the word lies inside a `size`x`size` grid.
    /// Safe on untrusted start values.
    pub fn checked_end(&self, size: usize) -> Option<Position> {
        let (row_dir, col_dir) = self.direction.vector();
        let steps = self.len().checked_sub(1)?;
        let row = self.start_row.checked_add(steps.checked_mul(row_dir)?)?;
        let col = self.start_col.checked_add(steps.checked_mul(col_dir)?)?;

        (row < size && col < size).then(|| Position::new(row, col))
    }
}

pub type Grid = Vec<Vec<char>>;

/// A finished word-search puzzle. Read-only once generated.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Puzzle {
    pub grid: Grid,
    /// Words that were actually placed, in input order
    pub words: Vec<String>,
    pub placements: Vec<Placement>,
    pub size: usize,
}

impl Puzzle {
    pub fn letter_at(&self, pos: Position) -> Option<char> {
        self.grid.get(pos.row).and_then(|row| row.get(pos.col)).copied()
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_cells_follow_direction() {
        let placement = Placement {
            word: "CAT".to_string(),
            start_row: 1,
            start_col: 2,
            direction: Direction::Diagonal,
        };

        assert_eq!(
            placement.cells(),
            vec![Position::new(1, 2), Position::new(2, 3), Position::new(3, 4)]
        );
        assert_eq!(placement.end(), Position::new(3, 4));
    }

    #[test]
    fn test_placement_len_counts_chars_not_bytes() {
        let placement = Placement {
            word: "大海".to_string(),
            start_row: 0,
            start_col: 0,
            direction: Direction::Vertical,
        };

        assert_eq!(placement.len(), 2);
        assert_eq!(placement.end(), Position::new(1, 0));
    }

    #[test]
    fn test_placement_serializes_camel_case() {
        let placement = Placement {
            word: "DOG".to_string(),
            start_row: 0,
            start_col: 4,
            direction: Direction::Vertical,
        };

        let json = serde_json::to_value(&placement).unwrap();
        assert_eq!(json["startRow"], 0);
        assert_eq!(json["startCol"], 4);
        assert_eq!(json["direction"], "vertical");
    }

    #[test]
    fn test_checked_end_rejects_overflowing_start() {
        let placement = Placement {
            word: "CA".to_string(),
            start_row: usize::MAX,
            start_col: 0,
            direction: Direction::Vertical,
        };
        assert_eq!(placement.checked_end(2), None);

        let placement = Placement {
            word: "CAT".to_string(),
            start_row: 0,
            start_col: 1,
            direction: Direction::Horizontal,
        };
        assert_eq!(placement.checked_end(3), None);
        assert_eq!(placement.checked_end(4), Some(Position::new(0, 3)));

        let empty = Placement {
            word: String::new(),
            start_row: 0,
            start_col: 0,
            direction: Direction::Diagonal,
        };
        assert_eq!(empty.checked_end(3), None);
    }

    #[test]
    fn test_letter_at_out_of_bounds() {
        let puzzle = Puzzle {
            grid: vec![vec!['A', 'B'], vec!['C', 'D']],
            words: vec![],
            placements: vec![],
            size: 2,
        };

        assert_eq!(puzzle.letter_at(Position::new(1, 0)), Some('C'));
        assert_eq!(puzzle.letter_at(Position::new(2, 0)), None);
        assert!(!puzzle.in_bounds(Position::new(0, 2)));
    }
}
