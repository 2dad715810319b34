//! Value types shared by the placement engine and the numberer.

use serde::{Deserialize, Serialize};

/// Placement axis for a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// Unit step vector `(row_delta, col_delta)` along this axis
    pub fn step(&self) -> (usize, usize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    /// The other axis
    pub fn perpendicular(&self) -> Direction {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Across => write!(f, "Across"),
            Direction::Down => write!(f, "Down"),
        }
    }
}

/// A cell coordinate (0-based, row-major)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell `i` steps forward from this one along `dir`
    pub fn offset(&self, dir: Direction, i: usize) -> Position {
        let (dr, dc) = dir.step();
        Position::new(self.row + dr * i, self.col + dc * i)
    }

    /// The cell `i` steps backward along `dir`, or `None` if that walks
    /// off the top/left edge.
    pub fn back_offset(&self, dir: Direction, i: usize) -> Option<Position> {
        let (dr, dc) = dir.step();
        Some(Position::new(
            self.row.checked_sub(dr * i)?,
            self.col.checked_sub(dc * i)?,
        ))
    }
}

/// A word-list entry as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordListEntry {
    pub answer: String,
    pub clue: String,
}

/// A normalized input word: uppercased, whitespace stripped, tagged with
/// its index in the original list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub answer: String,
    pub clue: String,
    pub original_index: usize,
}

impl WordEntry {
    pub fn new(answer: &str, clue: &str, original_index: usize) -> Self {
        let answer = answer
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_uppercase)
            .collect();
        Self {
            answer,
            clue: clue.to_string(),
            original_index,
        }
    }

    /// Letter count (not byte length)
    pub fn len(&self) -> usize {
        self.answer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.answer.is_empty()
    }
}

/// A word that made it onto the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub answer: String,
    pub clue: String,
    pub start: Position,
    pub direction: Direction,
    /// One cell per letter, in letter order
    pub cells: Vec<Position>,
    /// Assigned by the numberer after all words are placed
    pub clue_number: Option<u32>,
}

/// One line of the Across or Down clue list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueEntry {
    pub number: u32,
    pub clue: String,
    pub length: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_steps() {
        assert_eq!(Direction::Across.step(), (0, 1));
        assert_eq!(Direction::Down.step(), (1, 0));
        assert_eq!(Direction::Across.perpendicular(), Direction::Down);
        assert_eq!(Direction::Down.perpendicular(), Direction::Across);
    }

    #[test]
    fn test_position_offset() {
        let pos = Position::new(3, 4);
        assert_eq!(pos.offset(Direction::Across, 2), Position::new(3, 6));
        assert_eq!(pos.offset(Direction::Down, 2), Position::new(5, 4));
    }

    #[test]
    fn test_position_back_offset() {
        let pos = Position::new(3, 4);
        assert_eq!(
            pos.back_offset(Direction::Down, 3),
            Some(Position::new(0, 4))
        );
        assert_eq!(pos.back_offset(Direction::Down, 4), None);
        assert_eq!(
            pos.back_offset(Direction::Across, 4),
            Some(Position::new(3, 0))
        );
        assert_eq!(pos.back_offset(Direction::Across, 5), None);
    }

    #[test]
    fn test_word_entry_normalization() {
        let entry = WordEntry::new("fire wall", "Network guard", 7);
        assert_eq!(entry.answer, "FIREWALL");
        assert_eq!(entry.len(), 8);
        assert_eq!(entry.original_index, 7);
    }

    #[test]
    fn test_word_entry_empty_after_normalization() {
        let entry = WordEntry::new("   ", "Blank", 0);
        assert!(entry.is_empty());
    }
}
