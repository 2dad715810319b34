//! The letter grid.

use crate::Position;
use serde::{Deserialize, Serialize};

/// A square matrix of cells, each empty or holding one uppercase letter.
///
/// All accessors are bounds-checked and panic on out-of-range positions;
/// callers are expected to pre-validate candidate placements before
/// touching the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an empty `size`×`size` grid
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            self.in_bounds(pos),
            "position ({}, {}) out of bounds for grid size {}",
            pos.row,
            pos.col,
            self.size
        );
        pos.row * self.size + pos.col
    }

    pub fn get(&self, pos: Position) -> Option<char> {
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Position, ch: char) {
        let idx = self.index(pos);
        self.cells[idx] = Some(ch);
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Number of cells holding a letter
    pub fn letter_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Row-major copy of the matrix, for serialization to renderers
    pub fn rows(&self) -> Vec<Vec<Option<char>>> {
        (0..self.size)
            .map(|r| (0..self.size).map(|c| self.get(Position::new(r, c))).collect())
            .collect()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                match self.get(Position::new(row, col)) {
                    Some(ch) => write!(f, "{} ", ch)?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
