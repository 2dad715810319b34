//! Clue numbering.

use crate::{ClueEntry, Direction, Grid, PlacedWord, Position};
use serde::{Deserialize, Serialize};

/// Matrix parallel to the letter grid holding the clue number at each
/// word-start cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberGrid {
    size: usize,
    cells: Vec<Option<u32>>,
}

impl NumberGrid {
    fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, pos: Position) -> Option<u32> {
        assert!(
            pos.row < self.size && pos.col < self.size,
            "position ({}, {}) out of bounds for grid size {}",
            pos.row,
            pos.col,
            self.size
        );
        self.cells[pos.row * self.size + pos.col]
    }

    fn set(&mut self, pos: Position, number: u32) {
        self.cells[pos.row * self.size + pos.col] = Some(number);
    }

    /// Row-major copy, for serialization to renderers
    pub fn rows(&self) -> Vec<Vec<Option<u32>>> {
        (0..self.size)
            .map(|r| (0..self.size).map(|c| self.get(Position::new(r, c))).collect())
            .collect()
    }
}

/// Numbered clue lists plus the start-cell number matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Numbering {
    pub across: Vec<ClueEntry>,
    pub down: Vec<ClueEntry>,
    pub numbers: NumberGrid,
}

/// A letter cell starts a word along `dir` if the previous cell on that
/// axis is off-grid or empty and the next cell holds a letter.
fn is_start(grid: &Grid, pos: Position, dir: Direction) -> bool {
    let before_is_open = match pos.back_offset(dir, 1) {
        Some(prev) => grid.is_empty(prev),
        None => true,
    };
    if !before_is_open {
        return false;
    }
    let next = pos.offset(dir, 1);
    grid.in_bounds(next) && !grid.is_empty(next)
}

/// Number every word start and build the ordered clue lists.
///
/// Cells are scanned in row-major order so numbers increase top-to-bottom,
/// left-to-right; a cell that starts both an Across and a Down word gets
/// a single shared number. Pure function of the grid and placement set,
/// so re-running it on unchanged input reproduces the same numbering.
pub fn number_clues(grid: &Grid, placed: &mut [PlacedWord]) -> Numbering {
    let size = grid.size();
    let mut numbers = NumberGrid::new(size);
    let mut counter = 1u32;

    for row in 0..size {
        for col in 0..size {
            let pos = Position::new(row, col);
            if grid.is_empty(pos) {
                continue;
            }
            if is_start(grid, pos, Direction::Across) || is_start(grid, pos, Direction::Down) {
                numbers.set(pos, counter);
                counter += 1;
            }
        }
    }

    let mut across = Vec::new();
    let mut down = Vec::new();
    for pw in placed.iter_mut() {
        pw.clue_number = numbers.get(pw.start);
        if let Some(number) = pw.clue_number {
            let entry = ClueEntry {
                number,
                clue: pw.clue.clone(),
                length: pw.cells.len(),
            };
            match pw.direction {
                Direction::Across => across.push(entry),
                Direction::Down => down.push(entry),
            }
        }
    }
    across.sort_by_key(|e| e.number);
    down.sort_by_key(|e| e.number);

    Numbering {
        across,
        down,
        numbers,
    }
}
