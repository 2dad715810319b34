//! Interactive play over a finished puzzle.
//!
//! The puzzle itself is read-only state; the session layers the player's
//! entries on top, so resetting or revealing never recomputes placement.

use crate::rng::SimpleRng;
use crate::{Position, Puzzle};
use serde::{Deserialize, Serialize};

/// Result of checking one cell against the solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellCheck {
    /// Entered letter matches the solution
    Correct,
    /// Entered letter differs from the solution
    Incorrect,
    /// Letter cell with no entry yet
    Blank,
    /// Not a letter cell
    Block,
}

/// Tally over every letter cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSummary {
    pub correct: usize,
    pub incorrect: usize,
    pub blank: usize,
}

/// Player state for one puzzle: entered letters plus the cells locked by
/// hints or a full reveal.
pub struct PlaySession {
    puzzle: Puzzle,
    entries: Vec<Option<char>>,
    locked: Vec<bool>,
    rng: SimpleRng,
}

impl PlaySession {
    pub fn new(puzzle: Puzzle) -> Self {
        Self::with_rng(puzzle, SimpleRng::new())
    }

    /// Session with a seeded RNG, for reproducible hints
    pub fn with_seed(puzzle: Puzzle, seed: u64) -> Self {
        Self::with_rng(puzzle, SimpleRng::with_seed(seed))
    }

    fn with_rng(puzzle: Puzzle, rng: SimpleRng) -> Self {
        let cells = puzzle.size() * puzzle.size();
        Self {
            puzzle,
            entries: vec![None; cells],
            locked: vec![false; cells],
            rng,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            self.puzzle.grid().in_bounds(pos),
            "position ({}, {}) out of bounds for grid size {}",
            pos.row,
            pos.col,
            self.puzzle.size()
        );
        pos.row * self.puzzle.size() + pos.col
    }

    fn letter_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.puzzle.size();
        (0..size)
            .flat_map(move |r| (0..size).map(move |c| Position::new(r, c)))
            .filter(|&p| self.puzzle.is_letter_cell(p))
    }

    pub fn entry(&self, pos: Position) -> Option<char> {
        self.entries[self.index(pos)]
    }

    pub fn is_locked(&self, pos: Position) -> bool {
        self.locked[self.index(pos)]
    }

    /// Enter a letter. Rejected on block cells and on cells locked by a
    /// hint or reveal.
    pub fn set_entry(&mut self, pos: Position, ch: char) -> bool {
        let idx = self.index(pos);
        if !self.puzzle.is_letter_cell(pos) || self.locked[idx] {
            return false;
        }
        self.entries[idx] = Some(ch.to_ascii_uppercase());
        true
    }

    pub fn clear_entry(&mut self, pos: Position) -> bool {
        let idx = self.index(pos);
        if !self.puzzle.is_letter_cell(pos) || self.locked[idx] {
            return false;
        }
        self.entries[idx] = None;
        true
    }

    pub fn check(&self, pos: Position) -> CellCheck {
        let Some(solution) = self.puzzle.solution_letter(pos) else {
            return CellCheck::Block;
        };
        match self.entry(pos) {
            None => CellCheck::Blank,
            Some(ch) if ch == solution => CellCheck::Correct,
            Some(_) => CellCheck::Incorrect,
        }
    }

    pub fn check_all(&self) -> CheckSummary {
        let mut summary = CheckSummary::default();
        for pos in self.letter_positions() {
            match self.check(pos) {
                CellCheck::Correct => summary.correct += 1,
                CellCheck::Incorrect => summary.incorrect += 1,
                CellCheck::Blank => summary.blank += 1,
                CellCheck::Block => {}
            }
        }
        summary
    }

    /// Fill every letter cell from the solution and lock it. Touches only
    /// the entry layer, so calling it again changes nothing.
    pub fn reveal_all(&mut self) {
        let positions: Vec<Position> = self.letter_positions().collect();
        for pos in positions {
            let idx = self.index(pos);
            self.entries[idx] = self.puzzle.solution_letter(pos);
            self.locked[idx] = true;
        }
    }

    /// Fill one uniformly chosen blank-or-incorrect cell with its
    /// solution letter and lock it. Returns the cell, or `None` when the
    /// grid is already solved.
    pub fn hint(&mut self) -> Option<Position> {
        let unsolved: Vec<Position> = self
            .letter_positions()
            .filter(|&p| self.entry(p) != self.puzzle.solution_letter(p))
            .collect();
        if unsolved.is_empty() {
            return None;
        }
        let pos = unsolved[self.rng.next_usize(unsolved.len())];
        let idx = self.index(pos);
        self.entries[idx] = self.puzzle.solution_letter(pos);
        self.locked[idx] = true;
        Some(pos)
    }

    /// Clear all entries and locks. The puzzle is untouched.
    pub fn reset(&mut self) {
        self.entries.fill(None);
        self.locked.fill(false);
    }

    pub fn is_complete(&self) -> bool {
        self.letter_positions()
            .all(|p| self.entry(p) == self.puzzle.solution_letter(p))
    }
}
