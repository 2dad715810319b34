//! Word placement: the legality predicate, crossing counter, and the
//! greedy first-fit engine.

use crate::{Direction, Grid, PlacedWord, Position, WordEntry};
use serde::{Deserialize, Serialize};

/// Whether `word` may legally occupy the span starting at `start` along
/// `dir`. Pure predicate, never mutates the grid.
///
/// Legal means: the span fits on the grid, the cells capping either end
/// are empty or off-grid, every target cell is empty or already holds the
/// identical letter, and no fresh letter sits sideways against an
/// unrelated run.
pub fn can_place(grid: &Grid, word: &str, start: Position, dir: Direction) -> bool {
    let letters: Vec<char> = word.chars().collect();
    let len = letters.len();
    if len == 0 {
        return false;
    }
    let size = grid.size();

    match dir {
        Direction::Across => {
            if start.row >= size || start.col + len > size {
                return false;
            }
        }
        Direction::Down => {
            if start.col >= size || start.row + len > size {
                return false;
            }
        }
    }

    // End caps: a letter directly before or after the span would merge
    // two words into one run
    if let Some(before) = start.back_offset(dir, 1) {
        if !grid.is_empty(before) {
            return false;
        }
    }
    let after = start.offset(dir, len);
    if grid.in_bounds(after) && !grid.is_empty(after) {
        return false;
    }

    let perp = dir.perpendicular();
    for (i, &ch) in letters.iter().enumerate() {
        let pos = start.offset(dir, i);
        match grid.get(pos) {
            // Intentional crossing: the perpendicular neighbors belong to
            // the word being crossed, so no isolation check here
            Some(existing) if existing == ch => continue,
            Some(_) => return false,
            None => {
                if let Some(side) = pos.back_offset(perp, 1) {
                    if !grid.is_empty(side) {
                        return false;
                    }
                }
                let side = pos.offset(perp, 1);
                if grid.in_bounds(side) && !grid.is_empty(side) {
                    return false;
                }
            }
        }
    }

    true
}

/// How many letters of `word` would land on a cell already holding that
/// exact letter. Does not mutate the grid.
pub fn count_crossings(grid: &Grid, word: &str, start: Position, dir: Direction) -> usize {
    word.chars()
        .enumerate()
        .filter(|&(i, ch)| {
            let pos = start.offset(dir, i);
            grid.in_bounds(pos) && grid.get(pos) == Some(ch)
        })
        .count()
}

/// Outcome of a placement run: the words that made it onto the grid and
/// the words that had to be dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub placed: Vec<PlacedWord>,
    pub dropped: Vec<WordEntry>,
}

/// Place every word it can, longest first.
///
/// The first word goes horizontally through the center; each later word
/// first searches for a natural crossing with the words already down
/// (first fit, in placement order), then falls back to row-major scans
/// for a horizontal and then a vertical slot. In strict mode every
/// non-seed placement must cross at least once, so an unconnectable word
/// is dropped rather than parked in a corner.
pub fn place_all(words: &[WordEntry], grid: &mut Grid, strict: bool) -> Layout {
    let mut ordered: Vec<WordEntry> = words.to_vec();
    // Stable sort: equal lengths keep their original list order
    ordered.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut layout = Layout {
        placed: Vec::new(),
        dropped: Vec::new(),
    };

    for entry in ordered {
        if layout.placed.is_empty() {
            // Seed word: horizontal, centered
            let start = Position::new(
                grid.size() / 2,
                grid.size().saturating_sub(entry.len()) / 2,
            );
            if can_place(grid, &entry.answer, start, Direction::Across) {
                place_word(grid, &mut layout.placed, &entry, start, Direction::Across);
            } else {
                layout.dropped.push(entry);
            }
            continue;
        }

        if try_place(grid, &mut layout.placed, &entry, strict) {
            continue;
        }
        layout.dropped.push(entry);
    }

    layout
}

fn fits(grid: &Grid, word: &str, start: Position, dir: Direction, strict: bool) -> bool {
    can_place(grid, word, start, dir)
        && (!strict || count_crossings(grid, word, start, dir) >= 1)
}

#[allow(clippy::needless_range_loop)]
fn try_place(
    grid: &mut Grid,
    placed: &mut Vec<PlacedWord>,
    entry: &WordEntry,
    strict: bool,
) -> bool {
    let letters: Vec<char> = entry.answer.chars().collect();

    // Natural crossing search: for each letter of the candidate, walk the
    // placed words in placement order looking for a matching cell, and
    // take the first anchor that passes validation
    for (i, &ch) in letters.iter().enumerate() {
        for w in 0..placed.len() {
            let dir = placed[w].direction.perpendicular();
            for c in 0..placed[w].cells.len() {
                let cell = placed[w].cells[c];
                if grid.get(cell) != Some(ch) {
                    continue;
                }
                let Some(start) = cell.back_offset(dir, i) else {
                    continue;
                };
                if fits(grid, &entry.answer, start, dir, strict) {
                    place_word(grid, placed, entry, start, dir);
                    return true;
                }
            }
        }
    }

    let size = grid.size();
    let len = letters.len();
    if len > size {
        return false;
    }

    // No crossing found: exhaustive horizontal scan, then vertical
    for row in 0..size {
        for col in 0..=size - len {
            let start = Position::new(row, col);
            if fits(grid, &entry.answer, start, Direction::Across, strict) {
                place_word(grid, placed, entry, start, Direction::Across);
                return true;
            }
        }
    }
    for row in 0..=size - len {
        for col in 0..size {
            let start = Position::new(row, col);
            if fits(grid, &entry.answer, start, Direction::Down, strict) {
                place_word(grid, placed, entry, start, Direction::Down);
                return true;
            }
        }
    }

    false
}

fn place_word(
    grid: &mut Grid,
    placed: &mut Vec<PlacedWord>,
    entry: &WordEntry,
    start: Position,
    dir: Direction,
) {
    let mut cells = Vec::with_capacity(entry.len());
    for (i, ch) in entry.answer.chars().enumerate() {
        let pos = start.offset(dir, i);
        grid.set(pos, ch);
        cells.push(pos);
    }
    placed.push(PlacedWord {
        answer: entry.answer.clone(),
        clue: entry.clue.clone(),
        start,
        direction: dir,
        cells,
        clue_number: None,
    });
}
