//! Crossword generation engine.
//!
//! Places a clue list onto a square letter grid so that words intersect
//! wherever possible, numbers the resulting entries, and exposes the
//! finished puzzle plus an interactive play session (check, reveal,
//! hint, reset) to external renderers.

mod error;
mod generator;
mod grid;
mod numbering;
mod placement;
mod play;
mod rng;
mod word;

pub use error::PuzzleError;
pub use generator::{
    Generator, GeneratorConfig, Puzzle, MAX_GRID_SIZE, MAX_WORD_LIMIT, MIN_GRID_SIZE,
};
pub use grid::Grid;
pub use numbering::{number_clues, NumberGrid, Numbering};
pub use placement::{can_place, count_crossings, place_all, Layout};
pub use play::{CellCheck, CheckSummary, PlaySession};
pub use word::{ClueEntry, Direction, PlacedWord, Position, WordEntry, WordListEntry};
