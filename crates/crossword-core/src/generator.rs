//! Puzzle generation: configuration, orchestration, and the assembled
//! result handed to renderers.

use crate::{
    number_clues, place_all, ClueEntry, Grid, Layout, NumberGrid, Numbering, PlacedWord,
    Position, PuzzleError, WordEntry, WordListEntry,
};
use serde::{Deserialize, Serialize};

pub const MIN_GRID_SIZE: usize = 5;
pub const MAX_GRID_SIZE: usize = 50;
pub const MAX_WORD_LIMIT: usize = 64;

/// Configuration for puzzle generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Grid dimension (the grid is size × size)
    pub size: usize,
    /// Require every non-seed word to cross an already placed word, so
    /// the puzzle forms a single connected island
    pub strict: bool,
    /// Upper bound on how many words are taken from the input list
    pub max_words: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: 20,
            strict: false,
            max_words: 20,
        }
    }
}

impl GeneratorConfig {
    /// Clamp all fields to their supported ranges. Returns the normalized
    /// config and whether anything had to change.
    pub fn clamp(&self) -> (GeneratorConfig, bool) {
        let clamped = GeneratorConfig {
            size: self.size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE),
            strict: self.strict,
            max_words: self.max_words.clamp(1, MAX_WORD_LIMIT),
        };
        let changed = clamped != *self;
        (clamped, changed)
    }
}

/// A generated crossword: the solution grid, its numbering, and the
/// placement record. Rebuilt wholesale on every generation; nothing in
/// here changes during play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    grid: Grid,
    placed: Vec<PlacedWord>,
    numbering: Numbering,
    dropped: Vec<WordEntry>,
    config: GeneratorConfig,
    clamped: bool,
}

impl Puzzle {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn placed(&self) -> &[PlacedWord] {
        &self.placed
    }

    /// Words that could not be placed and were left out of the puzzle
    pub fn dropped(&self) -> &[WordEntry] {
        &self.dropped
    }

    pub fn numbering(&self) -> &Numbering {
        &self.numbering
    }

    pub fn across(&self) -> &[ClueEntry] {
        &self.numbering.across
    }

    pub fn down(&self) -> &[ClueEntry] {
        &self.numbering.down
    }

    pub fn number_grid(&self) -> &NumberGrid {
        &self.numbering.numbers
    }

    /// The solution letter at a cell, or `None` for a block cell
    pub fn solution_letter(&self, pos: Position) -> Option<char> {
        self.grid.get(pos)
    }

    pub fn is_letter_cell(&self, pos: Position) -> bool {
        !self.grid.is_empty(pos)
    }

    pub fn number_at(&self, pos: Position) -> Option<u32> {
        self.numbering.numbers.get(pos)
    }

    pub fn config(&self) -> GeneratorConfig {
        self.config
    }

    /// Whether the requested configuration or word count had to be
    /// clamped to supported bounds
    pub fn was_clamped(&self) -> bool {
        self.clamped
    }
}

/// Crossword generator
pub struct Generator {
    config: GeneratorConfig,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator with the default configuration
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }

    /// Create a generator with a custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate a puzzle from a clue list.
    ///
    /// Words that cannot be placed are reported on the puzzle's dropped
    /// list, never treated as errors. The only failure is a word list
    /// with no usable entries at all.
    pub fn generate(&self, words: &[WordListEntry]) -> Result<Puzzle, PuzzleError> {
        let (config, mut clamped) = self.config.clamp();

        let mut entries: Vec<WordEntry> = words
            .iter()
            .enumerate()
            .map(|(i, w)| WordEntry::new(&w.answer, &w.clue, i))
            .filter(|e| !e.is_empty())
            .collect();
        if entries.is_empty() {
            return Err(PuzzleError::EmptyWordList);
        }
        if entries.len() > config.max_words {
            entries.truncate(config.max_words);
            clamped = true;
        }

        let mut grid = Grid::new(config.size);
        let Layout {
            mut placed,
            dropped,
        } = place_all(&entries, &mut grid, config.strict);
        let numbering = number_clues(&grid, &mut placed);

        Ok(Puzzle {
            grid,
            placed,
            numbering,
            dropped,
            config,
            clamped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_list(pairs: &[(&str, &str)]) -> Vec<WordListEntry> {
        pairs
            .iter()
            .map(|(a, c)| WordListEntry {
                answer: a.to_string(),
                clue: c.to_string(),
            })
            .collect()
    }

    fn sample_words() -> Vec<WordListEntry> {
        word_list(&[
            ("ALGORITHM", "Step-by-step procedure to solve a problem."),
            ("BINARY", "Number system with only 0s and 1s."),
            ("BUG", "Error in a program."),
            ("CACHE", "High-speed data storage between memory and CPU."),
            ("COMPILER", "Program that translates code into machine language."),
            ("CPU", "Brain of the computer (abbr.)."),
            ("DATABASE", "Organized collection of data."),
            ("DEBUG", "To find and remove errors in code."),
            ("ENCRYPTION", "Process of converting data into a code for security."),
            ("FIREWALL", "Security system that controls network traffic."),
            ("FUNCTION", "Block of code that performs a specific task."),
            ("HARDWARE", "The physical parts of a computer."),
            ("INPUT", "Data entered into a computer."),
            ("JAVA", "Popular programming language that starts with \"J\"."),
            ("KERNEL", "Core part of an operating system."),
            ("LOOP", "Structure for repeating a set of instructions."),
            ("NETWORK", "Collection of computers connected together."),
            ("OUTPUT", "Data produced by a computer."),
            ("PYTHON", "Programming language named after a snake."),
            ("SERVER", "Computer that provides data to other computers."),
        ])
    }

    #[test]
    fn test_generate_full_word_list() {
        let generator = Generator::new();
        let puzzle = generator.generate(&sample_words()).unwrap();

        assert_eq!(puzzle.size(), 20);
        assert_eq!(puzzle.placed().len() + puzzle.dropped().len(), 20);
        assert!(!puzzle.was_clamped());
        // Every placed word agrees with the grid
        for pw in puzzle.placed() {
            for (cell, ch) in pw.cells.iter().zip(pw.answer.chars()) {
                assert_eq!(puzzle.solution_letter(*cell), Some(ch));
            }
        }
        // Clue lists carry the placed words that got numbers
        let numbered = puzzle
            .placed()
            .iter()
            .filter(|pw| pw.clue_number.is_some())
            .count();
        assert_eq!(numbered, puzzle.across().len() + puzzle.down().len());
    }

    #[test]
    fn test_generate_strict_keeps_single_island() {
        let config = GeneratorConfig {
            strict: true,
            ..Default::default()
        };
        let puzzle = Generator::with_config(config)
            .generate(&sample_words())
            .unwrap();

        let mut grid = Grid::new(puzzle.size());
        for (i, pw) in puzzle.placed().iter().enumerate() {
            if i > 0 {
                assert!(
                    crate::count_crossings(&grid, &pw.answer, pw.start, pw.direction) >= 1,
                    "{} placed without a crossing",
                    pw.answer
                );
            }
            for (cell, ch) in pw.cells.iter().zip(pw.answer.chars()) {
                grid.set(*cell, ch);
            }
        }
    }

    #[test]
    fn test_empty_word_list_is_an_error() {
        let generator = Generator::new();
        assert!(matches!(
            generator.generate(&[]),
            Err(PuzzleError::EmptyWordList)
        ));
        // Entries that normalize to nothing count as unusable
        assert!(matches!(
            generator.generate(&word_list(&[("   ", "blank")])),
            Err(PuzzleError::EmptyWordList)
        ));
    }

    #[test]
    fn test_generate_from_json_word_list() {
        let json = r#"[
            {"answer": "cache", "clue": "High-speed data storage."},
            {"answer": "cpu", "clue": "Brain of the computer (abbr.)."}
        ]"#;
        let words: Vec<WordListEntry> = serde_json::from_str(json).unwrap();
        let config = GeneratorConfig {
            size: 9,
            ..Default::default()
        };
        let puzzle = Generator::with_config(config).generate(&words).unwrap();
        assert_eq!(puzzle.placed().len(), 2);
        // Answers were uppercased on the way in
        assert_eq!(puzzle.placed()[0].answer, "CACHE");
    }

    #[test]
    fn test_config_clamping() {
        let config = GeneratorConfig {
            size: 3,
            strict: false,
            max_words: 500,
        };
        let (clamped, changed) = config.clamp();
        assert!(changed);
        assert_eq!(clamped.size, MIN_GRID_SIZE);
        assert_eq!(clamped.max_words, MAX_WORD_LIMIT);

        let (unchanged, changed) = GeneratorConfig::default().clamp();
        assert!(!changed);
        assert_eq!(unchanged, GeneratorConfig::default());
    }

    #[test]
    fn test_word_count_clamp_is_reported() {
        let config = GeneratorConfig {
            max_words: 2,
            ..Default::default()
        };
        let puzzle = Generator::with_config(config)
            .generate(&sample_words())
            .unwrap();
        assert!(puzzle.was_clamped());
        assert_eq!(puzzle.placed().len() + puzzle.dropped().len(), 2);
    }

    #[test]
    fn test_regeneration_replaces_state_wholesale() {
        let generator = Generator::new();
        let first = generator.generate(&sample_words()).unwrap();
        let second = generator.generate(&sample_words()).unwrap();
        // Placement is deterministic for a fixed word list and config
        assert_eq!(first, second);
    }
}
