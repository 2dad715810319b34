//! WebAssembly bridge for the crossword engine.
//!
//! Hands the generated grid, number grid, and clue lists to a browser
//! renderer and forwards play interactions (entries, check, reveal,
//! hint, reset) back into the engine. DOM construction stays on the
//! JavaScript side.

use crossword_core::{
    Generator, GeneratorConfig, PlaySession, Position, WordListEntry,
};
use wasm_bindgen::prelude::*;


// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn build_session(words: &[WordListEntry], config: GeneratorConfig) -> Result<PlaySession, JsValue> {
    let puzzle = Generator::with_config(config)
        .generate(words)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    if !puzzle.dropped().is_empty() {
        let names: Vec<&str> = puzzle
            .dropped()
            .iter()
            .map(|w| w.answer.as_str())
            .collect();
        web_sys::console::warn_1(&format!("unplaceable words dropped: {}", names.join(", ")).into());
    }
    Ok(PlaySession::new(puzzle))
}

fn to_js<T: serde::Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

/// The main WASM puzzle controller
#[wasm_bindgen]
pub struct CrosswordGame {
    session: PlaySession,
    words: Vec<WordListEntry>,
    config: GeneratorConfig,
}

#[wasm_bindgen]
impl CrosswordGame {
    /// Build a puzzle from a JSON word list of `{answer, clue}` objects
    #[wasm_bindgen(constructor)]
    pub fn new(words_json: &str, size: usize, strict: bool) -> Result<CrosswordGame, JsValue> {
        let words: Vec<WordListEntry> = serde_json::from_str(words_json)
            .map_err(|e| JsValue::from_str(&format!("bad word list: {e}")))?;
        let config = GeneratorConfig {
            size,
            strict,
            ..Default::default()
        };
        let session = build_session(&words, config)?;
        Ok(CrosswordGame {
            session,
            words,
            config,
        })
    }

    /// Discard all play state and lay the same word list out again
    #[wasm_bindgen]
    pub fn regenerate(&mut self) -> Result<(), JsValue> {
        self.session = build_session(&self.words, self.config)?;
        Ok(())
    }

    /// Grid dimension actually in use (after clamping)
    #[wasm_bindgen]
    pub fn size(&self) -> usize {
        self.session.puzzle().size()
    }

    /// Whether the requested configuration had to be clamped
    #[wasm_bindgen]
    pub fn was_clamped(&self) -> bool {
        self.session.puzzle().was_clamped()
    }

    /// Solution grid as rows of nullable letters
    #[wasm_bindgen]
    pub fn grid(&self) -> JsValue {
        to_js(&self.session.puzzle().grid().rows())
    }

    /// Clue-number grid as rows of nullable numbers
    #[wasm_bindgen]
    pub fn numbers(&self) -> JsValue {
        to_js(&self.session.puzzle().number_grid().rows())
    }

    /// Ordered Across clue list: `{number, clue, length}` objects
    #[wasm_bindgen]
    pub fn across_clues(&self) -> JsValue {
        to_js(&self.session.puzzle().across())
    }

    /// Ordered Down clue list: `{number, clue, length}` objects
    #[wasm_bindgen]
    pub fn down_clues(&self) -> JsValue {
        to_js(&self.session.puzzle().down())
    }

    /// Answers that could not be placed and are absent from the puzzle
    #[wasm_bindgen]
    pub fn dropped_words(&self) -> JsValue {
        let names: Vec<&str> = self
            .session
            .puzzle()
            .dropped()
            .iter()
            .map(|w| w.answer.as_str())
            .collect();
        to_js(&names)
    }

    fn position(&self, row: usize, col: usize) -> Option<Position> {
        let pos = Position::new(row, col);
        self.session.puzzle().grid().in_bounds(pos).then_some(pos)
    }

    /// Solution letter at a cell, or null for block cells
    #[wasm_bindgen]
    pub fn solution_letter(&self, row: usize, col: usize) -> Option<String> {
        let pos = self.position(row, col)?;
        self.session
            .puzzle()
            .solution_letter(pos)
            .map(String::from)
    }

    /// The player's current entry at a cell
    #[wasm_bindgen]
    pub fn entry(&self, row: usize, col: usize) -> Option<String> {
        let pos = self.position(row, col)?;
        self.session.entry(pos).map(String::from)
    }

    /// Enter the first letter of `letter`; an empty string clears the
    /// cell. Returns false when the cell rejects input.
    #[wasm_bindgen]
    pub fn set_entry(&mut self, row: usize, col: usize, letter: &str) -> bool {
        let Some(pos) = self.position(row, col) else {
            return false;
        };
        match letter.chars().next() {
            Some(ch) => self.session.set_entry(pos, ch),
            None => self.session.clear_entry(pos),
        }
    }

    /// Check one cell: "Correct", "Incorrect", "Blank", or "Block"
    #[wasm_bindgen]
    pub fn check_cell(&self, row: usize, col: usize) -> JsValue {
        match self.position(row, col) {
            Some(pos) => to_js(&self.session.check(pos)),
            None => JsValue::NULL,
        }
    }

    /// Tally of correct, incorrect, and blank letter cells
    #[wasm_bindgen]
    pub fn check_all(&self) -> JsValue {
        to_js(&self.session.check_all())
    }

    /// Fill every cell from the solution and lock the grid
    #[wasm_bindgen]
    pub fn reveal_all(&mut self) {
        self.session.reveal_all();
    }

    /// Fill one random unsolved cell; returns `{row, col}` or null
    #[wasm_bindgen]
    pub fn hint(&mut self) -> JsValue {
        match self.session.hint() {
            Some(pos) => to_js(&pos),
            None => JsValue::NULL,
        }
    }

    /// Clear all entries and locks without regenerating the puzzle
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.session.reset();
    }

    #[wasm_bindgen]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }
}
