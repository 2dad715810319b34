use thiserror::Error;

/// Errors surfaced by puzzle construction.
///
/// Placement failures are not errors: words that cannot be placed are
/// reported on the generated puzzle's dropped list, and out-of-range
/// configuration is clamped rather than rejected.
#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("no usable words were provided")]
    EmptyWordList,
}
