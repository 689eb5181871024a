use thiserror::Error;

/// Reasons a puzzle is rejected before or during the search.
///
/// All of these are expected conditions for caller-supplied input. An
/// exhausted frontier after the solvability gate passed is not listed here:
/// it is a bug and panics instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("grid must be a non-empty rectangle of at least two cells")]
    InvalidShape,
    #[error("grid has no blank tile (0)")]
    MissingBlank,
    #[error("puzzle is not solvable ({inversions} inversions, blank on row {blank_row})")]
    Unsolvable { inversions: usize, blank_row: usize },
    #[error("tile {value} is out of range or repeated; tiles must be a permutation of 0..rows*cols")]
    MalformedTileSet { value: u32 },
}
