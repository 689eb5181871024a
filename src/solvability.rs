//! Parity test deciding whether a grid can reach the goal at all.
//!
//! Sliding the blank sideways never changes the row-major tile order, and
//! sliding it vertically jumps one tile over `width - 1` others. On odd
//! widths that keeps the inversion parity fixed; on even widths every
//! vertical move flips it while also changing the blank's row, so the
//! invariant becomes inversions plus the blank's distance from the bottom.
//!
//! A single row or column cannot reorder its tiles at all, so there the
//! tiles must already be in order.

use log::debug;

use crate::error::SolveError;
use crate::puzzle::Grid;

/// Number of pairs `i < j` with `tiles[i] > tiles[j]`.
pub fn count_inversions(tiles: &[u32]) -> usize {
    tiles
        .iter()
        .enumerate()
        .map(|(i, &val)| tiles[i + 1..].iter().filter(|&&next| next < val).count())
        .sum()
}

/// `tiles` is the row-major sequence with the blank removed and
/// `blank_row` is the blank's row counted from the top.
pub fn is_solvable(tiles: &[u32], width: usize, height: usize, blank_row: usize) -> bool {
    let inversions = count_inversions(tiles);

    if width == 1 || height == 1 {
        inversions == 0
    } else if width % 2 == 1 {
        inversions % 2 == 0
    } else {
        let distance = (height - 1) - blank_row;
        (inversions + distance) % 2 == 0
    }
}

/// Gate run once before searching.
pub fn check(grid: &Grid) -> Result<(), SolveError> {
    let (blank_row, _) = grid.blank().ok_or(SolveError::MissingBlank)?;
    let tiles = grid.tiles_without_blank();

    if is_solvable(&tiles, grid.cols(), grid.rows(), blank_row) {
        debug!(
            "{}x{} grid passes the parity check (blank on row {})",
            grid.rows(),
            grid.cols(),
            blank_row
        );
        Ok(())
    } else {
        Err(SolveError::Unsolvable {
            inversions: count_inversions(&tiles),
            blank_row,
        })
    }
}
