//! # Sliding Puzzle Solver
//!
//! Finds a shortest sequence of blank moves that takes a rectangular
//! sliding-tile puzzle (one blank, tiles `1..rows*cols`) to its solved
//! arrangement, with the blank in the bottom-right corner.
//!
//! ## Modules
//! - `puzzle`: the immutable `Grid` and the `Move` labels.
//! - `solvability`: the inversion-parity gate run before any search.
//! - `heuristic`: Manhattan distance against a fixed goal.
//! - `search`: search states, successor generation and the A* loop.
//! - `error`: the `SolveError` kinds reported for rejected input.
//!
//! A move names the direction the blank travels: `U`, `D`, `L` or `R`.

pub mod error;
pub mod heuristic;
pub mod puzzle;
pub mod search;
pub mod solvability;

use log::warn;

pub use crate::error::SolveError;
pub use crate::puzzle::{Grid, Move};
pub use crate::search::{SearchStats, Solution};

use crate::heuristic::Manhattan;
use crate::search::SearchState;

/// Solves a puzzle given as rows of tiles, `0` being the blank.
///
/// Returns the moves in order; an already solved grid yields an empty
/// list.
pub fn solve(rows: &[Vec<u32>]) -> Result<Vec<Move>, SolveError> {
    let grid = Grid::from_rows(rows).map_err(|err| {
        warn!("rejected puzzle: {}", err);
        err
    })?;
    solve_grid(grid).map(|solution| solution.moves)
}

/// Like [`solve`], but takes a built grid and also reports search
/// statistics.
pub fn solve_grid(grid: Grid) -> Result<Solution, SolveError> {
    let goal = Grid::goal(grid.rows(), grid.cols());
    let heuristic = Manhattan::new(goal);

    solvability::check(&grid)
        .and_then(|()| SearchState::initial(grid, &heuristic))
        .and_then(|initial| search::astar(initial, &heuristic))
        .map_err(|err| {
            warn!("rejected puzzle: {}", err);
            err
        })
}

/// Compact form of a path, e.g. `"RRRD"`.
pub fn moves_to_string(moves: &[Move]) -> String {
    moves.iter().map(Move::label).collect()
}

/// Parses the compact form produced by [`moves_to_string`].
pub fn moves_from_str(s: &str) -> Option<Vec<Move>> {
    s.chars().map(Move::from_label).collect()
}
