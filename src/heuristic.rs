use crate::error::SolveError;
use crate::puzzle::Grid;

/// Sum of city-block distances from each tile to its place in a fixed goal.
///
/// The blank is not counted. Every move shifts exactly one tile by one
/// cell, so the estimate changes by exactly one per move and never
/// overestimates.
#[derive(Debug, Clone)]
pub struct Manhattan {
    goal: Grid,
    /// `targets[value]` is where `value` sits in the goal.
    targets: Vec<(usize, usize)>,
}

impl Manhattan {
    pub fn new(goal: Grid) -> Self {
        let mut targets = vec![(0, 0); goal.cells().len()];
        for (idx, &value) in goal.cells().iter().enumerate() {
            targets[value as usize] = (idx / goal.cols(), idx % goal.cols());
        }

        Self { goal, targets }
    }

    pub fn goal(&self) -> &Grid {
        &self.goal
    }

    /// Fails with `MalformedTileSet` when `grid` is not a permutation of
    /// `0..rows*cols`, since some tile then has no goal position.
    pub fn evaluate(&self, grid: &Grid) -> Result<u32, SolveError> {
        debug_assert_eq!((grid.rows(), grid.cols()), (self.goal.rows(), self.goal.cols()));

        let cols = grid.cols();
        let mut seen = vec![false; self.targets.len()];
        let mut distance = 0;

        for (idx, &value) in grid.cells().iter().enumerate() {
            match seen.get_mut(value as usize) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(SolveError::MalformedTileSet { value }),
            }
            if value == 0 {
                continue;
            }

            let (target_row, target_col) = self.targets[value as usize];
            distance += (idx / cols).abs_diff(target_row) + (idx % cols).abs_diff(target_col);
        }

        Ok(distance as u32)
    }
}

/// One-off evaluation against `goal`.
pub fn manhattan_distance(grid: &Grid, goal: &Grid) -> Result<u32, SolveError> {
    Manhattan::new(goal.clone()).evaluate(grid)
}
