use rand::{seq::SliceRandom, Rng};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::SolveError;
use crate::solvability;

/// Direction the blank travels on a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

/// Generation order for successors.
pub const MOVES: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

impl Move {
    /// `(row, col)` delta applied to the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// One-character label used in move paths.
    pub fn label(&self) -> char {
        match self {
            Move::Up => 'U',
            Move::Down => 'D',
            Move::Left => 'L',
            Move::Right => 'R',
        }
    }

    pub fn from_label(label: char) -> Option<Self> {
        match label {
            'U' => Some(Move::Up),
            'D' => Some(Move::Down),
            'L' => Some(Move::Left),
            'R' => Some(Move::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// An immutable rectangular arrangement of tiles, stored row-major.
///
/// Equality and hashing only look at the cells. Grids of different shapes
/// are never compared within one search, so the dimensions stay out of
/// both.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Box<[u32]>,
}

impl Grid {
    /// Builds a grid from caller rows. Only the shape is validated; tile
    /// contents are checked by the solvability gate and the heuristic.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self, SolveError> {
        let cols = rows.first().map_or(0, Vec::len);
        if !is_valid_shape(rows.len(), cols) || rows.iter().any(|row| row.len() != cols) {
            return Err(SolveError::InvalidShape);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    /// The solved arrangement: `1..rows*cols` row-major, blank in the
    /// bottom-right corner.
    ///
    /// # Panics
    ///
    /// Panics unless both dimensions are non-zero and the board has at
    /// least two cells. Every grid built through [`Grid::from_rows`] or
    /// [`Grid::shuffled`] satisfies this.
    pub fn goal(rows: usize, cols: usize) -> Self {
        assert!(is_valid_shape(rows, cols), "no {}x{} puzzle exists", rows, cols);
        let len = rows * cols;
        let cells = (1..len as u32).chain(std::iter::once(0)).collect();

        Self { rows, cols, cells }
    }

    /// A uniformly shuffled, solvable arrangement of the goal's tiles.
    ///
    /// Fails with `InvalidShape` for the same shapes [`Grid::from_rows`]
    /// rejects.
    pub fn shuffled<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<Self, SolveError> {
        if !is_valid_shape(rows, cols) {
            return Err(SolveError::InvalidShape);
        }
        let mut cells = Self::goal(rows, cols).cells.into_vec();

        loop {
            cells.shuffle(rng);
            let grid = Self {
                rows,
                cols,
                cells: cells.clone().into_boxed_slice(),
            };
            if solvability::check(&grid).is_ok() {
                return Ok(grid);
            }
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major tile values.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Coordinates of the first blank, if any.
    pub fn blank(&self) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&tile| tile == 0)
            .map(|idx| (idx / self.cols, idx % self.cols))
    }

    /// Row-major tiles with the blank left out.
    pub fn tiles_without_blank(&self) -> Vec<u32> {
        self.cells.iter().copied().filter(|&tile| tile != 0).collect()
    }

    /// The grid after sliding the blank one step in `movement`, or `None`
    /// when that would leave the board (or there is no blank).
    pub fn slide(&self, movement: Move) -> Option<Self> {
        let (row, col) = self.blank()?;
        let (dr, dc) = movement.as_offset();

        let new_row = row.checked_add_signed(dr)?;
        let new_col = col.checked_add_signed(dc)?;
        if new_row >= self.rows || new_col >= self.cols {
            return None;
        }

        let mut cells = self.cells.clone();
        cells.swap(row * self.cols + col, new_row * self.cols + new_col);
        Some(Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        })
    }

    /// Replays `moves` in order; `None` if any of them is illegal.
    pub fn apply_moves(&self, moves: &[Move]) -> Option<Self> {
        moves
            .iter()
            .try_fold(self.clone(), |grid, &movement| grid.slide(movement))
    }

    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.cells.chunks(self.cols).map(<[u32]>::to_vec).collect()
    }
}

/// At least two cells, every tile value representable as `u32`.
fn is_valid_shape(rows: usize, cols: usize) -> bool {
    rows.checked_mul(cols)
        .is_some_and(|len| len >= 2 && u32::try_from(len).is_ok())
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Grid {}

impl Hash for Grid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.cells.len() - 1).to_string().len();
        for row in self.cells.chunks(self.cols) {
            for &val in row {
                if val == 0 {
                    write!(f, "{:>width$} ", ".", width = width)?;
                } else {
                    write!(f, "{:>width$} ", val, width = width)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
