//! A* over grid configurations.
//!
//! The frontier is a binary heap paired with a membership set, and the
//! closed set holds every grid already expanded. A configuration is
//! accepted into the frontier at most once; later rediscoveries are
//! dropped without comparing costs.

use log::{debug, info, trace};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::{Hash, Hasher};

use crate::error::SolveError;
use crate::heuristic::Manhattan;
use crate::puzzle::{Grid, Move, MOVES};

/// A grid plus the bookkeeping the search attaches to it.
///
/// Identity is the grid alone: the same configuration reached by another
/// route compares equal whatever its cost or path.
#[derive(Debug, Clone)]
pub struct SearchState {
    grid: Grid,
    g: u32,
    h: u32,
    path: Vec<Move>,
}

impl SearchState {
    /// Root state with no moves behind it.
    pub fn initial(grid: Grid, heuristic: &Manhattan) -> Result<Self, SolveError> {
        let h = heuristic.evaluate(&grid)?;
        Ok(Self {
            grid,
            g: 0,
            h,
            path: Vec::new(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn g(&self) -> u32 {
        self.g
    }

    pub fn h(&self) -> u32 {
        self.h
    }

    pub fn f(&self) -> u32 {
        self.g + self.h
    }

    pub fn path(&self) -> &[Move] {
        &self.path
    }

    /// Up to four successors, one per legal blank move. Each carries only
    /// its own move until it is accepted into the frontier.
    pub fn neighbors(&self, heuristic: &Manhattan) -> Result<Vec<SearchState>, SolveError> {
        let mut neighbors = Vec::with_capacity(MOVES.len());

        for movement in MOVES {
            if let Some(grid) = self.grid.slide(movement) {
                let h = heuristic.evaluate(&grid)?;
                neighbors.push(SearchState {
                    grid,
                    g: self.g + 1,
                    h,
                    path: vec![movement],
                });
            }
        }

        Ok(neighbors)
    }

    fn prepend_path(&mut self, prefix: &[Move]) {
        let mut path = Vec::with_capacity(prefix.len() + self.path.len());
        path.extend_from_slice(prefix);
        path.append(&mut self.path);
        self.path = path;
    }
}

impl PartialEq for SearchState {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for SearchState {}

impl Hash for SearchState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid.hash(state);
    }
}

/// Counters collected over one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped from the frontier, the goal included.
    pub expanded: usize,
    /// Successors accepted into the frontier.
    pub generated: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub moves: Vec<Move>,
    pub stats: SearchStats,
}

struct Entry {
    seq: u64,
    state: SearchState,
}

impl Entry {
    fn key(&self) -> (u32, u32, u64) {
        (self.state.f(), self.state.g, self.seq)
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // BinaryHeap is a max-heap; reverse so the smallest key pops first.
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

/// Open set ordered by `(f, g, insertion order)`.
///
/// Lower `g` wins among equal `f`, which makes every configuration enter
/// the frontier with its shortest distance. Skipping rediscoveries relies
/// on that.
struct Frontier {
    heap: BinaryHeap<Entry>,
    members: FxHashSet<Grid>,
    next_seq: u64,
}

impl Frontier {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            members: FxHashSet::default(),
            next_seq: 0,
        }
    }

    fn push(&mut self, state: SearchState) {
        self.members.insert(state.grid.clone());
        self.heap.push(Entry {
            seq: self.next_seq,
            state,
        });
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<SearchState> {
        let Entry { state, .. } = self.heap.pop()?;
        self.members.remove(&state.grid);
        Some(state)
    }

    fn contains(&self, grid: &Grid) -> bool {
        self.members.contains(grid)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Runs A* from `initial` to the heuristic's goal.
///
/// # Panics
///
/// Panics if the frontier runs dry. Callers must only search grids that
/// passed [`crate::solvability::check`], for which the goal is always
/// reachable.
pub fn astar(initial: SearchState, heuristic: &Manhattan) -> Result<Solution, SolveError> {
    debug!(
        "searching from h = {} on a {}x{} board",
        initial.h,
        initial.grid.rows(),
        initial.grid.cols()
    );

    let mut stats = SearchStats::default();
    let mut frontier = Frontier::new();
    let mut visited: FxHashSet<Grid> = FxHashSet::default();
    frontier.push(initial);

    while let Some(current) = frontier.pop() {
        stats.expanded += 1;
        visited.insert(current.grid.clone());
        trace!("expand g={} h={}\n{}", current.g, current.h, current.grid);

        if &current.grid == heuristic.goal() {
            info!(
                "found a {}-move solution after expanding {} states ({} generated, peak frontier {})",
                current.path.len(),
                stats.expanded,
                stats.generated,
                stats.max_frontier
            );
            return Ok(Solution {
                moves: current.path,
                stats,
            });
        }

        for mut next in current.neighbors(heuristic)? {
            if frontier.contains(&next.grid) || visited.contains(&next.grid) {
                continue;
            }
            next.prepend_path(&current.path);
            frontier.push(next);
            stats.generated += 1;
        }
        stats.max_frontier = stats.max_frontier.max(frontier.len());
    }

    panic!(
        "frontier exhausted after expanding {} states without reaching the goal; \
         the solvability check passed a grid it should have rejected",
        stats.expanded
    );
}
