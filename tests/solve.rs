use rand::{rngs::StdRng, SeedableRng};
use slide_solver::puzzle::MOVES;
use slide_solver::{moves_to_string, solve, solve_grid, Grid, SolveError};
use std::collections::{HashMap, VecDeque};

/// Distance from every reachable configuration to the goal, by BFS.
fn distances_to_goal(rows: usize, cols: usize) -> HashMap<Grid, usize> {
    let goal = Grid::goal(rows, cols);
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(goal.clone(), 0);
    queue.push_back(goal);

    while let Some(grid) = queue.pop_front() {
        let d = dist[&grid];
        for next in MOVES.iter().filter_map(|&m| grid.slide(m)) {
            if !dist.contains_key(&next) {
                dist.insert(next.clone(), d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

fn assert_reaches_goal(rows: &[Vec<u32>]) -> usize {
    let start = Grid::from_rows(rows).unwrap();
    let moves = solve(rows).unwrap();
    let end = start.apply_moves(&moves).expect("every move stays on the board");
    assert_eq!(end, Grid::goal(start.rows(), start.cols()));
    moves.len()
}

#[test_log::test]
fn test_solved_2x2_needs_no_moves() {
    assert_eq!(solve(&[vec![1, 2], vec![3, 0]]), Ok(vec![]));
}

#[test_log::test]
fn test_2x2_reverse_corner() {
    let rows = vec![vec![0, 3], vec![2, 1]];
    let len = assert_reaches_goal(&rows);
    assert!(len > 0);
    assert_eq!(len, distances_to_goal(2, 2)[&Grid::from_rows(&rows).unwrap()]);
}

#[test_log::test]
fn test_4x3_swapped_pair_is_unsolvable() {
    let result = solve(&[vec![2, 1, 3, 4], vec![5, 6, 7, 8], vec![9, 10, 11, 0]]);
    assert!(matches!(result, Err(SolveError::Unsolvable { .. })));
}

#[test_log::test]
fn test_4x3_easy() {
    let rows = vec![vec![1, 2, 3, 4], vec![0, 5, 6, 7], vec![9, 10, 11, 8]];
    assert_eq!(assert_reaches_goal(&rows), 4);
    assert_eq!(moves_to_string(&solve(&rows).unwrap()), "RRRD");
}

#[test_log::test]
fn test_harder_boards_reach_goal() {
    assert_reaches_goal(&[vec![5, 4], vec![3, 0], vec![1, 2]]);
    assert_reaches_goal(&[vec![1, 8, 2], vec![0, 4, 3], vec![7, 6, 5]]);
}

#[test]
#[ignore = "slow without optimizations"]
fn test_eleven_tile_boards_reach_goal() {
    assert_reaches_goal(&[vec![7, 5, 10], vec![11, 2, 3], vec![6, 4, 1], vec![9, 8, 0]]);
    assert_reaches_goal(&[vec![10, 5, 3, 7], vec![2, 9, 8, 4], vec![11, 1, 6, 0]]);
}

#[test]
fn test_optimal_on_every_2x3_configuration() {
    for (grid, &expected) in &distances_to_goal(2, 3) {
        let solution = solve_grid(grid.clone()).unwrap();
        assert_eq!(solution.moves.len(), expected, "start:\n{}", grid);
    }
}

#[test]
fn test_optimal_on_random_3x3() {
    let dist = distances_to_goal(3, 3);
    assert_eq!(dist.len(), 181_440);

    let mut rng = StdRng::seed_from_u64(2019);
    for _ in 0..40 {
        let grid = Grid::shuffled(3, 3, &mut rng).unwrap();
        let solution = solve_grid(grid.clone()).unwrap();
        assert_eq!(solution.moves.len(), dist[&grid], "start:\n{}", grid);
        assert_eq!(grid.apply_moves(&solution.moves), Some(Grid::goal(3, 3)));
    }
}

#[test]
fn test_deterministic_output() {
    let rows = vec![vec![8, 6, 7], vec![2, 5, 4], vec![3, 0, 1]];
    let first = solve_grid(Grid::from_rows(&rows).unwrap()).unwrap();
    let second = solve_grid(Grid::from_rows(&rows).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test_log::test]
fn test_malformed_inputs_are_reported() {
    assert_eq!(solve(&[vec![1, 2], vec![3, 4]]), Err(SolveError::MissingBlank));
    assert_eq!(
        solve(&[vec![1, 1], vec![3, 0]]),
        Err(SolveError::MalformedTileSet { value: 1 })
    );
    assert!(solve(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 9, 0]]).is_err());
    assert_eq!(solve(&[]), Err(SolveError::InvalidShape));
    assert_eq!(solve(&[vec![0]]), Err(SolveError::InvalidShape));
}
