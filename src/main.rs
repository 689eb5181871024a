use clap::Parser;
use crossterm::style::Stylize;
use log::info;
use rand::{rngs::StdRng, thread_rng, SeedableRng};
use std::process::ExitCode;

use slide_solver::{moves_to_string, solve_grid, Grid};

// Beyond this the shuffle itself becomes the bottleneck.
const MAX_RANDOM_CELLS: usize = 1 << 16;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Puzzle to solve: rows separated by ';', tiles by ',' and 0 for the
    /// blank, e.g. "1,2,3;4,0,5;7,8,6". A random puzzle is used if omitted.
    #[clap(short, long)]
    grid: Option<String>,

    /// Rows of the random puzzle
    #[clap(short, long, default_value_t = 3)]
    rows: usize,

    /// Columns of the random puzzle
    #[clap(short, long, default_value_t = 3)]
    cols: usize,

    /// Seed for the random puzzle
    #[clap(long)]
    seed: Option<u64>,

    /// Print the board after every move
    #[clap(short, long)]
    verbose: bool,
}

fn parse_grid(s: &str) -> Result<Vec<Vec<u32>>, String> {
    s.split(';')
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .enumerate()
        .map(|(i, row)| {
            row.split(',')
                .map(|tile| {
                    tile.trim()
                        .parse::<u32>()
                        .map_err(|e| format!("Row {}: invalid tile '{}': {}", i + 1, tile.trim(), e))
                })
                .collect::<Result<Vec<u32>, String>>()
        })
        .collect()
}

fn load_puzzle(args: &Args) -> Result<Grid, String> {
    match &args.grid {
        Some(s) => {
            let rows = parse_grid(s)?;
            Grid::from_rows(&rows).map_err(|e| e.to_string())
        }
        None => {
            let cells = args.rows.checked_mul(args.cols).unwrap_or(usize::MAX);
            if cells > MAX_RANDOM_CELLS {
                return Err(format!(
                    "Cannot build a {}x{} puzzle: random puzzles are limited to {} cells",
                    args.rows, args.cols, MAX_RANDOM_CELLS
                ));
            }
            let grid = match args.seed {
                Some(seed) => Grid::shuffled(args.rows, args.cols, &mut StdRng::seed_from_u64(seed)),
                None => Grid::shuffled(args.rows, args.cols, &mut thread_rng()),
            };
            grid.map_err(|e| format!("Cannot build a {}x{} puzzle: {}", args.rows, args.cols, e))
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let puzzle = match load_puzzle(&args) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("{} {}", "Invalid puzzle:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}\n{}", "Puzzle:".bold(), puzzle);
    info!("solving {}x{} puzzle", puzzle.rows(), puzzle.cols());

    let solution = match solve_grid(puzzle.clone()) {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("{} {}", "No solution:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "{} {} moves: {}",
        "Solved in".green().bold(),
        solution.moves.len(),
        moves_to_string(&solution.moves)
    );

    if args.verbose {
        let mut board = puzzle;
        for &movement in &solution.moves {
            match board.slide(movement) {
                Some(next) => board = next,
                None => break,
            }
            println!("{}\n{}", movement.to_string().cyan(), board);
        }
    }

    ExitCode::SUCCESS
}
