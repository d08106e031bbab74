use clap::{Parser, ValueEnum};
use slide_puzzle_solver::display::render_solution;
use slide_puzzle_solver::heuristics::{Heuristic, ManhattanDistance, MisplacedTiles};
use slide_puzzle_solver::solver::solve;
use slide_puzzle_solver::utils::parse_puzzle;
use std::fs;
use std::path::PathBuf;
use std::process;

/// Heuristic used to rank frontier paths.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum HeuristicChoice {
    /// Count of tiles not on their goal cell
    Misplaced,
    /// Summed per-tile Manhattan distance to the goal cell
    Distance,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Heuristic for estimating remaining moves
    #[clap(short = 'H', long, value_enum, default_value = "distance")]
    heuristic: HeuristicChoice,

    /// Path to the puzzle file (start grid, blank line, goal grid)
    puzzle_file: PathBuf,
}

fn main() {
    let args = Args::parse();

    let content = fs::read_to_string(&args.puzzle_file).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", args.puzzle_file.display(), e);
        process::exit(1);
    });
    let (start, goal) = parse_puzzle(&content).unwrap_or_else(|e| {
        eprintln!("Invalid puzzle file {}: {}", args.puzzle_file.display(), e);
        process::exit(1);
    });

    let heuristic: &dyn Heuristic = match args.heuristic {
        HeuristicChoice::Misplaced => &MisplacedTiles,
        HeuristicChoice::Distance => &ManhattanDistance,
    };

    println!("Loaded puzzle from {}\n", args.puzzle_file.display());
    let solution = solve(&start, &goal, heuristic);
    println!("{}", render_solution(&solution));
    if !solution.is_empty() {
        println!("Solved in {} moves.", solution.len() - 1);
    }
}
