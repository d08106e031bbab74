use slide_puzzle_solver::board::Board;
use slide_puzzle_solver::display::render_solution;
use slide_puzzle_solver::heuristics::ManhattanDistance;
use slide_puzzle_solver::solver::solve;

fn run_example(name: &str, start: &Board, goal: &Board) {
    println!("=== {} ===", name);
    let solution = solve(start, goal, &ManhattanDistance);
    println!("{}", render_solution(&solution));
    if !solution.is_empty() {
        println!("Solved in {} moves.\n", solution.len() - 1);
    }
}

fn main() {
    // The classic 8-puzzle textbook instance.
    let start_8 = Board::from_rows(&[vec![2, 8, 3], vec![1, 6, 4], vec![7, 0, 5]])
        .expect("example board is valid");
    let goal_8 = Board::from_rows(&[vec![1, 2, 3], vec![8, 0, 4], vec![7, 6, 5]])
        .expect("example board is valid");
    run_example("8-puzzle", &start_8, &goal_8);

    // A 15-puzzle a few slides from its goal. Deep 4x4 instances are out of
    // reach for a frontier without global deduplication.
    let start_15 = Board::from_rows(&[
        vec![1, 2, 3, 4],
        vec![5, 6, 0, 8],
        vec![9, 10, 7, 11],
        vec![13, 14, 15, 12],
    ])
    .expect("example board is valid");
    let goal_15 = Board::from_rows(&[
        vec![1, 2, 3, 4],
        vec![5, 6, 7, 8],
        vec![9, 10, 11, 12],
        vec![13, 14, 15, 0],
    ])
    .expect("example board is valid");
    run_example("15-puzzle", &start_15, &goal_15);
}
