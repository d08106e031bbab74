//! Heuristic cost estimators for the A* solver.
//!
//! A heuristic estimates the number of moves still needed to turn a board
//! into the goal board. The solver is polymorphic over the `Heuristic` trait,
//! so the two estimators defined here can be swapped without touching the
//! search itself. Both treat the blank cell as never mismatched and both are
//! admissible: they never overestimate the true remaining move count.
use crate::board::{Board, BLANK};

/// Estimates the remaining move count from `board` to `goal`.
///
/// Implementations must return a non-negative value and must return `0.0`
/// when `board` equals `goal`. Both arguments are assumed to share the same
/// dimensions and the same tile values.
pub trait Heuristic {
    /// Returns the estimated number of moves from `board` to `goal`.
    fn estimate(&self, board: &Board, goal: &Board) -> f64;
}

/// Counts the non-blank tiles that are not on their goal cell.
///
/// Every misplaced tile needs at least one move, so the count never exceeds
/// the true remaining distance. This is the weaker of the two estimators: it
/// values a tile one row away the same as a tile across the board.
pub struct MisplacedTiles;

impl Heuristic for MisplacedTiles {
    fn estimate(&self, board: &Board, goal: &Board) -> f64 {
        let mut mismatched = 0;
        for r in 0..board.height() {
            for c in 0..board.width() {
                let value = board.get_tile(r, c);
                if value != BLANK && value != goal.get_tile(r, c) {
                    mismatched += 1;
                }
            }
        }
        mismatched as f64
    }
}

/// Sums, over every misplaced non-blank tile, the absolute row distance plus
/// the absolute column distance to that tile's goal cell.
///
/// Each slide moves one tile one cell along one axis, so the sum is still
/// admissible while dominating `MisplacedTiles`.
pub struct ManhattanDistance;

impl Heuristic for ManhattanDistance {
    fn estimate(&self, board: &Board, goal: &Board) -> f64 {
        let mut total: u64 = 0;
        for r in 0..board.height() {
            for c in 0..board.width() {
                let value = board.get_tile(r, c);
                if value != BLANK && value != goal.get_tile(r, c) {
                    let (goal_r, goal_c) = goal
                        .find_tile(value)
                        .expect("goal must contain every tile value on the board");
                    total += (r as i64 - goal_r as i64).unsigned_abs()
                        + (c as i64 - goal_c as i64).unsigned_abs();
                }
            }
        }
        total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal_3x3() -> Board {
        Board::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 0]]).unwrap()
    }

    #[test]
    fn test_misplaced_zero_at_goal() {
        let goal = goal_3x3();
        assert_eq!(MisplacedTiles.estimate(&goal, &goal), 0.0);
    }

    #[test]
    fn test_manhattan_zero_at_goal() {
        let goal = goal_3x3();
        assert_eq!(ManhattanDistance.estimate(&goal, &goal), 0.0);
    }

    #[test]
    fn test_misplaced_counts_tiles_not_blank() {
        let goal = goal_3x3();
        // 7 and 8 swapped; the blank sits on its goal cell.
        let board = Board::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![8, 7, 0]]).unwrap();
        assert_eq!(MisplacedTiles.estimate(&board, &goal), 2.0);
    }

    #[test]
    fn test_misplaced_ignores_blank() {
        let goal = goal_3x3();
        // One slide away: only the 6 is off its goal cell, the blank moved too.
        let board = Board::from_rows(&[vec![1, 2, 3], vec![4, 5, 0], vec![7, 8, 6]]).unwrap();
        assert_eq!(MisplacedTiles.estimate(&board, &goal), 1.0);
    }

    #[test]
    fn test_misplaced_admissible_one_move() {
        // A board one move from the goal has true distance 1; the estimate
        // must not exceed it.
        let goal = goal_3x3();
        let board = goal.slide_from(2, 1);
        assert!(MisplacedTiles.estimate(&board, &goal) <= 1.0);
    }

    #[test]
    fn test_manhattan_single_axis_displacement() {
        let goal = goal_3x3();
        // 2 is two rows below its goal cell and aligned in column:
        // |2-0| + |1-1| = 2. 8 mirrors it: |0-2| + |1-1| = 2.
        let board = Board::from_rows(&[vec![1, 8, 3], vec![4, 5, 6], vec![7, 2, 0]]).unwrap();
        assert_eq!(ManhattanDistance.estimate(&board, &goal), 4.0);
    }

    #[test]
    fn test_manhattan_sums_both_axes() {
        let goal = goal_3x3();
        // 1 moved from (0,0) to (2,2): |2-0| + |2-0| = 4, the summed absolute
        // differences rather than a euclidean combination.
        let board = Board::from_rows(&[vec![0, 2, 3], vec![4, 5, 6], vec![7, 8, 1]]).unwrap();
        assert_eq!(ManhattanDistance.estimate(&board, &goal), 4.0);
    }

    #[test]
    fn test_manhattan_dominates_misplaced() {
        let goal = goal_3x3();
        let board = Board::from_rows(&[vec![2, 8, 3], vec![1, 6, 4], vec![7, 0, 5]]).unwrap();
        assert!(
            ManhattanDistance.estimate(&board, &goal) >= MisplacedTiles.estimate(&board, &goal)
        );
    }

    #[test]
    fn test_heuristics_on_rectangular_board() {
        let goal = Board::from_rows(&[vec![1, 2, 3], vec![4, 5, 0]]).unwrap();
        let board = Board::from_rows(&[vec![1, 2, 0], vec![4, 5, 3]]).unwrap();
        assert_eq!(MisplacedTiles.estimate(&board, &goal), 1.0);
        assert_eq!(ManhattanDistance.estimate(&board, &goal), 1.0);
    }
}
