//! Parsing of boards and puzzle files from text.
use crate::board::Board;

/// Parses a board from lines of whitespace-separated tile values.
///
/// Each line holds one row, top row first. Blank lines are not allowed here;
/// `parse_puzzle` uses them to separate grids. All of `Board::from_rows`'s
/// invariants apply: the grid must be rectangular and its values must form a
/// permutation of `0..rows*cols` with `0` marking the blank.
///
/// # Examples
/// ```
/// use slide_puzzle_solver::utils::board_from_lines;
/// let board = board_from_lines(&["1 2 3", "4 5 6", "7 8 0"]).unwrap();
/// assert_eq!(board.get_tile(2, 2), 0);
/// assert!(board_from_lines(&["1 2", "3 x"]).is_err());
/// ```
pub fn board_from_lines(lines: &[&str]) -> Result<Board, String> {
    let mut rows = Vec::with_capacity(lines.len());
    for (r, line) in lines.iter().enumerate() {
        let row: Result<Vec<u32>, String> = line
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid tile value '{}' in row {}", token, r))
            })
            .collect();
        rows.push(row?);
    }
    Board::from_rows(&rows)
}

/// Parses a puzzle file into a `(start, goal)` board pair.
///
/// The file holds the start grid and the goal grid as blocks of
/// whitespace-separated integer rows, separated by one or more blank lines.
/// Both grids must have the same dimensions; the value checks are done per
/// board by `Board::from_rows`.
pub fn parse_puzzle(text: &str) -> Result<(Board, Board), String> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    if blocks.len() != 2 {
        return Err(format!(
            "Expected a start grid and a goal grid separated by a blank line, found {} grid(s)",
            blocks.len()
        ));
    }

    let start = board_from_lines(&blocks[0]).map_err(|e| format!("Invalid start grid: {}", e))?;
    let goal = board_from_lines(&blocks[1]).map_err(|e| format!("Invalid goal grid: {}", e))?;

    if start.height() != goal.height() || start.width() != goal.width() {
        return Err(format!(
            "Start grid is {}x{} but goal grid is {}x{}",
            start.height(),
            start.width(),
            goal.height(),
            goal.width()
        ));
    }

    Ok((start, goal))
}
