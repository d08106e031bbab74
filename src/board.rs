//! Board representation for sliding-tile puzzles.
//!
//! This module defines the puzzle's fundamental data type:
//! - `Board`: an immutable snapshot of tile positions on a rectangular grid,
//!   with the blank cell represented by the value `0`. Boards are value types,
//!   compared and hashed by content, and include methods for locating the
//!   blank, locating a tile value, and producing the board that results from
//!   sliding a tile into the blank.
use std::fmt;

/// The sentinel tile value for the blank cell.
pub const BLANK: u32 = 0;

/// A rectangular grid of tiles with exactly one blank cell.
///
/// Cells hold the values `0..height*width` as a permutation, where `0` is the
/// blank. The grid is stored row-major. Boards are cheap to clone and are
/// compared by content, never by identity.
///
/// # Examples
/// ```
/// use slide_puzzle_solver::board::Board;
/// let board = Board::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 0]]).unwrap();
/// assert_eq!(board.height(), 3);
/// assert_eq!(board.width(), 3);
/// assert_eq!(board.blank_position(), (2, 2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<u32>,
}

impl Board {
    /// Builds a board from a slice of rows, validating the puzzle invariants.
    ///
    /// The grid must be non-empty, rectangular, and its cells must form a
    /// permutation of `0..height*width`. The permutation requirement implies
    /// that exactly one cell holds the blank value `0`.
    ///
    /// # Arguments
    /// * `rows`: The grid contents, top row first.
    ///
    /// # Returns
    /// * `Ok(Board)` if the grid satisfies all invariants.
    /// * `Err(String)` with a descriptive message if the grid is empty,
    ///   ragged, contains an out-of-range value, or repeats a value.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self, String> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err("Board must have at least one row and one column".to_string());
        }

        let height = rows.len();
        let width = rows[0].len();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(format!(
                    "Row {} has {} cells (expected {})",
                    r,
                    row.len(),
                    width
                ));
            }
        }

        let cell_count = height * width;
        let mut seen = vec![false; cell_count];
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value as usize >= cell_count {
                    return Err(format!(
                        "Value {} at row {} col {} is out of range for a {}x{} board",
                        value, r, c, height, width
                    ));
                }
                if seen[value as usize] {
                    return Err(format!("Value {} appears more than once", value));
                }
                seen[value as usize] = true;
            }
        }
        // Every value 0..cell_count seen exactly once, so the blank is present
        // and unique.

        let cells = rows.iter().flatten().copied().collect();
        Ok(Board {
            height,
            width,
            cells,
        })
    }

    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the tile value at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board dimensions.
    pub fn get_tile(&self, r: usize, c: usize) -> u32 {
        assert!(r < self.height && c < self.width, "tile index out of bounds");
        self.cells[r * self.width + c]
    }

    /// Returns the `(row, col)` of the blank cell.
    pub fn blank_position(&self) -> (usize, usize) {
        let index = self
            .cells
            .iter()
            .position(|&v| v == BLANK)
            .expect("board invariant: blank tile is always present");
        (index / self.width, index % self.width)
    }

    /// Returns the `(row, col)` of the given tile value, or `None` if the
    /// value does not appear on the board.
    pub fn find_tile(&self, value: u32) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&v| v == value)
            .map(|index| (index / self.width, index % self.width))
    }

    /// Returns the board produced by sliding the tile at `(r, c)` into the
    /// blank cell.
    ///
    /// The caller is responsible for passing a cell orthogonally adjacent to
    /// the blank; this method only performs the swap.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board dimensions.
    pub fn slide_from(&self, r: usize, c: usize) -> Board {
        let (blank_r, blank_c) = self.blank_position();
        let mut next = self.clone();
        next.cells[blank_r * self.width + blank_c] = self.get_tile(r, c);
        next.cells[r * self.width + c] = BLANK;
        next
    }

    /// Width in characters of a rendered cell value: two digits once tile
    /// values can reach 10, one digit otherwise.
    pub(crate) fn cell_digits(&self) -> usize {
        if self.height * self.width >= 10 {
            2
        } else {
            1
        }
    }
}

impl fmt::Display for Board {
    /// Formats the board as a bordered grid, one cell per tile.
    ///
    /// ```text
    /// +---+---+---+
    /// | 2 | 8 | 3 |
    /// +---+---+---+
    /// | 1 | 6 | 4 |
    /// +---+---+---+
    /// | 7 | 0 | 5 |
    /// +---+---+---+
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.cell_digits();
        let mut border = String::new();
        for _ in 0..self.width {
            border.push('+');
            border.push_str(&"-".repeat(digits + 2));
        }
        border.push('+');

        for r in 0..self.height {
            writeln!(f, "{}", border)?;
            for c in 0..self.width {
                write!(f, "| {:>w$} ", self.get_tile(r, c), w = digits)?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "{}", border)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_start() -> Board {
        Board::from_rows(&[vec![2, 8, 3], vec![1, 6, 4], vec![7, 0, 5]]).unwrap()
    }

    #[test]
    fn test_from_rows_valid() {
        let board = classic_start();
        assert_eq!(board.height(), 3);
        assert_eq!(board.width(), 3);
        assert_eq!(board.get_tile(0, 0), 2);
        assert_eq!(board.get_tile(2, 1), 0);
    }

    #[test]
    fn test_from_rows_rectangular() {
        let board = Board::from_rows(&[vec![1, 2, 3], vec![4, 0, 5]]).unwrap();
        assert_eq!(board.height(), 2);
        assert_eq!(board.width(), 3);
        assert_eq!(board.blank_position(), (1, 1));
    }

    #[test]
    fn test_from_rows_empty() {
        let result = Board::from_rows(&[]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("at least one row"));
    }

    #[test]
    fn test_from_rows_ragged() {
        let result = Board::from_rows(&[vec![1, 2, 3], vec![4, 0]]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Row 1 has 2 cells"));
    }

    #[test]
    fn test_from_rows_value_out_of_range() {
        let result = Board::from_rows(&[vec![1, 2], vec![3, 9]]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("out of range"));
    }

    #[test]
    fn test_from_rows_duplicate_value() {
        let result = Board::from_rows(&[vec![1, 2], vec![2, 0]]);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .contains("Value 2 appears more than once"));
    }

    #[test]
    fn test_from_rows_missing_blank() {
        // Without a 0 the values cannot form a permutation of 0..4.
        let result = Board::from_rows(&[vec![1, 2], vec![3, 4]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_value_equality() {
        let a = classic_start();
        let b = Board::from_rows(&[vec![2, 8, 3], vec![1, 6, 4], vec![7, 0, 5]]).unwrap();
        assert_eq!(a, b);
        let c = a.slide_from(1, 1);
        assert_ne!(a, c);
    }

    #[test]
    fn test_blank_position() {
        assert_eq!(classic_start().blank_position(), (2, 1));
    }

    #[test]
    fn test_find_tile() {
        let board = classic_start();
        assert_eq!(board.find_tile(8), Some((0, 1)));
        assert_eq!(board.find_tile(5), Some((2, 2)));
        assert_eq!(board.find_tile(42), None);
    }

    #[test]
    fn test_slide_from() {
        let board = classic_start();
        // Slide the 6 down into the blank.
        let next = board.slide_from(1, 1);
        assert_eq!(next.get_tile(2, 1), 6);
        assert_eq!(next.get_tile(1, 1), 0);
        assert_eq!(next.blank_position(), (1, 1));
        // The original board is untouched.
        assert_eq!(board.get_tile(1, 1), 6);
    }

    #[test]
    fn test_display_one_digit_cells() {
        let board = classic_start();
        let expected = "\
+---+---+---+
| 2 | 8 | 3 |
+---+---+---+
| 1 | 6 | 4 |
+---+---+---+
| 7 | 0 | 5 |
+---+---+---+";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_display_two_digit_cells() {
        let board = Board::from_rows(&[
            vec![1, 2, 3, 4],
            vec![5, 6, 7, 8],
            vec![9, 10, 11, 12],
            vec![13, 14, 15, 0],
        ])
        .unwrap();
        let rendered = board.to_string();
        assert!(rendered.starts_with("+----+----+----+----+"));
        assert!(rendered.contains("|  1 |  2 |  3 |  4 |"));
        assert!(rendered.contains("| 13 | 14 | 15 |  0 |"));
    }

    #[test]
    fn test_display_line_count() {
        // One border per row plus the closing border, one cell line per row.
        let board = classic_start();
        assert_eq!(board.to_string().lines().count(), 3 * 2 + 1);
    }
}
