//! Rendering of solution paths for terminal output.
//!
//! The presenter consumes the board sequence returned by `solver::solve` and
//! has no influence on the search itself. A non-empty sequence is rendered as
//! bordered grids from start to goal, joined by a downward connector; an
//! empty sequence becomes a single human-readable message, since "no
//! solution" is a normal result rather than an error.
use crate::board::Board;

/// Message printed when the solver returns an empty sequence.
pub const NO_SOLUTION_MESSAGE: &str = "This puzzle has no solution.";

/// Renders a solution path as text, top-to-bottom from start to goal.
///
/// Each board is drawn with `Board`'s `Display` implementation and
/// consecutive boards are separated by a centered `|` / `V` connector.
/// An empty path renders as [`NO_SOLUTION_MESSAGE`].
pub fn render_solution(path: &[Board]) -> String {
    let Some(first) = path.first() else {
        return NO_SOLUTION_MESSAGE.to_string();
    };

    let indent = " ".repeat(first.width() * (first.cell_digits() + 3) / 2);
    let mut output = String::new();
    for (step, board) in path.iter().enumerate() {
        output.push_str(&board.to_string());
        output.push('\n');
        if step < path.len() - 1 {
            output.push_str(&indent);
            output.push_str("|\n");
            output.push_str(&indent);
            output.push_str("V\n");
        }
    }
    output
}
