//! A* best-first search over sliding-tile boards.
//!
//! The solver keeps a frontier of partial paths ordered by estimated total
//! cost (moves made so far plus the heuristic estimate of moves remaining),
//! repeatedly extends the cheapest path by every legal slide, and stops when
//! the cheapest path ends at the goal. Cycle avoidance is deliberately scoped
//! to each path's own ancestry rather than a global visited set, so the same
//! board may be reached again along a different path.
//!
//! Paths share their common prefixes: boards live in an append-only arena of
//! parent-linked nodes and each frontier entry only records the index of its
//! last board.
use crate::board::Board;
use crate::heuristics::Heuristic;

/// Expands a board into every board reachable by a single slide.
///
/// Locates the blank cell and, for each in-bounds orthogonal neighbor in the
/// fixed order up, down, left, right, produces the board obtained by sliding
/// that neighbor's tile into the blank, paired with its heuristic estimate
/// against `goal`. The neighbor order determines the tie-breaking order of
/// the search and is kept stable for reproducible traces.
///
/// # Returns
/// Between two and four `(successor, estimate)` pairs, depending on where the
/// blank sits.
pub fn expand(board: &Board, goal: &Board, heuristic: &dyn Heuristic) -> Vec<(Board, f64)> {
    let (blank_r, blank_c) = board.blank_position();
    let mut successors = Vec::with_capacity(4);

    let mut push_slide = |r: usize, c: usize| {
        let next = board.slide_from(r, c);
        let estimate = heuristic.estimate(&next, goal);
        successors.push((next, estimate));
    };

    if blank_r > 0 {
        push_slide(blank_r - 1, blank_c);
    }
    if blank_r + 1 < board.height() {
        push_slide(blank_r + 1, blank_c);
    }
    if blank_c > 0 {
        push_slide(blank_r, blank_c - 1);
    }
    if blank_c + 1 < board.width() {
        push_slide(blank_r, blank_c + 1);
    }

    successors
}

/// One board on some path, linked to the board it was expanded from.
/// Nodes are only ever appended, so indices stay valid for the whole search.
struct PathNode {
    board: Board,
    parent: Option<usize>,
}

/// A frontier entry: a partial path identified by its last board.
///
/// `boards` is the number of boards on the path (the start path has one).
/// `priority` is the path's f-score: the heuristic estimate of its last board
/// plus the board count of the path it extended. That g term is one larger
/// than the move count, but the offset is applied to every path uniformly,
/// so relative ordering is unaffected.
struct OpenPath {
    tail: usize,
    boards: usize,
    priority: f64,
}

/// Searches for a minimal-move sequence of boards from `start` to `goal`.
///
/// Returns the full sequence including both endpoints, or an empty `Vec` when
/// the frontier is exhausted without reaching the goal. An unsolvable puzzle
/// is a normal outcome, not an error. The function is pure: calling it twice
/// with the same inputs yields the same sequence.
///
/// `start` and `goal` must share dimensions and tile values; shape checking
/// is the caller's concern (see `utils::parse_puzzle`).
///
/// Memory grows with frontier size times path length; there is no global
/// deduplication and no timeout.
pub fn solve(start: &Board, goal: &Board, heuristic: &dyn Heuristic) -> Vec<Board> {
    let mut arena = vec![PathNode {
        board: start.clone(),
        parent: None,
    }];
    let mut frontier = vec![OpenPath {
        tail: 0,
        boards: 1,
        priority: 0.0,
    }];

    while let Some(best) = frontier.first() {
        // Goal test applies only to the current cheapest path.
        if arena[best.tail].board == *goal {
            return reconstruct(&arena, best.tail);
        }

        let current = frontier.remove(0);
        let mut extended = false;
        for (successor, estimate) in expand(&arena[current.tail].board, goal, heuristic) {
            // Avoid cycles along this path only; other paths may still visit
            // the same board.
            if on_current_path(&arena, current.tail, &successor) {
                continue;
            }
            arena.push(PathNode {
                board: successor,
                parent: Some(current.tail),
            });
            frontier.push(OpenPath {
                tail: arena.len() - 1,
                boards: current.boards + 1,
                priority: estimate + current.boards as f64,
            });
            extended = true;
        }
        // When every successor was an ancestor the path is simply dropped.
        if extended {
            // Stable sort: equal-priority paths keep their insertion order.
            frontier.sort_by(|a, b| a.priority.total_cmp(&b.priority));
        }
    }

    Vec::new()
}

/// Walks the ancestor chain of the path ending at `tail` and reports whether
/// `candidate` already appears on it.
fn on_current_path(arena: &[PathNode], tail: usize, candidate: &Board) -> bool {
    let mut cursor = Some(tail);
    while let Some(index) = cursor {
        let node = &arena[index];
        if node.board == *candidate {
            return true;
        }
        cursor = node.parent;
    }
    false
}

/// Rebuilds the start-to-tail board sequence from the parent links.
fn reconstruct(arena: &[PathNode], tail: usize) -> Vec<Board> {
    let mut boards = Vec::new();
    let mut cursor = Some(tail);
    while let Some(index) = cursor {
        let node = &arena[index];
        boards.push(node.board.clone());
        cursor = node.parent;
    }
    boards.reverse();
    boards
}
