//! # Slide Puzzle Solver Library
//!
//! This library solves sliding-tile puzzles (8-puzzle, 15-puzzle, and
//! rectangular variants) by finding a minimal-move sequence of single-tile
//! slides from a start board to a goal board with A* best-first search.
//!
//! It is used by two binaries:
//! - `solve`: Reads a start/goal grid pair from a file and prints the
//!   solution path, with the heuristic selectable on the command line.
//! - `demo`: Solves a pair of built-in example puzzles and prints each
//!   solution.
//!
//! ## Modules
//! - `board`: The `Board` value type, a rectangular grid of tiles with one
//!   blank cell, validated at construction.
//! - `heuristics`: The `Heuristic` trait and both admissible estimators
//!   (misplaced-tile count and summed Manhattan distance).
//! - `solver`: The A* engine, its frontier of partial paths, and the board
//!   expander.
//! - `display`: Rendering of solution paths as bordered grids joined by
//!   connectors, plus the "no solution" message.
//! - `utils`: Parsing of boards and start/goal puzzle files from text.

pub mod board;
pub mod display;
pub mod heuristics;
pub mod solver;
pub mod utils;
